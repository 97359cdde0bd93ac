use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ms-service-discovery", "Service Discovery", Difficulty::Intermediate)
            .with_description(
                "Service instances come and go as they scale and restart, so callers \
                 cannot hard-code addresses. A registry tracks live instances; clients \
                 either query it directly (client-side discovery) or go through a load \
                 balancer that does (server-side discovery).",
            )
            .with_key_points([
                "Instances register on start and heartbeat to stay listed",
                "Health checks remove instances that stop responding",
                "DNS-based discovery is simple but caches stale answers",
                "Service meshes move discovery into a sidecar proxy",
            ])
            .with_tags(["microservices", "discovery", "networking"])
            .with_example(
                CodeExample::new(
                    "Client-side round robin over a registry snapshot",
                    r#"use std::sync::atomic::{AtomicUsize, Ordering};

struct Balancer {
    instances: Vec<String>,
    next: AtomicUsize,
}

impl Balancer {
    fn pick(&self) -> Option<&str> {
        if self.instances.is_empty() {
            return None;
        }
        let i = self.next.fetch_add(1, Ordering::Relaxed) % self.instances.len();
        Some(&self.instances[i])
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ms-api-gateway", "ms-service-mesh"]),
        Topic::new("ms-circuit-breaker", "Circuit Breaker", Difficulty::Intermediate)
            .with_description(
                "A circuit breaker wraps calls to a remote service and stops making them \
                 once failures cross a threshold. While open it fails fast; after a \
                 cool-down it lets a trial request through (half-open) and closes again \
                 if that succeeds.",
            )
            .with_key_points([
                "Three states: closed, open, half-open",
                "Prevents a slow dependency from exhausting the caller's threads",
                "Pair with timeouts and a fallback response",
                "Expose breaker state as a metric",
            ])
            .with_tags(["microservices", "resilience", "fault-tolerance"])
            .with_example(
                CodeExample::new(
                    "Breaker state machine",
                    r#"enum State {
    Closed { failures: u32 },
    Open { since: std::time::Instant },
    HalfOpen,
}

fn on_result(state: State, ok: bool, threshold: u32) -> State {
    match (state, ok) {
        (State::Closed { .. }, true) | (State::HalfOpen, true) => State::Closed { failures: 0 },
        (State::Closed { failures }, false) if failures + 1 < threshold => {
            State::Closed { failures: failures + 1 }
        }
        (_, false) => State::Open { since: std::time::Instant::now() },
        (s @ State::Open { .. }, true) => s,
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ms-api-gateway", "ms-saga"])
            .with_fun_fact("The pattern is named after electrical circuit breakers and was popularised by Michael Nygard's book Release It!"),
    ]
}
