use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ms-intro", "Microservices vs. the Monolith", Difficulty::Beginner)
            .with_description(
                "A microservice architecture splits an application into small services \
                 that each own their data and can be deployed on their own. It trades \
                 the simplicity of a single process for independent scaling and team \
                 autonomy, and pays for it with network calls and distributed failure.",
            )
            .with_key_points([
                "Split along business capabilities, not technical layers",
                "Each service owns its database; no shared tables",
                "A well-structured modular monolith is often the better first step",
                "Operational maturity (CI/CD, monitoring) is a prerequisite",
            ])
            .with_tags(["architecture", "microservices", "monolith"])
            .with_related(["ms-api-gateway", "audit-coupling-metrics"])
            .with_fun_fact(
                "The term \"microservices\" was settled on at a software architecture \
                 workshop near Venice in 2011.",
            ),
        Topic::new("ms-api-gateway", "API Gateway", Difficulty::Beginner)
            .with_description(
                "An API gateway is the single entry point clients talk to. It routes \
                 requests to internal services and handles cross-cutting concerns such \
                 as authentication, rate limiting and response aggregation.",
            )
            .with_key_points([
                "Keeps internal service topology hidden from clients",
                "Backend-for-frontend: one gateway per client type",
                "Avoid putting business logic in the gateway",
            ])
            .with_tags(["architecture", "microservices", "gateway", "routing"])
            .with_example(
                CodeExample::new(
                    "Path-based routing",
                    r#"routes:
  - match: /api/orders/**
    upstream: http://orders.internal:8080
    auth: required
  - match: /api/catalog/**
    upstream: http://catalog.internal:8080
    rate_limit: 100/s
"#,
                )
                .with_language("yaml"),
            )
            .with_related(["ms-intro", "ms-circuit-breaker"]),
    ]
}
