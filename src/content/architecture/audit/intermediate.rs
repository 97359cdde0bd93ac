use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("audit-coupling-metrics", "Coupling and Instability Metrics", Difficulty::Intermediate)
            .with_description(
                "Afferent coupling (Ca) counts modules that depend on a module; efferent \
                 coupling (Ce) counts modules it depends on. Instability I = Ce / (Ca + Ce) \
                 ranges from 0 (stable, hard to change) to 1 (unstable, free to change). \
                 Audits compare these numbers against where change actually happens.",
            )
            .with_key_points([
                "Stable modules should be abstract; unstable ones can be concrete",
                "Dependencies should point toward stability",
                "A stable module with high churn is a hotspot worth investigating",
                "Cycles between packages make every metric in the cycle meaningless",
            ])
            .with_tags(["architecture", "metrics", "coupling"])
            .with_example(
                CodeExample::new(
                    "Computing instability from a dependency list",
                    r#"use std::collections::HashMap;

fn instability(deps: &[(&str, &str)]) -> HashMap<String, f64> {
    let mut ca: HashMap<&str, u32> = HashMap::new();
    let mut ce: HashMap<&str, u32> = HashMap::new();
    for (from, to) in deps {
        *ce.entry(from).or_default() += 1;
        *ca.entry(to).or_default() += 1;
    }
    let modules = ca.keys().chain(ce.keys()).copied();
    modules
        .map(|m| {
            let a = *ca.get(m).unwrap_or(&0) as f64;
            let e = *ce.get(m).unwrap_or(&0) as f64;
            (m.to_string(), if a + e == 0.0 { 0.0 } else { e / (a + e) })
        })
        .collect()
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["audit-fitness-functions", "ms-intro"])
            .with_fun_fact("Robert C. Martin published the instability metric in 1994."),
        Topic::new("audit-quality-attributes", "Quality Attribute Scenarios", Difficulty::Intermediate)
            .with_description(
                "Vague goals like \"the system must be fast\" cannot be audited. A quality \
                 attribute scenario pins one down with a stimulus, an environment, a \
                 response and a measurable response measure, so the audit can check \
                 whether the architecture meets it.",
            )
            .with_key_points([
                "Six parts: source, stimulus, artifact, environment, response, measure",
                "Prioritise scenarios with stakeholders using a utility tree",
                "Each architectural risk should trace back to a scenario",
            ])
            .with_tags(["architecture", "quality-attributes", "requirements"])
            .with_example(CodeExample::new(
                "Latency scenario",
                r#"Source:       End user on mobile network
Stimulus:     Submits checkout
Artifact:     Checkout API
Environment:  Peak load (Black Friday, 5x normal traffic)
Response:     Order accepted and confirmation returned
Measure:      p99 latency under 800 ms, error rate under 0.1%
"#,
            ))
            .with_related(["audit-intro", "audit-fitness-functions"]),
    ]
}
