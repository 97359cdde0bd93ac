use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("audit-fitness-functions", "Architectural Fitness Functions", Difficulty::Advanced)
            .with_description(
                "A fitness function is an automated check that an architectural \
                 characteristic still holds: a layering rule, a latency budget, a \
                 dependency ban. Running them in CI turns one-off audit findings into \
                 continuously enforced constraints.",
            )
            .with_key_points([
                "Atomic functions test one characteristic; holistic ones test interactions",
                "Triggered functions run in CI, continual ones run against production",
                "Every function needs an owner and a threshold agreed with stakeholders",
                "Start with the findings from the last audit",
            ])
            .with_tags(["architecture", "testing", "ci", "evolutionary-architecture"])
            .with_example(
                CodeExample::new(
                    "Layering rule as a test",
                    r#"#[test]
fn domain_does_not_depend_on_adapters() {
    let manifest = std::fs::read_to_string("crates/domain/Cargo.toml").unwrap();
    let forbidden = ["adapters", "reqwest", "sqlx"];
    for name in forbidden {
        assert!(
            !manifest.contains(name),
            "domain crate must not depend on {name}"
        );
    }
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["audit-coupling-metrics", "audit-quality-attributes"])
            .with_fun_fact(
                "The term is borrowed from evolutionary computing, where a fitness \
                 function scores how close a candidate solution is to the goal.",
            ),
        Topic::new("audit-tech-debt", "Quantifying Technical Debt", Difficulty::Advanced)
            .with_description(
                "Technical debt only gets prioritised when it is expressed in the same \
                 units as features: time and risk. Combining change frequency from \
                 version control with code complexity locates the hotspots where debt \
                 actually costs money.",
            )
            .with_key_points([
                "Hotspot = high churn multiplied by high complexity",
                "Temporal coupling: files that always change together reveal hidden dependencies",
                "Estimate interest (extra time per change), not just principal (time to fix)",
                "Track the trend across audits rather than a single absolute number",
            ])
            .with_tags(["architecture", "technical-debt", "metrics"])
            .with_example(
                CodeExample::new(
                    "Change frequency per file from git",
                    r#"git log --since="12 months ago" --name-only --format="" \
  | grep -v '^$' \
  | sort | uniq -c | sort -rn | head -20
"#,
                )
                .with_language("bash"),
            )
            .with_related(["audit-coupling-metrics"])
            .with_fun_fact("Ward Cunningham coined the debt metaphor in 1992 to explain refactoring to his manager."),
    ]
}
