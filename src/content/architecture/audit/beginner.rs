use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("audit-intro", "What Is an Architecture Audit?", Difficulty::Beginner)
            .with_description(
                "An architecture audit is a structured review of a system's components, \
                 their dependencies and the decisions behind them. The goal is to find \
                 where the structure no longer supports what the business needs, before \
                 that gap turns into outages or stalled delivery.",
            )
            .with_key_points([
                "Start from quality goals (availability, latency, changeability), not from code",
                "Interview the people who operate and change the system",
                "Map the actual runtime dependencies, not the ones in the diagrams",
                "Produce findings ranked by risk, each with a concrete recommendation",
            ])
            .with_tags(["architecture", "audit", "review"])
            .with_example(
                CodeExample::new(
                    "Minimal audit finding record",
                    r#"finding:
  id: F-007
  title: Order service reads billing tables directly
  risk: high
  quality_goal: changeability
  evidence:
    - src/orders/repository.rs queries billing.invoices
  recommendation: Expose invoice status through the billing API
"#,
                )
                .with_language("yaml"),
            )
            .with_related(["audit-adrs", "audit-quality-attributes"])
            .with_fun_fact(
                "The ATAM method for architecture evaluation came out of the Software \
                 Engineering Institute at Carnegie Mellon around 2000.",
            ),
        Topic::new("audit-adrs", "Architecture Decision Records", Difficulty::Beginner)
            .with_description(
                "An Architecture Decision Record (ADR) is a short document capturing one \
                 significant decision: its context, the options considered and the \
                 consequences. Auditors read ADRs to learn why the system looks the way \
                 it does and whether those reasons still hold.",
            )
            .with_key_points([
                "One decision per record, numbered and never rewritten",
                "Superseded decisions are linked, not deleted",
                "Keep them next to the code so they are versioned with it",
                "Missing ADRs for big decisions are themselves an audit finding",
            ])
            .with_tags(["architecture", "documentation", "adr"])
            .with_example(
                CodeExample::new(
                    "ADR template",
                    r#"# 12. Use PostgreSQL for the order store

Date: 2024-03-02
Status: Accepted (supersedes 7)

## Context
Orders need multi-row transactions and ad-hoc reporting queries.

## Decision
Store orders in PostgreSQL 16, one schema per bounded context.

## Consequences
- Reporting can use SQL directly against a read replica.
- The team must operate a replicated PostgreSQL cluster.
"#,
                )
                .with_language("markdown"),
            )
            .with_related(["audit-intro"])
            .with_fun_fact("Michael Nygard popularised the ADR format in a 2011 blog post."),
    ]
}
