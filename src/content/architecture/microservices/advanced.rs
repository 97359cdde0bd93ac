use crate::domain::{CodeExample, Difficulty, Topic};

pub fn topics() -> Vec<Topic> {
    vec![
        Topic::new("ms-saga", "Sagas", Difficulty::Advanced)
            .with_description(
                "When a business transaction spans several services, a distributed \
                 lock-step commit is rarely an option. A saga breaks it into local \
                 transactions, each with a compensating action that undoes it if a \
                 later step fails.",
            )
            .with_key_points([
                "Choreography: services react to each other's events",
                "Orchestration: a coordinator tells each service what to do next",
                "Compensations must be idempotent and can themselves fail",
                "Sagas give up isolation; intermediate states are visible",
            ])
            .with_tags(["microservices", "transactions", "consistency"])
            .with_example(
                CodeExample::new(
                    "Orchestrated saga with compensation",
                    r#"async fn place_order(o: &Order) -> Result<(), SagaError> {
    let payment = payments.charge(o).await?;
    if let Err(e) = inventory.reserve(o).await {
        payments.refund(&payment).await?;
        return Err(e.into());
    }
    if let Err(e) = shipping.schedule(o).await {
        inventory.release(o).await?;
        payments.refund(&payment).await?;
        return Err(e.into());
    }
    Ok(())
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ms-event-sourcing", "ms-circuit-breaker", "cs-distributed-consensus"])
            .with_fun_fact("Sagas were described by Garcia-Molina and Salem in 1987 for long-lived database transactions."),
        Topic::new("ms-event-sourcing", "Event Sourcing and CQRS", Difficulty::Advanced)
            .with_description(
                "Event sourcing stores every state change as an immutable event and \
                 derives current state by replaying them. CQRS pairs naturally with it: \
                 writes append events, and separate read models are projected from the \
                 event stream for queries.",
            )
            .with_key_points([
                "The event log is the source of truth; state is a cache",
                "Events are named in the past tense and never edited",
                "Snapshots bound replay time for long-lived aggregates",
                "Schema evolution of events needs upcasters or versioned types",
            ])
            .with_tags(["microservices", "event-sourcing", "cqrs"])
            .with_example(
                CodeExample::new(
                    "Rebuilding state from events",
                    r#"enum AccountEvent {
    Opened { owner: String },
    Deposited { cents: i64 },
    Withdrew { cents: i64 },
}

fn balance(events: &[AccountEvent]) -> i64 {
    events.iter().fold(0, |acc, e| match e {
        AccountEvent::Opened { .. } => 0,
        AccountEvent::Deposited { cents } => acc + cents,
        AccountEvent::Withdrew { cents } => acc - cents,
    })
}
"#,
                )
                .with_language("rust"),
            )
            .with_related(["ms-saga", "ds-lsm-trees"]),
    ]
}
