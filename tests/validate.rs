//! Validation Integration Tests
//!
//! Hygiene checks against hand-built catalogs with known defects.

use syllabus::{validate, Allowlist, Catalog, Category, Difficulty, Issue, Topic, TopicId};

fn topic(id: &str, difficulty: Difficulty) -> Topic {
    Topic::new(id, format!("Title of {}", id), difficulty).with_description("Something useful")
}

#[test]
fn test_duplicate_across_categories() {
    let catalog = Catalog::from_categories([
        Category::from_tiers("architecture/a", "A", vec![topic("shared", Difficulty::Beginner)], vec![], vec![]),
        Category::from_tiers("architecture/b", "B", vec![], vec![topic("shared", Difficulty::Intermediate)], vec![]),
    ]);

    let report = validate(&catalog, &Allowlist::new());

    assert_eq!(
        report.issues,
        vec![Issue::DuplicateTopic {
            id: TopicId::new("shared"),
            first_category: "architecture/a".to_string(),
            second_category: "architecture/b".to_string(),
        }]
    );
}

#[test]
fn test_duplicate_within_category() {
    let catalog = Catalog::from_categories([Category::from_tiers(
        "architecture/a",
        "A",
        vec![topic("x", Difficulty::Beginner), topic("x", Difficulty::Beginner)],
        vec![],
        vec![],
    )]);

    let report = validate(&catalog, &Allowlist::new());
    assert_eq!(report.issues.len(), 1);
    assert!(matches!(report.issues[0], Issue::DuplicateTopic { .. }));
}

#[test]
fn test_misplaced_tier_is_reported_once() {
    // An advanced topic declared in the beginner list
    let catalog = Catalog::from_categories([Category::from_tiers(
        "computer-science/x",
        "X",
        vec![topic("b1", Difficulty::Beginner), topic("oops", Difficulty::Advanced)],
        vec![topic("i1", Difficulty::Intermediate), topic("i2", Difficulty::Intermediate)],
        vec![topic("a1", Difficulty::Advanced)],
    )]);

    let report = validate(&catalog, &Allowlist::new());
    let tier_issues: Vec<&Issue> = report
        .issues
        .iter()
        .filter(|i| matches!(i, Issue::TierOrder { .. }))
        .collect();

    // i1 and i2 both follow the advanced topic
    assert_eq!(tier_issues.len(), 2);
    match tier_issues[0] {
        Issue::TierOrder { id, previous, .. } => {
            assert_eq!(id, &TopicId::new("i1"));
            assert_eq!(*previous, Difficulty::Advanced);
        }
        _ => unreachable!(),
    }
}

#[test]
fn test_dangling_and_self_references() {
    let catalog = Catalog::from_categories([Category::from_tiers(
        "computer-science/x",
        "X",
        vec![topic("a", Difficulty::Beginner).with_related(["a", "ghost", "later"])],
        vec![],
        vec![],
    )]);

    let report = validate(&catalog, &Allowlist::new().with_ids(["later"]));

    assert_eq!(
        report.issues,
        vec![
            Issue::SelfReference { id: TopicId::new("a") },
            Issue::DanglingReference {
                id: TopicId::new("a"),
                target: TopicId::new("ghost"),
            },
        ]
    );
}

#[test]
fn test_report_converts_to_anyhow() {
    let catalog = Catalog::from_categories([Category::new("x/y", "Y").with_topic(Topic::new(
        "",
        "No id",
        Difficulty::Beginner,
    ).with_description("d"))]);

    let report = validate(&catalog, &Allowlist::new());
    assert!(!report.is_clean());

    let err: anyhow::Error = report.into_result().unwrap_err().into();
    assert!(err.to_string().contains("1 catalog issue(s) found"));
}

#[test]
fn test_issue_messages() {
    let issue = Issue::DanglingReference {
        id: TopicId::new("a"),
        target: TopicId::new("ghost"),
    };
    assert_eq!(issue.to_string(), "Topic 'a' references unknown topic 'ghost'");
}
