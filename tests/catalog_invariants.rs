//! Catalog Invariant Tests
//!
//! Checks the shipped content: unique IDs, tier order, reference integrity
//! and one category per subject module.

use std::collections::HashSet;

use syllabus::content::{self, INTENTIONAL_DANGLING, SUBJECTS};
use syllabus::{catalog, validate, Allowlist, Difficulty, Issue};

#[test]
fn test_topic_ids_unique_within_each_category() {
    for category in &catalog().categories {
        let mut seen = HashSet::new();
        for topic in &category.topics {
            assert!(
                seen.insert(topic.id.as_str()),
                "Duplicate id {} in {}",
                topic.id,
                category.id
            );
        }
    }
}

#[test]
fn test_topic_ids_unique_across_catalog() {
    let all: Vec<&str> = catalog().topics().map(|t| t.id.as_str()).collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
}

#[test]
fn test_tiers_in_order() {
    for category in &catalog().categories {
        let tiers: Vec<Difficulty> = category.topics.iter().map(|t| t.difficulty).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted, "{} is not ordered by tier", category.id);
    }
}

#[test]
fn test_every_category_has_every_tier() {
    for category in &catalog().categories {
        for difficulty in Difficulty::ALL {
            assert!(
                category.tier(difficulty).count() > 0,
                "{} has no {} topics",
                category.id,
                difficulty
            );
        }
    }
}

#[test]
fn test_related_references_resolve_or_are_documented() {
    let catalog = catalog();
    let documented: HashSet<&str> = INTENTIONAL_DANGLING.iter().copied().collect();

    for topic in catalog.topics() {
        for target in &topic.related {
            assert!(
                catalog.contains(target) || documented.contains(target.as_str()),
                "{} references unknown topic {}",
                topic.id,
                target
            );
        }
    }
}

#[test]
fn test_documented_dangling_references_are_really_absent() {
    let catalog = catalog();
    for id in INTENTIONAL_DANGLING {
        assert!(
            catalog.get(id).is_none(),
            "{} is in the catalog; drop it from INTENTIONAL_DANGLING",
            id
        );
    }
}

#[test]
fn test_documented_dangling_references_are_used() {
    let referenced: HashSet<&str> = catalog()
        .topics()
        .flat_map(|t| t.related.iter().map(|r| r.as_str()))
        .collect();

    for id in INTENTIONAL_DANGLING {
        assert!(referenced.contains(id), "{} is allowlisted but never referenced", id);
    }
}

#[test]
fn test_category_count_matches_subjects() {
    assert_eq!(catalog().categories.len(), SUBJECTS.len());
    assert_eq!(content::categories().len(), SUBJECTS.len());
}

#[test]
fn test_category_ids_are_area_slash_subject() {
    for category in &catalog().categories {
        let parts: Vec<&str> = category.id.split('/').collect();
        assert_eq!(parts.len(), 2, "{}", category.id);
        assert!(matches!(parts[0], "architecture" | "computer-science"));
    }
}

#[test]
fn test_shipped_catalog_is_clean() {
    let report = validate(catalog(), &Allowlist::builtin());
    assert!(report.is_clean(), "{:?}", report.issues);
}

#[test]
fn test_strict_validation_reports_documented_references() {
    let report = validate(catalog(), &Allowlist::new());

    let targets: HashSet<String> = report
        .issues
        .iter()
        .map(|issue| match issue {
            Issue::DanglingReference { target, .. } => target.to_string(),
            other => panic!("Unexpected issue: {}", other),
        })
        .collect();

    let expected: HashSet<String> = INTENTIONAL_DANGLING.iter().map(|s| s.to_string()).collect();
    assert_eq!(targets, expected);
}

#[test]
fn test_examples_have_code() {
    for topic in catalog().topics() {
        for example in &topic.examples {
            assert!(!example.title.trim().is_empty(), "{} has an untitled example", topic.id);
            assert!(!example.code.trim().is_empty(), "{} has an empty example", topic.id);
        }
    }
}

#[test]
fn test_known_topics_are_where_expected() {
    let catalog = catalog();

    let (category, topic) = catalog.get("os-virtual-memory").unwrap();
    assert_eq!(category.id, "computer-science/operating-systems");
    assert_eq!(topic.difficulty, Difficulty::Intermediate);

    let (category, _) = catalog.get("audit-adrs").unwrap();
    assert_eq!(category.id, "architecture/audit");
}

#[test]
fn test_tier_lists_are_public_and_concatenated() {
    use content::architecture::audit;

    let tiers = [
        audit::beginner::topics(),
        audit::intermediate::topics(),
        audit::advanced::topics(),
    ];
    for (tier, difficulty) in tiers.iter().zip(Difficulty::ALL) {
        assert!(!tier.is_empty());
        assert!(tier.iter().all(|t| t.difficulty == difficulty));
    }

    let expected: Vec<String> = tiers.concat().into_iter().map(|t| t.id.to_string()).collect();
    let actual: Vec<String> = audit::category().topics.iter().map(|t| t.id.to_string()).collect();
    assert_eq!(actual, expected);
}
