//! Hygiene checks for catalog content.
//!
//! Content is hand-written, so nothing stops two topics from sharing an ID or
//! a beginner topic from landing in the advanced list. These checks catch
//! that before the catalog is exported:
//! - Duplicate category and topic identifiers
//! - Empty identifiers, titles and descriptions, blank tags and key points,
//!   examples without a title or code
//! - Tier order within each category
//! - Related references that point nowhere and are not allowlisted

use std::collections::{BTreeSet, HashMap, HashSet};

use thiserror::Error;
use tracing::warn;

use super::collection::Catalog;
use crate::content;
use crate::domain::{Difficulty, TopicId};

/// A single hygiene problem
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Issue {
    #[error("Duplicate category id '{id}'")]
    DuplicateCategory { id: String },

    #[error("Category #{position} '{id}' has an empty {field}")]
    EmptyCategoryField {
        id: String,
        position: usize,
        field: &'static str,
    },

    #[error("Duplicate topic id '{id}' (first in {first_category}, again in {second_category})")]
    DuplicateTopic {
        id: TopicId,
        first_category: String,
        second_category: String,
    },

    #[error("Topic #{position} '{id}' in {category} has an empty {field}")]
    EmptyField {
        category: String,
        id: TopicId,
        position: usize,
        field: &'static str,
    },

    #[error("Topic '{id}' ({difficulty}) in {category} comes after a {previous} topic")]
    TierOrder {
        category: String,
        id: TopicId,
        difficulty: Difficulty,
        previous: Difficulty,
    },

    #[error("Topic '{id}' lists itself as related")]
    SelfReference { id: TopicId },

    #[error("Topic '{id}' references unknown topic '{target}'")]
    DanglingReference { id: TopicId, target: TopicId },
}

/// Related-topic IDs that are allowed to be missing from the catalog
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    ids: BTreeSet<String>,
}

impl Allowlist {
    /// Empty allowlist: every missing reference is an issue
    pub fn new() -> Self {
        Self::default()
    }

    /// The documented soft references shipped with the content
    pub fn builtin() -> Self {
        Self::new().with_ids(content::INTENTIONAL_DANGLING.iter().copied())
    }

    /// Add more IDs (e.g. from config)
    pub fn with_ids(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Check if an ID is allowlisted
    pub fn contains(&self, id: &TopicId) -> bool {
        self.ids.contains(id.as_str())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Result of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} catalog issue(s) found", .issues.len())]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// True when no issues were found
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Convert into a `Result`, failing on any issue
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_clean() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Run every hygiene check over a catalog
pub fn validate(catalog: &Catalog, allowlist: &Allowlist) -> ValidationReport {
    let mut issues = Vec::new();

    check_categories(catalog, &mut issues);
    check_topics(catalog, &mut issues);
    check_related(catalog, allowlist, &mut issues);

    if !issues.is_empty() {
        warn!(issues = issues.len(), "Catalog failed validation");
    }

    ValidationReport { issues }
}

fn check_categories(catalog: &Catalog, issues: &mut Vec<Issue>) {
    let mut seen = HashSet::new();
    for (position, category) in catalog.categories.iter().enumerate() {
        let empty = |field| Issue::EmptyCategoryField {
            id: category.id.clone(),
            position,
            field,
        };

        if category.id.trim().is_empty() {
            issues.push(empty("id"));
        }
        if category.title.trim().is_empty() {
            issues.push(empty("title"));
        }

        if !seen.insert(category.id.as_str()) {
            issues.push(Issue::DuplicateCategory {
                id: category.id.clone(),
            });
        }
    }
}

fn check_topics(catalog: &Catalog, issues: &mut Vec<Issue>) {
    // topic id -> category where it was first seen
    let mut owners: HashMap<&TopicId, &str> = HashMap::new();

    for category in &catalog.categories {
        let mut highest = Difficulty::Beginner;

        for (position, topic) in category.topics.iter().enumerate() {
            let empty = |field| Issue::EmptyField {
                category: category.id.clone(),
                id: topic.id.clone(),
                position,
                field,
            };

            if topic.id.as_str().trim().is_empty() {
                issues.push(empty("id"));
            }
            if topic.title.trim().is_empty() {
                issues.push(empty("title"));
            }
            if topic.description.trim().is_empty() {
                issues.push(empty("description"));
            }
            if topic.key_points.iter().any(|p| p.trim().is_empty()) {
                issues.push(empty("key point"));
            }
            if topic.tags.iter().any(|t| t.trim().is_empty()) {
                issues.push(empty("tag"));
            }
            if topic.examples.iter().any(|e| e.title.trim().is_empty()) {
                issues.push(empty("example title"));
            }
            if topic.examples.iter().any(|e| e.code.trim().is_empty()) {
                issues.push(empty("example code"));
            }

            if topic.difficulty < highest {
                issues.push(Issue::TierOrder {
                    category: category.id.clone(),
                    id: topic.id.clone(),
                    difficulty: topic.difficulty,
                    previous: highest,
                });
            } else {
                highest = topic.difficulty;
            }

            match owners.get(&topic.id) {
                Some(first) => issues.push(Issue::DuplicateTopic {
                    id: topic.id.clone(),
                    first_category: first.to_string(),
                    second_category: category.id.clone(),
                }),
                None => {
                    owners.insert(&topic.id, category.id.as_str());
                }
            }
        }
    }
}

fn check_related(catalog: &Catalog, allowlist: &Allowlist, issues: &mut Vec<Issue>) {
    let known: HashSet<&TopicId> = catalog.topics().map(|t| &t.id).collect();

    for topic in catalog.topics() {
        for target in &topic.related {
            if target == &topic.id {
                issues.push(Issue::SelfReference {
                    id: topic.id.clone(),
                });
            } else if !known.contains(target) && !allowlist.contains(target) {
                issues.push(Issue::DanglingReference {
                    id: topic.id.clone(),
                    target: target.clone(),
                });
            }
        }
    }
}
