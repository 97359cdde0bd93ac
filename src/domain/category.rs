//! Categories: named, ordered groupings of topics.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::topic::Topic;

/// A named, ordered grouping of topics (e.g. `architecture/audit`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identifier, `<area>/<subject>`
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// One-line summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Topics in aggregation order
    pub topics: Vec<Topic>,
}

impl Category {
    /// Create an empty category
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            topics: Vec::new(),
        }
    }

    /// Concatenate the three tier lists: beginner, then intermediate, then advanced.
    ///
    /// Source order within each list is preserved. Nothing is checked here;
    /// misplaced tiers surface in `validate`.
    pub fn from_tiers(
        id: impl Into<String>,
        title: impl Into<String>,
        beginner: Vec<Topic>,
        intermediate: Vec<Topic>,
        advanced: Vec<Topic>,
    ) -> Self {
        let mut topics = Vec::with_capacity(beginner.len() + intermediate.len() + advanced.len());
        topics.extend(beginner);
        topics.extend(intermediate);
        topics.extend(advanced);

        Self {
            topics,
            ..Self::new(id, title)
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a topic
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Area part of the identifier (`architecture` for `architecture/audit`)
    pub fn area(&self) -> &str {
        self.id.split('/').next().unwrap_or(&self.id)
    }

    /// Topics of a single tier, in order
    pub fn tier(&self, difficulty: Difficulty) -> impl Iterator<Item = &Topic> {
        self.topics.iter().filter(move |t| t.difficulty == difficulty)
    }

    /// Get the number of topics
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Check if the category has no topics
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str, difficulty: Difficulty) -> Topic {
        Topic::new(id, id.to_uppercase(), difficulty).with_description("d")
    }

    #[test]
    fn test_from_tiers_preserves_order() {
        let category = Category::from_tiers(
            "computer-science/example",
            "Example",
            vec![topic("b1", Difficulty::Beginner), topic("b2", Difficulty::Beginner)],
            vec![topic("i1", Difficulty::Intermediate)],
            vec![topic("a1", Difficulty::Advanced), topic("a2", Difficulty::Advanced)],
        );

        let ids: Vec<&str> = category.topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2", "i1", "a1", "a2"]);
        assert_eq!(category.len(), 5);
        assert_eq!(category.tier(Difficulty::Advanced).count(), 2);
    }

    #[test]
    fn test_from_tiers_with_empty_tier() {
        let category = Category::from_tiers(
            "architecture/empty",
            "Empty",
            vec![],
            vec![topic("i1", Difficulty::Intermediate)],
            vec![],
        );

        assert_eq!(category.len(), 1);
        assert_eq!(category.tier(Difficulty::Beginner).count(), 0);
    }

    #[test]
    fn test_category_area() {
        let category = Category::new("computer-science/operating-systems", "OS");
        assert_eq!(category.area(), "computer-science");
        assert!(category.is_empty());
    }
}
