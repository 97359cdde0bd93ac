//! Catalog assembly and queries.
//!
//! All queries are linear scans; the catalog is small and read-only.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use glob::Pattern;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content;
use crate::domain::{Category, Difficulty, Topic, TopicId};

/// Catalog format version
pub const CATALOG_VERSION: u32 = 1;

/// Global catalog, built on first access
static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Get the global catalog (assembled once, then cached)
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let catalog = Catalog::from_categories(content::categories());
        debug!(
            categories = catalog.categories.len(),
            topics = catalog.len(),
            "Catalog assembled"
        );
        catalog
    })
}

/// The full catalog: an ordered sequence of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog format version
    pub version: u32,

    /// Categories in subject order
    pub categories: Vec<Category>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            categories: Vec::new(),
        }
    }

    /// Assemble a catalog from categories, keeping their order
    pub fn from_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            version: CATALOG_VERSION,
            categories: categories.into_iter().collect(),
        }
    }

    /// Get a category by ID
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Mapping from category ID to category
    pub fn by_id(&self) -> BTreeMap<&str, &Category> {
        self.categories.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    /// Get a topic and its owning category by topic ID
    pub fn get(&self, id: &str) -> Option<(&Category, &Topic)> {
        self.categories.iter().find_map(|c| {
            c.topics.iter().find(|t| t.id == id).map(|t| (c, t))
        })
    }

    /// Check if a topic ID exists anywhere in the catalog
    pub fn contains(&self, id: &TopicId) -> bool {
        self.topics().any(|t| &t.id == id)
    }

    /// All topics, category by category, in aggregation order
    pub fn topics(&self) -> impl Iterator<Item = &Topic> {
        self.categories.iter().flat_map(|c| c.topics.iter())
    }

    /// Filter topics by difficulty tier
    pub fn filter_by_difficulty(&self, difficulty: Difficulty) -> Vec<&Topic> {
        self.topics().filter(|t| t.difficulty == difficulty).collect()
    }

    /// Filter topics by tag (case-insensitive exact match)
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Topic> {
        self.topics().filter(|t| t.has_tag(tag)).collect()
    }

    /// Topics whose ID matches a glob pattern (e.g. `os-*`)
    pub fn matching(&self, pattern: &str) -> Result<Vec<&Topic>, glob::PatternError> {
        let pattern = Pattern::new(pattern)?;
        Ok(self
            .topics()
            .filter(|t| pattern.matches(t.id.as_str()))
            .collect())
    }

    /// Search topics by query (case-insensitive substring match)
    pub fn search(&self, query: &str) -> Vec<&Topic> {
        let query_lower = query.to_lowercase();
        self.topics().filter(|t| t.matches_query(&query_lower)).collect()
    }

    /// Resolve a topic's related references.
    ///
    /// References that do not exist in the catalog are skipped.
    pub fn related(&self, id: &str) -> Vec<&Topic> {
        let Some((_, topic)) = self.get(id) else {
            return Vec::new();
        };

        topic
            .related
            .iter()
            .filter_map(|r| self.get(r.as_str()).map(|(_, t)| t))
            .collect()
    }

    /// Summary counts
    pub fn stats(&self) -> CatalogStats {
        let mut by_difficulty: BTreeMap<Difficulty, usize> =
            Difficulty::ALL.iter().map(|d| (*d, 0)).collect();
        for topic in self.topics() {
            *by_difficulty.entry(topic.difficulty).or_default() += 1;
        }

        CatalogStats {
            categories: self.categories.len(),
            topics: self.len(),
            examples: self.topics().map(|t| t.examples.len()).sum(),
            by_difficulty,
            by_category: self
                .categories
                .iter()
                .map(|c| CategoryCount {
                    id: c.id.clone(),
                    topics: c.len(),
                })
                .collect(),
        }
    }

    /// Get the total number of topics
    pub fn len(&self) -> usize {
        self.categories.iter().map(Category::len).sum()
    }

    /// Check if the catalog holds no topics
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Summary counts for a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub categories: usize,
    pub topics: usize,
    pub examples: usize,
    pub by_difficulty: BTreeMap<Difficulty, usize>,
    /// Topic counts in catalog order
    pub by_category: Vec<CategoryCount>,
}

/// Topic count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub topics: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CodeExample;

    fn sample_catalog() -> Catalog {
        Catalog::from_categories([
            Category::from_tiers(
                "computer-science/operating-systems",
                "Operating Systems",
                vec![Topic::new("os-processes", "Processes", Difficulty::Beginner)
                    .with_description("Programs in execution")
                    .with_tags(["os", "processes"])
                    .with_related(["os-scheduling", "os-missing"])],
                vec![Topic::new("os-scheduling", "CPU Scheduling", Difficulty::Intermediate)
                    .with_description("Choosing which runnable thread gets the CPU")
                    .with_tags(["os", "scheduling"])
                    .with_example(CodeExample::new("nice", "nice -n 10 ./job"))],
                vec![],
            ),
            Category::from_tiers(
                "computer-science/data-structures",
                "Data Structures",
                vec![Topic::new("ds-arrays", "Arrays", Difficulty::Beginner)
                    .with_description("Contiguous storage")
                    .with_tag("memory")],
                vec![],
                vec![Topic::new("ds-b-trees", "B-Trees", Difficulty::Advanced)
                    .with_description("Balanced trees for block storage")],
            ),
        ])
    }

    #[test]
    fn test_catalog_get() {
        let catalog = sample_catalog();

        let (category, topic) = catalog.get("ds-b-trees").unwrap();
        assert_eq!(category.id, "computer-science/data-structures");
        assert_eq!(topic.title, "B-Trees");
        assert!(catalog.get("nope").is_none());
        assert!(catalog.category("computer-science/operating-systems").is_some());
        assert_eq!(catalog.by_id().len(), 2);
    }

    #[test]
    fn test_catalog_topics_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.topics().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["os-processes", "os-scheduling", "ds-arrays", "ds-b-trees"]);
    }

    #[test]
    fn test_catalog_filters() {
        let catalog = sample_catalog();

        assert_eq!(catalog.filter_by_difficulty(Difficulty::Beginner).len(), 2);
        assert_eq!(catalog.filter_by_difficulty(Difficulty::Advanced).len(), 1);
        assert_eq!(catalog.filter_by_tag("OS").len(), 2);
        assert_eq!(catalog.filter_by_tag("gpu").len(), 0);
    }

    #[test]
    fn test_catalog_matching() {
        let catalog = sample_catalog();

        assert_eq!(catalog.matching("os-*").unwrap().len(), 2);
        assert_eq!(catalog.matching("ds-?-trees").unwrap().len(), 1);
        assert!(catalog.matching("[").is_err());
    }

    #[test]
    fn test_catalog_search() {
        let catalog = sample_catalog();

        // Title
        assert_eq!(catalog.search("arrays").len(), 1);
        // Description
        assert_eq!(catalog.search("runnable").len(), 1);
        // Tag, case insensitive
        assert_eq!(catalog.search("MEMORY").len(), 1);
        // No match
        assert_eq!(catalog.search("quantum").len(), 0);
    }

    #[test]
    fn test_catalog_related_skips_dangling() {
        let catalog = sample_catalog();

        let related = catalog.related("os-processes");
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "os-scheduling");
        assert!(catalog.related("nope").is_empty());
    }

    #[test]
    fn test_catalog_stats() {
        let stats = sample_catalog().stats();

        assert_eq!(stats.categories, 2);
        assert_eq!(stats.topics, 4);
        assert_eq!(stats.examples, 1);
        assert_eq!(stats.by_difficulty[&Difficulty::Beginner], 2);
        assert_eq!(stats.by_difficulty[&Difficulty::Intermediate], 1);
        assert_eq!(stats.by_difficulty[&Difficulty::Advanced], 1);
        assert_eq!(
            stats.by_category[0],
            CategoryCount {
                id: "computer-science/operating-systems".to_string(),
                topics: 2,
            }
        );

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_category"][0]["id"], "computer-science/operating-systems");
        assert_eq!(json["by_category"][0]["topics"], 2);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.version, CATALOG_VERSION);
        assert_eq!(catalog.stats().by_difficulty.len(), 3);
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = catalog() as *const Catalog;
        let b = catalog() as *const Catalog;
        assert_eq!(a, b);
        assert!(!catalog().is_empty());
    }
}
