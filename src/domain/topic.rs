//! Topic records.
//!
//! A topic is one educational entry: metadata, key points, code examples and
//! soft references to related topics. Topics are declared as literals in the
//! `content` module and never mutated after the catalog is assembled.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Topic identifier (e.g. `os-virtual-memory`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TopicId(String);

impl TopicId {
    /// Create a topic ID from any string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TopicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TopicId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TopicId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for TopicId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TopicId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A titled code sample attached to a topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    /// Short caption
    pub title: String,

    /// Source code text, verbatim
    pub code: String,

    /// Language label for highlighting (e.g. "rust", "c", "yaml")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CodeExample {
    /// Create a new example without a language label
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            code: code.into(),
            language: None,
        }
    }

    /// Set the language label
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// A single educational content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Unique identifier across the whole catalog
    pub id: TopicId,

    /// Human-readable title
    pub title: String,

    /// Difficulty tier
    pub difficulty: Difficulty,

    /// Free-text description
    pub description: String,

    /// Ordered key points
    #[serde(default)]
    pub key_points: Vec<String>,

    /// Ordered tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Ordered code examples
    #[serde(default)]
    pub examples: Vec<CodeExample>,

    /// Soft references to other topics (not checked on construction)
    #[serde(default)]
    pub related: Vec<TopicId>,

    /// Optional trivia
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fun_fact: Option<String>,
}

impl Topic {
    /// Create a new topic with empty lists
    pub fn new(id: impl Into<TopicId>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            difficulty,
            description: String::new(),
            key_points: Vec::new(),
            tags: Vec::new(),
            examples: Vec::new(),
            related: Vec::new(),
            fun_fact: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add multiple key points
    pub fn with_key_points(mut self, points: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.key_points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Add a tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add a code example
    pub fn with_example(mut self, example: CodeExample) -> Self {
        self.examples.push(example);
        self
    }

    /// Add related topic references
    pub fn with_related(mut self, ids: impl IntoIterator<Item = impl Into<TopicId>>) -> Self {
        self.related.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Set the fun fact
    pub fn with_fun_fact(mut self, fact: impl Into<String>) -> Self {
        self.fun_fact = Some(fact.into());
        self
    }

    /// Check whether the topic carries a tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive substring match over title, description, key points and tags.
    ///
    /// `query_lower` must already be lowercased.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.title.to_lowercase().contains(query_lower)
            || self.description.to_lowercase().contains(query_lower)
            || self.key_points.iter().any(|p| p.to_lowercase().contains(query_lower))
            || self.tags.iter().any(|t| t.to_lowercase().contains(query_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Topic {
        Topic::new("os-processes", "Processes", Difficulty::Beginner)
            .with_description("A process is a program in execution.")
            .with_key_points(["Own address space", "Scheduled by the kernel"])
            .with_tags(["os", "Processes"])
            .with_example(CodeExample::new("fork", "pid_t pid = fork();").with_language("c"))
            .with_related(["os-threads"])
            .with_fun_fact("PID 1 is init.")
    }

    #[test]
    fn test_topic_builder() {
        let topic = sample();

        assert_eq!(topic.id, "os-processes");
        assert_eq!(topic.difficulty, Difficulty::Beginner);
        assert_eq!(topic.key_points.len(), 2);
        assert_eq!(topic.examples[0].language.as_deref(), Some("c"));
        assert_eq!(topic.related, vec![TopicId::new("os-threads")]);
        assert_eq!(topic.fun_fact.as_deref(), Some("PID 1 is init."));
    }

    #[test]
    fn test_topic_matches_query() {
        let topic = sample();

        assert!(topic.matches_query("process"));
        assert!(topic.matches_query("execution"));
        assert!(topic.matches_query("kernel"));
        assert!(!topic.matches_query("garbage"));
        assert!(topic.has_tag("processes"));
        assert!(!topic.has_tag("threads"));
    }

    #[test]
    fn test_topic_without_fun_fact_omits_field() {
        let topic = Topic::new("t", "T", Difficulty::Advanced).with_description("d");
        let json = serde_json::to_string(&topic).unwrap();
        assert!(!json.contains("fun_fact"));

        let parsed: Topic = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, topic);
    }

    #[test]
    fn test_topic_id_serializes_as_string() {
        let json = serde_json::to_string(&TopicId::new("ds-heap")).unwrap();
        assert_eq!(json, "\"ds-heap\"");
    }
}
