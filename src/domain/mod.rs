//! Domain types for the syllabus catalog.
//!
//! This module contains the record shapes:
//! - Topic: A single educational content record
//! - Category: A named, ordered grouping of topics
//! - Difficulty: The tier used to order topics within a category

pub mod category;
pub mod difficulty;
pub mod topic;

// Re-export commonly used types
pub use category::Category;
pub use difficulty::Difficulty;
pub use topic::{CodeExample, Topic, TopicId};
