//! Architecture audits: reviewing an existing system's structure against its goals.

pub mod advanced;
pub mod beginner;
pub mod intermediate;

use crate::domain::Category;

pub const ID: &str = "architecture/audit";
pub const TITLE: &str = "Architecture Audit";

/// Beginner, then intermediate, then advanced
pub fn category() -> Category {
    Category::from_tiers(
        ID,
        TITLE,
        beginner::topics(),
        intermediate::topics(),
        advanced::topics(),
    )
    .with_description("Assessing how well a codebase's structure serves its quality goals")
}
