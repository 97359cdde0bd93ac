//! Microservice architecture.

pub mod advanced;
pub mod beginner;
pub mod intermediate;

use crate::domain::Category;

pub const ID: &str = "architecture/microservices";
pub const TITLE: &str = "Microservices";

pub fn category() -> Category {
    Category::from_tiers(
        ID,
        TITLE,
        beginner::topics(),
        intermediate::topics(),
        advanced::topics(),
    )
    .with_description("Independently deployable services and the patterns that hold them together")
}
