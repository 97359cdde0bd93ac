//! Data structures.

pub mod advanced;
pub mod beginner;
pub mod intermediate;

use crate::domain::Category;

pub const ID: &str = "computer-science/data-structures";
pub const TITLE: &str = "Data Structures";

pub fn category() -> Category {
    Category::from_tiers(
        ID,
        TITLE,
        beginner::topics(),
        intermediate::topics(),
        advanced::topics(),
    )
    .with_description("Ways to organise data in memory and on disk, and what each costs")
}
