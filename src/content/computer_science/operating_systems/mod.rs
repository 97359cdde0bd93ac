//! Operating systems: processes, memory and I/O.

pub mod advanced;
pub mod beginner;
pub mod intermediate;

use crate::domain::Category;

pub const ID: &str = "computer-science/operating-systems";
pub const TITLE: &str = "Operating Systems";

pub fn category() -> Category {
    Category::from_tiers(
        ID,
        TITLE,
        beginner::topics(),
        intermediate::topics(),
        advanced::topics(),
    )
    .with_description("How the kernel shares CPU, memory and devices between programs")
}
