//! Literal catalog content.
//!
//! One module per subject, each split into `beginner`, `intermediate` and
//! `advanced` lists. A subject's `category()` concatenates its three lists;
//! `categories()` collects every subject in `SUBJECTS` order.
//!
//! # Adding a subject
//!
//! 1. Create `<area>/<subject>/{mod,beginner,intermediate,advanced}.rs`
//! 2. Add its `category` constructor to `SUBJECTS`
//! 3. Run `syllabus validate`

pub mod architecture;
pub mod computer_science;

use crate::domain::Category;

/// Subject index constructors, in catalog order
pub const SUBJECTS: &[fn() -> Category] = &[
    architecture::audit::category,
    architecture::microservices::category,
    computer_science::operating_systems::category,
    computer_science::data_structures::category,
];

/// Related-topic IDs that are referenced on purpose but not (yet) written.
///
/// - `ms-service-mesh`: sidecar proxies, planned for the microservices track
/// - `cs-distributed-consensus`: Raft/Paxos, planned distributed systems subject
pub const INTENTIONAL_DANGLING: &[&str] = &["ms-service-mesh", "cs-distributed-consensus"];

/// Build every subject's category
pub fn categories() -> Vec<Category> {
    SUBJECTS.iter().map(|subject| subject()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_category_per_subject() {
        let categories = categories();
        assert_eq!(categories.len(), SUBJECTS.len());

        let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                architecture::audit::ID,
                architecture::microservices::ID,
                computer_science::operating_systems::ID,
                computer_science::data_structures::ID,
            ]
        );
    }

    #[test]
    fn test_no_subject_is_empty() {
        for category in categories() {
            assert!(!category.is_empty(), "{} has no topics", category.id);
        }
    }
}
