//! Core domain entities representing the newsroom data model.
//!
//! Entities are plain data structures. Each one comes with two companion
//! structs:
//! - `NewArticle`, `NewJournalist`, `NewCategory` - partial field sets given to
//!   create operations; required fields are checked when the entity is built
//! - `ArticlePatch`, `JournalistPatch`, `CategoryPatch` - partial updates where
//!   `None` leaves a field unchanged
//!
//! # Entity Types
//!
//! - [`Article`] - A piece of content written by a journalist in a category
//! - [`Journalist`] - An author
//! - [`Category`] - A topic grouping articles

pub mod article;
pub mod category;
pub mod journalist;

pub use article::{Article, ArticlePatch, NewArticle};
pub use category::{Category, CategoryPatch, NewCategory};
pub use journalist::{Journalist, JournalistPatch, NewJournalist};

/// Behaviour shared by every entity held in an [`crate::domain::store::EntityStore`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human-readable resource name used in error messages ("Article").
    const RESOURCE: &'static str;

    /// Partial field set accepted by create.
    type Draft: Send + 'static;

    /// Partial field set accepted by update.
    type Patch: Send + 'static;

    fn id(&self) -> i64;

    /// Builds an entity from a draft, or returns the names of the required
    /// fields that are missing or falsy.
    fn from_draft(id: i64, draft: Self::Draft) -> Result<Self, Vec<&'static str>>;

    /// Overwrites every field present in the patch.
    fn apply(&mut self, patch: Self::Patch);
}

/// Collects a required field, recording its name when it is absent.
fn require<V>(missing: &mut Vec<&'static str>, field: &'static str, value: Option<V>) -> Option<V> {
    if value.is_none() {
        missing.push(field);
    }
    value
}

/// Empty strings count as missing.
fn filled(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A zero id counts as missing. Any other id is kept, even one that matches
/// no entity.
fn reference(value: Option<i64>) -> Option<i64> {
    value.filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_records_missing_field() {
        let mut missing = Vec::new();

        assert_eq!(require(&mut missing, "name", Some(1)), Some(1));
        assert!(missing.is_empty());

        assert_eq!(require::<i64>(&mut missing, "email", None), None);
        assert_eq!(missing, vec!["email"]);
    }

    #[test]
    fn test_falsy_values() {
        assert_eq!(filled(Some(String::new())), None);
        assert_eq!(filled(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(reference(Some(0)), None);
        assert_eq!(reference(Some(-3)), Some(-3));
        assert_eq!(reference(Some(7)), Some(7));
    }
}
