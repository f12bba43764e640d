//! Category entity.

use super::{Entity, filled, require};

/// A topic grouping articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: String) -> Self {
        Self { id, name }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
}

impl Entity for Category {
    const RESOURCE: &'static str = "Category";

    type Draft = NewCategory;
    type Patch = CategoryPatch;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewCategory) -> Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        match require(&mut missing, "name", filled(draft.name)) {
            Some(name) => Ok(Self::new(id, name)),
            None => Err(missing),
        }
    }

    fn apply(&mut self, patch: CategoryPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let category = Category::from_draft(
            4,
            NewCategory {
                name: Some("Tech".to_string()),
            },
        )
        .unwrap();

        assert_eq!(category, Category::new(4, "Tech".to_string()));
    }

    #[test]
    fn test_category_empty_name_is_missing() {
        let missing = Category::from_draft(
            1,
            NewCategory {
                name: Some(String::new()),
            },
        )
        .unwrap_err();

        assert_eq!(missing, vec!["name"]);
    }
}
