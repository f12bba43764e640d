//! Relationship-filtered queries over the article collection.
//!
//! No index structure is maintained: every query scans the whole article
//! store, which keeps the results trivially consistent with CRUD mutations.

use crate::domain::entities::Article;
use crate::domain::store::{EntityStore, StoreError};

/// Read-only view answering "all articles referencing X".
pub struct RelationalIndex<'a> {
    articles: &'a EntityStore<Article>,
}

impl<'a> RelationalIndex<'a> {
    pub fn new(articles: &'a EntityStore<Article>) -> Self {
        Self { articles }
    }

    /// Articles written by the journalist, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NoRelatedArticles`] when nothing matches. An
    /// unknown journalist and a journalist without articles look the same.
    pub fn articles_by_journalist(&self, journalist_id: i64) -> Result<Vec<&'a Article>, StoreError> {
        self.filter("journalist", journalist_id, |a| a.journalist_id == journalist_id)
    }

    /// Articles filed under the category, in insertion order.
    pub fn articles_by_category(&self, category_id: i64) -> Result<Vec<&'a Article>, StoreError> {
        self.filter("category", category_id, |a| a.category_id == category_id)
    }

    fn filter(
        &self,
        parent: &'static str,
        id: i64,
        predicate: impl Fn(&Article) -> bool,
    ) -> Result<Vec<&'a Article>, StoreError> {
        let matches: Vec<&'a Article> = self
            .articles
            .list_all()
            .iter()
            .filter(|a| predicate(a))
            .collect();

        if matches.is_empty() {
            return Err(StoreError::NoRelatedArticles { parent, id });
        }

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewArticle;

    fn article(title: &str, journalist_id: i64, category_id: i64) -> NewArticle {
        NewArticle {
            title: Some(title.to_string()),
            content: Some("body".to_string()),
            journalist_id: Some(journalist_id),
            category_id: Some(category_id),
        }
    }

    fn store() -> EntityStore<Article> {
        let mut store = EntityStore::default();
        store.create(article("one", 1, 10)).unwrap();
        store.create(article("two", 2, 10)).unwrap();
        store.create(article("three", 1, 20)).unwrap();
        store
    }

    #[test]
    fn test_by_journalist_returns_matching_subset_in_order() {
        let store = store();
        let index = RelationalIndex::new(&store);

        let titles: Vec<_> = index
            .articles_by_journalist(1)
            .unwrap()
            .iter()
            .map(|a| a.title.as_str())
            .collect();

        assert_eq!(titles, vec!["one", "three"]);
    }

    #[test]
    fn test_by_category() {
        let store = store();
        let index = RelationalIndex::new(&store);

        let result = index.articles_by_category(10).unwrap();

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|a| a.category_id == 10));
    }

    #[test]
    fn test_empty_result_is_not_found() {
        let store = store();
        let index = RelationalIndex::new(&store);

        assert_eq!(
            index.articles_by_journalist(99).unwrap_err(),
            StoreError::NoRelatedArticles {
                parent: "journalist",
                id: 99
            }
        );
        assert_eq!(
            index.articles_by_category(99).unwrap_err(),
            StoreError::NoRelatedArticles {
                parent: "category",
                id: 99
            }
        );
    }

    #[test]
    fn test_deleting_last_article_empties_relation() {
        let mut store: EntityStore<Article> = EntityStore::default();
        let id = store.create(article("solo", 1, 1)).unwrap().id;
        assert_eq!(RelationalIndex::new(&store).articles_by_journalist(1).unwrap().len(), 1);

        store.delete_by_id(id).unwrap();

        assert!(RelationalIndex::new(&store).articles_by_journalist(1).is_err());
    }
}
