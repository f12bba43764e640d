//! Ordered in-memory collection with identity assignment.
//!
//! [`EntityStore`] is the leaf of the data layer: one instance per entity type
//! holds the entities in insertion order and implements the CRUD contract used
//! by the repositories in [`crate::infrastructure::memory`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::entities::Entity;

/// Errors produced by store and relationship operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Required fields were missing or falsy on create.
    #[error("{resource} is missing required fields: {}", missing.join(", "))]
    Validation {
        resource: &'static str,
        missing: Vec<&'static str>,
    },

    /// No entity with the given id.
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// A relationship query matched no article.
    #[error("no articles found for {parent} {id}")]
    NoRelatedArticles { parent: &'static str, id: i64 },
}

/// How a store picks the id of a newly created entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// Monotonic per-collection counter. Ids are never reused.
    #[default]
    Sequential,
    /// `len + 1` at insertion time. After a delete this can hand out an id
    /// that is still in use.
    Length,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id strategy '{0}', expected 'sequential' or 'length'")]
pub struct ParseIdStrategyError(String);

impl FromStr for IdStrategy {
    type Err = ParseIdStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "length" => Ok(Self::Length),
            other => Err(ParseIdStrategyError(other.to_string())),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequential => f.write_str("sequential"),
            Self::Length => f.write_str("length"),
        }
    }
}

/// One ordered collection of entities of type `T`.
#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    items: Vec<T>,
    next_id: i64,
    strategy: IdStrategy,
}

impl<T: Entity> EntityStore<T> {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            strategy,
        }
    }

    /// All entities in insertion order.
    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first entity whose id matches.
    pub fn get_by_id(&self, id: i64) -> Result<&T, StoreError> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or_else(|| Self::not_found(id))
    }

    /// Validates the draft, assigns an id and appends the new entity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] listing the missing fields. The
    /// collection is left untouched in that case.
    pub fn create(&mut self, draft: T::Draft) -> Result<&T, StoreError> {
        let id = self.assign_id();
        let entity = T::from_draft(id, draft).map_err(|missing| StoreError::Validation {
            resource: T::RESOURCE,
            missing,
        })?;

        self.next_id = self.next_id.max(id + 1);
        self.items.push(entity);

        self.items.last().ok_or_else(|| Self::not_found(id))
    }

    /// Applies a partial update in place and returns the stored entity.
    pub fn update(&mut self, id: i64, patch: T::Patch) -> Result<&T, StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.items[index].apply(patch);
        Ok(&self.items[index])
    }

    /// Removes the entity, shifting later entities down by one.
    pub fn delete_by_id(&mut self, id: i64) -> Result<(), StoreError> {
        let index = self.position(id).ok_or_else(|| Self::not_found(id))?;
        self.items.remove(index);
        Ok(())
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn assign_id(&self) -> i64 {
        match self.strategy {
            IdStrategy::Sequential => self.next_id,
            IdStrategy::Length => self.items.len() as i64 + 1,
        }
    }

    fn not_found(id: i64) -> StoreError {
        StoreError::NotFound {
            resource: T::RESOURCE,
            id,
        }
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
