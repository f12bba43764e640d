//! Journalist entity.

use super::{Entity, filled, require};

/// An author of articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journalist {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl Journalist {
    pub fn new(id: i64, name: String, email: String) -> Self {
        Self { id, name, email }
    }
}

/// Input data for creating a journalist. `name` and `email` are required.
#[derive(Debug, Clone, Default)]
pub struct NewJournalist {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Partial update for a journalist. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct JournalistPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Entity for Journalist {
    const RESOURCE: &'static str = "Journalist";

    type Draft = NewJournalist;
    type Patch = JournalistPatch;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: NewJournalist) -> Result<Self, Vec<&'static str>> {
        let mut missing = Vec::new();
        let name = require(&mut missing, "name", filled(draft.name));
        let email = require(&mut missing, "email", filled(draft.email));

        match (name, email) {
            (Some(name), Some(email)) => Ok(Self::new(id, name, email)),
            _ => Err(missing),
        }
    }

    fn apply(&mut self, patch: JournalistPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_journalist_requires_email() {
        let draft = NewJournalist {
            name: Some("Ada".to_string()),
            email: None,
        };

        assert_eq!(Journalist::from_draft(1, draft).unwrap_err(), vec!["email"]);
    }

    #[test]
    fn test_journalist_patch_overwrites_with_empty_string() {
        let mut journalist = Journalist::new(1, "Ada".to_string(), "ada@x.com".to_string());

        journalist.apply(JournalistPatch {
            name: Some(String::new()),
            email: None,
        });

        assert_eq!(journalist.name, "");
        assert_eq!(journalist.email, "ada@x.com");
    }
}
