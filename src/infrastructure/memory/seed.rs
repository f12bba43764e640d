//! Demo data set loaded at startup when `SEED_DATA` is enabled.

use crate::domain::entities::{NewArticle, NewCategory, NewJournalist};
use crate::domain::store::{IdStrategy, StoreError};
use crate::domain::Newsroom;

const JOURNALISTS: &[(&str, &str)] = &[
    ("Alice Martin", "alice.martin@newsroom.test"),
    ("Bruno Costa", "bruno.costa@newsroom.test"),
    ("Chen Wei", "chen.wei@newsroom.test"),
];

const CATEGORIES: &[&str] = &["Technology", "Politics", "Sports"];

/// (title, content, journalist index, category index), indices 1-based.
const ARTICLES: &[(&str, &str, i64, i64)] = &[
    (
        "Memory safety goes mainstream",
        "More infrastructure projects are adopting memory-safe languages.",
        1,
        1,
    ),
    (
        "Budget vote delayed again",
        "Lawmakers postponed the vote after a late amendment.",
        2,
        2,
    ),
    (
        "Underdogs take the title",
        "A last-minute goal decided the final.",
        3,
        3,
    ),
    (
        "Chip supply steadies",
        "Manufacturers report shorter lead times this quarter.",
        1,
        1,
    ),
];

/// Builds a newsroom populated with the demo data set.
///
/// Entities go through the regular create path so ids follow `strategy`.
pub fn seeded(strategy: IdStrategy) -> Result<Newsroom, StoreError> {
    let mut newsroom = Newsroom::new(strategy);

    for (name, email) in JOURNALISTS {
        newsroom.journalists.create(NewJournalist {
            name: Some((*name).to_string()),
            email: Some((*email).to_string()),
        })?;
    }

    for name in CATEGORIES {
        newsroom.categories.create(NewCategory {
            name: Some((*name).to_string()),
        })?;
    }

    for (title, content, journalist_id, category_id) in ARTICLES {
        newsroom.articles.create(NewArticle {
            title: Some((*title).to_string()),
            content: Some((*content).to_string()),
            journalist_id: Some(*journalist_id),
            category_id: Some(*category_id),
        })?;
    }

    Ok(newsroom)
}
