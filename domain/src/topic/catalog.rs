//! In-memory topic catalog with category/difficulty filtering and random picks.

use super::topic::{Difficulty, Topic};
use crate::core::rng::GameRng;
use thiserror::Error;

/// No topic matched the requested filters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No topic available for category '{category}' and difficulty '{difficulty}'")]
pub struct NoTopicAvailable {
    pub category: String,
    pub difficulty: Difficulty,
}

/// Read-only set of topics loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Topics matching both filters. A `None` (or blank) filter matches
    /// everything; category comparison ignores case.
    pub fn topics(&self, category: Option<&str>, difficulty: Option<Difficulty>) -> Vec<&Topic> {
        let category = category.map(str::trim).filter(|c| !c.is_empty());
        self.topics
            .iter()
            .filter(|t| category.is_none_or(|c| t.category.to_lowercase() == c.to_lowercase()))
            .filter(|t| difficulty.is_none_or(|d| t.difficulty == d))
            .collect()
    }

    /// Pick uniformly among topics matching `category` and `difficulty`.
    pub fn pick(
        &self,
        category: &str,
        difficulty: Difficulty,
        rng: &mut dyn GameRng,
    ) -> Result<Topic, NoTopicAvailable> {
        let pool = self.topics(Some(category), Some(difficulty));
        if pool.is_empty() {
            return Err(NoTopicAvailable {
                category: category.to_string(),
                difficulty,
            });
        }
        Ok(pool[rng.pick_index(pool.len())].clone())
    }
}
