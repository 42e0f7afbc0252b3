//! Topic catalog loading
//!
//! ```json
//! { "topics": [ { "id": "t1", "category": "...", "prompt": "...", "difficulty": "Normal" } ] }
//! ```

use ogiri_domain::{Difficulty, Topic, TopicCatalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const BUNDLED_TOPICS: &str = include_str!("../../assets/topics.json");

#[derive(Error, Debug)]
pub enum TopicLoadError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid topic data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TopicFile {
    topics: Vec<TopicEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TopicEntry {
    id: String,
    category: String,
    prompt: String,
    difficulty: Option<String>,
}

impl From<TopicEntry> for Topic {
    fn from(entry: TopicEntry) -> Self {
        let difficulty = entry
            .difficulty
            .as_deref()
            .and_then(|d| d.parse().ok())
            .unwrap_or(Difficulty::Normal);
        Topic::new(entry.id, entry.category, entry.prompt, difficulty)
    }
}

/// Parse a topic catalog. Unknown difficulties read as `Normal`.
pub fn parse_topics(json: &str) -> Result<TopicCatalog, TopicLoadError> {
    let file: TopicFile = serde_json::from_str(json)?;
    let topics: Vec<Topic> = file.topics.into_iter().map(Topic::from).collect();
    if topics.is_empty() {
        warn!("Topic data contains no topics");
    }
    Ok(TopicCatalog::new(topics))
}

/// Load topics from `path`, or the bundled set when `None`.
pub fn load_topics(path: Option<&Path>) -> Result<TopicCatalog, TopicLoadError> {
    let catalog = match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| TopicLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_topics(&json)?
        }
        None => parse_topics(BUNDLED_TOPICS)?,
    };
    info!("Loaded {} topics", catalog.len());
    Ok(catalog)
}
