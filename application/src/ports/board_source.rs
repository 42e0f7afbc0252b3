//! Board source port

use async_trait::async_trait;
use ogiri_domain::{Board, BoardLoadError};

/// Yields the board cells, possibly slowly. Called once per session.
#[async_trait]
pub trait BoardSource: Send + Sync {
    async fn load_board(&self) -> Result<Board, BoardLoadError>;
}
