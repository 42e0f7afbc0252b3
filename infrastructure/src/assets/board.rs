//! Board loading
//!
//! ```json
//! { "cells": [ { "id": "c0", "index": 0, "type": "Blue", "label": "" } ],
//!   "edges": [], "startCellId": "c0", "goalCellId": "c9", "goalCandidates": [] }
//! ```
//!
//! Only the cell list drives the game; the path metadata is read and logged.

use async_trait::async_trait;
use ogiri_application::BoardSource;
use ogiri_domain::{Board, BoardCell, BoardLoadError, CellType};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{debug, warn};

const BUNDLED_BOARD: &str = include_str!("../../assets/board.json");

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct BoardFile {
    cells: Vec<CellEntry>,
    edges: Vec<EdgeEntry>,
    start_cell_id: String,
    goal_cell_id: String,
    goal_candidates: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CellEntry {
    id: String,
    index: Option<usize>,
    #[serde(rename = "type")]
    cell_type: Option<String>,
    label: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EdgeEntry {
    from: String,
    to: Vec<String>,
}

/// Parse board JSON. Cells are ordered by their `index` (array position
/// when absent); unknown cell types read as Normal. Unparseable data is an
/// empty board.
pub fn parse_board(json: &str) -> Result<Board, BoardLoadError> {
    let file: BoardFile = serde_json::from_str(json).map_err(|e| {
        warn!("Board data could not be parsed: {}", e);
        BoardLoadError::Empty
    })?;

    debug!(
        "Board path: start={:?} goal={:?} candidates={} edges={}",
        file.start_cell_id,
        file.goal_cell_id,
        file.goal_candidates.len(),
        file.edges
            .iter()
            .map(|e| format!("{}->{}", e.from, e.to.len()))
            .collect::<Vec<_>>()
            .join(",")
    );

    let mut entries: Vec<(usize, CellEntry)> = file
        .cells
        .into_iter()
        .enumerate()
        .map(|(position, cell)| (cell.index.unwrap_or(position), cell))
        .collect();
    entries.sort_by_key(|(index, _)| *index);

    let cells: Vec<BoardCell> = entries
        .into_iter()
        .map(|(index, cell)| {
            BoardCell::new(
                cell.id,
                index,
                CellType::parse_lenient(cell.cell_type.as_deref()),
                cell.label,
            )
        })
        .collect();

    if cells.is_empty() {
        return Err(BoardLoadError::Empty);
    }
    Ok(Board::new(cells))
}

/// [`BoardSource`] reading board JSON from a file, or the bundled board
pub struct JsonBoardSource {
    path: Option<PathBuf>,
}

impl JsonBoardSource {
    pub fn bundled() -> Self {
        Self { path: None }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn from_optional(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

#[async_trait]
impl BoardSource for JsonBoardSource {
    async fn load_board(&self) -> Result<Board, BoardLoadError> {
        match &self.path {
            Some(path) => {
                let json = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| BoardLoadError::Source(format!("{}: {}", path.display(), e)))?;
                parse_board(&json)
            }
            None => parse_board(BUNDLED_BOARD),
        }
    }
}
