//! Board cell value objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of a board cell, deciding what happens when a player lands on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Normal,
    Blue,
    Red,
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Normal => "Normal",
            CellType::Blue => "Blue",
            CellType::Red => "Red",
        }
    }

    /// Lenient parse used by asset loaders: case-insensitive, and anything
    /// unknown or absent is a Normal cell.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for CellType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(CellType::Normal),
            "blue" => Ok(CellType::Blue),
            "red" => Ok(CellType::Red),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cell on the board (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCell {
    pub id: String,
    pub index: usize,
    pub cell_type: CellType,
    pub label: String,
}

impl BoardCell {
    pub fn new(
        id: impl Into<String>,
        index: usize,
        cell_type: CellType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            index,
            cell_type,
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("blue".parse::<CellType>(), Ok(CellType::Blue));
        assert_eq!("RED".parse::<CellType>(), Ok(CellType::Red));
        assert_eq!(" Normal ".parse::<CellType>(), Ok(CellType::Normal));
    }

    #[test]
    fn test_parse_lenient_defaults_to_normal() {
        assert_eq!(CellType::parse_lenient(None), CellType::Normal);
        assert_eq!(CellType::parse_lenient(Some("")), CellType::Normal);
        assert_eq!(CellType::parse_lenient(Some("golden")), CellType::Normal);
        assert_eq!(CellType::parse_lenient(Some("Red")), CellType::Red);
    }
}
