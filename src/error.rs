//! Error types for campus-nav

use thiserror::Error;

/// campus-nav error type
#[derive(Error, Debug)]
pub enum NavError {
    /// Start or end identifier is not a key of the map
    #[error("Unknown location: {id}")]
    UnknownLocation { id: String },

    /// Frontier exhausted before the goal was reached
    #[error("No path from {start} to {end}")]
    NoPath { start: String, end: String },

    /// Zero-length segment around a waypoint during turn classification
    #[error("Degenerate geometry at {id}: coincident waypoints")]
    DegenerateGeometry { id: String },

    /// Malformed map record found while loading
    #[error("Map integrity error at {id}: {reason}")]
    MapIntegrity { id: String, reason: String },

    #[error("Cannot narrate an empty path")]
    EmptyPath,

    /// Narration needed a direction that the turn annotation does not hold
    #[error("No direction recorded for waypoint {id}")]
    MissingDirection { id: String },

    #[error("Search cancelled")]
    Cancelled,

    #[error("Search deadline exceeded after {elapsed_ms}ms")]
    DeadlineExceeded { elapsed_ms: u64 },

    #[error("Search exceeded {limit} node expansions")]
    ExpansionLimitExceeded { limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl NavError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownLocation { .. } => "UNKNOWN_LOCATION",
            Self::NoPath { .. } => "NO_PATH",
            Self::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            Self::MapIntegrity { .. } => "MAP_INTEGRITY",
            Self::EmptyPath => "EMPTY_PATH",
            Self::MissingDirection { .. } => "MISSING_DIRECTION",
            Self::Cancelled => "CANCELLED",
            Self::DeadlineExceeded { .. } => "DEADLINE_EXCEEDED",
            Self::ExpansionLimitExceeded { .. } => "EXPANSION_LIMIT",
            Self::Io(_) => "IO",
            Self::Parse(_) => "PARSE",
            Self::Config(_) => "CONFIG",
        }
    }

    pub(crate) fn unknown(id: &str) -> Self {
        Self::UnknownLocation { id: id.to_string() }
    }
}

impl From<serde_json::Error> for NavError {
    fn from(e: serde_json::Error) -> Self {
        NavError::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for NavError {
    fn from(e: serde_yaml::Error) -> Self {
        NavError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
