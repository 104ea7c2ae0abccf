//! Error types for the fallible edges: loading tunables and persisting missions.
//!
//! The mission engine itself never fails; these only surface from file I/O.

use std::io;

use thiserror::Error;

use crate::id::ActorId;

/// Failure loading or validating [`Tunables`](crate::config::Tunables).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tunables: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse tunables: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Failure writing or reading persisted missions.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("mission file I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("bad mission record on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} appears in more than one mission record")]
    DuplicateAgent(ActorId),
}
