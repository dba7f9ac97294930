//! Error types for the sculpting engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot allocate a {nx}x{ny}x{nz} voxel grid")]
    Allocation { nx: i32, ny: i32, nz: i32 },

    #[error("cannot open export target {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Script error: {0}")]
    Script(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
