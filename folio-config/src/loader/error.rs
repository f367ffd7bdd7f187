use std::path::PathBuf;

use folio_core::MotionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read carousel config from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid carousel config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("carousel config rejected: {0}")]
    Invalid(#[from] MotionError),
}
