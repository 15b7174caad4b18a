//! Error types for aria-pbm

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Conversion error types.
///
/// Every variant is fatal: the conversion stops at the first error and no
/// partial image is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Bad command line or help requested
    #[error("Usage: {program} <filenameAria.map> <filenameImage.ppm>")]
    Usage {
        /// Program name as invoked
        program: String,
    },

    /// Input map could not be opened
    #[error("Failed to open aria file ({})", path.display())]
    OpenInput {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output image could not be created
    #[error("Failed to open image file ({})", path.display())]
    OpenOutput {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Stream ended before the `LINES` marker
    #[error("Failed to detect lines section in aria file ({})", path.display())]
    LinesSectionNotFound {
        /// Input map path, or `<stream>` when parsing from memory
        path: PathBuf,
    },

    /// The lines section held no segments
    #[error("No lines found")]
    NoLinesFound,

    /// I/O error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl Error {
    /// Process exit code for this error.
    ///
    /// All failures map to `1`.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
