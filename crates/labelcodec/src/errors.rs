//! # Error Types

/// Errors from labelcodec operations.
///
/// Unknown symbols and codes are never errors; encode and decode
/// substitute the alphabet's fallback code and symbol instead.
#[derive(Debug, thiserror::Error)]
pub enum LabelCodecError {
    /// The alphabet definition (or another configuration value) is invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A table source (TSV, JSON, symbol list) is malformed.
    #[error("format error{}: {message}", line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    Format {
        /// The 1-based line of the offending row, when known.
        line: Option<usize>,

        /// What was wrong with the row.
        message: String,
    },

    /// Array shapes or lengths are inconsistent.
    #[error("shape error: {0}")]
    Shape(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LabelCodecError {
    /// Build a [`LabelCodecError::Format`] error.
    pub fn format<S: Into<String>>(
        line: Option<usize>,
        message: S,
    ) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}

/// Result type for labelcodec operations.
pub type LCResult<T> = core::result::Result<T, LabelCodecError>;
