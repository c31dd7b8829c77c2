//! Crate-wide error taxonomy.
//!
//! Three failure classes exist: I/O (file unreadable or unwritable),
//! format (a file's structure is unusable, e.g. a truncated header), and
//! validation (a caller request the model rejects, e.g. a duplicate message
//! number). Malformed content *inside* an otherwise-usable file is not an
//! error — the codecs tolerate it with best-effort defaults and a debug
//! diagnostic, because real device files carry decades of stray bytes.

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by dotsign operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A file's structure is unusable; no partial state is produced.
    #[error("malformed file: {reason}")]
    Format {
        /// What made the file unusable.
        reason: String,
    },

    /// A caller request was rejected; nothing was mutated.
    #[error("validation failed: {reason}")]
    Validation {
        /// Why the request was rejected.
        reason: String,
    },
}

impl Error {
    /// Build a [`Error::Format`] from anything displayable.
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Build a [`Error::Validation`] from anything displayable.
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::format("header too short");
        assert_eq!(err.to_string(), "malformed file: header too short");

        let err = Error::validation("message number 0 out of range");
        assert_eq!(
            err.to_string(),
            "validation failed: message number 0 out of range"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
