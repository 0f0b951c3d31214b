//! Error types for the fallible outer surface.
//!
//! The simulation itself never fails; only loading and saving settings can.

use std::fmt;
use std::io;

/// Errors from reading, writing, or validating [`crate::Settings`].
#[derive(Debug)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    Io(io::Error),
    /// The file is not valid settings JSON.
    Parse(serde_json::Error),
    /// A value is outside the range the world can be built with.
    Invalid {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of what is wrong.
        reason: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "settings file I/O failed: {}", e),
            SettingsError::Parse(e) => write!(f, "settings file is not valid JSON: {}", e),
            SettingsError::Invalid { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid { .. } => None,
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(e: io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Convenience alias: a `Result` using `SettingsError` as the error type.
pub type SettingsResult<T> = Result<T, SettingsError>;
