//! Error taxonomy for the bulk-import pipeline

use std::fmt;

/// Failure raised while reading, mapping or submitting a species spreadsheet.
///
/// `Read` and `UnsupportedCategory` abort an import before anything is sent to
/// the backend. `Validation` is surfaced to callers as a rejected upload
/// result, and `Write` is collected per batch instead of being propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The file could not be parsed as a spreadsheet
    Read(String),
    /// The input is structurally empty or produced no records
    Validation(String),
    /// The category selector is not one of the supported categories
    UnsupportedCategory(String),
    /// The persistence backend rejected or failed a write
    Write(String),
}

impl ImportError {
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }

    /// True for failures that must stop the import before any write
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Read(_) | Self::UnsupportedCategory(_))
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Read(msg) => write!(f, "Failed to read spreadsheet: {}", msg),
            ImportError::Validation(msg) => write!(f, "{}", msg),
            ImportError::UnsupportedCategory(category) => {
                write!(f, "Unsupported category '{}'", category)
            }
            // Write errors end up verbatim in the upload result's error list
            ImportError::Write(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ImportError {}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::Read(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Read(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_write_message_verbatim() {
        assert_eq!(ImportError::write("rate limited").to_string(), "rate limited");
        assert_eq!(
            ImportError::validation("No data provided for upload").to_string(),
            "No data provided for upload"
        );
    }

    #[test]
    fn test_fatal_variants() {
        assert!(ImportError::read("corrupt").is_fatal());
        assert!(ImportError::UnsupportedCategory("fish".into()).is_fatal());
        assert!(!ImportError::validation("empty").is_fatal());
        assert!(!ImportError::write("boom").is_fatal());
    }
}
