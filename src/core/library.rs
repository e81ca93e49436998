use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    DuplicateKey {
        message: String,
    },
    // Checkout rejections, surfaced to the user before any state changes.
    AlreadyCheckedOut {
        message: String,
    },
    VolumeUnavailable {
        message: String,
    },
    NothingToReturn {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn already_checked_out(message: &str) -> LibraryError {
        LibraryError::AlreadyCheckedOut { message: message.to_string() }
    }

    pub fn volume_unavailable(message: &str) -> LibraryError {
        LibraryError::VolumeUnavailable { message: message.to_string() }
    }

    pub fn nothing_to_return(message: &str) -> LibraryError {
        LibraryError::NothingToReturn { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::AlreadyCheckedOut { message } => {
                write!(f, "{}", message)
            }
            LibraryError::VolumeUnavailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NothingToReturn { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// LendingStatus aggregates the checkout state of one catalog entry. For a
// series the counts cover its volumes; a single book is either out or not.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum LendingStatus {
    Available,
    CheckedOut,
    PartiallyCheckedOut { borrowed: usize, total: usize },
    AllCheckedOut,
}

impl Display for LendingStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            LendingStatus::Available => write!(f, "Available"),
            LendingStatus::CheckedOut => write!(f, "Checked Out"),
            LendingStatus::PartiallyCheckedOut { borrowed, total } => {
                write!(f, "{}/{} Checked Out", borrowed, total)
            }
            LendingStatus::AllCheckedOut => write!(f, "All Checked Out"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum SortKey {
    Title,
    Author,
    Status,
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "title" => SortKey::Title,
            "author" => SortKey::Author,
            "status" => SortKey::Status,
            _ => SortKey::Title,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SortKey::Title => write!(f, "Title"),
            SortKey::Author => write!(f, "Author"),
            SortKey::Status => write!(f, "Status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{LendingStatus, LibraryError, SortKey};

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound { message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey { message: _ }));
    }

    #[test]
    fn test_should_create_already_checked_out_error() {
        assert!(matches!(LibraryError::already_checked_out("test"), LibraryError::AlreadyCheckedOut { message: _ }));
    }

    #[test]
    fn test_should_create_volume_unavailable_error() {
        assert!(matches!(LibraryError::volume_unavailable("test"), LibraryError::VolumeUnavailable { message: _ }));
    }

    #[test]
    fn test_should_create_nothing_to_return_error() {
        assert!(matches!(LibraryError::nothing_to_return("test"), LibraryError::NothingToReturn { message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization { message: _ }));
    }

    #[test]
    fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_format_lending_status() {
        assert_eq!("Available", LendingStatus::Available.to_string());
        assert_eq!("Checked Out", LendingStatus::CheckedOut.to_string());
        assert_eq!("2/7 Checked Out",
                   LendingStatus::PartiallyCheckedOut { borrowed: 2, total: 7 }.to_string());
        assert_eq!("All Checked Out", LendingStatus::AllCheckedOut.to_string());
    }

    #[test]
    fn test_should_order_status_text_lexicographically() {
        // the status sort criterion compares these display strings as text
        let partial = LendingStatus::PartiallyCheckedOut { borrowed: 1, total: 3 }.to_string();
        let all = LendingStatus::AllCheckedOut.to_string();
        let available = LendingStatus::Available.to_string();
        let single = LendingStatus::CheckedOut.to_string();
        assert!(partial < all);
        assert!(all < available);
        assert!(available < single);
    }

    #[test]
    fn test_should_parse_sort_key() {
        assert_eq!(SortKey::Title, SortKey::from("Title".to_string()));
        assert_eq!(SortKey::Author, SortKey::from("author".to_string()));
        assert_eq!(SortKey::Status, SortKey::from("Status".to_string()));
        assert_eq!(SortKey::Title, SortKey::from("unknown".to_string()));
    }

    #[test]
    fn test_should_format_sort_key() {
        for key in [SortKey::Title, SortKey::Author, SortKey::Status] {
            assert_eq!(key, SortKey::from(key.to_string()));
        }
    }
}
