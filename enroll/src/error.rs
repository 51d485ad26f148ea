//! Error types surfaced by the entity model and the roster store.
//!
//! None of these are fatal: the console renders them and returns to the menu
//! with the previous roster intact.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which name field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => f.write_str("first name"),
            NameField::Last => f.write_str("last name"),
        }
    }
}

/// Why a name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRule {
    /// Contains a digit, whitespace, or punctuation.
    LettersOnly,
    /// Registration requires a value.
    Required,
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameRule::LettersOnly => f.write_str("must only contain letters"),
            NameRule::Required => f.write_str("must not be empty"),
        }
    }
}

/// A name field failed validation at construction or setter time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The {field} {rule}.")]
pub struct ValidationError {
    pub field: NameField,
    pub rule: NameRule,
}

impl ValidationError {
    pub fn letters_only(field: NameField) -> Self {
        Self {
            field,
            rule: NameRule::LettersOnly,
        }
    }

    pub fn required(field: NameField) -> Self {
        Self {
            field,
            rule: NameRule::Required,
        }
    }
}

/// The roster file could not be read back into students.
#[derive(Debug, Error)]
#[error("There was a problem reading the file {}.", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: LoadCause,
}

#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("open or read failed")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("enrollment schema validation failed: {0}")]
    Schema(String),

    #[error("malformed enrollment record")]
    Record(#[source] serde_json::Error),

    #[error("record {index} rejected")]
    Invalid {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// The roster could not be written to its destination.
#[derive(Debug, Error)]
#[error("There was a problem writing to the file {}.", .path.display())]
pub struct SaveError {
    pub path: PathBuf,
    #[source]
    pub source: SaveCause,
}

#[derive(Debug, Error)]
pub enum SaveCause {
    #[error("serialize enrollments")]
    Serialize(#[source] serde_json::Error),

    #[error("{action} {}", .target.display())]
    Io {
        action: &'static str,
        target: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
