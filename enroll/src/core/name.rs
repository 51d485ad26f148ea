//! Validated person names.
//!
//! A `PersonName` is either empty (the unset placeholder) or made only of
//! alphabetic characters. Reads are title-cased; the assigned casing is kept.

use std::fmt;

use crate::error::{NameField, ValidationError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    raw: String,
}

impl PersonName {
    /// Validate `value` for `field`. Empty is accepted as the placeholder.
    pub fn new(field: NameField, value: &str) -> Result<Self, ValidationError> {
        if !is_valid_name(value) {
            return Err(ValidationError::letters_only(field));
        }
        Ok(Self {
            raw: value.to_string(),
        })
    }

    /// Replace the stored value. On error the previous value is kept.
    pub fn set(&mut self, field: NameField, value: &str) -> Result<(), ValidationError> {
        *self = Self::new(field, value)?;
        Ok(())
    }

    /// Title-cased display form.
    pub fn formatted(&self) -> String {
        title_case(&self.raw)
    }

    /// Value as assigned.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// True if `value` is empty or every character is a letter.
///
/// Letter numbers such as `Ⅻ` are alphabetic in Unicode but not letters, so
/// they are rejected along with digits.
pub fn is_valid_name(value: &str) -> bool {
    value.chars().all(|ch| ch.is_alphabetic() && !ch.is_numeric())
}

/// Uppercase the first character of each whitespace-delimited segment and
/// lowercase the rest. Whitespace is preserved as-is.
///
/// When uppercasing expands a character (`ß` to `SS`), only the first
/// produced character stays uppercase, so `ß` becomes `Ss`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut segment_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            segment_start = true;
            out.push(ch);
        } else if segment_start {
            segment_start = false;
            let mut upper = ch.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}
