//! A person's validated first and last name.

use std::fmt;

use crate::core::name::PersonName;
use crate::error::{NameField, ValidationError};

/// First and last name, each letters-only or empty.
///
/// `Default` is the unset placeholder: both names empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    first_name: PersonName,
    last_name: PersonName,
}

impl Person {
    /// Build a person, failing on the first invalid name.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: PersonName::new(NameField::First, first_name)?,
            last_name: PersonName::new(NameField::Last, last_name)?,
        })
    }

    pub fn first_name(&self) -> String {
        self.first_name.formatted()
    }

    pub fn last_name(&self) -> String {
        self.last_name.formatted()
    }

    pub fn raw_first_name(&self) -> &str {
        self.first_name.raw()
    }

    pub fn raw_last_name(&self) -> &str {
        self.last_name.raw()
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name.set(NameField::First, value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name.set(NameField::Last, value)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_placeholder() {
        let person = Person::default();
        assert_eq!(person.first_name(), "");
        assert_eq!(person.last_name(), "");
        assert_eq!(person.to_string(), ",");
    }

    #[test]
    fn display_joins_title_cased_names() {
        let person = Person::new("ada", "LOVELACE").expect("valid");
        assert_eq!(person.to_string(), "Ada,Lovelace");
        assert_eq!(person.raw_first_name(), "ada");
        assert_eq!(person.raw_last_name(), "LOVELACE");
    }

    #[test]
    fn new_reports_first_invalid_field() {
        let err = Person::new("Ada", "Love1ace").expect_err("invalid");
        assert_eq!(err, ValidationError::letters_only(NameField::Last));
    }

    #[test]
    fn setters_keep_previous_value_on_error() {
        let mut person = Person::default();
        person.set_first_name("grace").expect("valid");
        person.set_first_name("grace!").expect_err("punctuation rejected");
        person.set_last_name("hopper").expect("valid");
        assert_eq!(person.to_string(), "Grace,Hopper");
    }
}
