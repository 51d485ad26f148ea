use std::fmt;

use crate::core::person::Person;
use crate::error::ValidationError;

/// A student enrolled in a single course.
///
/// Names are validated through the embedded [`Person`]; the course name is
/// free text and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    /// Build a student, failing on the first invalid name.
    pub fn new(
        first_name: &str,
        last_name: &str,
        course_name: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            person: Person::new(first_name, last_name)?,
            course_name: course_name.to_string(),
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> String {
        self.person.last_name()
    }

    pub fn raw_first_name(&self) -> &str {
        self.person.raw_first_name()
    }

    pub fn raw_last_name(&self) -> &str {
        self.person.raw_last_name()
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.person.set_first_name(value)
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.person.set_last_name(value)
    }

    pub fn set_course_name(&mut self, value: &str) {
        self.course_name = value.to_string();
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.person, self.course_name)
    }
}
