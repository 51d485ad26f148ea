//! In-memory roster and the operations the presentation layer calls.
//!
//! Couples the pure entity model in [`crate::core`] with the roster store in
//! [`crate::io`].

use std::path::Path;

use tracing::{debug, warn};

use crate::core::name::is_valid_name;
use crate::core::student::Student;
use crate::error::{LoadError, NameField, SaveError, ValidationError};
use crate::io::roster_store::{SaveReceipt, load_roster, save_roster};

/// One rendered roster line.
pub type DisplayLine = String;

/// Ordered list of students, insertion order preserved, duplicates allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Load from `path`, falling back to an empty roster.
    ///
    /// The error is returned alongside so the caller can report it.
    pub fn load_or_empty(path: &Path) -> (Self, Option<LoadError>) {
        match load_roster(path) {
            Ok(students) => (Self::new(students), None),
            Err(err) => {
                warn!(path = %path.display(), error = ?err, "roster load failed; starting empty");
                (Self::default(), Some(err))
            }
        }
    }

    /// Validate raw input and append exactly one student on success.
    pub fn register_student(
        &mut self,
        raw_first: &str,
        raw_last: &str,
        raw_course: &str,
    ) -> Result<&Student, ValidationError> {
        validate_required_name(NameField::First, raw_first)?;
        validate_required_name(NameField::Last, raw_last)?;
        let student = Student::new(raw_first, raw_last, raw_course)?;
        debug!(student = %student, "registered student");
        self.students.push(student);
        // Non-empty after the push; `last` is the student just added.
        Ok(self.students.last().expect("roster is non-empty after push"))
    }

    pub fn list(&self) -> Vec<DisplayLine> {
        list_roster(&self.students)
    }

    pub fn persist(&self, path: &Path) -> Result<SaveReceipt, SaveError> {
        save_roster(path, &self.students)
    }

    /// Swap in a freshly loaded set of students.
    pub fn replace(&mut self, students: Vec<Student>) {
        self.students = students;
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Render one line per student, in roster order.
pub fn list_roster(students: &[Student]) -> Vec<DisplayLine> {
    students
        .iter()
        .map(|student| {
            format!(
                "Student {} {} is enrolled in {}",
                student.first_name(),
                student.last_name(),
                student.course_name()
            )
        })
        .collect()
}

/// Registration-time check: the name must be present and letters only.
pub fn validate_required_name(field: NameField, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    if !is_valid_name(value) {
        return Err(ValidationError::letters_only(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameRule;
    use crate::test_support::{roster_of, student};

    #[test]
    fn register_appends_exactly_one() {
        let mut roster = roster_of(&[("Ada", "Lovelace", "Math")]);
        let added = roster
            .register_student("grace", "hopper", "COBOL")
            .expect("register")
            .clone();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.students()[1], added);
        assert_eq!(added.first_name(), "Grace");
        assert_eq!(added.course_name(), "COBOL");
    }

    #[test]
    fn register_rejects_digits_in_last_name() {
        let mut roster = roster_of(&[("Ada", "Lovelace", "Math")]);
        let before = roster.clone();
        let err = roster
            .register_student("Jane", "Doe123", "History")
            .expect_err("invalid last name");
        assert_eq!(err, ValidationError::letters_only(NameField::Last));
        assert_eq!(roster, before);
    }

    #[test]
    fn register_checks_first_name_before_last() {
        let mut roster = Roster::default();
        let err = roster
            .register_student("J4ne", "Doe123", "History")
            .expect_err("invalid");
        assert_eq!(err.field, NameField::First);
        assert!(roster.is_empty());
    }

    #[test]
    fn register_requires_non_empty_names() {
        let mut roster = Roster::default();
        let err = roster
            .register_student("", "Doe", "History")
            .expect_err("empty first name");
        assert_eq!(err.rule, NameRule::Required);
        let err = roster
            .register_student("Jane", "", "History")
            .expect_err("empty last name");
        assert_eq!(err, ValidationError::required(NameField::Last));
        assert!(roster.is_empty());
    }

    #[test]
    fn register_allows_duplicates_and_empty_course() {
        let mut roster = Roster::default();
        roster.register_student("Ada", "Lovelace", "").expect("first");
        roster.register_student("Ada", "Lovelace", "").expect("duplicate");
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn list_is_ordered_and_idempotent() {
        let roster = Roster::new(vec![
            student("john", "smith", "Python"),
            student("Jane", "Doe", "History"),
        ]);
        let first = roster.list();
        assert_eq!(
            first,
            vec![
                "Student John Smith is enrolled in Python".to_string(),
                "Student Jane Doe is enrolled in History".to_string(),
            ]
        );
        assert_eq!(roster.list(), first);
    }

    #[test]
    fn replace_swaps_whole_roster() {
        let mut roster = roster_of(&[("Ada", "Lovelace", "Math")]);
        roster.replace(vec![student("Grace", "Hopper", "COBOL")]);
        assert_eq!(roster.list(), vec!["Student Grace Hopper is enrolled in COBOL"]);
    }

    #[test]
    fn load_or_empty_reports_missing_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (roster, err) = Roster::load_or_empty(&temp.path().join("missing.json"));
        assert!(roster.is_empty());
        assert!(err.is_some());
    }
}
