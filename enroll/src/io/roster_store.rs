//! Roster load/save against the enrollments JSON file.
//!
//! The file is a flat array of `{"FirstName", "LastName", "CourseName"}`
//! records. Loads are all-or-nothing: one bad record fails the whole load.
//! Saves replace the file atomically (temp file + rename).

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use jsonschema::validator_for;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use crate::core::student::Student;
use crate::error::{LoadCause, LoadError, SaveCause, SaveError, ValidationError};

const ENROLLMENTS_SCHEMA: &str = include_str!("../../schemas/enrollments.schema.json");
const INDENT: &[u8] = b"    ";

/// One persisted enrollment. Extra fields in the file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnrollmentRecord {
    pub first_name: String,
    pub last_name: String,
    pub course_name: String,
}

impl EnrollmentRecord {
    pub fn into_student(self) -> Result<Student, ValidationError> {
        Student::new(&self.first_name, &self.last_name, &self.course_name)
    }
}

impl From<&Student> for EnrollmentRecord {
    fn from(student: &Student) -> Self {
        Self {
            first_name: student.first_name(),
            last_name: student.last_name(),
            course_name: student.course_name().to_string(),
        }
    }
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReceipt {
    pub path: PathBuf,
    pub count: usize,
}

/// Read every record in `path` and build one student per record.
pub fn load_roster(path: &Path) -> Result<Vec<Student>, LoadError> {
    debug!(path = %path.display(), "loading roster");
    let students = read_students(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), count = students.len(), "roster loaded");
    Ok(students)
}

/// Replace `path` with the given students, in order.
pub fn save_roster(path: &Path, students: &[Student]) -> Result<SaveReceipt, SaveError> {
    debug!(path = %path.display(), count = students.len(), "saving roster");
    let wrap = |source: SaveCause| SaveError {
        path: path.to_path_buf(),
        source,
    };
    let records: Vec<EnrollmentRecord> = students.iter().map(EnrollmentRecord::from).collect();
    let buf = render_records(&records).map_err(wrap)?;
    write_atomic(path, &buf).map_err(wrap)?;
    info!(path = %path.display(), count = students.len(), "roster saved");
    Ok(SaveReceipt {
        path: path.to_path_buf(),
        count: students.len(),
    })
}

fn read_students(path: &Path) -> Result<Vec<Student>, LoadCause> {
    let file = File::open(path)?;
    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(LoadCause::Parse)?;
    validate_schema(&value)?;
    let records: Vec<EnrollmentRecord> =
        serde_json::from_value(value).map_err(LoadCause::Record)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_student()
                .map_err(|source| LoadCause::Invalid { index, source })
        })
        .collect()
}

fn validate_schema(value: &Value) -> Result<(), LoadCause> {
    let schema: Value = serde_json::from_str(ENROLLMENTS_SCHEMA)
        .map_err(|err| LoadCause::Schema(format!("invalid schema: {err}")))?;
    let compiled = validator_for(&schema)
        .map_err(|err| LoadCause::Schema(format!("invalid schema: {err}")))?;
    if compiled.is_valid(value) {
        return Ok(());
    }
    let messages = compiled
        .iter_errors(value)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    Err(LoadCause::Schema(messages.join("; ")))
}

/// Serialize with 4-space indentation and a trailing newline.
fn render_records(records: &[EnrollmentRecord]) -> Result<Vec<u8>, SaveCause> {
    let mut buf = Vec::new();
    {
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut ser).map_err(SaveCause::Serialize)?;
    }
    buf.push(b'\n');
    Ok(buf)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), SaveCause> {
    let parent = path.parent().ok_or_else(|| SaveCause::Io {
        action: "resolve parent of",
        target: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no parent"),
    })?;
    fs::create_dir_all(parent).map_err(|source| SaveCause::Io {
        action: "create directory",
        target: parent.to_path_buf(),
        source,
    })?;

    // Renaming only needs directory access; refuse a file we may not write.
    if path.is_file() {
        OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|source| SaveCause::Io {
                action: "open",
                target: path.to_path_buf(),
                source,
            })?;
    }

    let tmp_path = path.with_extension("json.tmp");
    if let Err(err) = write_file(&tmp_path, contents) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }
    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SaveCause::Io {
            action: "replace",
            target: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), SaveCause> {
    let io_err = |source| SaveCause::Io {
        action: "write",
        target: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents).map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    Ok(())
}
