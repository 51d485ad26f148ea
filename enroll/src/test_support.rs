//! Test-only helpers for constructing students and rosters.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::student::Student;
use crate::roster::Roster;

/// Build a student from names known to be valid.
pub fn student(first: &str, last: &str, course: &str) -> Student {
    Student::new(first, last, course).expect("valid student fixture")
}

/// Build a roster from `(first, last, course)` triples.
pub fn roster_of(entries: &[(&str, &str, &str)]) -> Roster {
    Roster::new(
        entries
            .iter()
            .map(|(first, last, course)| student(first, last, course))
            .collect(),
    )
}

/// Temporary working directory holding an enrollments file.
pub struct TestWorkspace {
    temp: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { temp })
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn data_file(&self) -> PathBuf {
        self.root().join("Enrollments.json")
    }

    /// Write raw JSON to the enrollments file.
    pub fn write_data(&self, contents: &str) -> Result<PathBuf> {
        let path = self.data_file();
        fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
        Ok(path)
    }

    pub fn read_data(&self) -> Result<String> {
        let path = self.data_file();
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))
    }
}
