//! Interactive menu loop.
//!
//! Generic over its input and output streams so sessions can be scripted in
//! tests. Roster, validation, and file errors are rendered and the loop
//! returns to the menu; only failures on the console streams end it.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::menu::MenuChoice;
use crate::error::NameField;
use crate::roster::{Roster, validate_required_name};

pub const MENU: &str = "\
---- Course Registration Program --------
  Select from the following menu:
    1. Register a student for a course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

const RULE_WIDTH: usize = 50;

pub struct Console<R, W> {
    input: R,
    output: W,
    roster: Roster,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, roster: Roster, data_file: PathBuf) -> Self {
        Self {
            input,
            output,
            roster,
            data_file,
        }
    }

    /// Load the roster from `data_file`, reporting a failed load and
    /// continuing with an empty roster.
    pub fn open(input: R, mut output: W, data_file: PathBuf) -> Result<Self> {
        let (roster, load_err) = Roster::load_or_empty(&data_file);
        if let Some(err) = load_err {
            render_error(&mut output, "Error: There was a problem reading the file.", &err)
                .context("write load error")?;
        }
        Ok(Self::new(input, output, roster, data_file))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run the menu until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}\n").context("write menu")?;
            let Some(line) = self.prompt("Enter your menu selection: ")? else {
                break;
            };
            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(err) => {
                    writeln!(self.output, "{err}\n").context("write menu error")?;
                    continue;
                }
            };
            debug!(?choice, "menu choice");
            match choice {
                MenuChoice::Register => self.register()?,
                MenuChoice::Show => self.show()?,
                MenuChoice::Save => self.save()?,
                MenuChoice::Exit => break,
            }
        }
        writeln!(self.output, "Thank you for using this program!").context("write farewell")?;
        Ok(())
    }

    fn register(&mut self) -> Result<()> {
        let Some(first) = self.prompt("Enter the student's first name: ")? else {
            return Ok(());
        };
        if let Err(err) = validate_required_name(NameField::First, &first) {
            return self.report("One of the values was the incorrect type of data.", &err);
        }
        let Some(last) = self.prompt("Enter the student's last name: ")? else {
            return Ok(());
        };
        if let Err(err) = validate_required_name(NameField::Last, &last) {
            return self.report("One of the values was the incorrect type of data.", &err);
        }
        let Some(course) = self.prompt("Please enter the name of the course: ")? else {
            return Ok(());
        };

        let registered = self
            .roster
            .register_student(&first, &last, &course)
            .map(|_| ());
        match registered {
            Ok(()) => writeln!(
                self.output,
                "\nStudent {first} {last} has successfully been registered for {course}."
            )
            .context("write confirmation"),
            Err(err) => self.report("One of the values was the incorrect type of data.", &err),
        }
    }

    fn show(&mut self) -> Result<()> {
        write_listing(&mut self.output, &self.roster.list()).context("write roster")
    }

    fn save(&mut self) -> Result<()> {
        match self.roster.persist(&self.data_file) {
            Ok(receipt) => {
                info!(path = %receipt.path.display(), count = receipt.count, "saved from console");
                write_listing(&mut self.output, &self.roster.list()).context("write roster")?;
                writeln!(
                    self.output,
                    "{} students saved to {}.",
                    receipt.count,
                    receipt.path.display()
                )
                .context("write save summary")
            }
            Err(err) => self.report(
                "Error: There was a problem writing to the file.\n\
                 Please check that the file is not open in another program.",
                &err,
            ),
        }
    }

    fn report(&mut self, message: &str, err: &dyn Error) -> Result<()> {
        render_error(&mut self.output, message, err).context("write error message")
    }

    /// Print `prompt` and read one line. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Print the roster framed by dashed rules.
pub fn write_listing(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "{rule}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{rule}")
}

/// Print a user-facing message followed by the technical cause chain.
pub fn render_error(out: &mut impl Write, message: &str, err: &dyn Error) -> io::Result<()> {
    writeln!(out, "{message}\n")?;
    writeln!(out, "-- Technical Error Message --")?;
    writeln!(out, "{err}")?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::test_support::roster_of;

    fn run_session(roster: Roster, data_file: PathBuf, script: &str) -> (Roster, String) {
        let mut output = Vec::new();
        let mut console = Console::new(script.as_bytes(), &mut output, roster, data_file);
        console.run().expect("run");
        let roster = console.into_roster();
        (roster, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn registers_and_shows_student() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (roster, out) = run_session(
            Roster::default(),
            temp.path().join("Enrollments.json"),
            "1\nvic\nvu\nPython 100\n2\n4\n",
        );
        assert_eq!(roster.len(), 1);
        assert!(out.contains("Student vic vu has successfully been registered for Python 100."));
        assert!(out.contains("Student Vic Vu is enrolled in Python 100"));
        assert!(out.ends_with("Thank you for using this program!\n"));
    }

    #[test]
    fn invalid_first_name_skips_remaining_prompts() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (roster, out) = run_session(
            Roster::default(),
            temp.path().join("Enrollments.json"),
            "1\nJ4ne\n4\n",
        );
        assert!(roster.is_empty());
        assert!(out.contains("One of the values was the incorrect type of data."));
        assert!(out.contains("The first name must only contain letters."));
        assert!(!out.contains("Enter the student's last name"));
    }

    #[test]
    fn invalid_menu_choice_returns_to_menu() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (_, out) = run_session(
            Roster::default(),
            temp.path().join("Enrollments.json"),
            "9\n4\n",
        );
        assert!(out.contains("Please only choose 1, 2, 3, or 4"));
        assert_eq!(out.matches("Course Registration Program").count(), 2);
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (roster, out) = run_session(
            roster_of(&[("Ada", "Lovelace", "Math")]),
            temp.path().join("Enrollments.json"),
            "1\nGrace\n",
        );
        assert_eq!(roster.len(), 1);
        assert!(out.ends_with("Thank you for using this program!\n"));
    }

    #[test]
    fn save_failure_keeps_roster() {
        let temp = tempfile::tempdir().expect("tempdir");
        let target = temp.path().join("Enrollments.json");
        std::fs::create_dir(&target).expect("mkdir");
        let before = roster_of(&[("Ada", "Lovelace", "Math")]);

        let (roster, out) = run_session(before.clone(), target, "3\n4\n");
        assert_eq!(roster, before);
        assert!(out.contains("There was a problem writing to the file."));
        assert!(out.contains("Please check that the file is not open in another program."));
        assert!(out.contains("-- Technical Error Message --"));
    }

    #[test]
    fn render_error_prints_cause_chain() {
        let err = ValidationError::letters_only(NameField::Last);
        let mut out = Vec::new();
        render_error(&mut out, "Bad input.", &err).expect("render");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            concat!(
                "Bad input.\n\n",
                "-- Technical Error Message --\n",
                "The last name must only contain letters.\n",
            )
        );
    }
}
