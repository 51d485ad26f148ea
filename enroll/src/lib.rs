//! Console course-enrollment record keeper.
//!
//! Registers students to courses, lists the in-memory roster, and persists it
//! to a JSON file (`Enrollments.json` by default). The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure entity model (validated names, students) and menu
//!   parsing. No I/O.
//! - **[`io`]**: Roster file load/save and configuration.
//!
//! [`roster`] couples the two into the operations the presentation layer
//! calls, and [`console`] is that presentation layer.

pub mod console;
pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod roster;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
