//! Pure entity model and input parsing.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic results suitable for tests.

pub mod menu;
pub mod name;
pub mod person;
pub mod student;
