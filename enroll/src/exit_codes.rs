//! Stable exit codes for `enroll` CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed: invalid name, unreadable roster, unwritable destination, or bad config.
pub const INVALID: i32 = 1;
