/// Shared formatting helpers (mentions, timestamps, durations).
pub mod formatting;
/// Permission and role hierarchy helpers.
pub mod permissions;
/// Shared time helpers.
pub mod time;
