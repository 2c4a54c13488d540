use std::time::{SystemTime, UNIX_EPOCH};

use poise::serenity_prelude as serenity;

/// Seconds since the unix epoch, signed like Discord timestamps.
pub fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() as i64)
}

/// Whether `timestamp` lies strictly after `now` (unix seconds).
pub fn is_after(timestamp: serenity::Timestamp, now: i64) -> bool {
    timestamp.unix_timestamp() > now
}
