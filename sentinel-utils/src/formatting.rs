/// Break `@` so user-supplied text can't ping `@everyone` or roles.
pub fn neutralize_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

/// Discord timestamp markup, rendered in the reader's locale.
pub fn discord_timestamp(unix_secs: i64) -> String {
    format!("<t:{}:F>", unix_secs)
}

/// Discord relative timestamp markup (e.g. "in 5 minutes").
pub fn discord_relative_timestamp(unix_secs: i64) -> String {
    format!("<t:{}:R>", unix_secs)
}

/// Format a minute count the way the user typed it (e.g. 10 -> "10 minutes").
pub fn format_minutes(minutes: f64) -> String {
    format!("{} minutes", minutes)
}
