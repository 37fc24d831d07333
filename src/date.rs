//! Timestamp handling for the test page

use chrono::{Local, NaiveDateTime};

/// Wall-clock timestamp used when the caller does not supply one
pub fn current_timestamp() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Format a timestamp the way it appears on the page: `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(stamp: &NaiveDateTime) -> String {
    stamp.format("%Y-%m-%d %H:%M:%S").to_string()
}
