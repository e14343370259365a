//! Display formatting helpers for listing rows.
//!
//! Holds the date, size, and width math shared by the line modes:
//! humanized byte sizes, the `YYYY-MM-DD HH:MM` timestamp format, the
//! calendar-day tiering behind the human mtime modes, and a display-cell
//! aware row composer for callers that want the title/info pair joined
//! into one fixed-width line.

use chrono::{DateTime, Local};
use humansize::{BINARY, format_size};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use std::time::SystemTime;

/// Formats a byte count into a human-readable size ("4 KiB", "1.2 MiB").
pub fn human_readable(size: u64) -> String {
    format_size(size, BINARY)
}

/// Formats a modification time as `YYYY-MM-DD HH:MM` in local time.
pub fn format_mtime(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Formats a modification time relative to `now`, the way humans read
/// recency in a listing.
///
/// The tier is chosen by calendar-day difference (both timestamps reduced
/// to their local date before subtracting, so "yesterday 23:59" is one day
/// ago even at 00:01):
/// - more than 364 days ago: `"3 Jan 2023"` (day-of-month unpadded)
/// - 7 to 364 days ago: `"3 Jan"`
/// - 1 to 6 days ago: abbreviated weekday, `"Tue"`
/// - same calendar day (or a future timestamp): `"HH:MM"`
///
/// `now` is injected rather than read from the clock so one listing render
/// uses a single instant for every row, and so tests can pin it.
pub fn human_mtime(file: DateTime<Local>, now: DateTime<Local>) -> String {
    let days = now
        .date_naive()
        .signed_duration_since(file.date_naive())
        .num_days();

    if days > 364 {
        file.format("%-d %b %Y").to_string()
    } else if days > 6 {
        file.format("%-d %b").to_string()
    } else if days >= 1 {
        file.format("%a").to_string()
    } else {
        file.format("%H:%M").to_string()
    }
}

/// Joins a title and an info string into one row of exactly `width`
/// display cells: title left-aligned, info right-aligned, at least one
/// cell of gap. The title is truncated first when space runs out; control
/// characters are dropped from both parts.
pub fn compose_line(title: &str, info: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let info = truncate_to_width(info, width);
    let info_width = info.width();
    let title_budget = if info_width == 0 {
        width
    } else {
        width.saturating_sub(info_width + 1)
    };
    let title = truncate_to_width(title, title_budget);

    let mut out = String::with_capacity(width);
    out.push_str(&title);
    for _ in 0..width - title.width() - info_width {
        out.push(' ');
    }
    out.push_str(&info);
    out
}

/// Truncates a string to at most `max` display cells, dropping control
/// characters along the way.
fn truncate_to_width(line: &str, max: usize) -> String {
    let mut out = String::with_capacity(max.min(line.len()));
    let mut current_w = 0;

    for char in line.chars() {
        if char.is_control() {
            continue;
        }
        let w = char.width().unwrap_or(0);
        if current_w + w > max {
            break;
        }
        out.push(char);
        current_w += w;
    }
    out
}
