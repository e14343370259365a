//! The [Linemode] trait and the built-in line modes.
//!
//! A line mode supplies the contents of one listing row for a
//! [FileEntry]: a mandatory left-aligned title and an optional
//! right-aligned info string. Modes are stateless; each call is
//! independent and pure apart from the `fileinfo` mode, which shells out
//! to `file(1)` to classify the entry.
//!
//! Built-in modes, by registry name:
//! - `filename` — title is the relative path, info left to the caller.
//! - `metatitle` — title/year/first-author from sidecar [Metadata].
//! - `permissions` — permission string, owner, group, and path.
//! - `fileinfo` — `file(1)` type classification for regular files.
//! - `mtime` / `sizemtime` — absolute modification timestamps.
//! - `humanmtime` / `sizehumanmtime` — relative, human-readable dates.

use crate::core::fm::FileEntry;
use crate::core::formatter::{format_mtime, human_mtime, human_readable};
use crate::core::metadata::Metadata;
use crate::core::proc::classify_file;

use chrono::{DateTime, Local};

/// Supplies the line contents for one listing row.
///
/// `filetitle` must always produce a string. `infostring` may return
/// `None`, meaning the mode has no opinion and the caller should render
/// its own default (typically hardlink count for directories, size for
/// files, and a symlink marker). `Some(String::new())` is different: the
/// info column is intentionally empty and the caller must not substitute
/// its fallback.
pub trait Linemode {
    /// Name by which the mode is referred to by the user. Unique,
    /// non-empty; doubles as the registry key.
    fn name(&self) -> &'static str;

    /// True if sidecar metadata should be loaded before invoking this mode.
    fn uses_metadata(&self) -> bool {
        false
    }

    /// Metadata fields that must all be present and non-empty for this
    /// mode to apply; when one is missing the registry falls back to the
    /// default mode. Non-empty only when [uses_metadata](Self::uses_metadata)
    /// is true.
    fn required_metadata(&self) -> &'static [&'static str] {
        &[]
    }

    /// The left-aligned part of the line.
    fn filetitle(&self, entry: &FileEntry, metadata: Option<&Metadata>) -> String;

    /// The right-aligned part of the line, or `None` to let the caller
    /// supply its own.
    fn infostring(&self, _entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        None
    }
}

/// The default mode: plain relative path, info left to the caller.
pub struct FilenameLinemode;

impl Linemode for FilenameLinemode {
    fn name(&self) -> &'static str {
        "filename"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }
}

/// Metadata-driven mode: `"{year} - {title}"` with the first author as
/// info. Requires a loaded title; the registry falls back to the default
/// mode otherwise.
pub struct MetaTitleLinemode;

impl Linemode for MetaTitleLinemode {
    fn name(&self) -> &'static str {
        "metatitle"
    }

    fn uses_metadata(&self) -> bool {
        true
    }

    fn required_metadata(&self) -> &'static [&'static str] {
        &["title"]
    }

    fn filetitle(&self, entry: &FileEntry, metadata: Option<&Metadata>) -> String {
        let title = metadata.and_then(Metadata::title);
        // The registry guarantees a title via required_metadata; fall back
        // to the path when invoked directly without one.
        let Some(title) = title else {
            return entry.relative_path().to_owned();
        };
        match metadata.and_then(Metadata::year) {
            Some(year) => format!("{} - {}", year, title),
            None => title.to_owned(),
        }
    }

    fn infostring(&self, _entry: &FileEntry, metadata: Option<&Metadata>) -> Option<String> {
        let info = match metadata.and_then(Metadata::authors) {
            // Multiple authors are comma-separated; the row only has room
            // for the first.
            Some(authors) => match authors.find(',') {
                Some(comma) => authors[..comma].to_owned(),
                None => authors.to_owned(),
            },
            None => String::new(),
        };
        Some(info)
    }
}

/// `ls -l`-style mode: permission string, owner, group, then the path.
pub struct PermissionsLinemode;

impl Linemode for PermissionsLinemode {
    fn name(&self) -> &'static str {
        "permissions"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        format!(
            "{} {} {} {}",
            entry.permissions(),
            entry.user(),
            entry.group(),
            entry.relative_path()
        )
    }

    fn infostring(&self, _entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        Some(String::new())
    }
}

/// Classifies regular files with `file(1)` and shows the result as info.
/// Directories keep the caller's default info. The only mode with a side
/// effect: it blocks on the spawned process for every row it renders.
pub struct FileInfoLinemode;

impl Linemode for FileInfoLinemode {
    fn name(&self) -> &'static str {
        "fileinfo"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }

    fn infostring(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        if entry.is_dir() {
            return None;
        }
        // A failed spawn degrades like a failed classification; a listing
        // render must never abort over one row.
        Some(classify_file(entry.path()).unwrap_or_else(|_| "unknown".to_owned()))
    }
}

/// Absolute modification timestamp, `YYYY-MM-DD HH:MM`.
pub struct MtimeLinemode;

impl Linemode for MtimeLinemode {
    fn name(&self) -> &'static str {
        "mtime"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }

    fn infostring(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        let info = match entry.stat() {
            Some(stat) => format_mtime(stat.modified()),
            None => "?".to_owned(),
        };
        Some(info)
    }
}

/// Humanized size followed by the absolute modification timestamp.
pub struct SizeMtimeLinemode;

impl Linemode for SizeMtimeLinemode {
    fn name(&self) -> &'static str {
        "sizemtime"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }

    fn infostring(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        let info = match entry.stat() {
            Some(stat) => format!(
                "{} {}",
                human_readable(entry.size()),
                format_mtime(stat.modified())
            ),
            None => "?".to_owned(),
        };
        Some(info)
    }
}

/// Relative modification date: clock time today, weekday this week,
/// day-and-month this year, full date beyond.
pub struct HumanMtimeLinemode;

impl Linemode for HumanMtimeLinemode {
    fn name(&self) -> &'static str {
        "humanmtime"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }

    fn infostring(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        let Some(stat) = entry.stat() else {
            return Some("?".to_owned());
        };
        // One instant per invocation, so the tier check and the formatted
        // time cannot straddle midnight.
        let now = Local::now();
        let file: DateTime<Local> = DateTime::from(stat.modified());
        Some(human_mtime(file, now))
    }
}

/// Humanized size plus the relative date, with the date segment
/// right-justified in an 11-cell field so date columns line up across
/// rows of differing tier.
pub struct SizeHumanMtimeLinemode;

impl Linemode for SizeHumanMtimeLinemode {
    fn name(&self) -> &'static str {
        "sizehumanmtime"
    }

    fn filetitle(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> String {
        entry.relative_path().to_owned()
    }

    fn infostring(&self, entry: &FileEntry, _metadata: Option<&Metadata>) -> Option<String> {
        let Some(stat) = entry.stat() else {
            return Some("?".to_owned());
        };
        let now = Local::now();
        let file: DateTime<Local> = DateTime::from(stat.modified());
        Some(format!(
            "{} {:>11}",
            human_readable(entry.size()),
            human_mtime(file, now)
        ))
    }
}
