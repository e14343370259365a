//! The file-entry data model consumed by the line modes.
//!
//! Provides the [FileEntry] struct, a read-only snapshot of one directory
//! entry: display path, absolute path, size, permission string, owner
//! strings, and an optional [EntryStat]. A missing stat is a valid state
//! (an entry whose attributes could not be read) and the line modes render
//! it as a placeholder rather than failing.

use std::fs::{Metadata, symlink_metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Filesystem attributes of an entry that may be unavailable.
///
/// Kept separate from [FileEntry] so "stat could not be read" is a single
/// `Option` rather than a scatter of sentinel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryStat {
    modified: SystemTime,
}

impl EntryStat {
    pub fn new(modified: SystemTime) -> Self {
        EntryStat { modified }
    }

    #[inline]
    pub fn modified(&self) -> SystemTime {
        self.modified
    }
}

/// A single entry in a directory listing, as seen by the line modes.
///
/// Created by [FileEntry::from_path] when browsing a real directory, or by
/// [FileEntry::from_parts] when the embedder already holds the attributes
/// (or a test needs a fixed stat).
#[derive(Debug, Clone)]
pub struct FileEntry {
    relative_path: String,
    path: PathBuf,
    size: u64,
    flags: u8,
    stat: Option<EntryStat>,
    permissions: String,
    user: String,
    group: String,
}

impl FileEntry {
    // Flag bit definitions
    pub const IS_DIR: u8 = 1 << 0;
    pub const IS_SYMLINK: u8 = 1 << 1;

    /// Build an entry from a real path, relative to `base` for display.
    ///
    /// Uses `symlink_metadata` so a symlink's own attributes are recorded;
    /// whether the target is a directory is resolved separately, as that is
    /// what listing rows care about.
    pub fn from_path(base: &Path, path: &Path) -> io::Result<FileEntry> {
        let md = symlink_metadata(path)?;

        let mut flags = 0u8;
        if md.file_type().is_symlink() {
            flags |= Self::IS_SYMLINK;
            if path.metadata().map(|target| target.is_dir()).unwrap_or(false) {
                flags |= Self::IS_DIR;
            }
        } else if md.is_dir() {
            flags |= Self::IS_DIR;
        }

        let relative_path = path
            .strip_prefix(base)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned();

        let (user, group) = owner_strings(&md);

        Ok(FileEntry {
            relative_path,
            path: path.to_path_buf(),
            size: if md.is_file() { md.len() } else { 0 },
            flags,
            stat: md.modified().ok().map(EntryStat::new),
            permissions: format_permissions(&md),
            user,
            group,
        })
    }

    /// Build an entry from attributes the caller already holds.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        relative_path: impl Into<String>,
        path: impl Into<PathBuf>,
        size: u64,
        flags: u8,
        stat: Option<EntryStat>,
        permissions: impl Into<String>,
        user: impl Into<String>,
        group: impl Into<String>,
    ) -> Self {
        FileEntry {
            relative_path: relative_path.into(),
            path: path.into(),
            size,
            flags,
            stat,
            permissions: permissions.into(),
            user: user.into(),
            group: group.into(),
        }
    }

    // Accessors

    #[inline]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline(always)]
    pub fn flags(&self) -> u8 {
        self.flags
    }

    #[inline]
    pub fn stat(&self) -> Option<&EntryStat> {
        self.stat.as_ref()
    }

    #[inline]
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    #[inline]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[inline]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.flags & Self::IS_DIR != 0
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.flags & Self::IS_SYMLINK != 0
    }
}

/// Formats entry attributes in a unix-like permission string.
///
/// On Unix: returns a string like `drwxr-xr-x` for directories and files.
/// On Windows: returns a short string showing file type and attributes
/// (`d`, `l`, `h` for hidden, `s` for system, `a` for archive, `r` for
/// read-only). Not all flags map 1:1 to Unix.
pub fn format_permissions(meta: &Metadata) -> String {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let file_type = meta.file_type();
        let first = if file_type.is_dir() {
            'd'
        } else if file_type.is_symlink() {
            'l'
        } else {
            '-'
        };
        let mode = meta.permissions().mode();
        let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
        let shifts = [6, 3, 0];
        for (i, &shift) in shifts.iter().enumerate() {
            let base = 1 + i * 3;
            if (mode >> (shift + 2)) & 1u32 != 0 {
                chars[base] = 'r';
            }
            if (mode >> (shift + 1)) & 1u32 != 0 {
                chars[base + 1] = 'w';
            }
            if (mode >> shift) & 1u32 != 0 {
                chars[base + 2] = 'x';
            }
        }
        chars.iter().collect()
    }
    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        let attr = meta.file_attributes();
        let mut out = String::with_capacity(5);
        out.push(if attr & 0x10 != 0 {
            'd'
        } else if attr & 0x400 != 0 {
            'l'
        } else {
            '-'
        });
        out.push(if attr & 0x02 != 0 { 'h' } else { '-' });
        out.push(if attr & 0x04 != 0 { 's' } else { '-' });
        out.push(if attr & 0x20 != 0 { 'a' } else { '-' });
        out.push(if attr & 0x01 != 0 { 'r' } else { '-' });
        out
    }
}

/// Owner user and group of an entry as display strings.
///
/// Unix reports numeric uid/gid; other platforms have no comparable notion
/// and report "-".
fn owner_strings(meta: &Metadata) -> (String, String) {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        (meta.uid().to_string(), meta.gid().to_string())
    }
    #[cfg(not(unix))]
    {
        let _ = meta;
        ("-".to_owned(), "-".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn entry_flags() {
        let file = FileEntry::from_parts("notes.txt", "/tmp/notes.txt", 12, 0, None, "-rw-r--r--", "0", "0");
        assert!(!file.is_dir());
        assert!(!file.is_symlink());
        assert_eq!(file.relative_path(), "notes.txt");

        let flags = FileEntry::IS_DIR | FileEntry::IS_SYMLINK;
        let link = FileEntry::from_parts("docs", "/tmp/docs", 0, flags, None, "lrwxrwxrwx", "0", "0");
        assert!(link.is_dir());
        assert!(link.is_symlink());
    }

    #[test]
    fn from_path_regular_file() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let path = tmp.path().join("hello.txt");
        let mut file = File::create(&path)?;
        writeln!(file, "abc123")?;

        let entry = FileEntry::from_path(tmp.path(), &path)?;
        assert_eq!(entry.relative_path(), "hello.txt");
        assert!(!entry.is_dir());
        assert_eq!(entry.size(), 7);
        assert!(entry.stat().is_some());
        assert!(entry.permissions().starts_with('-'));
        Ok(())
    }

    #[test]
    fn from_path_directory() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let dir_path = tmp.path().join("subdir");
        fs::create_dir(&dir_path)?;

        let entry = FileEntry::from_path(tmp.path(), &dir_path)?;
        assert!(entry.is_dir());
        assert_eq!(entry.relative_path(), "subdir");
        #[cfg(unix)]
        assert!(entry.permissions().starts_with('d'));
        Ok(())
    }

    #[test]
    fn from_path_nonexistent() {
        let result = FileEntry::from_path(Path::new("/"), Path::new("/path/does/not/exist"));
        assert!(result.is_err());
    }
}
