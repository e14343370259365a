//! End-to-end tests for the linemode crate.
//!
//! These tests exercise the whole path a file browser takes per row:
//! load a config, resolve a mode through the registry, build entries from
//! real files, and render title/info pairs.
//!
//! Temporary directories and files simulate listings; they are cleaned up
//! automatically after the tests complete.

use linemode::config::Config;
use linemode::core::{
    self, FileEntry, LinemodeRegistry, Metadata, classifier_available, compose_line,
};

use std::error;
use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

#[test]
fn configured_mode_renders_real_entry() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("linemode.toml");
    let mut config_file = File::create(&config_path)?;
    writeln!(config_file, r#"linemode = "sizemtime""#)?;

    let file_path = dir.path().join("report.txt");
    let mut file = File::create(&file_path)?;
    writeln!(file, "quarterly numbers")?;

    let config = Config::load(&config_path);
    let registry = LinemodeRegistry::with_builtin();
    let mode = registry.lookup(config.linemode())?;
    let entry = FileEntry::from_path(dir.path(), &file_path)?;

    assert_eq!(mode.filetitle(&entry, None), "report.txt");

    let info = mode
        .infostring(&entry, None)
        .ok_or("sizemtime must implement infostring")?;
    let stat = entry.stat().ok_or("fresh file must have a stat")?;
    let expected = format!(
        "{} {}",
        core::human_readable(entry.size()),
        core::format_mtime(stat.modified())
    );
    assert_eq!(info, expected);
    Ok(())
}

#[test]
fn fresh_file_renders_clock_time_in_humanmtime() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("now.txt");
    File::create(&file_path)?;

    let registry = LinemodeRegistry::with_builtin();
    let entry = FileEntry::from_path(dir.path(), &file_path)?;

    let info = registry
        .lookup("humanmtime")?
        .infostring(&entry, None)
        .ok_or("humanmtime must implement infostring")?;

    // A just-created file is in the same-day tier: "HH:MM".
    assert_eq!(info.len(), 5, "expected HH:MM, got '{}'", info);
    assert_eq!(info.as_bytes()[2], b':');
    Ok(())
}

#[test]
fn metadata_fallback_end_to_end() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("inception.mkv");
    File::create(&file_path)?;

    let registry = LinemodeRegistry::with_builtin();
    let entry = FileEntry::from_path(dir.path(), &file_path)?;

    // Provider found nothing for this entry: the row renders as the
    // default mode would.
    let bare = registry.effective("metatitle", None)?;
    assert_eq!(bare.filetitle(&entry, None), "inception.mkv");
    assert_eq!(bare.infostring(&entry, None), None);

    // Provider supplied a title: the metadata-driven row takes over.
    let meta = Metadata::new()
        .with_title("Inception")
        .with_year("2010")
        .with_authors("Nolan, Various");
    let mode = registry.effective("metatitle", Some(&meta))?;
    assert_eq!(mode.filetitle(&entry, Some(&meta)), "2010 - Inception");
    assert_eq!(mode.infostring(&entry, Some(&meta)), Some("Nolan".to_owned()));
    Ok(())
}

#[test]
fn fileinfo_classifies_files_and_skips_directories() -> Result<(), Box<dyn error::Error>> {
    if !classifier_available() {
        return Ok(());
    }

    let dir = tempdir()?;
    let file_path = dir.path().join("hello.txt");
    let mut file = File::create(&file_path)?;
    writeln!(file, "some text content")?;

    let registry = LinemodeRegistry::with_builtin();
    let mode = registry.lookup("fileinfo")?;

    let entry = FileEntry::from_path(dir.path(), &file_path)?;
    let info = mode
        .infostring(&entry, None)
        .ok_or("fileinfo must classify regular files")?;
    assert!(!info.is_empty());
    assert_eq!(info, info.trim());

    let sub = dir.path().join("sub");
    std::fs::create_dir(&sub)?;
    let dir_entry = FileEntry::from_path(dir.path(), &sub)?;
    assert_eq!(mode.infostring(&dir_entry, None), None);
    Ok(())
}

#[test]
fn composed_rows_align_across_modes() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let file_path = dir.path().join("aligned.txt");
    let mut file = File::create(&file_path)?;
    writeln!(file, "0123456789")?;

    let registry = LinemodeRegistry::with_builtin();
    let entry = FileEntry::from_path(dir.path(), &file_path)?;
    let width = 40;

    for name in ["filename", "permissions", "mtime", "sizehumanmtime"] {
        let mode = registry.lookup(name)?;
        let title = mode.filetitle(&entry, None);
        let info = mode.infostring(&entry, None).unwrap_or_default();
        let row = compose_line(&title, &info, width);
        assert_eq!(
            unicode_width::UnicodeWidthStr::width(row.as_str()),
            width,
            "mode '{}' produced a misaligned row: '{}'",
            name,
            row
        );
    }
    Ok(())
}

#[test]
fn unknown_configured_mode_surfaces_at_lookup() -> Result<(), Box<dyn error::Error>> {
    let cfg: Config = toml::from_str(r#"linemode = "nonexistent""#)?;
    let registry = LinemodeRegistry::with_builtin();

    let err = registry
        .lookup(cfg.linemode())
        .map(|mode| mode.name())
        .unwrap_err();
    assert_eq!(err.name(), "nonexistent");
    Ok(())
}
