//! The external file-type classification boundary.
//!
//! The `fileinfo` line mode shells out to `file(1)` to describe a regular
//! file ("ASCII text", "PNG image data, ..."). This module owns that
//! subprocess call: [classify_file] runs `file -Lb <path>` and returns its
//! trimmed output, downgrading a non-zero exit to the `"unknown"` sentinel
//! rather than propagating it. [classifier_available] lets callers probe
//! for the binary once instead of paying a failed spawn per row.
//!
//! No timeout is applied here; a caller needing bounded latency must
//! impose one around the render.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Classify a file's type via `file -Lb`, following symlinks and omitting
/// the filename prefix from the output.
///
/// A non-zero exit is a recoverable condition and yields `"unknown"`; only
/// a failure to spawn or read the process surfaces as an error.
///
/// # Returns
/// The classifier's stdout with surrounding whitespace stripped.
pub fn classify_file(path: &Path) -> io::Result<String> {
    let mut cmd = Command::new("file");
    cmd.arg("-Lb").arg(path);
    run_classifier(&mut cmd)
}

/// Check whether the `file` command-line tool is available.
pub fn classifier_available() -> bool {
    which::which("file").is_ok()
}

/// Run a classification command to completion and collect its stdout.
/// `output()` waits the child and closes the pipes on every path,
/// including the non-zero-exit return.
fn run_classifier(cmd: &mut Command) -> io::Result<String> {
    let output = cmd.stdout(Stdio::piped()).stderr(Stdio::null()).output()?;

    if !output.status.success() {
        return Ok("unknown".to_owned());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
}
