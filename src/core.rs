//! Core line-mode logic.
//!
//! This module contains the pieces used to render one listing row:
//! - [fm]: the file-entry data model (see [FileEntry], [EntryStat]).
//! - [metadata]: optional sidecar metadata (title/year/authors) per entry.
//! - [linemode]: the [Linemode] trait and the eight built-in strategies.
//! - [registry]: name-to-strategy lookup (see [LinemodeRegistry]).
//! - [formatter]: date, size, and row-width formatting helpers.
//! - [proc]: the external `file(1)` classification boundary.
//!
//! Most callers will import [LinemodeRegistry], [FileEntry], and [Metadata]
//! from this module.

pub mod fm;
pub mod formatter;
pub mod linemode;
pub mod metadata;
pub mod proc;
pub mod registry;

pub use fm::{EntryStat, FileEntry};
pub use formatter::{compose_line, format_mtime, human_mtime, human_readable};
pub use linemode::Linemode;
pub use metadata::Metadata;
pub use proc::{classifier_available, classify_file};
pub use registry::{DEFAULT_LINEMODE, LinemodeRegistry, UnknownModeError};
