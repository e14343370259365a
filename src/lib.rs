//! Line-mode rendering strategies for terminal file browser listings.
//!
//! A "linemode" decides how a single directory entry is drawn as one row of
//! a listing: a left-aligned title and a right-aligned info string. This
//! crate ships the eight built-in modes (filename, metatitle, permissions,
//! fileinfo, mtime, sizemtime, humanmtime, sizehumanmtime) behind the
//! [core::Linemode] trait, plus the [core::LinemodeRegistry] that resolves
//! modes by name.
//!
//! The browser UI that owns column layout and scrolling is not part of this
//! crate; it looks up a mode (usually the one named in [config::Config]),
//! calls `filetitle`/`infostring` per entry, and supplies its own fallback
//! info when a mode declines to provide one.

pub mod config;
pub mod core;
