//! Name-to-linemode lookup.
//!
//! The [LinemodeRegistry] is built once at startup (usually via
//! [LinemodeRegistry::with_builtin]) and read-only thereafter. It is an
//! explicit value owned by the embedding browser rather than a process
//! global, so tests can build a local registry with fakes.

use crate::core::linemode::{
    FileInfoLinemode, FilenameLinemode, HumanMtimeLinemode, Linemode, MetaTitleLinemode,
    MtimeLinemode, PermissionsLinemode, SizeHumanMtimeLinemode, SizeMtimeLinemode,
};
use crate::core::metadata::Metadata;

use std::collections::HashMap;
use std::error;
use std::fmt;

/// The mode every lookup can fall back to.
pub const DEFAULT_LINEMODE: &str = "filename";

/// Returned by [LinemodeRegistry::lookup] for a name nothing registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModeError {
    name: String,
}

impl UnknownModeError {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown linemode \"{}\"", self.name)
    }
}

impl error::Error for UnknownModeError {}

/// Maps mode names to strategy instances.
///
/// No removal operation: the registry is configuration data, populated
/// once and only read afterwards.
pub struct LinemodeRegistry {
    modes: HashMap<&'static str, Box<dyn Linemode>>,
}

impl LinemodeRegistry {
    /// An empty registry. Embedders composing their own mode set start
    /// here; most callers want [with_builtin](Self::with_builtin).
    pub fn new() -> Self {
        LinemodeRegistry {
            modes: HashMap::new(),
        }
    }

    /// A registry holding the eight built-in modes.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(FilenameLinemode));
        registry.register(Box::new(MetaTitleLinemode));
        registry.register(Box::new(PermissionsLinemode));
        registry.register(Box::new(FileInfoLinemode));
        registry.register(Box::new(MtimeLinemode));
        registry.register(Box::new(SizeMtimeLinemode));
        registry.register(Box::new(HumanMtimeLinemode));
        registry.register(Box::new(SizeHumanMtimeLinemode));
        registry
    }

    /// Registers a mode under its own name. Registering a name twice
    /// replaces the earlier mode, which lets embedders shadow built-ins.
    pub fn register(&mut self, mode: Box<dyn Linemode>) {
        self.modes.insert(mode.name(), mode);
    }

    /// Resolves a mode by name.
    pub fn lookup(&self, name: &str) -> Result<&dyn Linemode, UnknownModeError> {
        self.modes
            .get(name)
            .map(Box::as_ref)
            .ok_or_else(|| UnknownModeError {
                name: name.to_owned(),
            })
    }

    /// The well-known default mode name, [DEFAULT_LINEMODE].
    pub fn default_name(&self) -> &'static str {
        DEFAULT_LINEMODE
    }

    /// Names of all registered modes, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modes.keys().copied()
    }

    /// Resolves the mode to actually render with: the named mode when its
    /// metadata requirements are satisfied by `metadata`, the default mode
    /// otherwise. This is the fallback rule the listing renderer applies
    /// per row.
    pub fn effective(
        &self,
        name: &str,
        metadata: Option<&Metadata>,
    ) -> Result<&dyn Linemode, UnknownModeError> {
        let mode = self.lookup(name)?;
        if mode.uses_metadata() {
            let satisfied = metadata.is_some_and(|meta| {
                mode.required_metadata()
                    .iter()
                    .all(|field| meta.field(field).is_some())
            });
            if !satisfied {
                return self.lookup(DEFAULT_LINEMODE);
            }
        }
        Ok(mode)
    }
}

impl Default for LinemodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
