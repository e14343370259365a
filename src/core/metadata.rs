//! Sidecar metadata for directory entries.
//!
//! A metadata provider (external to this crate) may associate descriptive
//! fields with an entry: a title, a year, and an authors string. Metadata-
//! driven line modes declare which fields they require; the registry falls
//! back to the default mode when a required field is absent or empty.

/// Descriptive fields an external provider may attach to one entry.
///
/// Distinct from filesystem stat data: all fields are optional and purely
/// presentational.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    title: Option<String>,
    year: Option<String>,
    authors: Option<String>,
}

impl Metadata {
    pub fn new() -> Self {
        Metadata::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = Some(authors.into());
        self
    }

    #[inline]
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    #[inline]
    pub fn year(&self) -> Option<&str> {
        non_empty(self.year.as_deref())
    }

    #[inline]
    pub fn authors(&self) -> Option<&str> {
        non_empty(self.authors.as_deref())
    }

    /// Look up a field by its name as used in a line mode's required list.
    /// Returns the value only when it is present and non-empty; an empty
    /// string counts as missing for the fallback rule.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title(),
            "year" => self.year(),
            "authors" => self.authors(),
            _ => None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
