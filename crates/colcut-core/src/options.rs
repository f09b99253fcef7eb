//! Per-source cutting options.

use std::fmt;
use std::path::PathBuf;

/// How numeric selectors in a specification are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexBase {
    /// `1` is the first column (`-c`).
    OneBased,
    /// `0` is the first column (`-K`).
    #[default]
    ZeroBased,
}

impl IndexBase {
    /// Smallest number a selector may name.
    pub fn minimum(self) -> usize {
        match self {
            Self::OneBased => 1,
            Self::ZeroBased => 0,
        }
    }
}

/// Whether the first line of a source is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Print,
    Skip,
}

/// Options in effect for one source.
///
/// The command line builds a fresh value for every source from the options
/// that precede it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutOptions {
    /// Raw specification string, if one has been given yet.
    pub spec: Option<String>,
    pub base: IndexBase,
    pub header: HeaderMode,
}

impl CutOptions {
    /// Options for a one-based specification with the header printed.
    pub fn one_based(spec: impl Into<String>) -> Self {
        Self {
            spec: Some(spec.into()),
            base: IndexBase::OneBased,
            header: HeaderMode::Print,
        }
    }

    /// Options for a zero-based specification with the header printed.
    pub fn zero_based(spec: impl Into<String>) -> Self {
        Self {
            spec: Some(spec.into()),
            base: IndexBase::ZeroBased,
            header: HeaderMode::Print,
        }
    }

    /// Set the header mode.
    #[must_use]
    pub fn with_header(mut self, header: HeaderMode) -> Self {
        self.header = header;
        self
    }
}

/// One input stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_base_minimum() {
        assert_eq!(IndexBase::OneBased.minimum(), 1);
        assert_eq!(IndexBase::ZeroBased.minimum(), 0);
    }

    #[test]
    fn test_options_builders() {
        let options = CutOptions::one_based("1-3").with_header(HeaderMode::Skip);
        assert_eq!(options.spec.as_deref(), Some("1-3"));
        assert_eq!(options.base, IndexBase::OneBased);
        assert_eq!(options.header, HeaderMode::Skip);
    }

    #[test]
    fn test_default_has_no_spec() {
        let options = CutOptions::default();
        assert!(options.spec.is_none());
        assert_eq!(options.header, HeaderMode::Print);
    }

    #[test]
    fn test_source_display() {
        assert_eq!(Source::Stdin.to_string(), "standard input");
        assert_eq!(
            Source::File(PathBuf::from("data/a.csv")).to_string(),
            "data/a.csv"
        );
    }
}
