//! `{path.to.token}` reference strings

use crate::graph::Namespace;

/// Leading character that marks a primitive root segment (`{_palette.red.48}`)
pub const PRIMITIVE_MARKER: char = '_';

/// A parsed reference string.
///
/// Borrowed from the string it was parsed out of; parsing never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference<'a> {
    raw: &'a str,
    path: &'a str,
}

impl<'a> Reference<'a> {
    /// Parse `{a.b.c}`.
    ///
    /// Returns `None` for anything else, including `{}` and strings with nested
    /// braces; those are plain literals.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let path = raw.strip_prefix('{')?.strip_suffix('}')?;
        if path.is_empty() || path.contains(|c| c == '{' || c == '}') {
            return None;
        }
        Some(Self { raw, path })
    }

    /// The full reference text, braces included
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The dotted path between the braces
    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.path.split('.')
    }

    pub fn has_empty_segment(&self) -> bool {
        self.segments().any(str::is_empty)
    }

    /// Which graph the reference points into, from its root segment
    pub fn namespace(&self) -> Namespace {
        if self.path.starts_with(PRIMITIVE_MARKER) {
            Namespace::Primitives
        } else {
            Namespace::Alias
        }
    }
}

/// Whether `s` has the `{...}` reference form
pub fn is_reference(s: &str) -> bool {
    Reference::parse(s).is_some()
}
