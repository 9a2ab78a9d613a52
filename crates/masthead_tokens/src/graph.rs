//! The two-namespace token graph
//!
//! A graph holds `primitives` (base palette and scale values, rooted at
//! `_`-marked groups) and `alias` (semantic tokens that point at primitives or
//! at other aliases). Graphs are read-only once loaded. Primitives sit behind an
//! `Arc` so several alias layers (one per brand) can share one palette.

use crate::error::LoadError;
use crate::reference::{Reference, PRIMITIVE_MARKER};
use crate::token::{Token, TokenGroup, TokenNode};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// One of the two disjoint graph namespaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Primitives,
    Alias,
}

impl Namespace {
    pub fn name(self) -> &'static str {
        match self {
            Self::Primitives => "primitives",
            Self::Alias => "alias",
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// On-disk shape of a token document
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GraphDocument {
    #[serde(default)]
    primitives: TokenGroup,
    #[serde(default)]
    alias: TokenGroup,
}

/// Token document formats
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Primitive + alias token graph
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TokenGraph {
    primitives: Arc<TokenGroup>,
    alias: TokenGroup,
}

impl TokenGraph {
    pub fn new(primitives: TokenGroup, alias: TokenGroup) -> Self {
        let graph = Self {
            primitives: Arc::new(primitives),
            alias,
        };
        graph.check_roots();
        graph
    }

    /// Parse a `{ "primitives": {...}, "alias": {...} }` JSON document
    pub fn from_json_str(src: &str) -> Result<Self, LoadError> {
        let doc: GraphDocument = serde_json::from_str(src)?;
        Ok(Self::new(doc.primitives, doc.alias))
    }

    /// Parse the YAML form of a token document
    pub fn from_yaml_str(src: &str) -> Result<Self, LoadError> {
        let doc: GraphDocument = serde_yaml::from_str(src)?;
        Ok(Self::new(doc.primitives, doc.alias))
    }

    pub fn from_str_with(src: &str, format: Format) -> Result<Self, LoadError> {
        match format {
            Format::Json => Self::from_json_str(src),
            Format::Yaml => Self::from_yaml_str(src),
        }
    }

    /// Read a token document, picking the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let format = Format::from_path(path)?;
        let src = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loading token document");
        Self::from_str_with(&src, format)
    }

    /// A graph sharing this graph's primitives with a different alias layer
    pub fn with_alias(&self, alias: TokenGroup) -> Self {
        let graph = Self {
            primitives: Arc::clone(&self.primitives),
            alias,
        };
        graph.check_roots();
        graph
    }

    pub fn primitives(&self) -> &TokenGroup {
        &self.primitives
    }

    pub fn alias(&self) -> &TokenGroup {
        &self.alias
    }

    pub fn namespace(&self, namespace: Namespace) -> &TokenGroup {
        match namespace {
            Namespace::Primitives => &self.primitives,
            Namespace::Alias => &self.alias,
        }
    }

    /// The node a reference points at, if every segment exists
    pub fn lookup(&self, reference: &Reference<'_>) -> Option<&TokenNode> {
        self.namespace(reference.namespace())
            .walk(reference.segments())
    }

    /// All tokens of one namespace with their dotted paths
    pub fn tokens(&self, namespace: Namespace) -> Vec<(String, &Token)> {
        self.namespace(namespace).tokens()
    }

    /// Roots in the wrong namespace can never be reached by a reference.
    fn check_roots(&self) {
        for root in self.primitives.keys() {
            if !root.starts_with(PRIMITIVE_MARKER) {
                tracing::warn!(root, "primitive root lacks the `_` marker and is unreachable");
            }
        }
        for root in self.alias.keys() {
            if root.starts_with(PRIMITIVE_MARKER) {
                tracing::warn!(root, "alias root starts with `_` and is unreachable");
            }
        }
    }
}
