//! Masthead design tokens
//!
//! A token graph has two disjoint namespaces:
//!
//! - **primitives**: base palette and scale values, rooted at `_`-marked groups
//!   (`_palette.red.48`)
//! - **alias**: semantic tokens that reference primitives or other aliases
//!   (`color.brand.primary = {_palette.red.48}`)
//!
//! Leaves are `{ value, type }` records. The [`Resolver`] follows
//! `{path.to.token}` references through the graph to a terminal literal and
//! never fails loudly: broken references come back as
//! [`Resolved::Unresolved`] holding the original text.
//!
//! # Quick Start
//!
//! ```rust
//! use masthead_tokens::{Resolver, TokenGraph};
//!
//! let graph = TokenGraph::from_json_str(r##"{
//!     "primitives": { "_palette": { "gray": { "96": { "value": "#ededed", "type": "color" } } } },
//!     "alias": {}
//! }"##).unwrap();
//!
//! assert_eq!(Resolver::new(&graph).resolve_str("{_palette.gray.96}").as_str(), "#ededed");
//! ```

mod error;
mod graph;
mod reference;
mod resolve;
mod source;
mod token;

pub use error::LoadError;
pub use graph::{Format, Namespace, TokenGraph};
pub use reference::{is_reference, Reference, PRIMITIVE_MARKER};
pub use resolve::{
    resolve_reference, Resolved, ResolvedValue, Resolver, Unresolved, UnresolvedReason,
    UnresolvedToken, DEFAULT_MAX_DEPTH,
};
pub use source::{check_status, FileSource, StaticSource, TokenSource};
pub use token::{Literal, Token, TokenGroup, TokenNode, TokenType, TokenValue};

#[cfg(feature = "fetch")]
pub use source::fetch_graph;
