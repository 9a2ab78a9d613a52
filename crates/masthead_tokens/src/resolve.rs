//! Reference resolution
//!
//! Follows `{path}` references through the primitive and alias namespaces until
//! a terminal literal is reached. Resolution is total: a missing path, a cycle
//! or a chain longer than the depth budget yields [`Resolved::Unresolved`]
//! carrying the original reference text, which callers render as-is. One bad
//! token never takes a page down; it shows up as visible `{...}` text instead.
//!
//! ```rust
//! use masthead_tokens::{Resolver, TokenGraph};
//!
//! let graph = TokenGraph::from_json_str(r##"{
//!     "primitives": { "_palette": { "red": { "48": { "value": "#cc2828", "type": "color" } } } },
//!     "alias": { "color": { "brand": { "primary": { "value": "{_palette.red.48}" } } } }
//! }"##).unwrap();
//!
//! let resolver = Resolver::new(&graph);
//! assert_eq!(resolver.resolve_str("{color.brand.primary}").as_str(), "#cc2828");
//! assert_eq!(resolver.resolve_str("{color.brand.missing}").as_str(), "{color.brand.missing}");
//! ```

use crate::graph::{Namespace, TokenGraph};
use crate::reference::Reference;
use crate::token::{Literal, Token, TokenGroup, TokenNode, TokenValue};
use indexmap::IndexMap;
use std::fmt::{self, Display, Formatter};

/// Default number of reference hops allowed before giving up
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Why a reference did not resolve
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UnresolvedReason {
    /// A path segment does not exist in the selected namespace
    Missing { path: String },
    /// The path has an empty segment (`{a..b}`, `{.a}`)
    EmptySegment { path: String },
    /// The path ends on a group rather than a token
    NotALeaf { path: String },
    /// The path ends on a composite token where a single literal was needed
    Composite { path: String },
    /// The chain revisits a path it already followed
    Cycle { path: String },
    /// The chain is longer than the depth budget
    DepthExceeded { max_depth: usize },
}

impl Display for UnresolvedReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { path } => write!(f, "no token at `{path}`"),
            Self::EmptySegment { path } => write!(f, "empty path segment in `{path}`"),
            Self::NotALeaf { path } => write!(f, "`{path}` is a group, not a token"),
            Self::Composite { path } => write!(f, "`{path}` is a composite token"),
            Self::Cycle { path } => write!(f, "reference cycle through `{path}`"),
            Self::DepthExceeded { max_depth } => {
                write!(f, "chain longer than {max_depth} hops")
            }
        }
    }
}

/// A reference that could not be resolved, with the text to show in its place
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unresolved {
    /// The original reference string, returned unchanged to callers
    pub reference: String,
    pub reason: UnresolvedReason,
}

impl Display for Unresolved {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reference, self.reason)
    }
}

/// Outcome of resolving one value
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Terminal literal, stringified
    Value(String),
    /// Broken reference; [`Resolved::as_str`] yields the original text
    Unresolved(Unresolved),
}

impl Resolved {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The resolved value, or `None` when the reference is broken
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unresolved(_) => None,
        }
    }

    pub fn unresolved(&self) -> Option<&Unresolved> {
        match self {
            Self::Value(_) => None,
            Self::Unresolved(u) => Some(u),
        }
    }

    /// Text to render: the value, or the original reference as a sentinel
    pub fn as_str(&self) -> &str {
        match self {
            Self::Value(v) => v,
            Self::Unresolved(u) => &u.reference,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Value(v) => v,
            Self::Unresolved(u) => u.reference,
        }
    }
}

impl Display for Resolved {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolution of a whole token: composites resolve field by field
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedValue {
    Single(Resolved),
    Composite(IndexMap<String, Resolved>),
}

impl ResolvedValue {
    /// Every unresolved part of this value
    pub fn unresolved(&self) -> Vec<&Unresolved> {
        match self {
            Self::Single(r) => r.unresolved().into_iter().collect(),
            Self::Composite(fields) => fields.values().filter_map(Resolved::unresolved).collect(),
        }
    }
}

/// An alias or primitive token whose value did not resolve
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedToken {
    pub namespace: Namespace,
    /// Dotted path of the token holding the broken value
    pub path: String,
    pub unresolved: Unresolved,
}

/// Resolve one value against a pair of namespaces.
///
/// Non-string values and strings that are not `{...}` references come back
/// unchanged. References are followed at most `max_depth` hops. Unresolved
/// results are reported through `tracing` and returned, never raised.
pub fn resolve_reference(
    value: &Literal,
    primitives: &TokenGroup,
    alias: &TokenGroup,
    max_depth: usize,
) -> Resolved {
    let resolved = follow(value, primitives, alias, max_depth);
    if let Resolved::Unresolved(u) = &resolved {
        report(u);
    }
    resolved
}

fn report(u: &Unresolved) {
    tracing::warn!(
        reference = %u.reference,
        reason = %u.reason,
        "unresolved design token reference"
    );
}

fn follow<'a>(
    value: &'a Literal,
    primitives: &'a TokenGroup,
    alias: &'a TokenGroup,
    max_depth: usize,
) -> Resolved {
    let raw = match value {
        Literal::Str(s) => s.as_str(),
        Literal::Number(_) => return Resolved::Value(value.to_string()),
    };
    let Some(mut reference) = Reference::parse(raw) else {
        return Resolved::Value(raw.to_string());
    };

    let unresolved = |reason| {
        Resolved::Unresolved(Unresolved {
            reference: raw.to_string(),
            reason,
        })
    };

    let mut visited: Vec<&str> = Vec::new();
    for _ in 0..max_depth {
        let path = reference.path();
        if reference.has_empty_segment() {
            return unresolved(UnresolvedReason::EmptySegment { path: path.into() });
        }
        if visited.contains(&path) {
            return unresolved(UnresolvedReason::Cycle { path: path.into() });
        }
        visited.push(path);

        let graph = match reference.namespace() {
            Namespace::Primitives => primitives,
            Namespace::Alias => alias,
        };
        let token = match graph.walk(reference.segments()) {
            Some(TokenNode::Token(token)) => token,
            Some(TokenNode::Group(_)) => {
                return unresolved(UnresolvedReason::NotALeaf { path: path.into() })
            }
            None => return unresolved(UnresolvedReason::Missing { path: path.into() }),
        };

        match &token.value {
            TokenValue::Composite(_) => {
                return unresolved(UnresolvedReason::Composite { path: path.into() })
            }
            TokenValue::Literal(Literal::Str(next)) => match Reference::parse(next) {
                Some(next) => reference = next,
                None => return Resolved::Value(next.clone()),
            },
            TokenValue::Literal(literal) => return Resolved::Value(literal.to_string()),
        }
    }

    unresolved(UnresolvedReason::DepthExceeded { max_depth })
}

/// Resolver bound to one token graph
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'g> {
    graph: &'g TokenGraph,
    max_depth: usize,
}

impl<'g> Resolver<'g> {
    pub fn new(graph: &'g TokenGraph) -> Self {
        Self {
            graph,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn graph(&self) -> &'g TokenGraph {
        self.graph
    }

    pub fn resolve(&self, value: &Literal) -> Resolved {
        resolve_reference(
            value,
            self.graph.primitives(),
            self.graph.alias(),
            self.max_depth,
        )
    }

    pub fn resolve_str(&self, value: &str) -> Resolved {
        self.resolve(&Literal::from(value))
    }

    /// Resolve the token at a dotted path (`color.brand.primary`)
    pub fn resolve_path(&self, path: &str) -> Resolved {
        self.resolve_str(&format!("{{{path}}}"))
    }

    /// Resolve each field of a composite value; numbers are stringified
    pub fn resolve_composite(&self, fields: &IndexMap<String, Literal>) -> IndexMap<String, Resolved> {
        fields
            .iter()
            .map(|(name, literal)| (name.clone(), self.resolve(literal)))
            .collect()
    }

    pub fn resolve_token(&self, token: &Token) -> ResolvedValue {
        match &token.value {
            TokenValue::Literal(literal) => ResolvedValue::Single(self.resolve(literal)),
            TokenValue::Composite(fields) => ResolvedValue::Composite(self.resolve_composite(fields)),
        }
    }

    /// Resolve every token in both namespaces and collect the failures.
    ///
    /// Unlike [`resolve`](Self::resolve), this does not log each failure.
    pub fn audit(&self) -> Vec<UnresolvedToken> {
        let mut failures = Vec::new();
        for namespace in [Namespace::Primitives, Namespace::Alias] {
            for (path, token) in self.graph.tokens(namespace) {
                let literals: Vec<&Literal> = match &token.value {
                    TokenValue::Literal(literal) => vec![literal],
                    TokenValue::Composite(fields) => fields.values().collect(),
                };
                for literal in literals {
                    if let Resolved::Unresolved(unresolved) = follow(
                        literal,
                        self.graph.primitives(),
                        self.graph.alias(),
                        self.max_depth,
                    ) {
                        failures.push(UnresolvedToken {
                            namespace,
                            path: path.clone(),
                            unresolved,
                        });
                    }
                }
            }
        }
        failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;
    use pretty_assertions::assert_eq;

    fn graph() -> TokenGraph {
        TokenGraph::new(
            TokenGroup::new()
                .with("_palette.gray.96", Token::new("#ededed", TokenType::Color))
                .with("_palette.red.48", Token::new("#cc2828", TokenType::Color))
                .with("_space.scale.110", Token::untyped(1.1))
                .with("_weight.bold", Token::new(700_i64, TokenType::FontWeight)),
            TokenGroup::new()
                .with("color.brand.primary", Token::untyped("{_palette.red.48}"))
                .with("color.header.bg", Token::untyped("{color.brand.primary}"))
                .with("spacing.scale", Token::untyped("{_space.scale.110}"))
                .with("loop.a", Token::untyped("{loop.b}"))
                .with("loop.b", Token::untyped("{loop.a}"))
                .with("self", Token::untyped("{self}"))
                .with(
                    "typography.headline",
                    Token::composite(
                        IndexMap::from([
                            ("fontWeight".to_string(), Literal::from("{_weight.bold}")),
                            ("lineHeight".to_string(), Literal::from(1.1)),
                        ]),
                        TokenType::Typography,
                    ),
                ),
        )
    }

    #[test]
    fn literals_pass_through() {
        let g = graph();
        let r = Resolver::new(&g);
        assert_eq!(r.resolve_str("#ffffff"), Resolved::Value("#ffffff".into()));
        assert_eq!(r.resolve(&Literal::from(12_i64)), Resolved::Value("12".into()));
        assert_eq!(r.resolve_str("{}"), Resolved::Value("{}".into()));
    }

    #[test]
    fn follows_primitive_and_alias_chains() {
        let g = graph();
        let r = Resolver::new(&g);
        assert_eq!(r.resolve_str("{_palette.gray.96}").as_str(), "#ededed");
        assert_eq!(r.resolve_str("{color.brand.primary}").as_str(), "#cc2828");
        assert_eq!(r.resolve_path("color.header.bg").as_str(), "#cc2828");
        assert_eq!(r.resolve_path("spacing.scale").as_str(), "1.1");
    }

    #[test]
    fn missing_paths_return_the_original_reference() {
        let g = graph();
        let resolved = Resolver::new(&g).resolve_str("{color.brand.tertiary}");
        assert_eq!(resolved.as_str(), "{color.brand.tertiary}");
        assert_eq!(
            resolved.unresolved().unwrap().reason,
            UnresolvedReason::Missing {
                path: "color.brand.tertiary".into()
            }
        );
    }

    #[test]
    fn wrong_namespace_is_missing() {
        let g = graph();
        let r = Resolver::new(&g);
        // `palette` without the marker is looked up among aliases.
        assert!(!r.resolve_str("{palette.gray.96}").is_resolved());
        assert!(!r.resolve_str("{_color.brand.primary}").is_resolved());
    }

    #[test]
    fn cycles_terminate_with_the_original_reference() {
        let g = graph();
        let r = Resolver::new(&g);
        let resolved = r.resolve_str("{loop.a}");
        assert_eq!(resolved.as_str(), "{loop.a}");
        assert!(matches!(
            resolved.unresolved().unwrap().reason,
            UnresolvedReason::Cycle { .. }
        ));
        assert_eq!(r.resolve_str("{self}").as_str(), "{self}");
    }

    #[test]
    fn depth_budget_is_enforced() {
        let g = graph();
        // color.header.bg -> color.brand.primary -> _palette.red.48 is three lookups.
        let r = Resolver::new(&g).with_max_depth(2);
        let resolved = r.resolve_path("color.header.bg");
        assert_eq!(resolved.as_str(), "{color.header.bg}");
        assert_eq!(
            resolved.unresolved().unwrap().reason,
            UnresolvedReason::DepthExceeded { max_depth: 2 }
        );
        assert_eq!(
            Resolver::new(&g).with_max_depth(3).resolve_path("color.header.bg").as_str(),
            "#cc2828"
        );
        assert!(!Resolver::new(&g).with_max_depth(0).resolve_path("_palette.gray.96").is_resolved());
    }

    #[test]
    fn groups_and_composites_are_not_single_values() {
        let g = graph();
        let r = Resolver::new(&g);
        assert!(matches!(
            r.resolve_str("{color.brand}").unresolved().unwrap().reason,
            UnresolvedReason::NotALeaf { .. }
        ));
        assert!(matches!(
            r.resolve_str("{typography.headline}").unresolved().unwrap().reason,
            UnresolvedReason::Composite { .. }
        ));
        assert!(matches!(
            r.resolve_str("{color..primary}").unresolved().unwrap().reason,
            UnresolvedReason::EmptySegment { .. }
        ));
    }

    #[test]
    fn composites_resolve_field_by_field() {
        let g = graph();
        let r = Resolver::new(&g);
        let token = g.alias().token("typography.headline").unwrap();
        let ResolvedValue::Composite(fields) = r.resolve_token(token) else {
            panic!("expected composite");
        };
        assert_eq!(fields["fontWeight"].as_str(), "700");
        assert_eq!(fields["lineHeight"].as_str(), "1.1");
    }

    #[test]
    fn audit_lists_every_broken_token() {
        let g = graph();
        let mut paths: Vec<String> = Resolver::new(&g)
            .audit()
            .into_iter()
            .map(|t| t.path)
            .collect();
        paths.sort();
        assert_eq!(paths, vec!["loop.a", "loop.b", "self"]);
    }
}
