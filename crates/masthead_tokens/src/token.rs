//! Token records and the nested groups that hold them

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Semantic kind of a token (the `type` tag in token documents)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
    Color,
    Dimension,
    FontFamily,
    FontWeight,
    LineHeight,
    LetterSpacing,
    Opacity,
    Typography,
    /// Any tag not listed above
    #[serde(other)]
    Other,
}

/// A terminal value: a string (possibly a `{reference}`) or a number
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Number(serde_json::Number),
    Str(String),
}

impl Literal {
    /// The string payload, if this literal is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Number(n) => match n.as_f64() {
                // Floats print without a trailing `.0`: `1.0` is `1`, `1e3` is `1000`.
                Some(v) if n.is_f64() && v == 0.0 => f.write_str("0"),
                Some(v) if n.is_f64() => Display::fmt(&v, f),
                _ => Display::fmt(n, f),
            },
        }
    }
}

impl From<&str> for Literal {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Literal {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<i64> for Literal {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<u64> for Literal {
    fn from(v: u64) -> Self {
        Self::Number(v.into())
    }
}

impl From<i32> for Literal {
    fn from(v: i32) -> Self {
        Self::Number(i64::from(v).into())
    }
}

impl From<f64> for Literal {
    fn from(v: f64) -> Self {
        // NaN and infinities have no JSON number form.
        serde_json::Number::from_f64(v)
            .map(Self::Number)
            .unwrap_or_else(|| Self::Str(v.to_string()))
    }
}

/// The `value` of a token: a single literal or a composite map (typography)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Literal(Literal),
    Composite(IndexMap<String, Literal>),
}

impl From<Literal> for TokenValue {
    fn from(v: Literal) -> Self {
        Self::Literal(v)
    }
}

impl From<&str> for TokenValue {
    fn from(v: &str) -> Self {
        Self::Literal(v.into())
    }
}

impl From<String> for TokenValue {
    fn from(v: String) -> Self {
        Self::Literal(v.into())
    }
}

impl From<i64> for TokenValue {
    fn from(v: i64) -> Self {
        Self::Literal(v.into())
    }
}

impl From<f64> for TokenValue {
    fn from(v: f64) -> Self {
        Self::Literal(v.into())
    }
}

/// A `{ value, type }` leaf record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Token {
    pub value: TokenValue,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TokenType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Token {
    pub fn new(value: impl Into<TokenValue>, kind: TokenType) -> Self {
        Self {
            value: value.into(),
            kind: Some(kind),
            description: None,
        }
    }

    /// A token without a type tag
    pub fn untyped(value: impl Into<TokenValue>) -> Self {
        Self {
            value: value.into(),
            kind: None,
            description: None,
        }
    }

    pub fn composite(fields: IndexMap<String, Literal>, kind: TokenType) -> Self {
        Self {
            value: TokenValue::Composite(fields),
            kind: Some(kind),
            description: None,
        }
    }
}

/// A node of the token tree
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenNode {
    Token(Token),
    Group(TokenGroup),
}

/// A nested mapping of token nodes keyed by path segment
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenGroup(IndexMap<String, TokenNode>);

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, segment: &str) -> Option<&TokenNode> {
        self.0.get(segment)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenNode)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn insert(&mut self, segment: impl Into<String>, node: TokenNode) {
        self.0.insert(segment.into(), node);
    }

    /// Insert a token at a dotted path, creating intermediate groups.
    ///
    /// A token sitting where a group is needed is replaced by the group.
    pub fn insert_path(&mut self, path: &str, token: Token) {
        let mut segments = path.split('.').peekable();
        let mut group = self;
        while let Some(segment) = segments.next() {
            if segments.peek().is_none() {
                group.0.insert(segment.to_string(), TokenNode::Token(token));
                return;
            }
            let node = group
                .0
                .entry(segment.to_string())
                .or_insert_with(|| TokenNode::Group(TokenGroup::new()));
            if !matches!(node, TokenNode::Group(_)) {
                *node = TokenNode::Group(TokenGroup::new());
            }
            let TokenNode::Group(next) = node else {
                return;
            };
            group = next;
        }
    }

    /// Builder form of [`insert_path`](Self::insert_path)
    pub fn with(mut self, path: &str, token: Token) -> Self {
        self.insert_path(path, token);
        self
    }

    /// Follow path segments down the tree.
    ///
    /// Returns `None` when a segment is absent or the walk runs into a token
    /// before the segments are exhausted.
    pub fn walk<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Option<&TokenNode> {
        let mut segments = segments.into_iter();
        let mut node = self.0.get(segments.next()?)?;
        for segment in segments {
            node = match node {
                TokenNode::Group(g) => g.0.get(segment)?,
                TokenNode::Token(_) => return None,
            };
        }
        Some(node)
    }

    /// Look up a token by dotted path
    pub fn token(&self, path: &str) -> Option<&Token> {
        match self.walk(path.split('.'))? {
            TokenNode::Token(t) => Some(t),
            TokenNode::Group(_) => None,
        }
    }

    /// All tokens in depth-first document order, with their dotted paths
    pub fn tokens(&self) -> Vec<(String, &Token)> {
        let mut out = Vec::new();
        self.collect_tokens(None, &mut out);
        out
    }

    fn collect_tokens<'a>(&'a self, prefix: Option<&str>, out: &mut Vec<(String, &'a Token)>) {
        for (key, node) in &self.0 {
            let path = match prefix {
                Some(p) => format!("{p}.{key}"),
                None => key.clone(),
            };
            match node {
                TokenNode::Token(t) => out.push((path, t)),
                TokenNode::Group(g) => g.collect_tokens(Some(&path), out),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn leaf_records_and_groups_deserialize() {
        let src = r##"{
            "gray": {
                "96": { "value": "#ededed", "type": "color" },
                "8": { "value": "#141414", "type": "color", "description": "ink" }
            },
            "weight": { "bold": { "value": 700, "type": "fontWeight" } }
        }"##;
        let group: TokenGroup = serde_json::from_str(src).unwrap();

        let gray = group.token("gray.96").unwrap();
        assert_eq!(gray.value, TokenValue::from("#ededed"));
        assert_eq!(gray.kind, Some(TokenType::Color));

        let bold = group.token("weight.bold").unwrap();
        assert_eq!(bold.value, TokenValue::from(700_i64));
        assert_eq!(group.token("gray.8").unwrap().description.as_deref(), Some("ink"));
    }

    #[test]
    fn composite_values_deserialize() {
        let src = r#"{
            "headline": {
                "value": { "fontFamily": "{fontFamily.display}", "fontWeight": 700, "lineHeight": 1.1 },
                "type": "typography"
            }
        }"#;
        let group: TokenGroup = serde_json::from_str(src).unwrap();
        let TokenValue::Composite(fields) = &group.token("headline").unwrap().value else {
            panic!("expected a composite value");
        };
        assert_eq!(fields["fontWeight"].to_string(), "700");
        assert_eq!(fields["lineHeight"].to_string(), "1.1");
        assert_eq!(fields["fontFamily"].as_str(), Some("{fontFamily.display}"));
    }

    #[test]
    fn unknown_type_tags_are_kept() {
        let token: Token = serde_json::from_str(r#"{ "value": "2s", "type": "duration" }"#).unwrap();
        assert_eq!(token.kind, Some(TokenType::Other));
    }

    #[test]
    fn unsupported_leaf_shapes_are_rejected() {
        assert!(serde_json::from_str::<TokenGroup>(r#"{ "a": "bare string" }"#).is_err());
        assert!(serde_json::from_str::<TokenGroup>(r#"{ "a": { "value": true } }"#).is_err());
    }

    #[test]
    fn insert_path_builds_groups() {
        let group = TokenGroup::new()
            .with("color.brand.primary", Token::untyped("{_palette.red.48}"))
            .with("color.brand.secondary", Token::untyped("#000"));

        let paths: Vec<String> = group.tokens().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["color.brand.primary", "color.brand.secondary"]);
        assert!(matches!(group.walk(["color", "brand"]), Some(TokenNode::Group(_))));
    }

    #[test]
    fn walk_stops_at_tokens_and_missing_segments() {
        let group = TokenGroup::new().with("a.b", Token::untyped("x"));
        assert!(group.walk(["a", "b", "value"]).is_none());
        assert!(group.walk(["a", "c"]).is_none());
        assert!(group.walk(std::iter::empty::<&str>()).is_none());
    }

    #[test]
    fn numbers_stringify_without_rounding() {
        assert_eq!(Literal::from(1.125).to_string(), "1.125");
        assert_eq!(Literal::from(400_i64).to_string(), "400");
        assert_eq!(Literal::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn whole_floats_drop_the_fraction() {
        let group: TokenGroup = serde_json::from_str(
            r#"{ "a": { "value": 1.0 }, "b": { "value": 1e3 }, "c": { "value": 1.5 }, "d": { "value": -0.0 } }"#,
        )
        .unwrap();
        let text: Vec<String> = group
            .tokens()
            .into_iter()
            .map(|(_, token)| match &token.value {
                TokenValue::Literal(literal) => literal.to_string(),
                TokenValue::Composite(_) => unreachable!(),
            })
            .collect();
        assert_eq!(text, vec!["1", "1000", "1.5", "0"]);
    }
}
