//! Token system types: leaf values, dot paths, and the nested token tree.

use crate::errors::TokenError;
use crate::types::{format_number, CubicBezier, Length, Shadow};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A design token value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// Hex (`#rrggbb`) or `rgba(...)` literal, kept as written.
    Color(String),
    Length(Length),
    /// Milliseconds.
    Duration(u32),
    Curve(CubicBezier),
    /// Unitless number (line height, font weight, spring constant, z-index).
    Number(f64),
    Shadow(Shadow),
    Text(String),
}

/// Discriminant of a [`Token`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Color,
    Length,
    Duration,
    Curve,
    Number,
    Shadow,
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Color => "color",
            TokenKind::Length => "length",
            TokenKind::Duration => "duration",
            TokenKind::Curve => "curve",
            TokenKind::Number => "number",
            TokenKind::Shadow => "shadow",
            TokenKind::Text => "text",
        };
        f.write_str(name)
    }
}

impl Token {
    pub fn color(value: impl Into<String>) -> Self {
        Token::Color(value.into())
    }

    pub fn px(value: f64) -> Self {
        Token::Length(Length::px(value))
    }

    pub fn em(value: f64) -> Self {
        Token::Length(Length::em(value))
    }

    pub fn rem(value: f64) -> Self {
        Token::Length(Length::rem(value))
    }

    pub fn ms(value: u32) -> Self {
        Token::Duration(value)
    }

    pub fn curve(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Token::Curve(CubicBezier::new(x1, y1, x2, y2))
    }

    pub fn number(value: f64) -> Self {
        Token::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Token::Text(value.into())
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Color(_) => TokenKind::Color,
            Token::Length(_) => TokenKind::Length,
            Token::Duration(_) => TokenKind::Duration,
            Token::Curve(_) => TokenKind::Curve,
            Token::Number(_) => TokenKind::Number,
            Token::Shadow(_) => TokenKind::Shadow,
            Token::Text(_) => TokenKind::Text,
        }
    }

    /// The value as it appears in a stylesheet.
    pub fn to_css(&self) -> String {
        match self {
            Token::Color(c) => c.clone(),
            Token::Length(l) => l.to_string(),
            Token::Duration(ms) => format!("{}ms", ms),
            Token::Curve(c) => c.to_string(),
            Token::Number(n) => format_number(*n),
            Token::Shadow(s) => s.to_string(),
            Token::Text(t) => t.clone(),
        }
    }

    /// Try to get as a color literal.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Token::Color(c) => Some(c),
            _ => None,
        }
    }

    /// Try to get as a length.
    pub fn as_length(&self) -> Option<Length> {
        match self {
            Token::Length(l) => Some(*l),
            _ => None,
        }
    }

    /// Try to get as a duration in milliseconds.
    pub fn as_duration(&self) -> Option<u32> {
        match self {
            Token::Duration(ms) => Some(*ms),
            _ => None,
        }
    }

    /// Try to get as a timing curve.
    pub fn as_curve(&self) -> Option<CubicBezier> {
        match self {
            Token::Curve(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get as a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Token::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get as a shadow.
    pub fn as_shadow(&self) -> Option<&Shadow> {
        match self {
            Token::Shadow(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// A token path like `colors.brand.freela.500` or `spacing.4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenPath(pub SmallVec<[String; 4]>);

impl TokenPath {
    /// Parse a dot path. Empty paths and empty segments are rejected.
    pub fn parse(path: &str) -> Result<Self, TokenError> {
        let segments: SmallVec<[String; 4]> = path.split('.').map(str::to_string).collect();
        if path.is_empty() || segments.iter().any(|s| s.trim().is_empty()) {
            return Err(TokenError::InvalidPath {
                path: path.to_string(),
            });
        }
        Ok(TokenPath(segments))
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// First segment, which names the token category.
    pub fn category(&self) -> &str {
        &self.0[0]
    }

    /// Everything after the category.
    pub fn rest(&self) -> &[String] {
        &self.0[1..]
    }
}

impl FromStr for TokenPath {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenPath::parse(s)
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// A node in the token tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenNode {
    Leaf(Token),
    Group(TokenGroup),
}

impl TokenNode {
    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            TokenNode::Leaf(t) => Some(t),
            TokenNode::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&TokenGroup> {
        match self {
            TokenNode::Group(g) => Some(g),
            TokenNode::Leaf(_) => None,
        }
    }
}

/// An ordered mapping of semantic keys to tokens or nested groups.
///
/// Insertion order is preserved and is the documented order of a scale
/// (e.g. typography sizes from `xs` to `7xl`).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenGroup {
    entries: IndexMap<String, TokenNode>,
}

impl TokenGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style leaf insertion.
    pub fn with(mut self, key: impl Into<String>, token: Token) -> Self {
        self.insert(key, TokenNode::Leaf(token));
        self
    }

    /// Builder-style group insertion.
    pub fn with_group(mut self, key: impl Into<String>, group: TokenGroup) -> Self {
        self.insert(key, TokenNode::Group(group));
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, node: TokenNode) {
        self.entries.insert(key.into(), node);
    }

    pub fn get(&self, key: &str) -> Option<&TokenNode> {
        self.entries.get(key)
    }

    /// Walk nested groups along `segments`.
    pub fn node_at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TokenNode> {
        let (first, rest) = segments.split_first()?;
        let node = self.entries.get(first.as_ref())?;
        if rest.is_empty() {
            return Some(node);
        }
        node.as_group()?.node_at(rest)
    }

    /// Leaf token at `segments`, if the path ends on a value.
    pub fn token_at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Token> {
        self.node_at(segments)?.as_leaf()
    }

    /// Group at `segments`.
    pub fn group_at<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TokenGroup> {
        self.node_at(segments)?.as_group()
    }

    /// Look up a dot path relative to this group.
    pub fn lookup(&self, path: &str) -> Option<&Token> {
        let segments: SmallVec<[&str; 4]> = path.split('.').collect();
        self.token_at(&segments[..])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TokenNode)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Direct leaf children, in order.
    pub fn leaves(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.entries
            .iter()
            .filter_map(|(k, n)| n.as_leaf().map(|t| (k.as_str(), t)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leaf tokens under this group, at any depth.
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|n| match n {
                TokenNode::Leaf(_) => 1,
                TokenNode::Group(g) => g.leaf_count(),
            })
            .sum()
    }

    /// Every leaf under this group with its path segments, depth first in
    /// insertion order.
    pub fn flatten(&self) -> Vec<(Vec<&str>, &Token)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        let mut prefix = Vec::new();
        self.collect_leaves(&mut prefix, &mut out);
        out
    }

    fn collect_leaves<'a>(
        &'a self,
        prefix: &mut Vec<&'a str>,
        out: &mut Vec<(Vec<&'a str>, &'a Token)>,
    ) {
        for (key, node) in &self.entries {
            prefix.push(key.as_str());
            match node {
                TokenNode::Leaf(token) => out.push((prefix.clone(), token)),
                TokenNode::Group(group) => group.collect_leaves(prefix, out),
            }
            prefix.pop();
        }
    }
}

/// The aggregated, read-only token tree.
///
/// Categories sit directly under the root. Once built, a tree only hands out
/// shared references.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenTree {
    root: TokenGroup,
}

impl TokenTree {
    /// Build a tree from `(category, group)` pairs, in order.
    pub fn from_categories<K, I>(categories: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, TokenGroup)>,
    {
        let mut root = TokenGroup::new();
        for (name, group) in categories {
            root.insert(name, TokenNode::Group(group));
        }
        Self { root }
    }

    pub fn root(&self) -> &TokenGroup {
        &self.root
    }

    /// A top-level category group.
    pub fn category(&self, name: &str) -> Option<&TokenGroup> {
        self.root.get(name)?.as_group()
    }

    /// Category names and groups, in order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &TokenGroup)> {
        self.root
            .iter()
            .filter_map(|(k, n)| n.as_group().map(|g| (k.as_str(), g)))
    }

    /// Get a token by dotted path.
    pub fn get(&self, path: &str) -> Option<&Token> {
        self.root.lookup(path)
    }

    /// Get a token by TokenPath.
    pub fn get_by_path(&self, path: &TokenPath) -> Option<&Token> {
        self.root.token_at(path.segments())
    }

    /// Get a token by dotted path, explaining why it is absent.
    pub fn resolve(&self, path: &str) -> Result<&Token, TokenError> {
        let parsed = TokenPath::parse(path)?;
        match self.root.node_at(parsed.segments()) {
            Some(TokenNode::Leaf(token)) => Ok(token),
            Some(TokenNode::Group(_)) => Err(TokenError::NotALeaf {
                path: path.to_string(),
            }),
            None => Err(TokenError::UndefinedToken {
                path: path.to_string(),
            }),
        }
    }

    /// Like [`resolve`](Self::resolve), but also checks the token kind.
    pub fn resolve_as(&self, path: &str, expected: TokenKind) -> Result<&Token, TokenError> {
        let token = self.resolve(path)?;
        if token.kind() != expected {
            return Err(TokenError::UnexpectedKind {
                path: path.to_string(),
                expected,
                found: token.kind(),
            });
        }
        Ok(token)
    }

    /// Check if a token exists.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Number of leaf tokens in the tree.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Every leaf as `(dotted path, token)`.
    pub fn flatten(&self) -> Vec<(String, &Token)> {
        self.root
            .flatten()
            .into_iter()
            .map(|(segments, token)| (segments.join("."), token))
            .collect()
    }
}
