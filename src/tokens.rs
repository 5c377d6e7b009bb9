//! Literal token substitution.
//!
//! A [`TokenMap`] is an ordered list of `(token, replacement)` pairs applied
//! one after another over the whole text. Replacement is single pass:
//! text produced by an earlier pair is still visible to later pairs, but a
//! later replacement is never rescanned for tokens that have already run.

use std::sync::OnceLock;

use log::warn;
use regex::Regex;

/// One placeholder and the text that replaces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub token: String,
    pub replacement: String,
}

/// Ordered token pairs, unique by token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    pairs: Vec<TokenPair>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair at the end of the map.
    ///
    /// Re-inserting an existing token keeps its original position and
    /// replaces its value (last writer wins).
    pub fn insert<T: Into<String>, R: Into<String>>(&mut self, token: T, replacement: R) {
        let token = token.into();
        let replacement = replacement.into();
        if let Some(pair) = self.pairs.iter_mut().find(|p| p.token == token) {
            warn!("Token '{}' declared twice, keeping the last replacement", token);
            pair.replacement = replacement;
        } else {
            self.pairs.push(TokenPair { token, replacement });
        }
    }

    /// Builder-style [`TokenMap::insert`].
    pub fn with<T: Into<String>, R: Into<String>>(mut self, token: T, replacement: R) -> Self {
        self.insert(token, replacement);
        self
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.pairs.iter().find(|p| p.token == token).map(|p| p.replacement.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TokenPair> {
        self.pairs.iter()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Applies every pair to `text`, in declaration order.
    pub fn substitute(&self, text: &str) -> String {
        substitute(text, self)
    }
}

impl<T: Into<String>, R: Into<String>> FromIterator<(T, R)> for TokenMap {
    fn from_iter<I: IntoIterator<Item = (T, R)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (token, replacement) in iter {
            map.insert(token, replacement);
        }
        map
    }
}

/// Replaces every occurrence of each token, pair by pair.
///
/// Pair `n` runs over the output of pairs `1..n`. Empty tokens are ignored.
pub fn substitute(text: &str, tokens: &TokenMap) -> String {
    tokens
        .iter()
        .filter(|pair| !pair.token.is_empty())
        .fold(text.to_string(), |acc, pair| {
            if acc.contains(&pair.token) {
                acc.replace(&pair.token, &pair.replacement)
            } else {
                acc
            }
        })
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r":[A-Za-z][A-Za-z_ -]*[A-Za-z]:").expect("valid placeholder pattern")
    })
}

/// Placeholder-shaped fragments such as `:ModuleName:` still present in `text`.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in placeholder_regex().find_iter(text) {
        let candidate = m.as_str();
        if !candidate.contains("  ") && !found.iter().any(|f| f == candidate) {
            found.push(candidate.to_string());
        }
    }
    found
}
