//! Module: tag
//! Responsibility: raw tag text into key/value attribute maps.
//! Does not own: meaning of individual keys (see `field` and `overlay`).
//!
//! Grammar: whitespace-separated `key:"value"` pairs. Keys are bare
//! (`json`) or double-quoted (`"status->default"`); values are always
//! double-quoted and may use backslash escapes.


use crate::error::TagError;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// TagMap
///
/// Attribute map for one field or one embedding site.
/// Keys are unique; a repeated key keeps its last value.
///

#[derive(
    Clone, Debug, Default, Deref, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct TagMap(BTreeMap<String, String>);

impl TagMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Parse tag text, skipping malformed pairs.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut map = Self::new();

        for item in Scanner::new(text) {
            match item {
                Ok((key, value)) => {
                    map.insert(key, value);
                }
                Err(err) => {
                    tracing::debug!(tag = text, error = %err, "skipping malformed tag pair");
                }
            }
        }

        map
    }

    /// Parse tag text, failing on the first malformed pair.
    pub fn parse_strict(text: &str) -> Result<Self, TagError> {
        let mut map = Self::new();

        for item in Scanner::new(text) {
            let (key, value) = item?;
            map.insert(key, value);
        }

        Ok(map)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert or replace one attribute, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for TagMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if is_bare_key(key) {
                f.write_str(key)?;
            } else {
                write_quoted(f, key)?;
            }
            f.write_str(":")?;
            write_quoted(f, value)?;
        }

        Ok(())
    }
}

fn is_bare_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_bare_key_char)
}

fn is_bare_key_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && c != ':' && c != '"'
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

///
/// Scanner
///
/// Yields one result per pair. After an error the scanner resumes at the
/// next whitespace, so one bad pair never hides the rest.
///

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn recover(&mut self) {
        while self.peek().is_some_and(|c| !c.is_whitespace()) {
            self.bump();
        }
    }

    fn malformed(&mut self, offset: usize, reason: &'static str) -> TagError {
        self.recover();
        TagError::MalformedPair { offset, reason }
    }

    fn bare_key(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_bare_key_char) {
            self.bump();
        }
        &self.text[start..self.pos]
    }

    // Reads a quoted string; the opening quote is already consumed.
    fn quoted(&mut self) -> Option<String> {
        let mut out = String::new();

        loop {
            match self.bump()? {
                '"' => return Some(out),
                '\\' => match self.bump()? {
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    other => out.push(other),
                },
                c => out.push(c),
            }
        }
    }

    fn pair(&mut self) -> Result<(String, String), TagError> {
        let offset = self.pos;

        // Phase 1: key, bare or quoted.
        let key = if self.peek() == Some('"') {
            self.bump();
            match self.quoted() {
                Some(key) => key,
                None => return Err(self.malformed(offset, "unterminated quoted key")),
            }
        } else {
            self.bare_key().to_string()
        };
        if key.is_empty() {
            return Err(self.malformed(offset, "empty key"));
        }

        // Phase 2: delimiter.
        if self.peek() != Some(':') {
            return Err(self.malformed(offset, "missing ':' after key"));
        }
        self.bump();

        // Phase 3: quoted value.
        if self.peek() != Some('"') {
            return Err(self.malformed(offset, "value must be double-quoted"));
        }
        self.bump();
        let Some(value) = self.quoted() else {
            return Err(self.malformed(offset, "unterminated value"));
        };

        Ok((key, value))
    }
}

impl Iterator for Scanner<'_> {
    type Item = Result<(String, String), TagError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        self.peek()?;

        Some(self.pair())
    }
}
