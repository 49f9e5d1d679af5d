//! Flat key/value argument strings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, ParseResult};

/// Key/value pairs parsed from a flat configuration string such as
/// `"name:ga population:80 seed=7"`.
///
/// Tokens are separated by whitespace, `,` or `;`. Each token is split at
/// its first `:` or `=`; a token with neither becomes a key with an empty
/// value. Later duplicates override earlier ones. Parsing never fails.
///
/// # Examples
///
/// ```
/// use u_mtsp::config::Args;
///
/// let args = Args::parse("name:ga, population=80");
/// assert_eq!(args.get("name"), Some("ga"));
/// assert_eq!(args.get_or("name", "dummy"), "ga");
/// assert_eq!(args.to_string(), "name:ga population:80");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    values: BTreeMap<String, String>,
}

impl Args {
    /// Parses a flat configuration string.
    pub fn parse(input: &str) -> Self {
        let values = input
            .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
            .filter(|t| !t.is_empty())
            .filter_map(|token| {
                let (key, value) = match token.find([':', '=']) {
                    Some(at) => (&token[..at], &token[at + 1..]),
                    None => (token, ""),
                };
                let key = key.trim();
                (!key.is_empty()).then(|| (key.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { values }
    }

    /// Returns the raw value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the raw value for `key`, or `default` if it is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parses the value for `key` as `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when the value
    /// does not parse.
    pub fn parse_value<T: FromStr>(&self, key: &str) -> ParseResult<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(|_| ParseError::InvalidOption {
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    /// Returns `true` if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Iterates over the pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no keys were given.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<&str> for Args {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

/// `key:value` pairs in key order, separated by single spaces.
impl fmt::Display for Args {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{k}:{v}")?;
        }
        Ok(())
    }
}
