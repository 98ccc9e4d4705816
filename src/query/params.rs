//! Ordered URL query parameter map.
//!
//! [`Query`] models the address bar's query string as an ordered list of
//! key/value pairs with set/get/delete semantics matching the platform
//! `URLSearchParams` type: `set` replaces in place (keeping the parameter's
//! original position), `delete` removes every occurrence, serialization
//! preserves insertion order. Values are percent-encoded on serialization and
//! decoded on parse.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use std::fmt;

/// A mutable copy of the current URL's query parameters.
///
/// The live query string is the canonical filter state; controllers obtain a
/// `Query` snapshot, mutate it, and hand it back to the navigation collaborator
/// via a replace action. Nothing in this type is facet-aware.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string (without the leading `?`).
    ///
    /// Pairs are split on `&`, keys and values on the first `=`. A bare key
    /// with no `=` maps to the empty value. Percent escapes are decoded and
    /// `+` is treated as a space; undecodable bytes are replaced lossily
    /// rather than rejected, matching the forgiving platform behavior.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetsync::query::Query;
    ///
    /// let q = Query::parse("category=Home%20Appliance&startPrice=200");
    /// assert_eq!(q.get("category"), Some("Home Appliance"));
    /// assert_eq!(q.get("startPrice"), Some("200"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let params = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((k, v)) => (Self::decode(k), Self::decode(v)),
                None => (Self::decode(pair), String::new()),
            })
            .collect();
        Self { params }
    }

    /// Returns the value of the first occurrence of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns whether `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`.
    ///
    /// If the key already exists, the first occurrence is updated in place and
    /// any duplicates are dropped; otherwise the pair is appended.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(pos) = self.params.iter().position(|(k, _)| k == key) {
            self.params[pos].1 = value;
            let mut i = pos + 1;
            while i < self.params.len() {
                if self.params[i].0 == key {
                    self.params.remove(i);
                } else {
                    i += 1;
                }
            }
        } else {
            self.params.push((key.to_string(), value));
        }
    }

    /// Removes every occurrence of `key`.
    pub fn delete(&mut self, key: &str) {
        self.params.retain(|(k, _)| k != key);
    }

    /// Returns whether the query holds no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterates over `(key, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn decode(raw: &str) -> String {
        let spaced = raw.replace('+', " ");
        percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
    }
}

impl fmt::Display for Query {
    /// Serializes to `key=value&key=value` with percent-encoded components.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.params {
            if !first {
                write!(f, "&")?;
            }
            first = false;
            write!(
                f,
                "{}={}",
                utf8_percent_encode(k, NON_ALPHANUMERIC),
                utf8_percent_encode(v, NON_ALPHANUMERIC)
            )?;
        }
        Ok(())
    }
}
