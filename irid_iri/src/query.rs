/*!
The `Query` component: a sorted multimap from decoded key to a sorted set of decoded values,
built from the `key=value` pairs separated by `&` or `;`. Sorting the keys (and the values under
each key) gives two queries with the same pairs an identical canonical rendering regardless of
the order they were written in.
*/

use crate::error::{Component as ErrComponent, ErrorKind, Result};
use crate::pct_encoding::{decode_component, encode, is_query_safe};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A query string, modeled as a sorted multimap of decoded `key -> { values }`. A key with no
/// `=value` at all is recorded with an empty value set and renders back out as the bare key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Query {
    pairs: BTreeMap<String, BTreeSet<String>>,
}

impl Display for Query {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self, |s| s.to_string()))
    }
}

fn render<F>(q: &Query, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut first = true;
    let mut out = String::new();
    for (key, values) in &q.pairs {
        if values.is_empty() {
            if !first {
                out.push('&');
            }
            out.push_str(&transform(key));
            first = false;
            continue;
        }
        for value in values {
            if !first {
                out.push('&');
            }
            out.push_str(&transform(key));
            out.push('=');
            out.push_str(&transform(value));
            first = false;
        }
    }
    out
}

impl FromStr for Query {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut pairs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        if s.is_empty() {
            return Ok(Query { pairs });
        }
        for raw_pair in s.split(|c| c == '&' || c == ';') {
            if raw_pair.is_empty() {
                continue;
            }
            if !is_query_pair_syntax(raw_pair) {
                return Err(ErrorKind::ParseError("query-pair".to_string(), 0).into());
            }
            match raw_pair.split_once('=') {
                Some((k, v)) => {
                    let key = decode_component(k, ErrComponent::Query)?;
                    let value = decode_component(v, ErrComponent::Query)?;
                    pairs.entry(key).or_default().insert(value);
                }
                None => {
                    let key = decode_component(raw_pair, ErrComponent::Query)?;
                    pairs.entry(key).or_default();
                }
            }
        }
        Ok(Query { pairs })
    }
}

fn is_query_pair_syntax(s: &str) -> bool {
    crate::pct_encoding::is_correctly_escaped(s)
        && s.chars().all(|c| is_query_safe(c) || matches!(c, '=' | '%'))
}

impl Query {
    /// The empty query (no pairs at all — distinct from a query string of `""`, which this
    /// crate also represents as empty).
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` if there are no key/value pairs at all.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Insert a `key=value` pair, preserving any existing values already recorded for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.entry(key.into()).or_default().insert(value.into());
    }

    /// Insert a bare key with no value.
    pub fn insert_key(&mut self, key: impl Into<String>) {
        self.pairs.entry(key.into()).or_default();
    }

    /// `true` if `key` occurs at all, with or without values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    /// The sorted set of values recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.pairs.get(key)
    }

    /// Iterate `(key, values)` pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.pairs.iter()
    }

    /// The IRI (UTF-8) rendering.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering: keys and values are percent-encoded.
    pub fn as_uri(&self) -> String {
        render(self, |s| encode(s, crate::pct_encoding::is_uri_path_safe))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs() {
        let q: Query = "b=2&a=1".parse().unwrap();
        assert_eq!(q.to_string(), "a=1&b=2");
    }

    #[test]
    fn same_pairs_different_order_are_equal() {
        let a: Query = "a=1&b=2".parse().unwrap();
        let b: Query = "b=2&a=1".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_key_collects_sorted_values() {
        let q: Query = "tag=z&tag=a".parse().unwrap();
        assert_eq!(q.to_string(), "tag=a&tag=z");
    }

    #[test]
    fn bare_key_has_no_equals() {
        let q: Query = "debug".parse().unwrap();
        assert_eq!(q.to_string(), "debug");
        assert!(q.contains_key("debug"));
        assert!(q.get("debug").unwrap().is_empty());
    }

    #[test]
    fn empty_query_round_trips() {
        let q: Query = "".parse().unwrap();
        assert!(q.is_empty());
        assert_eq!(q.to_string(), "");
    }
}
