//! Ordered keyword → category table loaded from a JSON object.
//!
//! Table order is match precedence, so the file is read as a sequence of
//! (key, value) pairs: every key reaches `learn`, including repeats.

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};

/// A JSON object read in document order without collapsing duplicate keys.
struct OrderedPairs(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object of keyword to category")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<OrderedPairs, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, Value>()? {
                    pairs.push((k, v));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocab {
    entries: Vec<(String, String)>,
}

impl Vocab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (keyword, category) pairs. Keywords are lowercased and the
    /// first occurrence of a keyword wins.
    pub fn from_pairs<I, K, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, C)>,
        K: AsRef<str>,
        C: Into<String>,
    {
        let mut vocab = Self::new();
        for (k, c) in pairs {
            vocab.learn(k.as_ref(), c);
        }
        vocab
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let OrderedPairs(pairs) = serde_json::from_str(s)?;
        let mut vocab = Self::new();
        for (keyword, value) in pairs {
            let category = value
                .as_str()
                .ok_or_else(|| Error::Vocab(format!("category for '{keyword}' is not a string")))?;
            vocab.learn(&keyword, category);
        }
        Ok(vocab)
    }

    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)?;
        let vocab = Self::from_json_str(&s)?;
        debug!(path = %path.display(), entries = vocab.len(), "loaded vocab");
        Ok(vocab)
    }

    pub fn to_json_string(&self) -> Result<String> {
        let map: Map<String, Value> = self
            .entries
            .iter()
            .map(|(k, c)| (k.clone(), Value::String(c.clone())))
            .collect();
        Ok(serde_json::to_string_pretty(&map)?)
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut s = self.to_json_string()?;
        s.push('\n');
        fs::write(path, s)?;
        debug!(path = %path.display(), entries = self.len(), "saved vocab");
        Ok(())
    }

    /// Append `keyword → category` unless the keyword is already known or blank.
    /// Returns whether the table changed.
    pub fn learn(&mut self, keyword: &str, category: impl Into<String>) -> bool {
        let at = self.entries.len();
        self.insert_at(at, keyword, category)
    }

    /// Like `learn`, but the new entry is placed just ahead of `anchor` so it
    /// takes precedence over it. Falls back to appending if `anchor` is unknown.
    pub fn learn_before(&mut self, anchor: &str, keyword: &str, category: impl Into<String>) -> bool {
        let at = self
            .entries
            .iter()
            .position(|(k, _)| k == anchor)
            .unwrap_or(self.entries.len());
        self.insert_at(at, keyword, category)
    }

    fn insert_at(&mut self, at: usize, keyword: &str, category: impl Into<String>) -> bool {
        let keyword = keyword.to_lowercase();
        if keyword.trim().is_empty() || self.get(&keyword).is_some() {
            return false;
        }
        self.entries.insert(at, (keyword, category.into()));
        true
    }

    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == keyword)
            .map(|(_, c)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
