//! Keyword classifier over a `Vocab`.
//!
//! A plain linear scan: the first keyword (in table order) found as a
//! substring of the lowercased description decides the category.

use crate::vocab::Vocab;

pub const UNKNOWN_CATEGORY: &str = "unknown";

#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    vocab: Vocab,
}

impl CategoryClassifier {
    pub fn new(vocab: Vocab) -> Self {
        Self { vocab }
    }

    pub fn vocab(&self) -> &Vocab {
        &self.vocab
    }

    pub fn vocab_mut(&mut self) -> &mut Vocab {
        &mut self.vocab
    }

    /// Category for `description`, or `UNKNOWN_CATEGORY`. Never fails.
    pub fn classify(&self, description: &str) -> &str {
        self.matching_keyword(description)
            .and_then(|k| self.vocab.get(k))
            .unwrap_or(UNKNOWN_CATEGORY)
    }

    /// The keyword that decides `classify`, if any.
    pub fn matching_keyword(&self, description: &str) -> Option<&str> {
        let desc = description.to_lowercase();
        self.vocab
            .iter()
            .find(|(keyword, _)| desc.contains(keyword))
            .map(|(keyword, _)| keyword)
    }
}
