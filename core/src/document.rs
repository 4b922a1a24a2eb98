use crate::index::{VocabularyIndex, WordId};
use crate::tokenizer::tokenize;
use serde::Serialize;
use std::fmt;

/// Whether encoding may grow the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeMode {
    /// Corpus pass: unseen words are inserted and get fresh ids.
    Indexing,
    /// Query pass: unseen words are dropped.
    Query,
}

/// The distinct known words of one line, as ids in strictly ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Document {
    ids: Vec<WordId>,
}

impl Document {
    /// Encodes a corpus line, registering every word in `index`.
    pub fn index(text: &str, index: &mut VocabularyIndex) -> Self {
        Self::from_ids(tokenize(text).iter().map(|w| index.insert(w)).collect())
    }

    /// Encodes a query against a finished index. Unknown words contribute nothing.
    pub fn query(text: &str, index: &VocabularyIndex) -> Self {
        Self::from_ids(tokenize(text).iter().filter_map(|w| index.lookup(w)).collect())
    }

    /// Builds a document from arbitrary ids, sorting and removing duplicates.
    pub fn from_ids(mut ids: Vec<WordId>) -> Self {
        ids.sort_unstable();
        ids.dedup();
        ids.shrink_to_fit();
        Self { ids }
    }

    pub fn ids(&self) -> &[WordId] { &self.ids }

    pub fn len(&self) -> usize { self.ids.len() }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    pub fn contains(&self, id: WordId) -> bool { self.ids.binary_search(&id).is_ok() }
}

/// Encodes `text` in the given mode. Query mode never mutates `index`.
pub fn encode(text: &str, index: &mut VocabularyIndex, mode: EncodeMode) -> Document {
    match mode {
        EncodeMode::Indexing => Document::index(text, index),
        EncodeMode::Query => Document::query(text, index),
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 { write!(f, ", ")?; }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_dedups_and_sorts() {
        let mut idx = VocabularyIndex::new();
        idx.insert("zeta");
        idx.insert("alpha");
        let doc = Document::index("alpha beta zeta alpha, beta", &mut idx);
        assert_eq!(doc.ids(), &[0, 1, 2]);
        assert_eq!(idx.len(), 3);
    }

    #[test]
    fn query_mode_drops_unknown_words() {
        let mut idx = VocabularyIndex::new();
        Document::index("the cat sat", &mut idx);
        let doc = encode("The dog sat", &mut idx, EncodeMode::Query);
        assert_eq!(doc.ids(), &[0, 2]);
        assert_eq!(idx.len(), 3);
    }

    #[test]
    fn non_words_are_skipped() {
        let mut idx = VocabularyIndex::new();
        let doc = Document::index("route 66 is caf\u{e9}-free", &mut idx);
        assert_eq!(doc.len(), 3);
        assert_eq!(idx.lookup("route"), Some(0));
        assert_eq!(idx.lookup("is"), Some(1));
        assert_eq!(idx.lookup("free"), Some(2));
    }

    #[test]
    fn empty_and_unknown_text_gives_empty_document() {
        let mut idx = VocabularyIndex::new();
        Document::index("known words", &mut idx);
        assert!(Document::query("", &idx).is_empty());
        assert!(Document::query("?!  ...", &idx).is_empty());
        assert!(Document::query("xyz qqq", &idx).is_empty());
    }

    #[test]
    fn encoding_is_deterministic() {
        let mut idx = VocabularyIndex::new();
        Document::index("a bird flew over the cat", &mut idx);
        let a = Document::query("the cat flew; the bird", &idx);
        let b = Document::query("the cat flew; the bird", &idx);
        assert_eq!(a, b);
        assert!(a.ids().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn display_lists_ids() {
        let doc = Document::from_ids(vec![6, 0, 1, 6]);
        assert_eq!(doc.to_string(), "[0, 1, 6]");
        assert_eq!(Document::default().to_string(), "[]");
    }
}
