use crate::corpus::CorpusTable;
use crate::document::Document;
use crate::error::{MatchError, Result};
use crate::index::{DocId, VocabularyIndex};
use serde::Serialize;
use std::cmp::Ordering;

/// Best corpus entry for a query and the number of ids it shares with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Match {
    pub index: DocId,
    pub score: usize,
}

/// Number of ids shared by two documents, by merging the two sorted id lists.
/// This is a raw count; callers wanting a normalized score divide themselves.
pub fn overlap(a: &Document, b: &Document) -> usize {
    let (a, b) = (a.ids(), b.ids());
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Scans the table in order and returns the entry with the highest overlap.
/// Ties go to the earliest entry; if nothing overlaps the answer is entry 0
/// with score 0.
pub fn best_match(query: &Document, table: &CorpusTable) -> Result<Match> {
    if table.is_empty() {
        return Err(MatchError::EmptyCorpus);
    }
    let mut best = Match { index: 0, score: 0 };
    for (doc_id, entry) in table.iter().enumerate() {
        let score = overlap(query, &entry.document);
        if score > best.score {
            best = Match { index: doc_id, score };
        }
    }
    Ok(best)
}

/// Encodes `text` in query mode and finds its best corpus match.
pub fn answer_query(text: &str, index: &VocabularyIndex, table: &CorpusTable) -> Result<Match> {
    let query = Document::query(text, index);
    best_match(&query, table)
}
