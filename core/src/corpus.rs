use crate::document::Document;
use crate::error::{MatchError, Result};
use crate::index::{DocId, VocabularyIndex};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub text: String,
    pub document: Document,
}

/// Corpus lines paired with their encodings, in corpus order.
#[derive(Debug, Clone, Default)]
pub struct CorpusTable {
    entries: Vec<CorpusEntry>,
}

impl CorpusTable {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, doc_id: DocId) -> Option<&CorpusEntry> { self.entries.get(doc_id) }

    /// Raw text of the line at `doc_id`.
    pub fn line(&self, doc_id: DocId) -> Option<&str> { self.get(doc_id).map(|e| e.text.as_str()) }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusEntry> { self.entries.iter() }

    /// Reads every line of `reader` and builds the index and table from it.
    /// Bytes that are not valid UTF-8 are replaced, so they only spoil their own token.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<(VocabularyIndex, CorpusTable)> {
        let mut buf = Vec::new();
        let mut lines = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buf)? {
            lines.push(line);
        }
        Ok(build_index_and_table(lines))
    }

    /// Opens the corpus file at `path`; one line is one document.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<(VocabularyIndex, CorpusTable)> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|source| MatchError::CorpusUnavailable { path: path.to_path_buf(), source })?;
        Self::from_reader(BufReader::new(f))
    }
}

impl<'a> IntoIterator for &'a CorpusTable {
    type Item = &'a CorpusEntry;
    type IntoIter = std::slice::Iter<'a, CorpusEntry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Reads one line without its `\n` or `\r\n` terminator, decoding it as lossy
/// UTF-8. Returns `None` at end of input. `buf` is scratch space reused across calls.
pub fn read_line_lossy<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>) -> std::io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Single corpus pass: every line is encoded in indexing mode, so the returned
/// vocabulary is complete before any query is encoded against it.
pub fn build_index_and_table<I, S>(lines: I) -> (VocabularyIndex, CorpusTable)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut index = VocabularyIndex::new();
    let mut entries = Vec::new();
    for line in lines {
        let text: String = line.into();
        let document = Document::index(&text, &mut index);
        entries.push(CorpusEntry { text, document });
    }
    entries.shrink_to_fit();
    tracing::debug!(num_docs = entries.len(), num_words = index.len(), "corpus indexed");
    (index, CorpusTable { entries })
}
