pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod similarity;
pub mod tokenizer;

pub use corpus::{build_index_and_table, read_line_lossy, CorpusEntry, CorpusTable};
pub use document::{encode, Document, EncodeMode};
pub use error::{MatchError, Result};
pub use index::{DocId, VocabularyIndex, WordId};
pub use similarity::{answer_query, best_match, overlap, Match};
