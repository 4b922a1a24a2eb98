use lazy_static::lazy_static;
use regex::Regex;

/// Characters that separate tokens within a corpus line or query.
pub const DELIMITERS: &str = " ,.;:?!-\t'()[]{}<>~_";

lazy_static! {
    static ref SPLIT_RE: Regex = Regex::new(&format!("[{}]+", regex::escape(DELIMITERS))).expect("valid regex");
}

/// Lowercases `token` and returns it if it consists only of letters `a`-`z`.
pub fn normalize_word(token: &str) -> Option<String> {
    if token.is_empty() { return None; }
    let lower = token.to_ascii_lowercase();
    if lower.bytes().all(|b| b.is_ascii_lowercase()) { Some(lower) } else { None }
}

/// Split text on the delimiter set and keep the tokens that are words, in order.
/// Duplicates are preserved; the document encoder dedups ids later.
pub fn tokenize(text: &str) -> Vec<String> {
    SPLIT_RE.split(text).filter_map(normalize_word).collect()
}
