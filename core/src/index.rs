use std::cmp::Ordering;

pub type WordId = u32;
pub type DocId = usize;

#[derive(Debug, Clone)]
struct Node {
    word: String,
    left: Option<WordId>,
    right: Option<WordId>,
}

/// Unbalanced binary search tree mapping words to ids.
///
/// Nodes live in an arena owned by the index. A node's arena slot is its word
/// id, so the arena length doubles as the id counter: ids start at 0 and grow
/// by one each time a new word is inserted. Inserting the same sequence of
/// words into two fresh indices always yields the same ids.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    nodes: Vec<Node>,
}

impl VocabularyIndex {
    pub fn new() -> Self { Self::default() }

    /// Number of distinct words.
    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// Returns the id of `word`, allocating the next id if the word is new.
    pub fn insert(&mut self, word: &str) -> WordId {
        let next_id = self.nodes.len() as WordId;
        if self.nodes.is_empty() {
            self.nodes.push(Node::leaf(word));
            return next_id;
        }
        let mut cursor = 0usize;
        loop {
            let node = &mut self.nodes[cursor];
            let child = match word.cmp(node.word.as_str()) {
                Ordering::Equal => return cursor as WordId,
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
            };
            match *child {
                Some(id) => cursor = id as usize,
                None => {
                    *child = Some(next_id);
                    self.nodes.push(Node::leaf(word));
                    return next_id;
                }
            }
        }
    }

    /// Looks `word` up without modifying the tree.
    pub fn lookup(&self, word: &str) -> Option<WordId> {
        let mut cursor = if self.nodes.is_empty() { None } else { Some(0) };
        while let Some(id) = cursor {
            let node = &self.nodes[id as usize];
            cursor = match word.cmp(node.word.as_str()) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    pub fn contains(&self, word: &str) -> bool { self.lookup(word).is_some() }

    /// In-order traversal: words in ascending lexicographic order with their ids.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { nodes: &self.nodes, stack: Vec::new() };
        if !self.nodes.is_empty() {
            iter.push_left(Some(0));
        }
        iter
    }

    /// Returns the word that was assigned `id`.
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.nodes.get(id as usize).map(|n| n.word.as_str())
    }
}

impl Node {
    fn leaf(word: &str) -> Self {
        Self { word: word.to_string(), left: None, right: None }
    }
}

/// Iterator returned by [`VocabularyIndex::iter`]. Uses an explicit stack, so
/// degenerate (sorted-input) trees do not recurse.
pub struct InOrder<'a> {
    nodes: &'a [Node],
    stack: Vec<WordId>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut cursor: Option<WordId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.nodes[id as usize].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = (&'a str, WordId);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let nodes = self.nodes;
        let node = &nodes[id as usize];
        self.push_left(node.right);
        Some((node.word.as_str(), id))
    }
}

impl<'a> IntoIterator for &'a VocabularyIndex {
    type Item = (&'a str, WordId);
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
