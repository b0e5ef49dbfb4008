use std::collections::{BTreeMap, HashMap};

pub type DocId = u32;
pub type Count = u32;

/// Per-word mapping from document id to occurrence count.
///
/// Counts are always >= 1; setting a count of 0 removes the document.
/// Iteration runs in ascending document id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postings {
    counts: BTreeMap<DocId, Count>,
}

impl Postings {
    pub fn new() -> Self { Self::default() }

    pub fn add(&mut self, doc_id: DocId) {
        *self.counts.entry(doc_id).or_insert(0) += 1;
    }

    pub fn set(&mut self, doc_id: DocId, count: Count) {
        if count == 0 {
            self.counts.remove(&doc_id);
        } else {
            self.counts.insert(doc_id, count);
        }
    }

    /// Count for `doc_id`, 0 when the document is absent.
    pub fn get(&self, doc_id: DocId) -> Count {
        self.counts.get(&doc_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.counts.len() }
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, Count)> + '_ {
        self.counts.iter().map(|(&d, &c)| (d, c))
    }
}

impl FromIterator<(DocId, Count)> for Postings {
    fn from_iter<I: IntoIterator<Item = (DocId, Count)>>(iter: I) -> Self {
        let mut postings = Postings::new();
        for (doc_id, count) in iter {
            postings.set(doc_id, count);
        }
        postings
    }
}

/// Inverted index: normalized word -> postings. Owns every `Postings` it holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    words: HashMap<String, Postings>,
}

impl Index {
    /// `slots` sizes the word table up front; it never changes results.
    pub fn new(slots: usize) -> Self {
        Self { words: HashMap::with_capacity(slots) }
    }

    /// Record one occurrence of `word` in `doc_id`. Empty words are ignored.
    pub fn add(&mut self, word: &str, doc_id: DocId) {
        if word.is_empty() { return; }
        match self.words.get_mut(word) {
            Some(postings) => postings.add(doc_id),
            None => {
                let mut postings = Postings::new();
                postings.add(doc_id);
                self.words.insert(word.to_string(), postings);
            }
        }
    }

    /// Overwrite the count of `word` in `doc_id`. Empty words are ignored.
    pub fn set(&mut self, word: &str, doc_id: DocId, count: Count) {
        if word.is_empty() { return; }
        match self.words.get_mut(word) {
            Some(postings) => {
                postings.set(doc_id, count);
                if postings.is_empty() {
                    self.words.remove(word);
                }
            }
            None if count == 0 => {}
            None => {
                let mut postings = Postings::new();
                postings.set(doc_id, count);
                self.words.insert(word.to_string(), postings);
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&Postings> { self.words.get(word) }

    pub fn len(&self) -> usize { self.words.len() }
    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.words.iter().map(|(w, p)| (w.as_str(), p))
    }

    /// Entries ordered by word, for deterministic output.
    pub fn sorted(&self) -> Vec<(&str, &Postings)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
