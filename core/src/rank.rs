use crate::{Count, DocId, Postings};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub doc_id: DocId,
    pub score: Count,
}

/// Order the documents `1..=doc_count` that scored above zero, best first.
/// Equal scores are listed by ascending document id.
pub fn rank(scores: &Postings, doc_count: DocId) -> Vec<Hit> {
    let mut hits: Vec<Hit> = scores
        .iter()
        .filter(|&(doc_id, score)| (1..=doc_count).contains(&doc_id) && score > 0)
        .map(|(doc_id, score)| Hit { doc_id, score })
        .collect();
    hits.sort_unstable_by_key(|h| (Reverse(h.score), h.doc_id));
    hits
}
