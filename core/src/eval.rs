use crate::query::{Query, Token};
use crate::{Index, Postings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Intersect,
    Union,
}

/// Documents in both stores, each scored with the smaller count.
pub fn intersect(a: &Postings, b: &Postings) -> Postings {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .map(|(doc_id, count)| (doc_id, count.min(large.get(doc_id))))
        .collect()
}

/// Documents in either store, each scored with the sum of its counts.
pub fn union(a: &Postings, b: &Postings) -> Postings {
    let mut out = a.clone();
    for (doc_id, count) in b.iter() {
        out.set(doc_id, out.get(doc_id).saturating_add(count));
    }
    out
}

/// Score every document against `query`, left to right with no precedence:
/// a bare word (or one after `and`) intersects into the running scores, a
/// word after `or` is unioned in. Unknown words act as an empty store.
///
/// The result is a fresh store; the index is only read.
pub fn score_documents(query: &Query, index: &Index) -> Postings {
    let empty = Postings::new();

    let mut scores: Option<Postings> = None;
    let mut op = Op::Intersect;
    for token in query.tokens() {
        match token {
            Token::And => op = Op::Intersect,
            Token::Or => op = Op::Union,
            Token::Word(word) => {
                let postings = index.get(word).unwrap_or(&empty);
                scores = Some(match (scores, op) {
                    (None, _) => postings.clone(),
                    (Some(total), Op::Intersect) => intersect(&total, postings),
                    (Some(total), Op::Union) => union(&total, postings),
                });
                op = Op::Intersect;
            }
        }
    }
    scores.unwrap_or_default()
}
