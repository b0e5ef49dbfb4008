use crate::error::Result;
use crate::pagedir::PageDir;
use crate::tokenizer::tokenize;
use crate::{DocId, Index};
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub documents: DocId,
    /// Word occurrences added to the index (after the length filter).
    pub words: u64,
}

/// Index every document in a crawler directory into `index`.
///
/// Documents are read as ids 1, 2, 3, ... and the first missing id ends the
/// corpus, so a crawler that skipped an id would silently truncate the build.
/// Fails without touching `index` if the directory has no crawler marker.
pub fn build<P: AsRef<Path>>(page_dir: P, index: &mut Index) -> Result<BuildStats> {
    let pages = PageDir::new(page_dir);
    pages.validate()?;

    let mut stats = BuildStats::default();
    let mut id: DocId = 1;
    while let Some(page) = pages.load_page(id)? {
        let tokens = tokenize(&page.html);
        for (word, _pos) in &tokens {
            index.add(word, id);
        }
        tracing::debug!(doc_id = id, url = %page.url, words = tokens.len(), "indexed document");
        stats.documents = id;
        stats.words += tokens.len() as u64;
        id += 1;
    }

    tracing::info!(documents = stats.documents, words = stats.words, distinct = index.len(), "index build complete");
    Ok(stats)
}

/// Build a fresh index from a crawler directory.
pub fn build_index<P: AsRef<Path>>(page_dir: P, slots: usize) -> Result<Index> {
    let mut index = Index::new(slots);
    build(page_dir, &mut index)?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexError;
    use crate::pagedir::Page;
    use tempfile::tempdir;

    fn corpus(dir: &Path, bodies: &[&str]) -> PageDir {
        let pages = PageDir::new(dir);
        pages.init().unwrap();
        for (i, body) in bodies.iter().enumerate() {
            let page = Page { url: format!("http://test/{}", i + 1), depth: 0, html: body.to_string() };
            pages.save_page(i as DocId + 1, &page).unwrap();
        }
        pages
    }

    #[test]
    fn counts_normalized_words() {
        let dir = tempdir().unwrap();
        corpus(dir.path(), &["Cat CAT cat"]);
        let index = build_index(dir.path(), 10).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("cat").unwrap().get(1), 3);
    }

    #[test]
    fn short_words_never_indexed() {
        let dir = tempdir().unwrap();
        corpus(dir.path(), &["<p>a an the of it dog</p>", "go to sea"]);
        let index = build_index(dir.path(), 10).unwrap();
        assert!(index.iter().all(|(w, _)| w.len() >= 3));
        assert!(index.get("the").is_some());
        assert!(index.get("an").is_none());
        assert_eq!(index.get("sea").unwrap().get(2), 1);
    }

    #[test]
    fn missing_marker_leaves_index_alone() {
        let dir = tempdir().unwrap();
        let mut index = Index::new(4);
        let err = build(dir.path(), &mut index).unwrap_err();
        assert!(matches!(err, IndexError::NotCrawlerDirectory(_)));
        assert!(index.is_empty());
    }

    #[test]
    fn gap_ends_corpus() {
        let dir = tempdir().unwrap();
        let pages = corpus(dir.path(), &["alpha", "bravo"]);
        let page = Page { url: "http://test/4".into(), depth: 1, html: "charlie".into() };
        pages.save_page(4, &page).unwrap();
        let mut index = Index::new(4);
        let stats = build(dir.path(), &mut index).unwrap();
        assert_eq!(stats.documents, 2);
        assert!(index.get("charlie").is_none());
    }
}
