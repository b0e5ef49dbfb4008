use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::Path;
use tse_core::eval::score_documents;
use tse_core::pagedir::PageDir;
use tse_core::query::Query;
use tse_core::rank::rank;
use tse_core::{Count, DocId, Index, QueryError};

const PROMPT: &str = "Query: ";
const SEPARATOR: &str = "-----------------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable ranked list
    Text,
    /// One JSON object per query
    Json,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_hits: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub score: Count,
    pub url: Option<String>,
}

/// A loaded index plus the corpus it was built from. Both are read-only for
/// the life of the querier.
pub struct Querier {
    pages: PageDir,
    index: Index,
    doc_count: DocId,
}

impl Querier {
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(page_dir: P, index_file: Q, slots: usize) -> Result<Self> {
        let pages = PageDir::new(page_dir);
        pages.validate()?;
        let index_file = index_file.as_ref();
        let index = Index::load_from(index_file, slots)
            .with_context(|| format!("loading index {}", index_file.display()))?;
        Ok(Self::new(pages, index))
    }

    pub fn new(pages: PageDir, index: Index) -> Self {
        let doc_count = pages.doc_count();
        tracing::info!(doc_count, words = index.len(), corpus = %pages.root.display(), "querier ready");
        Self { pages, index, doc_count }
    }

    pub fn doc_count(&self) -> DocId { self.doc_count }

    pub fn search(&self, line: &str) -> Result<SearchResponse, QueryError> {
        let query = Query::parse(line)?;
        let scores = score_documents(&query, &self.index);
        let results: Vec<SearchHit> = rank(&scores, self.doc_count)
            .into_iter()
            .map(|hit| SearchHit { doc_id: hit.doc_id, score: hit.score, url: self.url_for(hit.doc_id) })
            .collect();
        tracing::debug!(query = %query, hits = results.len(), "query evaluated");
        Ok(SearchResponse { query: query.normalized(), total_hits: results.len(), results })
    }

    fn url_for(&self, doc_id: DocId) -> Option<String> {
        match self.pages.url(doc_id) {
            Ok(url) => url,
            Err(err) => {
                tracing::warn!(doc_id, error = %err, "cannot read document url");
                None
            }
        }
    }
}

pub fn render_text(resp: &SearchResponse) -> String {
    let mut s = format!("Evaluating Query: {}\n", resp.query);
    if resp.results.is_empty() {
        s.push_str("No matching documents ...\n");
    } else {
        s.push_str(&format!("Matches {} documents (ranked):\n", resp.total_hits));
        for hit in &resp.results {
            let url = hit.url.as_deref().unwrap_or("?");
            s.push_str(&format!("Score: {:3} docID: {:3} | {}\n", hit.score, hit.doc_id, url));
        }
    }
    s.push_str(SEPARATOR);
    s.push('\n');
    s
}

fn render_json(line: &str, outcome: &Result<SearchResponse, QueryError>) -> Result<String> {
    let value = match outcome {
        Ok(resp) => serde_json::to_value(resp)?,
        Err(err) => serde_json::json!({ "query": line, "error": err.to_string() }),
    };
    Ok(serde_json::to_string(&value)? + "\n")
}

/// Answer one query per input line until end of input. Rejected queries are
/// reported and the loop carries on.
pub fn run<R: BufRead, W: Write>(querier: &Querier, input: R, out: &mut W, format: OutputFormat, prompt: bool) -> Result<()> {
    if prompt { write!(out, "{PROMPT}")?; out.flush()?; }
    for line in input.lines() {
        let line = line?;
        let outcome = querier.search(&line);
        let text = match format {
            OutputFormat::Json => render_json(&line, &outcome)?,
            OutputFormat::Text => match &outcome {
                Ok(resp) => render_text(resp),
                Err(err) => format!("Error: {err}\n{SEPARATOR}\n"),
            },
        };
        out.write_all(text.as_bytes())?;
        if prompt { write!(out, "{PROMPT}")?; }
        out.flush()?;
    }
    if prompt { writeln!(out)?; }
    Ok(())
}
