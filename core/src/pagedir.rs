use crate::error::{IndexError, Result};
use crate::DocId;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

/// Marker file the crawler leaves in every directory it produces.
pub const CRAWLER_MARKER: &str = ".crawler";

/// One crawled document: `url`, `depth`, then the raw html.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub depth: u32,
    pub html: String,
}

/// A crawler output directory. Documents live in files named `1`, `2`, ...
/// and the first missing id marks the end of the corpus.
#[derive(Debug, Clone)]
pub struct PageDir {
    pub root: PathBuf,
}

impl PageDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }

    fn marker(&self) -> PathBuf { self.root.join(CRAWLER_MARKER) }
    pub fn page_path(&self, id: DocId) -> PathBuf { self.root.join(id.to_string()) }

    pub fn is_crawler_dir(&self) -> bool { self.marker().is_file() }

    pub fn validate(&self) -> Result<()> {
        if self.is_crawler_dir() {
            Ok(())
        } else {
            Err(IndexError::NotCrawlerDirectory(self.root.clone()))
        }
    }

    /// Create the directory (if needed) and its marker file.
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| IndexError::io(&self.root, e))?;
        File::create(self.marker()).map_err(|e| IndexError::io(self.marker(), e))?;
        Ok(())
    }

    pub fn save_page(&self, id: DocId, page: &Page) -> Result<()> {
        let path = self.page_path(id);
        let contents = format!("{}\n{}\n{}\n", page.url, page.depth, page.html);
        fs::write(&path, contents).map_err(|e| IndexError::io(path, e))
    }

    /// Load document `id`, or `None` when there is no such file.
    pub fn load_page(&self, id: DocId) -> Result<Option<Page>> {
        let path = self.page_path(id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(IndexError::io(path, e)),
        };
        parse_page(id, &text).map(Some)
    }

    /// First line of document `id`, without reading the rest of the file.
    pub fn url(&self, id: DocId) -> Result<Option<String>> {
        let path = self.page_path(id);
        let f = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(IndexError::io(path, e)),
        };
        let mut line = String::new();
        BufReader::new(f).read_line(&mut line).map_err(|e| IndexError::io(&path, e))?;
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Number of documents, counting ids 1, 2, ... up to the first gap.
    pub fn doc_count(&self) -> DocId {
        let mut id: DocId = 1;
        while self.page_path(id).is_file() {
            id += 1;
        }
        id - 1
    }
}

fn parse_page(id: DocId, text: &str) -> Result<Page> {
    let malformed = |reason: &str| IndexError::MalformedPage { id, reason: reason.to_string() };
    let mut parts = text.splitn(3, '\n');
    let url = parts.next().map(|s| s.trim_end_matches('\r')).unwrap_or_default();
    if url.is_empty() {
        return Err(malformed("missing url line"));
    }
    let depth = parts
        .next()
        .ok_or_else(|| malformed("missing depth line"))?
        .trim()
        .parse::<u32>()
        .map_err(|_| malformed("depth is not a non-negative integer"))?;
    let html = parts.next().unwrap_or_default().to_string();
    Ok(Page { url: url.to_string(), depth, html })
}
