use crate::DocId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} was not produced by the crawler (no .crawler file)", .0.display())]
    NotCrawlerDirectory(PathBuf),
    #[error("document {id} is malformed: {reason}")]
    MalformedPage { id: DocId, reason: String },
    #[error("index file line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io { path: path.into(), source }
    }
}

/// Why a query line was rejected. Reported per query; never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("query is empty")]
    Empty,
    #[error("bad character '{0}' in query")]
    InvalidCharacter(char),
    #[error("invalid logic: 'and'/'or' cannot be first, last, or adjacent")]
    InvalidLogic,
}

pub type Result<T> = std::result::Result<T, IndexError>;
