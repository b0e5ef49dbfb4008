pub mod builder;
pub mod error;
pub mod eval;
pub mod index;
pub mod pagedir;
pub mod persist;
pub mod query;
pub mod rank;
pub mod tokenizer;

pub use error::{IndexError, QueryError};
pub use index::{Count, DocId, Index, Postings};
pub use rank::Hit;
