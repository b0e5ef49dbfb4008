use crate::error::{IndexError, Result};
use crate::{Count, DocId, Index};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Write `index` as text, one line per word: `word docID count docID count ... \n`.
///
/// Words are written in ascending order and postings by ascending docID, so
/// saving the same index twice produces identical files.
pub fn save_index<P: AsRef<Path>>(path: P, index: &Index) -> Result<()> {
    let path = path.as_ref();
    let f = File::create(path).map_err(|e| IndexError::io(path, e))?;
    let mut out = BufWriter::new(f);
    write_index(&mut out, index).map_err(|e| IndexError::io(path, e))?;
    out.flush().map_err(|e| IndexError::io(path, e))?;
    tracing::debug!(path = %path.display(), words = index.len(), "saved index");
    Ok(())
}

pub fn write_index<W: Write>(out: &mut W, index: &Index) -> std::io::Result<()> {
    for (word, postings) in index.sorted() {
        write!(out, "{word} ")?;
        for (doc_id, count) in postings.iter() {
            write!(out, "{doc_id} {count} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Read an index file into `index`, calling `Index::set` for every pair.
///
/// An unreadable file leaves `index` untouched. Parsing is strict: a bad line
/// fails the whole load, and `index` should then be discarded.
pub fn load_index<P: AsRef<Path>>(path: P, index: &mut Index) -> Result<()> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| IndexError::io(path, e))?;
    read_index(BufReader::new(f), index).map_err(|e| match e {
        IndexError::Io { source, .. } => IndexError::io(path, source),
        other => other,
    })?;
    tracing::info!(path = %path.display(), words = index.len(), "loaded index");
    Ok(())
}

pub fn read_index<R: BufRead>(reader: R, index: &mut Index) -> Result<()> {
    for (n, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| IndexError::io("", e))?;
        let line_no = n + 1;
        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else { continue };
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(parse_error(line_no, format!("'{word}' is not a lowercase word")));
        }
        let numbers: Vec<&str> = fields.collect();
        if numbers.is_empty() {
            return Err(parse_error(line_no, format!("'{word}' has no postings")));
        }
        if numbers.len() % 2 != 0 {
            return Err(parse_error(line_no, format!("'{word}' has a docID without a count")));
        }
        for pair in numbers.chunks_exact(2) {
            let doc_id: DocId = parse_number(line_no, pair[0])?;
            let count: Count = parse_number(line_no, pair[1])?;
            index.set(word, doc_id, count);
        }
    }
    Ok(())
}

impl Index {
    /// Load a fresh index from `path`.
    pub fn load_from<P: AsRef<Path>>(path: P, slots: usize) -> Result<Index> {
        let mut index = Index::new(slots);
        load_index(path, &mut index)?;
        Ok(index)
    }
}

fn parse_number(line: usize, field: &str) -> Result<u32> {
    field
        .parse()
        .map_err(|_| parse_error(line, format!("'{field}' is not a non-negative integer")))
}

fn parse_error(line: usize, reason: String) -> IndexError {
    IndexError::Parse { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Index {
        let mut index = Index::new(16);
        index.set("dog", 3, 1);
        index.set("cat", 2, 5);
        index.set("cat", 1, 3);
        index
    }

    #[test]
    fn writes_one_line_per_word() {
        let mut buf = Vec::new();
        write_index(&mut buf, &sample()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "cat 1 3 2 5 \ndog 3 1 \n");
    }

    #[test]
    fn reads_what_it_writes() {
        let mut buf = Vec::new();
        write_index(&mut buf, &sample()).unwrap();
        let mut loaded = Index::new(4);
        read_index(Cursor::new(buf), &mut loaded).unwrap();
        assert_eq!(loaded, sample());
    }

    #[test]
    fn empty_input_is_empty_index() {
        let mut index = Index::new(4);
        read_index(Cursor::new(""), &mut index).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn odd_trailing_number_is_rejected() {
        let mut index = Index::new(4);
        let err = read_index(Cursor::new("cat 1 3\ndog 2 \n"), &mut index).unwrap_err();
        assert!(matches!(err, IndexError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_integer_is_rejected() {
        let mut index = Index::new(4);
        let err = read_index(Cursor::new("cat 1 x \n"), &mut index).unwrap_err();
        assert!(matches!(err, IndexError::Parse { line: 1, .. }));
    }

    #[test]
    fn bad_word_is_rejected() {
        let mut index = Index::new(4);
        assert!(read_index(Cursor::new("42 1 1 \n"), &mut index).is_err());
        assert!(read_index(Cursor::new("Cat 1 1 \n"), &mut index).is_err());
        assert!(read_index(Cursor::new("cat\n"), &mut index).is_err());
    }
}
