//! The document: an ordered row sequence plus the scalars that travel with it
//! (filename, dirty counter, bound filetype). Row-list management only; the
//! cursor-aware editor operations (insert_char/insert_newline/delete_char)
//! live in `editor.rs`, which is the only caller that needs a cursor.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::row::Row;
use crate::syntax::{select_syntax, Syntax};

#[derive(Debug)]
pub struct Document {
    pub rows: Vec<Row>,
    pub filename: Option<PathBuf>,
    pub dirty: usize,
    pub syntax: Option<&'static Syntax>,
    /// Width to which a tab character expands; threaded into every row's
    /// render/coordinate computation rather than hardcoded, so `Config`'s
    /// `tab_stop` actually governs rendering.
    pub tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            filename: None,
            dirty: 0,
            syntax: None,
            tab_stop: crate::row::TAB_STOP,
        }
    }
}

impl Document {
    pub fn numrows(&self) -> usize {
        self.rows.len()
    }

    /// `at ∈ [0, numrows]`; shifts the tail; the new row is built from `bytes`
    /// with `render`/`hl` computed immediately.
    pub fn insert_row(&mut self, at: usize, bytes: Vec<u8>) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(bytes, self.syntax, self.tab_stop));
        self.dirty += 1;
    }

    /// Rejects (no-op) if `at` is out of range.
    pub fn delete_row(&mut self, at: usize) {
        if at < self.rows.len() {
            self.rows.remove(at);
            self.dirty += 1;
        }
    }

    /// Rebinds the highlighter by filename pattern and recomputes every row's
    /// highlight, since a filetype change invalidates the whole document's
    /// coloring.
    pub fn select_syntax(&mut self) {
        self.syntax = self
            .filename
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .and_then(select_syntax);
        for row in &mut self.rows {
            row.recompute(self.syntax, self.tab_stop);
        }
    }

    /// Reads `path` line by line, stripping a trailing `\r?\n` from each line,
    /// and binds the filetype. `dirty` is reset to 0 after load.
    ///
    /// Reads raw bytes rather than going through `std::io::Lines` (which
    /// validates UTF-8 and fails the whole load on one bad byte) — per
    /// spec.md's byte-level row model, a line is whatever bytes precede the
    /// next `\n`, not a UTF-8 string.
    pub fn load(&mut self, path: &Path) -> Result<(), Error> {
        let file = File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;
        self.rows.clear();
        self.filename = Some(path.to_path_buf());
        self.select_syntax();

        let mut reader = BufReader::new(file);
        loop {
            let mut bytes = Vec::new();
            let n = reader.read_until(b'\n', &mut bytes)?;
            if n == 0 {
                break;
            }
            if bytes.last() == Some(&b'\n') {
                bytes.pop();
                if bytes.last() == Some(&b'\r') {
                    bytes.pop();
                }
            }
            self.rows.push(Row::new(bytes, self.syntax, self.tab_stop));
        }
        self.dirty = 0;
        Ok(())
    }

    /// Serializes the buffer (each row's `chars` followed by `\n`) and writes
    /// it to `filename` (or, if given, a new name which also rebinds the
    /// filetype). Returns the byte count written on success.
    pub fn save(&mut self, filename: Option<PathBuf>) -> Result<usize, Error> {
        if let Some(name) = filename {
            self.filename = Some(name);
            self.select_syntax();
        }
        let path = self.filename.as_ref().expect("save() requires a filename");

        let mut contents = Vec::new();
        for row in &self.rows {
            contents.extend_from_slice(&row.chars);
            contents.push(b'\n');
        }

        let mut file =
            OpenOptions::new().create(true).write(true).truncate(true).mode(0o644).open(path)?;
        file.write_all(&contents)?;
        file.flush()?;

        self.dirty = 0;
        Ok(contents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_strips_trailing_crlf_and_resets_dirty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "int a;\r\nint b;\n").unwrap();
        let mut doc = Document::default();
        doc.load(file.path()).unwrap();
        assert_eq!(doc.numrows(), 2);
        assert_eq!(doc.rows[0].chars, b"int a;");
        assert_eq!(doc.rows[1].chars, b"int b;");
        assert_eq!(doc.dirty, 0);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut doc = Document::default();
        doc.insert_row(0, b"line one".to_vec());
        doc.insert_row(1, b"line two".to_vec());
        let file = tempfile::NamedTempFile::new().unwrap();
        doc.save(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(doc.dirty, 0);

        let mut reloaded = Document::default();
        reloaded.load(file.path()).unwrap();
        assert_eq!(reloaded.rows.len(), doc.rows.len());
        for (a, b) in reloaded.rows.iter().zip(doc.rows.iter()) {
            assert_eq!(a.chars, b.chars);
        }
    }

    #[test]
    fn load_accepts_non_utf8_bytes() {
        // A Latin-1 author name (0xE9 = 'é' in Latin-1, invalid as a lone UTF-8
        // continuation byte) must pass through as an opaque byte, not fail the
        // whole load the way `std::io::Lines` would.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"// author: Ren\xe9\nint a;\n").unwrap();
        let mut doc = Document::default();
        doc.load(file.path()).unwrap();
        assert_eq!(doc.numrows(), 2);
        assert_eq!(doc.rows[0].chars, b"// author: Ren\xe9");
        assert_eq!(doc.rows[1].chars, b"int a;");
    }

    #[test]
    fn tab_stop_governs_row_rendering() {
        let mut doc = Document::default();
        doc.tab_stop = 4;
        doc.insert_row(0, b"\tx".to_vec());
        assert_eq!(doc.rows[0].render, b"    x");
    }

    #[test]
    fn select_syntax_highlights_c_keyword() {
        let mut doc = Document::default();
        doc.insert_row(0, b"int a;".to_vec());
        doc.filename = Some(PathBuf::from("a.c"));
        doc.select_syntax();
        assert!(doc.syntax.is_some());
        assert_eq!(doc.rows[0].hl[0], crate::syntax::Highlight::KeywordSecondary);
    }

    #[test]
    fn delete_row_out_of_range_is_a_no_op() {
        let mut doc = Document::default();
        doc.insert_row(0, b"only row".to_vec());
        doc.delete_row(5);
        assert_eq!(doc.numrows(), 1);
    }
}
