//! The row store: a line's source bytes, its tab-expanded render projection,
//! and the parallel highlight-class array, kept length-synchronized and
//! recomputed together — never expose a path that edits one without the
//! other.
//!
//! A single whole-document rope has no per-line derived state to hang render/
//! highlight projections off of, so rows are plain owned buffers, one per
//! line, in the style of other Rust kilo ports (kibi's `Row`): no interior
//! mutability, explicit recompute calls instead of dirty-flag invalidation.

use crate::syntax::{Highlight, Syntax};

pub const TAB_STOP: usize = 8;

#[derive(Debug, Default, Clone)]
pub struct Row {
    pub chars: Vec<u8>,
    pub render: Vec<u8>,
    pub hl: Vec<Highlight>,
}

impl Row {
    /// Builds a row from source bytes and immediately computes `render`/`hl`.
    pub fn new(chars: Vec<u8>, syntax: Option<&Syntax>, tab_stop: usize) -> Self {
        let mut row = Self { chars, render: Vec::new(), hl: Vec::new() };
        row.recompute(syntax, tab_stop);
        row
    }

    /// Recomputes `render` from `chars`, then `hl` from `render`. The two are
    /// always recomputed together so they can never drift out of sync.
    pub fn recompute(&mut self, syntax: Option<&Syntax>, tab_stop: usize) {
        self.update_render(tab_stop);
        self.update_highlight(syntax);
    }

    fn update_render(&mut self, tab_stop: usize) {
        self.render.clear();
        for &b in &self.chars {
            if b == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(b);
            }
        }
    }

    fn update_highlight(&mut self, syntax: Option<&Syntax>) {
        self.hl = crate::syntax::highlight_row(&self.render, syntax);
    }

    /// Converts a source-byte column to a render-cell column by walking
    /// `chars[0..cx]` and expanding tabs to the next `tab_stop` boundary.
    pub fn cx_to_rx(&self, cx: usize, tab_stop: usize) -> usize {
        let mut rx = 0;
        for &b in &self.chars[..cx.min(self.chars.len())] {
            if b == b'\t' {
                rx += (tab_stop - 1) - (rx % tab_stop);
            }
            rx += 1;
        }
        rx
    }

    /// Inverse of `cx_to_rx`: the first `cx` whose cumulative render width
    /// exceeds `rx`, or the row length if `rx` is past the rendered end.
    pub fn rx_to_cx(&self, rx: usize, tab_stop: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &b) in self.chars.iter().enumerate() {
            if b == b'\t' {
                cur_rx += (tab_stop - 1) - (cur_rx % tab_stop);
            }
            cur_rx += 1;
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Clamps `at` into `[0, chars.len()]`, inserts, and recomputes.
    pub fn insert_byte(&mut self, at: usize, b: u8, syntax: Option<&Syntax>, tab_stop: usize) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, b);
        self.recompute(syntax, tab_stop);
    }

    /// No-op if `at` is out of range; otherwise removes and recomputes.
    pub fn delete_byte(&mut self, at: usize, syntax: Option<&Syntax>, tab_stop: usize) {
        if at < self.chars.len() {
            self.chars.remove(at);
            self.recompute(syntax, tab_stop);
        }
    }

    /// Appends `bytes` to the end of `chars` and recomputes.
    pub fn append_bytes(&mut self, bytes: &[u8], syntax: Option<&Syntax>, tab_stop: usize) {
        self.chars.extend_from_slice(bytes);
        self.recompute(syntax, tab_stop);
    }
}
