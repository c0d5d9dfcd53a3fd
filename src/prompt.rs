//! The modal single-line prompt and the incremental-find callback.
//!
//! The find callback's across-call state (`last_match`, `direction`, and the
//! saved copy of the last match-highlighted row) is modeled as a small struct
//! the prompt loop's caller owns, rather than file-scope statics, in the style
//! of kibi's `PromptMode::Find(.., last_match)` adapted to this crate's
//! byte-level row model.

use crate::editor::Editor;
use crate::keys::{ctrl_key, KeyEvent, ENTER};
use crate::syntax::Highlight;

/// Owns the state the incremental-find callback needs across invocations of
/// the same prompt session.
pub struct FindState {
    last_match: Option<usize>,
    direction: i64,
    saved: Option<(usize, Vec<Highlight>)>,
}

impl FindState {
    pub fn new() -> Self {
        Self { last_match: None, direction: 1, saved: None }
    }

    /// Called by the prompt loop after every keystroke of a find session.
    pub fn callback(&mut self, editor: &mut Editor, query: &str, key: KeyEvent) {
        if let Some((row_idx, hl)) = self.saved.take() {
            if let Some(row) = editor.document.rows.get_mut(row_idx) {
                row.hl = hl;
            }
        }

        match key {
            KeyEvent::Byte(ENTER) | KeyEvent::Escape => {
                self.last_match = None;
                self.direction = 1;
                return;
            }
            KeyEvent::ArrowRight | KeyEvent::ArrowDown => self.direction = 1,
            KeyEvent::ArrowLeft | KeyEvent::ArrowUp => self.direction = -1,
            _ => {
                self.last_match = None;
                self.direction = 1;
            }
        }
        if self.last_match.is_none() {
            self.direction = 1;
        }

        let numrows = editor.document.numrows();
        if numrows == 0 || query.is_empty() {
            return;
        }

        let start = self.last_match.unwrap_or(numrows - 1) as i64;
        let mut current = start;
        for _ in 0..numrows {
            current = (current + self.direction).rem_euclid(numrows as i64);
            let row_idx = current as usize;
            let row = &editor.document.rows[row_idx];
            if let Some(pos) = find_bytes(&row.render, query.as_bytes()) {
                self.last_match = Some(row_idx);
                editor.cursor.cy = row_idx;
                editor.cursor.cx = row.rx_to_cx(pos, editor.document.tab_stop);
                editor.viewport.row_off = numrows;

                let mut hl = row.hl.clone();
                self.saved = Some((row_idx, hl.clone()));
                for slot in &mut hl[pos..pos + query.len()] {
                    *slot = Highlight::Match;
                }
                editor.document.rows[row_idx].hl = hl;
                return;
            }
        }
    }
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

impl Editor {
    /// Displays `prompt_fmt` (its single `%s` replaced by the live buffer),
    /// reads keys until Enter/Escape, and invokes `callback` after every
    /// keystroke with the current buffer and the key just processed.
    pub fn prompt<F>(
        &mut self,
        prompt_fmt: &str,
        mut callback: Option<F>,
    ) -> Result<Option<String>, crate::error::Error>
    where
        F: FnMut(&mut Editor, &str, KeyEvent),
    {
        let mut buf = String::new();
        loop {
            self.set_status_message(prompt_fmt.replacen("%s", &buf, 1));
            self.refresh_screen()?;
            let key = self.read_key()?;

            let mut outcome: Option<Option<String>> = None;
            match key {
                KeyEvent::Byte(b) if b == crate::keys::BACKSPACE || b == ctrl_key(b'h') => {
                    buf.pop();
                }
                KeyEvent::Delete => {
                    buf.pop();
                }
                KeyEvent::Escape => outcome = Some(None),
                KeyEvent::Byte(ENTER) => {
                    if !buf.is_empty() {
                        outcome = Some(Some(buf.clone()));
                    }
                }
                KeyEvent::Byte(b) if b < 128 && !(b as char).is_ascii_control() => {
                    buf.push(b as char);
                }
                _ => {}
            }

            if let Some(cb) = callback.as_mut() {
                cb(self, &buf, key);
            }

            if let Some(result) = outcome {
                self.set_status_message(String::new());
                return Ok(result);
            }
        }
    }

    /// Saves the cursor/scroll state, runs an incremental-find prompt session,
    /// and restores that state if the user cancels.
    pub fn find(&mut self) -> Result<(), crate::error::Error> {
        let saved_cursor = self.cursor;
        let saved_row_off = self.viewport.row_off;
        let saved_col_off = self.viewport.col_off;

        let mut state = FindState::new();
        let result = self.prompt(
            "Search (Use ESC/Arrows/Enter): %s",
            Some(|editor: &mut Editor, query: &str, key: KeyEvent| state.callback(editor, query, key)),
        )?;

        if result.is_none() {
            self.cursor = saved_cursor;
            self.viewport.row_off = saved_row_off;
            self.viewport.col_off = saved_col_off;
        }
        Ok(())
    }
}
