//! The editor: the single owned aggregate threading terminal, document,
//! cursor/viewport state, and the message bar through the dispatcher and
//! renderer — one owned value, not diffuse globals.
//!
//! The key dispatcher and render pipeline build on a minimal
//! read-move-redraw loop (hide cursor, home, paint rows, reposition cursor),
//! extended with syntax color escapes, a status bar, a message bar, save, and
//! incremental find.

use std::io;
use std::os::fd::RawFd;
use std::path::PathBuf;
use std::time::Instant;

use libc::STDIN_FILENO;

use crate::config::Config;
use crate::document::Document;
use crate::error::Error;
use crate::keys::{self, ctrl_key, KeyEvent, BACKSPACE, ENTER};
use crate::output::OutputBuffer;
use crate::syntax::Highlight;
use crate::terminal::Terminal;

const VERSION: &str = "0.0.1";
const HELP_MESSAGE: &str = "HELP: Ctrl-s = save | Ctrl-f = find | Ctrl-q = quit";

#[derive(Debug, Clone, Copy, Default)]
pub struct CursorState {
    pub cx: usize,
    pub cy: usize,
    pub rx: usize,
}

#[derive(Debug, Default)]
pub struct Viewport {
    pub row_off: usize,
    pub col_off: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
}

struct StatusMessage {
    text: String,
    set_at: Instant,
}

pub struct Editor {
    // `None` only for the `#[cfg(test)]` constructor below, which exercises the
    // cursor/document/viewport coordinate logic without a real tty.
    pub(crate) terminal: Option<Terminal>,
    pub(crate) document: Document,
    pub(crate) cursor: CursorState,
    pub(crate) viewport: Viewport,
    message: Option<StatusMessage>,
    config: Config,
    quit_times: u32,
    output: OutputBuffer,
}

impl Editor {
    pub fn new(filename: Option<PathBuf>) -> Result<Self, Error> {
        Self::with_fd(STDIN_FILENO, filename)
    }

    fn with_fd(stdin_fd: RawFd, filename: Option<PathBuf>) -> Result<Self, Error> {
        let mut terminal = Terminal::new(stdin_fd)?;
        terminal.enter_raw()?;
        let (rows, cols) = terminal.window_size()?;

        let config = Config::default();
        let mut document = Document::default();
        document.tab_stop = config.tab_stop;
        if let Some(path) = filename {
            document.load(&path)?;
        }

        let mut editor = Self {
            terminal: Some(terminal),
            document,
            cursor: CursorState::default(),
            viewport: Viewport {
                row_off: 0,
                col_off: 0,
                screen_rows: rows.saturating_sub(2),
                screen_cols: cols,
            },
            message: None,
            config,
            quit_times: config.quit_times,
            output: OutputBuffer::new(),
        };
        editor.set_status_message(HELP_MESSAGE.to_string());
        Ok(editor)
    }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.message = Some(StatusMessage { text: text.into(), set_at: Instant::now() });
    }

    pub(crate) fn read_key(&self) -> Result<KeyEvent, Error> {
        keys::read_key(self.terminal.as_ref().expect("read_key requires a terminal"))
    }

    // ---- editor operations ----

    fn insert_char(&mut self, b: u8) {
        if self.cursor.cy == self.document.numrows() {
            self.document.insert_row(self.cursor.cy, Vec::new());
        }
        let syntax = self.document.syntax;
        let tab_stop = self.document.tab_stop;
        let row = &mut self.document.rows[self.cursor.cy];
        row.insert_byte(self.cursor.cx, b, syntax, tab_stop);
        self.document.dirty += 1;
        self.cursor.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cursor.cx == 0 {
            self.document.insert_row(self.cursor.cy, Vec::new());
        } else {
            let syntax = self.document.syntax;
            let tab_stop = self.document.tab_stop;
            let row = &mut self.document.rows[self.cursor.cy];
            let tail = row.chars.split_off(self.cursor.cx);
            row.recompute(syntax, tab_stop);
            self.document.insert_row(self.cursor.cy + 1, tail);
        }
        self.cursor.cy += 1;
        self.cursor.cx = 0;
    }

    fn delete_char(&mut self) {
        if self.cursor.cy == self.document.numrows() {
            return;
        }
        if self.cursor.cx == 0 && self.cursor.cy == 0 {
            return;
        }
        let syntax = self.document.syntax;
        let tab_stop = self.document.tab_stop;
        if self.cursor.cx > 0 {
            self.document.rows[self.cursor.cy].delete_byte(self.cursor.cx - 1, syntax, tab_stop);
            self.document.dirty += 1;
            self.cursor.cx -= 1;
        } else {
            let tail = self.document.rows[self.cursor.cy].chars.clone();
            self.cursor.cx = self.document.rows[self.cursor.cy - 1].chars.len();
            self.document.rows[self.cursor.cy - 1].append_bytes(&tail, syntax, tab_stop);
            self.document.delete_row(self.cursor.cy);
            self.cursor.cy -= 1;
        }
    }

    // ---- coordinate model / movement ----

    fn move_cursor(&mut self, key: KeyEvent) {
        let numrows = self.document.numrows();
        let row_len = |cy: usize, doc: &Document| -> usize {
            if cy < doc.numrows() {
                doc.rows[cy].chars.len()
            } else {
                0
            }
        };

        match key {
            KeyEvent::ArrowLeft => {
                if self.cursor.cx != 0 {
                    self.cursor.cx -= 1;
                } else if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                    self.cursor.cx = row_len(self.cursor.cy, &self.document);
                }
            }
            KeyEvent::ArrowRight => {
                let len = row_len(self.cursor.cy, &self.document);
                if self.cursor.cy < numrows && self.cursor.cx < len {
                    self.cursor.cx += 1;
                } else if self.cursor.cy < numrows && self.cursor.cx == len {
                    self.cursor.cy += 1;
                    self.cursor.cx = 0;
                }
            }
            KeyEvent::ArrowUp => {
                if self.cursor.cy > 0 {
                    self.cursor.cy -= 1;
                }
            }
            KeyEvent::ArrowDown => {
                if self.cursor.cy < numrows {
                    self.cursor.cy += 1;
                }
            }
            _ => {}
        }

        let len = row_len(self.cursor.cy, &self.document);
        if self.cursor.cx > len {
            self.cursor.cx = len;
        }
    }

    fn page_move(&mut self, up: bool) {
        if up {
            self.cursor.cy = self.viewport.row_off;
        } else {
            self.cursor.cy =
                (self.viewport.row_off + self.viewport.screen_rows - 1).min(self.document.numrows());
        }
        for _ in 0..self.viewport.screen_rows {
            self.move_cursor(if up { KeyEvent::ArrowUp } else { KeyEvent::ArrowDown });
        }
    }

    fn scroll(&mut self) {
        self.cursor.rx = if self.cursor.cy < self.document.numrows() {
            self.document.rows[self.cursor.cy].cx_to_rx(self.cursor.cx, self.document.tab_stop)
        } else {
            0
        };

        if self.cursor.cy < self.viewport.row_off {
            self.viewport.row_off = self.cursor.cy;
        }
        if self.cursor.cy >= self.viewport.row_off + self.viewport.screen_rows {
            self.viewport.row_off = self.cursor.cy - self.viewport.screen_rows + 1;
        }
        if self.cursor.rx < self.viewport.col_off {
            self.viewport.col_off = self.cursor.rx;
        }
        if self.cursor.rx >= self.viewport.col_off + self.viewport.screen_cols {
            self.viewport.col_off = self.cursor.rx - self.viewport.screen_cols + 1;
        }
    }

    // ---- renderer ----

    pub fn refresh_screen(&mut self) -> Result<(), Error> {
        self.scroll();

        self.output.push(b"\x1b[?25l");
        self.output.push(b"\x1b[H");

        self.draw_rows();
        self.draw_status_bar();
        self.draw_message_bar();

        let cursor_row = self.cursor.cy - self.viewport.row_off + 1;
        let cursor_col = self.cursor.rx - self.viewport.col_off + 1;
        self.output.push_str(&format!("\x1b[{cursor_row};{cursor_col}H"));
        self.output.push(b"\x1b[?25h");

        self.output.flush_to(io::stdout())?;
        Ok(())
    }

    fn draw_rows(&mut self) {
        for y in 0..self.viewport.screen_rows {
            let filerow = y + self.viewport.row_off;
            if filerow >= self.document.numrows() {
                if self.document.numrows() == 0 && y == self.viewport.screen_rows / 3 {
                    self.draw_welcome_line();
                } else {
                    self.output.push_byte(b'~');
                }
            } else {
                self.draw_text_row(filerow);
            }
            self.output.push(b"\x1b[K");
            self.output.push(b"\r\n");
        }
    }

    fn draw_welcome_line(&mut self) {
        let welcome = format!("Kilo editor -- version {VERSION}");
        let welcome: String = welcome.chars().take(self.viewport.screen_cols).collect();
        let padding = (self.viewport.screen_cols.saturating_sub(welcome.len())) / 2;
        self.output.push_byte(b'~');
        for _ in 1..padding {
            self.output.push_byte(b' ');
        }
        self.output.push_str(&welcome);
    }

    fn draw_text_row(&mut self, filerow: usize) {
        let row = &self.document.rows[filerow];
        let rsize = row.render.len();
        let col_off = self.viewport.col_off.min(rsize);
        let visible_len = (rsize - col_off).min(self.viewport.screen_cols);
        let bytes = &row.render[col_off..col_off + visible_len];
        let hl = &row.hl[col_off..col_off + visible_len];

        let mut current_color: Option<u8> = None;
        for (&b, &h) in bytes.iter().zip(hl.iter()) {
            if b.is_ascii_control() && b != b'\t' {
                self.output.push(b"\x1b[7m");
                let glyph = if b <= 26 { b'@' + b } else { b'?' };
                self.output.push_byte(glyph);
                self.output.push(b"\x1b[m");
                if let Some(color) = current_color {
                    self.output.push_str(&format!("\x1b[{color}m"));
                }
                continue;
            }
            if h == Highlight::Normal {
                if current_color.is_some() {
                    self.output.push_str("\x1b[39m");
                    current_color = None;
                }
            } else {
                let color = h.color();
                if current_color != Some(color) {
                    self.output.push_str(&format!("\x1b[{color}m"));
                    current_color = Some(color);
                }
            }
            self.output.push_byte(b);
        }
        if current_color.is_some() {
            self.output.push_str("\x1b[39m");
        }
    }

    fn draw_status_bar(&mut self) {
        self.output.push(b"\x1b[7m");

        let name = self
            .document
            .filename
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .map(|n| n.chars().take(20).collect::<String>())
            .unwrap_or_else(|| "[No Name]".to_string());
        let modified = if self.document.dirty > 0 { " (modified)" } else { "" };
        let mut left = format!("{name} - {} lines{modified}", self.document.numrows());
        left.truncate(self.viewport.screen_cols);

        let filetype = self.document.syntax.map(|s| s.name).unwrap_or("no ft");
        let right = format!("{filetype} | {}/{}", self.cursor.cy + 1, self.document.numrows());

        if left.len() + right.len() <= self.viewport.screen_cols {
            self.output.push_str(&left);
            for _ in 0..(self.viewport.screen_cols - left.len() - right.len()) {
                self.output.push_byte(b' ');
            }
            self.output.push_str(&right);
        } else {
            left.truncate(self.viewport.screen_cols);
            self.output.push_str(&left);
        }

        self.output.push(b"\x1b[m");
        self.output.push(b"\r\n");
    }

    fn draw_message_bar(&mut self) {
        self.output.push(b"\x1b[K");
        if let Some(message) = &self.message {
            if message.set_at.elapsed() < self.config.message_timeout {
                let text: String = message.text.chars().take(self.viewport.screen_cols).collect();
                self.output.push_str(&text);
            }
        }
    }

    // ---- save ----

    fn save(&mut self) -> Result<(), Error> {
        let mut new_name = None;
        if self.document.filename.is_none() {
            let name = self.prompt("Save as: %s (ESC to cancel)", None::<fn(&mut Editor, &str, KeyEvent)>)?;
            match name {
                Some(name) if !name.is_empty() => new_name = Some(PathBuf::from(name)),
                _ => {
                    self.set_status_message("Save cancelled");
                    return Ok(());
                }
            }
        }

        match self.document.save(new_name) {
            Ok(n) => self.set_status_message(format!("{n} bytes written to disk")),
            Err(e) => self.set_status_message(format!("Can't save! I/O error: {e}")),
        }
        Ok(())
    }

    /// Ctrl-Q's confirmation logic: quits outright if the buffer is clean or
    /// the counter is exhausted, otherwise warns and decrements. Returns
    /// whether the editor should keep running.
    fn handle_quit(&mut self) -> bool {
        if self.document.dirty != 0 && self.quit_times > 0 {
            let remaining = self.quit_times;
            self.set_status_message(format!(
                "Warning! File has unsaved changes. Press Ctrl-Q {remaining} more time(s) to quit."
            ));
            self.quit_times -= 1;
            true
        } else {
            false
        }
    }

    // ---- key dispatch ----

    /// Returns `Ok(false)` when the user has confirmed quit.
    pub fn process_keypress(&mut self) -> Result<bool, Error> {
        let key = self.read_key()?;

        match key {
            KeyEvent::Byte(b) if b == ctrl_key(b'q') => return Ok(self.handle_quit()),
            KeyEvent::Byte(b) if b == ctrl_key(b's') => {
                self.save()?;
            }
            KeyEvent::Byte(b) if b == ctrl_key(b'f') => {
                self.find()?;
            }
            KeyEvent::Byte(b) if b == ctrl_key(b'l') => {}
            KeyEvent::Escape => {}
            KeyEvent::Byte(ENTER) => self.insert_newline(),
            KeyEvent::Byte(BACKSPACE) => self.delete_char(),
            KeyEvent::Byte(b) if b == ctrl_key(b'h') => self.delete_char(),
            KeyEvent::Delete => {
                self.move_cursor(KeyEvent::ArrowRight);
                self.delete_char();
            }
            KeyEvent::ArrowUp | KeyEvent::ArrowDown | KeyEvent::ArrowLeft | KeyEvent::ArrowRight => {
                self.move_cursor(key);
            }
            KeyEvent::PageUp => self.page_move(true),
            KeyEvent::PageDown => self.page_move(false),
            KeyEvent::Home => self.cursor.cx = 0,
            KeyEvent::End => {
                if self.cursor.cy < self.document.numrows() {
                    self.cursor.cx = self.document.rows[self.cursor.cy].chars.len();
                }
            }
            KeyEvent::Byte(b) => self.insert_char(b),
        }

        self.quit_times = self.config.quit_times;
        Ok(true)
    }

    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.refresh_screen()?;
            if !self.process_keypress()? {
                return Ok(());
            }
        }
    }

    /// Builds an `Editor` with no backing terminal, for exercising the
    /// cursor/document/viewport coordinate logic in unit tests. `read_key` and
    /// `refresh_screen`'s terminal-facing pieces are not used by those tests.
    #[cfg(test)]
    fn for_test(document: Document, screen_rows: usize, screen_cols: usize) -> Self {
        Self {
            terminal: None,
            document,
            cursor: CursorState::default(),
            viewport: Viewport { row_off: 0, col_off: 0, screen_rows, screen_cols },
            message: None,
            config: Config::default(),
            quit_times: Config::default().quit_times,
            output: OutputBuffer::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with_rows(rows: &[&[u8]]) -> Document {
        let mut doc = Document::default();
        for (i, r) in rows.iter().enumerate() {
            doc.insert_row(i, r.to_vec());
        }
        doc.dirty = 0;
        doc
    }

    #[test]
    fn insert_char_on_virtual_eof_row_creates_a_row() {
        let mut ed = Editor::for_test(Document::default(), 10, 80);
        assert_eq!(ed.cursor.cy, ed.document.numrows());
        ed.insert_char(b'x');
        assert_eq!(ed.document.numrows(), 1);
        assert_eq!(ed.document.rows[0].chars, b"x");
        assert_eq!(ed.cursor.cx, 1);
        assert!(ed.document.dirty > 0);
    }

    #[test]
    fn insert_char_then_delete_char_restores_row_and_cursor() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"hello"]), 10, 80);
        ed.cursor.cx = 2;
        ed.insert_char(b'Z');
        assert_eq!(ed.document.rows[0].chars, b"heZllo");
        ed.delete_char();
        assert_eq!(ed.document.rows[0].chars, b"hello");
        assert_eq!(ed.cursor.cx, 2);
    }

    #[test]
    fn insert_newline_splits_row_and_moves_cursor() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"hello world"]), 10, 80);
        ed.cursor.cx = 5;
        ed.insert_newline();
        assert_eq!(ed.document.numrows(), 2);
        assert_eq!(ed.document.rows[0].chars, b"hello");
        assert_eq!(ed.document.rows[1].chars, b" world");
        assert_eq!(ed.cursor.cy, 1);
        assert_eq!(ed.cursor.cx, 0);
    }

    #[test]
    fn insert_newline_at_column_zero_inserts_empty_row_above() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"hello"]), 10, 80);
        ed.insert_newline();
        assert_eq!(ed.document.numrows(), 2);
        assert_eq!(ed.document.rows[0].chars, b"");
        assert_eq!(ed.document.rows[1].chars, b"hello");
        assert_eq!(ed.cursor.cy, 1);
    }

    #[test]
    fn insert_newline_then_delete_char_restores_row_and_cursor() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"hello world"]), 10, 80);
        ed.cursor.cx = 5;
        ed.insert_newline();
        ed.delete_char();
        assert_eq!(ed.document.numrows(), 1);
        assert_eq!(ed.document.rows[0].chars, b"hello world");
        assert_eq!(ed.cursor.cy, 0);
        assert_eq!(ed.cursor.cx, 5);
    }

    #[test]
    fn delete_char_at_origin_is_a_no_op() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"hello"]), 10, 80);
        ed.delete_char();
        assert_eq!(ed.document.rows[0].chars, b"hello");
        assert_eq!(ed.cursor.cx, 0);
        assert_eq!(ed.cursor.cy, 0);
    }

    #[test]
    fn delete_char_joins_line_at_column_zero() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"foo", b"bar"]), 10, 80);
        ed.cursor.cy = 1;
        ed.cursor.cx = 0;
        ed.delete_char();
        assert_eq!(ed.document.numrows(), 1);
        assert_eq!(ed.document.rows[0].chars, b"foobar");
        assert_eq!(ed.cursor.cy, 0);
        assert_eq!(ed.cursor.cx, 3);
    }

    #[test]
    fn delete_char_past_eof_is_a_no_op() {
        let mut ed = Editor::for_test(Document::default(), 10, 80);
        ed.delete_char();
        assert_eq!(ed.document.numrows(), 0);
        assert_eq!(ed.cursor.cx, 0);
        assert_eq!(ed.cursor.cy, 0);
    }

    #[test]
    fn enter_on_empty_document_creates_one_row_and_moves_to_1_0() {
        let mut ed = Editor::for_test(Document::default(), 10, 80);
        ed.insert_newline();
        assert_eq!(ed.document.numrows(), 1);
        assert_eq!(ed.document.rows[0].chars, b"");
        assert_eq!((ed.cursor.cy, ed.cursor.cx), (1, 0));
    }

    #[test]
    fn arrow_left_wraps_to_previous_line_end() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"foo", b"bar"]), 10, 80);
        ed.cursor.cy = 1;
        ed.cursor.cx = 0;
        ed.move_cursor(KeyEvent::ArrowLeft);
        assert_eq!(ed.cursor.cy, 0);
        assert_eq!(ed.cursor.cx, 3);
    }

    #[test]
    fn arrow_right_wraps_to_next_line_start() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"foo", b"bar"]), 10, 80);
        ed.cursor.cx = 3;
        ed.move_cursor(KeyEvent::ArrowRight);
        assert_eq!(ed.cursor.cy, 1);
        assert_eq!(ed.cursor.cx, 0);
    }

    #[test]
    fn arrow_left_at_document_start_does_not_move() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"foo"]), 10, 80);
        ed.move_cursor(KeyEvent::ArrowLeft);
        assert_eq!((ed.cursor.cy, ed.cursor.cx), (0, 0));
    }

    #[test]
    fn vertical_move_clamps_cx_to_shorter_row() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"a long line", b"x"]), 10, 80);
        ed.cursor.cx = 10;
        ed.move_cursor(KeyEvent::ArrowDown);
        assert_eq!(ed.cursor.cy, 1);
        assert_eq!(ed.cursor.cx, 1);
    }

    #[test]
    fn page_down_jumps_to_bottom_of_viewport_then_advances() {
        let rows: Vec<Vec<u8>> = (0..20).map(|i| format!("row{i}").into_bytes()).collect();
        let mut doc = Document::default();
        for (i, r) in rows.iter().enumerate() {
            doc.insert_row(i, r.clone());
        }
        let mut ed = Editor::for_test(doc, 5, 80);
        ed.viewport.row_off = 2;
        ed.page_move(false);
        assert!(ed.cursor.cy >= 2 + 5 - 1);
    }

    #[test]
    fn scroll_keeps_cursor_row_within_viewport() {
        let rows: Vec<Vec<u8>> = (0..20).map(|i| format!("row{i}").into_bytes()).collect();
        let mut doc = Document::default();
        for (i, r) in rows.iter().enumerate() {
            doc.insert_row(i, r.clone());
        }
        let mut ed = Editor::for_test(doc, 5, 80);
        ed.cursor.cy = 15;
        ed.scroll();
        assert!(ed.cursor.cy >= ed.viewport.row_off);
        assert!(ed.cursor.cy < ed.viewport.row_off + ed.viewport.screen_rows);
    }

    #[test]
    fn scroll_recomputes_rx_from_tabs() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"\tx"]), 10, 80);
        ed.cursor.cx = 2;
        ed.scroll();
        assert_eq!(ed.cursor.rx, crate::row::TAB_STOP + 1);
    }

    #[test]
    fn quit_with_unsaved_changes_requires_confirmation() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"x"]), 10, 80);
        ed.document.dirty = 1;

        // Two warnings, then the third Ctrl-Q actually quits.
        assert!(ed.handle_quit());
        assert!(ed.handle_quit());
        assert!(!ed.handle_quit());
    }

    #[test]
    fn quit_with_clean_buffer_quits_immediately() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"x"]), 10, 80);
        assert_eq!(ed.document.dirty, 0);
        assert!(!ed.handle_quit());
    }

    #[test]
    fn non_quit_key_resets_quit_counter() {
        let mut ed = Editor::for_test(doc_with_rows(&[b"x"]), 10, 80);
        ed.document.dirty = 1;
        ed.handle_quit();
        assert!(ed.quit_times < ed.config.quit_times);
        ed.quit_times = ed.config.quit_times; // what process_keypress does for any other key
        assert_eq!(ed.quit_times, Config::default().quit_times);
    }

    // draw_status_bar's left half is "[No Name] - 0 lines" (19 bytes) and its
    // right half is "no ft | 1/0" (11 bytes) for an empty, unnamed document, so
    // screen_cols 30 is the exact fit boundary and 29 is one column short.

    #[test]
    fn status_bar_right_aligns_text_on_exact_fit() {
        let mut ed = Editor::for_test(Document::default(), 10, 30);
        ed.draw_status_bar();
        let text = String::from_utf8(ed.output.as_bytes().to_vec()).unwrap();
        assert!(text.contains("[No Name] - 0 lines"));
        assert!(text.contains("no ft | 1/0"));
        assert!(text.ends_with("no ft | 1/0\x1b[m\r\n"));
    }

    #[test]
    fn status_bar_drops_right_half_when_it_would_overflow() {
        let mut ed = Editor::for_test(Document::default(), 10, 29);
        ed.draw_status_bar();
        let text = String::from_utf8(ed.output.as_bytes().to_vec()).unwrap();
        assert!(text.contains("[No Name] - 0 lines"));
        assert!(!text.contains("no ft | 1/0"));
    }

    #[test]
    fn empty_document_shows_welcome_line_at_one_third_of_screen() {
        let mut ed = Editor::for_test(Document::default(), 9, 40);
        ed.draw_rows();
        let text = String::from_utf8(ed.output.as_bytes().to_vec()).unwrap();
        let lines: Vec<&str> = text.split("\r\n").collect();
        assert_eq!(lines[0], "~\x1b[K");
        assert_eq!(lines[ed.viewport.screen_rows - 1], "~\x1b[K");
        let welcome_line = lines[ed.viewport.screen_rows / 3];
        assert!(welcome_line.contains(&format!("Kilo editor -- version {VERSION}")));
        assert!(welcome_line.starts_with('~'));
    }
}
