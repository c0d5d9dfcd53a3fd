//! Editor-wide constants.
//!
//! Kept as a small struct of compile-time defaults rather than a file format;
//! config still gets a named, documented home instead of magic numbers
//! scattered through the editor.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Width to which a tab character expands, aligned to the next multiple.
    pub tab_stop: usize,
    /// Number of extra Ctrl-Q presses required to quit with unsaved changes.
    pub quit_times: u32,
    /// How long a status message stays on the message bar.
    pub message_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self { tab_stop: 8, quit_times: 2, message_timeout: Duration::from_secs(5) }
    }
}
