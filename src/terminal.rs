//! Raw terminal I/O: entering/leaving raw mode, a timeout-bounded byte read,
//! and window-size discovery with the ioctl-then-cursor-report fallback.
//!
//! Reads go through the raw fd with `VMIN`/`VTIME` so the key decoder can tell
//! "Escape key alone" from "start of an escape sequence" by timeout, and the
//! terminal is restored via `Drop` so a panic unwind still leaves the shell
//! usable.

use std::io::{self, Write};
use std::mem;
use std::os::fd::RawFd;

use libc::{c_ushort, STDOUT_FILENO, TIOCGWINSZ};
use nix::ioctl_read_bad;
use nix::libc::{VMIN, VTIME};
use nix::sys::termios::{
    tcgetattr, tcsetattr, ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, Termios,
};
use nix::unistd::read;

use crate::error::Error;

ioctl_read_bad!(read_winsize, TIOCGWINSZ, winsize);

#[derive(Debug)]
#[repr(C)]
struct winsize {
    ws_row: c_ushort,
    ws_col: c_ushort,
    ws_xpixel: c_ushort,
    ws_ypixel: c_ushort,
}

/// Owns the original termios state and restores it on drop. `enter_raw` may be
/// called any number of times (each call re-derives raw mode from the saved
/// original); `leave_raw` is idempotent.
pub struct Terminal {
    stdin_fd: RawFd,
    orig_termios: Termios,
    raw: bool,
}

impl Terminal {
    pub fn new(stdin_fd: RawFd) -> Result<Self, Error> {
        let orig_termios = tcgetattr(stdin_fd)?;
        Ok(Self { stdin_fd, orig_termios, raw: false })
    }

    /// Puts the terminal into raw mode: no
    /// break-to-SIGINT, no CR→NL translation, no parity checking, no 8th-bit
    /// stripping, no software flow control, no output post-processing, no
    /// canonical buffering, no extended input processing, no INTR/QUIT/SUSP
    /// signal generation, no local echo; 8-bit character size; reads return
    /// after at most 100ms even with no bytes available.
    pub fn enter_raw(&mut self) -> Result<(), Error> {
        let mut raw = self.orig_termios.clone();

        raw.input_flags &= !(InputFlags::BRKINT
            | InputFlags::ICRNL
            | InputFlags::INPCK
            | InputFlags::ISTRIP
            | InputFlags::IXON);
        raw.output_flags &= !OutputFlags::OPOST;
        raw.local_flags &=
            !(LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG);
        raw.control_flags |= ControlFlags::CS8;

        raw.control_chars[VMIN] = 0;
        raw.control_chars[VTIME] = 1;

        tcsetattr(self.stdin_fd, SetArg::TCSAFLUSH, &raw)?;
        self.raw = true;
        Ok(())
    }

    pub fn leave_raw(&mut self) -> Result<(), Error> {
        if self.raw {
            tcsetattr(self.stdin_fd, SetArg::TCSAFLUSH, &self.orig_termios)?;
            self.raw = false;
        }
        Ok(())
    }

    /// Blocks for at most ~100ms (the `VTIME` floor set by `enter_raw`) and
    /// returns the byte read, or `None` if the read timed out with nothing
    /// available.
    pub fn read_byte(&self) -> Result<Option<u8>, Error> {
        let mut buf = [0u8; 1];
        loop {
            match read(self.stdin_fd, &mut buf) {
                Ok(1) => return Ok(Some(buf[0])),
                Ok(_) => return Ok(None),
                Err(nix::Error::EINTR) => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Returns `(rows, cols)`. Tries the `TIOCGWINSZ` ioctl first; if that
    /// fails or reports a zero width, falls back to moving the cursor to the
    /// bottom-right corner and parsing the terminal's cursor-position report.
    pub fn window_size(&self) -> Result<(usize, usize), Error> {
        unsafe {
            let mut ws: winsize = mem::zeroed();
            if read_winsize(STDOUT_FILENO, &mut ws).is_ok() && ws.ws_col != 0 {
                return Ok((ws.ws_row as usize, ws.ws_col as usize));
            }
        }
        self.window_size_via_cursor_report()
    }

    fn window_size_via_cursor_report(&self) -> Result<(usize, usize), Error> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x1b[999C\x1b[999B")?;
        stdout.flush()?;
        stdout.write_all(b"\x1b[6n")?;
        stdout.flush()?;

        let mut buf = [0u8; 32];
        let mut i = 0;
        // Bound the number of timeout retries so a terminal that never
        // replies can't hang the editor forever.
        for _ in 0..(buf.len() * 10) {
            if i >= buf.len() - 1 {
                break;
            }
            match self.read_byte()? {
                Some(b'R') => break,
                Some(b) => {
                    buf[i] = b;
                    i += 1;
                }
                None => continue,
            }
        }

        let reply = std::str::from_utf8(&buf[..i]).map_err(|_| Error::WindowSize)?;
        let rest = reply.strip_prefix("\x1b[").ok_or(Error::WindowSize)?;
        let (rows, cols) = rest.split_once(';').ok_or(Error::WindowSize)?;
        let rows: usize = rows.parse().map_err(|_| Error::WindowSize)?;
        let cols: usize = cols.parse().map_err(|_| Error::WindowSize)?;
        Ok((rows, cols))
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = self.leave_raw();
    }
}
