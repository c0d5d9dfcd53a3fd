use std::path::PathBuf;

/// Crate-wide error type.
///
/// Variants split along the fault lines in the error-handling design: fatal OS
/// failures (terminal/IO) bubble out of `main` and abort the process; the rest
/// are either handled as status-bar messages by the caller or never constructed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("tcgetattr/tcsetattr: {0}")]
    Termios(#[from] nix::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine window size")]
    WindowSize,

    #[error("could not open {path}: {source}")]
    Open { path: PathBuf, #[source] source: std::io::Error },
}
