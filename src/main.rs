use std::env::args;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use log::{error, info};

use kilo::Editor;

fn init_logging() {
    let log_path = std::env::temp_dir().join("kilo.log");
    if let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(&log_path) {
        let _ = simplelog::WriteLogger::init(
            log::LevelFilter::Info,
            simplelog::Config::default(),
            file,
        );
    }
}

fn main() -> ExitCode {
    init_logging();

    let filename = args().nth(1).map(PathBuf::from);
    info!("starting up, filename={filename:?}");

    match Editor::new(filename) {
        Ok(mut editor) => {
            if let Err(e) = editor.run() {
                report_fatal("run", &e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_fatal("startup", &e);
            ExitCode::FAILURE
        }
    }
}

/// Clears the screen and homes the cursor so the error is visible once the
/// terminal's raw mode has already been restored, then writes it to stderr.
fn report_fatal(operation: &str, err: &kilo::Error) {
    error!("fatal error during {operation}: {err}");
    let mut stdout = io::stdout();
    let _ = stdout.write_all(b"\x1b[2J\x1b[H");
    let _ = stdout.flush();
    eprintln!("{operation}: {err}");
}
