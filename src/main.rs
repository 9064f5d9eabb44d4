use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use rust_kilo::{logging, Config, Editor, Error};

fn log_path() -> PathBuf {
    env::temp_dir().join("rust-kilo.log")
}

/// `kilo [filename]`. Extra positional arguments are ignored. An argument
/// starting with `-` is rejected: this build takes no options.
fn parse_args(args: impl Iterator<Item = String>) -> Result<Option<PathBuf>, Error> {
    for arg in args {
        if arg.starts_with('-') {
            return Err(Error::UnrecognizedOption(arg));
        }
        return Ok(Some(PathBuf::from(arg)));
    }
    Ok(None)
}

fn run() -> Result<(), Error> {
    let filename = parse_args(env::args().skip(1))?;

    let mut editor = Editor::new(Config::default())?;
    let result = (|| -> Result<(), Error> {
        if let Some(path) = &filename {
            editor.open(path)?;
        }
        editor.run()
    })();

    editor.restore_terminal()?;
    result
}

fn main() -> ExitCode {
    logging::init_best_effort(&log_path());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print!("\x1b[2J\x1b[H");
            eprintln!("rust-kilo: {err}");
            ExitCode::FAILURE
        }
    }
}
