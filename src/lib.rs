//! A minimal, modal-less text editor driven entirely through ANSI/VT100
//! escape sequences over a single POSIX terminal. See `editor::Editor` for
//! the entry point used by `main.rs`.

pub use crate::{config::Config, editor::Editor, error::Error};

mod ansi;
mod config;
mod editor;
mod error;
pub mod logging;
mod row;
mod syntax;
mod terminal;

#[cfg(unix)]
#[path = "unix.rs"]
mod unix;

#[cfg(unix)]
use unix as sys;
