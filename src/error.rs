//! Error types for the indexing pipeline.
//!
//! A [`ParseError`] is scoped to one file and never stops a run. A
//! [`WalkError`] means the directory traversal itself failed and the run is
//! over.

use std::path::PathBuf;

/// The parser adapter could not produce a usable tree for one file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Error parsing {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing {}:{line}:{column}: {message}{}", .path.display(), more_suffix(.more))]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        /// Further errors collected after the first one.
        more: usize,
    },
}

fn more_suffix(more: &usize) -> String {
    match *more {
        0 => String::new(),
        1 => " (and 1 more error)".to_string(),
        n => format!(" (and {} more errors)", n),
    }
}

/// The directory traversal cannot proceed.
#[derive(Debug, thiserror::Error)]
#[error("Error walking directory {}: {error}", .root.display())]
pub struct WalkError {
    pub root: PathBuf,
    /// Not exposed as `source()`: the message already carries it.
    pub error: walkdir::Error,
}
