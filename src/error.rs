use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Usage: cat <filename> | hyphenlu [-f <hyphen count>]\n       or: hyphenlu [-f <hyphen count>] <filename>"
    )]
    Usage,

    #[error("Error opening file {}: {source}", path.display())]
    FileOpen { path: PathBuf, source: io::Error },

    #[error("Error reading stdin: {0}")]
    StdinStat(#[source] io::Error),

    #[error("Error reading input: {0}")]
    Read(#[source] io::Error),

    #[error("Error writing output: {0}")]
    Output(#[source] io::Error),

    #[error("worker thread panicked")]
    WorkerPanic,
}

pub type Result<T> = std::result::Result<T, Error>;
