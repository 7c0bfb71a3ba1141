use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Opens the named file, or standard input when no path is given.
///
/// Standard input is only accepted when something is piped into it; a
/// character device (an interactive terminal, `/dev/null`) yields
/// [`Error::Usage`] instead of blocking.
pub fn open(path: Option<&Path>) -> Result<Box<dyn BufRead + Send>> {
    match path {
        Some(path) => {
            debug!("reading {}", path.display());
            let file = File::open(path).map_err(|source| Error::FileOpen {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            if stdin_is_char_device().map_err(Error::StdinStat)? {
                return Err(Error::Usage);
            }
            debug!("reading stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}

#[cfg(unix)]
fn stdin_is_char_device() -> io::Result<bool> {
    use std::os::fd::AsFd;
    use std::os::unix::fs::FileTypeExt;

    let fd = io::stdin().as_fd().try_clone_to_owned()?;
    let metadata = File::from(fd).metadata()?;
    Ok(metadata.file_type().is_char_device())
}

#[cfg(not(unix))]
fn stdin_is_char_device() -> io::Result<bool> {
    use std::io::IsTerminal;

    Ok(io::stdin().is_terminal())
}
