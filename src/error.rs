use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Pipeline errors
// ---------------------------------------------------------------------------

/// Failures the pipeline can hit. An unreadable source is distinct from a
/// selection that legitimately matched nothing.
#[derive(Debug, Error)]
pub enum SieveError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SieveError {
    pub(crate) fn read(path: &Path, source: csv::Error) -> Self {
        SieveError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        SieveError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
