use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of the comparison a file stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Original,
    Translated,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Role::Original => write!(f, "original"),
            Role::Translated => write!(f, "translated"),
        }
    }
}

/// Failure to turn a file into a JSON object.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read
    #[error("cannot read {}: {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not well-formed JSON
    #[error("cannot parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but is an array or a scalar
    #[error("cannot load {}: top-level value must be an object", .path.display())]
    Schema { path: PathBuf },
}

/// Any error that aborts a comparison.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or unrecognized command line arguments
    #[error("{0}")]
    Usage(String),

    /// One of the two input files could not be loaded
    #[error("Error reading {role} file: {source}")]
    Load {
        role: Role,
        #[source]
        source: LoadError,
    },

    /// The report could not be written out
    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    pub fn usage(reason: impl Into<String>) -> Self {
        Error::Usage(reason.into())
    }

    pub fn load(role: Role, source: LoadError) -> Self {
        Error::Load { role, source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
