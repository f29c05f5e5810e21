use std::{io, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No clear strategy is registered for this platform.
    #[error("terminal clearing is not supported for your platform {0}")]
    UnsupportedPlatform(String),

    #[error("failed to start clear command `{program}`: {source}")]
    ClearSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("clear command `{program}` exited with {status}")]
    ClearStatus { program: String, status: ExitStatus },

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Error::UnsupportedPlatform(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
