use crate::serial::Error as SerialError;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    Serial(#[from] SerialError),

    #[error("line of {0} bytes is too short to carry a two-byte terminator")]
    TruncatedLine(usize),

    #[error("line is not valid UTF-8: {bytes}")]
    Decode {
        bytes: String,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("could not parse {text:?} as a number")]
    Parse {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("failed to write reading: {0}")]
    Output(#[source] std::io::Error),
}

impl Error {
    pub fn is_interrupt(&self) -> bool {
        matches!(self, Error::Serial(SerialError::Interrupted))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
