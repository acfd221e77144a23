use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    SerialError(#[from] serialport::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("interrupted while waiting for a line")]
    Interrupted,
}

pub type Result<T> = std::result::Result<T, Error>;
