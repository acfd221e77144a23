use crate::serial::Result;
use std::io::Read;

/// Byte source behind a [`Connection`].
pub trait Port: Read {
    /// Drops whatever the device has already queued on the input side.
    fn clear_input(&mut self) -> std::io::Result<()>;
}

pub trait Connection {
    /// Blocks until one LF-terminated line is available. The terminator is
    /// left in place.
    fn read_line(&mut self) -> Result<Vec<u8>>;
}
