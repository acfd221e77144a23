use super::traits::Port;
use serialport::{ClearBuffer, SerialPort};
use std::io::{Error, ErrorKind, Read, Result};

pub struct Wrapper {
    port: Box<dyn SerialPort>,
}

impl Port for Wrapper {
    fn clear_input(&mut self) -> Result<()> {
        self.port.clear(ClearBuffer::Input)?;
        Ok(())
    }
}

impl Read for Wrapper {
    // Timeouts and EINTR come back as Ok(0) so the caller can poll its stop
    // flag. A real zero-length read means the device went away.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.port.read(buf) {
            Ok(0) if !buf.is_empty() => Err(Error::new(
                ErrorKind::UnexpectedEof,
                "device reports readiness to read but returned no data",
            )),
            Err(e) if is_poll_miss(&e) => Ok(0),
            other => other,
        }
    }
}

impl Drop for Wrapper {
    fn drop(&mut self) {
        log::debug!(
            "Closing serial port {}",
            self.port.name().unwrap_or_else(|| String::from("<unnamed>"))
        );
    }
}

impl Wrapper {
    pub fn new(conn: Box<dyn SerialPort>) -> Wrapper {
        Wrapper { port: conn }
    }
}

fn is_poll_miss(err: &Error) -> bool {
    matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted)
}
