use crate::reader::errors::{Error, Result};
use crate::reader::reading::{parse_reading, strip_terminator, Reading};
use crate::serial::Connection;
use std::io::Write;

/// How a [`LineReader`] run ended.
#[derive(Debug)]
pub enum Outcome {
    Interrupted,
    Failed(Error),
}

/// Prints one reading per received line until interrupted or something
/// goes wrong.
pub struct LineReader<C: Connection, W: Write> {
    connection: C,
    output: W,
    terminator_warned: bool,
}

impl<C: Connection, W: Write> LineReader<C, W> {
    pub fn new(connection: C, output: W) -> Self {
        LineReader {
            connection,
            output,
            terminator_warned: false,
        }
    }

    /// Consumes the reader; the connection is closed when this returns.
    pub fn run(mut self) -> Outcome {
        loop {
            if let Err(e) = self.step() {
                if e.is_interrupt() {
                    return Outcome::Interrupted;
                }
                return Outcome::Failed(e);
            }
        }
    }

    fn step(&mut self) -> Result<Reading> {
        let line = self.connection.read_line()?;
        self.check_terminator(&line);
        let reading = parse_reading(&line)?;
        writeln!(self.output, "{}", reading).map_err(Error::Output)?;
        self.output.flush().map_err(Error::Output)?;
        Ok(reading)
    }

    fn check_terminator(&mut self, line: &[u8]) {
        if self.terminator_warned {
            return;
        }
        if let Ok((_, term)) = strip_terminator(line) {
            if term != b"\r\n" {
                log::warn!(
                    "Line ends with {:?} instead of CR LF; the last two bytes are dropped regardless",
                    String::from_utf8_lossy(term)
                );
                self.terminator_warned = true;
            }
        }
    }
}
