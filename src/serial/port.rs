use super::traits::Port;
use crate::interrupt::StopFlag;
use crate::serial::buffer::Buffer;
use crate::serial::errors::{Error, Result};
use crate::serial::wrapper::Wrapper;
use crate::serial::Connection;
use serialport::{DataBits, FlowControl, Parity, StopBits};
use std::time::Duration;

/// How long one read may block before the stop flag is checked again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);
const READ_BUFFER_SIZE: usize = 128;
const LONG_LINE_WARNING: usize = 4096;

struct ConnectionImpl<T: Port> {
    pub(in crate::serial::port) port: T,
    read_buffer: Buffer,
    stop: StopFlag,
}

impl<T: Port> ConnectionImpl<T> {
    fn attach(mut port: T, stop: StopFlag, buf_size: usize) -> Result<Self> {
        port.clear_input()?;
        Ok(ConnectionImpl {
            port,
            read_buffer: Buffer::new(buf_size),
            stop,
        })
    }
}

impl<T: Port> Connection for ConnectionImpl<T> {
    fn read_line(&mut self) -> Result<Vec<u8>> {
        let mut line = Vec::new();
        let mut long_line_warned = false;
        loop {
            if self.read_buffer.is_drained() {
                // Lines already buffered are still handed out; no new read
                // starts once the flag is up.
                if self.stop.is_raised() {
                    return Err(Error::Interrupted);
                }
                if self.read_buffer.refill(&mut self.port)? == 0 {
                    continue;
                }
            }
            match self.read_buffer.take_line() {
                Some(bin) => {
                    line.extend_from_slice(bin);
                    log::trace!("Serial Output: {}", String::from_utf8_lossy(&line).escape_debug());
                    return Ok(line);
                }
                None => {
                    if let Some(rest) = self.read_buffer.take_rest() {
                        line.extend_from_slice(rest);
                    }
                    if !long_line_warned && line.len() > LONG_LINE_WARNING {
                        log::warn!("No LF after {} bytes, still waiting for end of line", line.len());
                        long_line_warned = true;
                    }
                }
            }
        }
    }
}

pub fn new(path: &str, baud_rate: u32, stop: StopFlag) -> Result<impl Connection> {
    let port = serialport::new(path, baud_rate)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(POLL_INTERVAL)
        .open()?;
    log::debug!("Opened serial port {} at {} baud", path, baud_rate);

    ConnectionImpl::attach(Wrapper::new(port), stop, READ_BUFFER_SIZE)
}
