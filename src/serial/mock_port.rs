use crate::interrupt::StopFlag;
use crate::serial::traits::Port;
use std::collections::VecDeque;
use std::io::{Error, ErrorKind, Read};

/// Scripted device. Each chunk is handed out by one `read` call (split if the
/// caller's buffer is smaller). Once drained it either raises `stop_on_drain`
/// and reports a poll miss, or fails with `UnexpectedEof`.
pub struct MockPort<'a> {
    stale: VecDeque<&'a [u8]>,
    chunks: VecDeque<&'a [u8]>,
    stop_on_drain: Option<StopFlag>,
    pub clear_calls: usize,
    pub reads: usize,
}

impl<'a> MockPort<'a> {
    pub fn new(chunks: Vec<&'a [u8]>) -> MockPort<'a> {
        MockPort {
            stale: VecDeque::new(),
            chunks: chunks.into(),
            stop_on_drain: None,
            clear_calls: 0,
            reads: 0,
        }
    }

    /// Bytes that were queued on the device before the port was opened.
    pub fn with_stale(mut self, stale: Vec<&'a [u8]>) -> Self {
        self.stale = stale.into();
        self
    }

    pub fn stop_on_drain(mut self, stop: StopFlag) -> Self {
        self.stop_on_drain = Some(stop);
        self
    }
}

impl<'a> Read for MockPort<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reads += 1;
        let queue = if self.stale.is_empty() {
            &mut self.chunks
        } else {
            &mut self.stale
        };

        let chunk = match queue.pop_front() {
            Some(chunk) => chunk,
            None => {
                return match &self.stop_on_drain {
                    Some(stop) => {
                        stop.raise();
                        Ok(0)
                    }
                    None => Err(Error::new(ErrorKind::UnexpectedEof, "mock drained")),
                };
            }
        };

        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n < chunk.len() {
            queue.push_front(&chunk[n..]);
        }
        Ok(n)
    }
}

impl<'a> Port for MockPort<'a> {
    fn clear_input(&mut self) -> std::io::Result<()> {
        self.clear_calls += 1;
        self.stale.clear();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_splits_large_chunk() {
        let mut mock = MockPort::new(vec![b"123456"]);
        let mut buf = [0u8; 4];
        assert_eq!(4, mock.read(&mut buf).unwrap());
        assert_eq!(b"1234", &buf);
        assert_eq!(2, mock.read(&mut buf).unwrap());
        assert_eq!(b"56", &buf[..2]);
    }

    #[test]
    fn stale_served_before_fresh() {
        let mut mock = MockPort::new(vec![b"fresh"]).with_stale(vec![b"old"]);
        let mut buf = [0u8; 8];
        let n = mock.read(&mut buf).unwrap();
        assert_eq!(b"old", &buf[..n]);
    }

    #[test]
    fn clear_drops_stale() {
        let mut mock = MockPort::new(vec![b"fresh"]).with_stale(vec![b"old"]);
        mock.clear_input().unwrap();
        let mut buf = [0u8; 8];
        let n = mock.read(&mut buf).unwrap();
        assert_eq!(b"fresh", &buf[..n]);
        assert_eq!(1, mock.clear_calls);
    }

    #[test]
    fn drained_raises_stop() {
        let stop = StopFlag::new();
        let mut mock = MockPort::new(Vec::new()).stop_on_drain(stop.clone());
        let mut buf = [0u8; 8];
        assert_eq!(0, mock.read(&mut buf).unwrap());
        assert_eq!(true, stop.is_raised());
    }

    #[test]
    fn drained_without_stop_fails() {
        let mut mock = MockPort::new(Vec::new());
        let mut buf = [0u8; 8];
        assert_eq!(ErrorKind::UnexpectedEof, mock.read(&mut buf).unwrap_err().kind());
    }
}
