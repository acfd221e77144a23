use std::io::Read;

/// Fixed-size read window over a byte stream, handed out one LF-terminated
/// chunk at a time.
pub struct Buffer {
    pub(self) data: Vec<u8>,
    pub(self) pointer: usize,
    pub(self) end: usize,
}

impl Buffer {
    pub fn new(buf_size: usize) -> Buffer {
        Buffer {
            data: vec![0u8; buf_size],
            pointer: 0,
            end: 0,
        }
    }

    pub fn pending(&self) -> usize {
        self.end - self.pointer
    }

    pub fn is_drained(&self) -> bool {
        self.pending() == 0
    }

    /// Reads once from `reader` into the window. Only valid once the window
    /// is drained.
    pub fn refill<R: Read>(&mut self, reader: &mut R) -> std::io::Result<usize> {
        debug_assert!(
            self.is_drained(),
            "refill with {} unread bytes pending",
            self.pending()
        );

        let n = reader.read(&mut self.data)?;
        self.pointer = 0;
        self.end = n;
        Ok(n)
    }

    /// Next chunk up to and including LF, if the window holds one.
    pub fn take_line(&mut self) -> Option<&[u8]> {
        let begin = self.pointer;
        let offset = self.data[begin..self.end].iter().position(|&b| b == b'\n')?;
        self.pointer = begin + offset + 1;
        Some(&self.data[begin..self.pointer])
    }

    /// Everything left in the window, used when a line spans several reads.
    pub fn take_rest(&mut self) -> Option<&[u8]> {
        if self.is_drained() {
            return None;
        }
        let begin = self.pointer;
        self.pointer = self.end;
        Some(&self.data[begin..self.end])
    }
}
