use std::fmt;
use std::ops::Deref;

use crate::util::find_crlf;

/// Unconsumed input.
///
/// Appending grows the buffer, consuming advances a read offset. The consumed
/// prefix is dropped lazily on append once it is at least half the allocation,
/// which keeps both amortized O(1) per byte.
#[derive(Default)]
pub(crate) struct Accumulator {
    buffer: Vec<u8>,
    pos: usize,
    /// Unconsumed bytes already searched for CRLF without a match.
    scanned: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, input: &[u8]) {
        if self.pos > 0 && self.pos >= self.buffer.len() / 2 {
            self.buffer.copy_within(self.pos.., 0);
            self.buffer.truncate(self.buffer.len() - self.pos);
            self.pos = 0;
        }
        self.buffer.extend_from_slice(input);
    }

    pub fn consume(&mut self, amount: usize) {
        if amount > self.len() {
            panic!("consume more than buffer len");
        }
        self.pos += amount;
        self.scanned = self.scanned.saturating_sub(amount);
    }

    /// Position of the next CRLF in the unconsumed bytes.
    ///
    /// Bytes searched by an earlier call that found nothing are not searched again.
    pub fn find_crlf(&mut self) -> Option<usize> {
        let from = self.scanned;
        match find_crlf(&self.buffer[self.pos + from..]) {
            Some(i) => Some(from + i),
            None => {
                // The last byte may be the CR of a CRLF split across appends.
                self.scanned = self.len().saturating_sub(1);
                None
            }
        }
    }

    /// Removes and returns the first `amount` bytes.
    pub fn take(&mut self, amount: usize) -> &[u8] {
        let start = self.pos;
        self.consume(amount);
        &self.buffer[start..start + amount]
    }

    pub fn into_vec(mut self) -> Vec<u8> {
        self.buffer.drain(..self.pos);
        self.buffer
    }
}

impl Deref for Accumulator {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.buffer[self.pos..]
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("len", &self.len())
            .field("consumed", &self.pos)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn append_and_consume() {
        let mut b = Accumulator::new();
        assert!(b.is_empty());

        b.append(b"GET / ");
        b.append(b"HTTP/1.1\r\n");
        assert_eq!(&*b, b"GET / HTTP/1.1\r\n");
        assert_eq!(b.find_crlf(), Some(14));

        b.consume(4);
        assert_eq!(&*b, b"/ HTTP/1.1\r\n");
        assert_eq!(b.find_crlf(), Some(10));

        b.consume(12);
        assert!(b.is_empty());
        assert_eq!(b.find_crlf(), None);
    }

    #[test]
    fn compacts_on_append() {
        let mut b = Accumulator::new();
        b.append(b"0123456789");
        b.consume(6);
        b.append(b"ab");

        // Consumed prefix is gone from the allocation.
        assert_eq!(b.pos, 0);
        assert_eq!(b.buffer, b"6789ab");
        assert_eq!(&*b, b"6789ab");
    }

    #[test]
    fn crlf_search_resumes() {
        let mut b = Accumulator::new();
        b.append(b"GET /aaaa");
        assert_eq!(b.find_crlf(), None);
        assert_eq!(b.scanned, 8);

        b.append(b"aaaa HTTP/1.1\r");
        assert_eq!(b.find_crlf(), None);
        assert_eq!(b.scanned, 22);

        // CR from the previous append is searched again.
        b.append(b"\nHost");
        assert_eq!(b.find_crlf(), Some(22));

        b.consume(24);
        assert_eq!(b.scanned, 0);
        assert_eq!(b.find_crlf(), None);
        assert_eq!(b.scanned, 3);
    }

    #[test]
    fn crlf_search_survives_compaction() {
        let mut b = Accumulator::new();
        b.append(b"A: 1\r\nB: 2");
        assert_eq!(b.find_crlf(), Some(4));
        b.consume(6);
        assert_eq!(b.find_crlf(), None);

        // Compacts, the offset is relative to the unconsumed bytes.
        b.append(b"\r\n");
        assert_eq!(b.pos, 0);
        assert_eq!(b.find_crlf(), Some(4));
    }

    #[test]
    fn take_returns_consumed_bytes() {
        let mut b = Accumulator::new();
        b.append(b"hello world");
        assert_eq!(b.take(5), b"hello");
        assert_eq!(&*b, b" world");
    }

    #[test]
    fn into_vec_is_unconsumed_tail() {
        let mut b = Accumulator::new();
        b.append(b"done\r\nnext");
        b.consume(6);
        assert_eq!(b.into_vec(), b"next");
    }

    #[test]
    #[should_panic]
    fn consume_past_end() {
        let mut b = Accumulator::new();
        b.append(b"ab");
        b.consume(3);
    }
}
