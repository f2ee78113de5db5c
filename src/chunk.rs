use httparse::Status;

use crate::buffer::Accumulator;
use crate::error::Result;
use crate::ErrorKind;

// Chunk extensions are allowed, but not unbounded. Counts the CRLF.
const MAX_SIZE_LINE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dechunker {
    Size,
    Chunk(u64),
    CrLf,
    Ending,
    Ended,
}

impl Dechunker {
    pub fn new() -> Self {
        Dechunker::Size
    }

    /// Decode as much of `buf` as possible into `body`.
    ///
    /// Returns `true` once the terminating zero-size chunk and its CRLF are read.
    pub fn parse_input(&mut self, buf: &mut Accumulator, body: &mut Vec<u8>) -> Result<bool> {
        loop {
            let more = match self {
                Dechunker::Size => self.read_size(buf)?,
                Dechunker::Chunk(_) => self.read_data(buf, body),
                Dechunker::CrLf => self.expect_crlf(buf, Dechunker::Size)?,
                Dechunker::Ending => self.expect_crlf(buf, Dechunker::Ended)?,
                Dechunker::Ended => return Ok(true),
            };

            if !more {
                return Ok(false);
            }
        }
    }

    #[cfg(test)]
    fn left(&self) -> u64 {
        if let Self::Chunk(l) = self {
            *l
        } else {
            0
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, Self::Ended)
    }

    fn read_size(&mut self, buf: &mut Accumulator) -> Result<bool> {
        let (used, len) = match httparse::parse_chunk_size(&buf[..]) {
            Ok(Status::Complete((used, _))) if used > MAX_SIZE_LINE => {
                debug!("Chunk size line longer than {}", MAX_SIZE_LINE);
                return Err(ErrorKind::InvalidHeaders);
            }
            // httparse reads an empty size as 0.
            Ok(Status::Complete(_)) if !buf.first().map_or(false, u8::is_ascii_hexdigit) => {
                debug!("Chunk size line without size");
                return Err(ErrorKind::InvalidHeaders);
            }
            Ok(Status::Complete(v)) => v,
            Ok(Status::Partial) => {
                // At least one more byte to come, the CRLF is not complete.
                if buf.len() >= MAX_SIZE_LINE {
                    debug!("Chunk size line longer than {}", MAX_SIZE_LINE);
                    return Err(ErrorKind::InvalidHeaders);
                }
                return Ok(false);
            }
            Err(_) => {
                debug!("Invalid chunk size");
                return Err(ErrorKind::InvalidHeaders);
            }
        };

        trace!("Chunk size: {}", len);

        buf.consume(used);
        *self = if len == 0 {
            Self::Ending
        } else {
            Self::Chunk(len)
        };

        Ok(true)
    }

    fn read_data(&mut self, buf: &mut Accumulator, body: &mut Vec<u8>) -> bool {
        let Self::Chunk(left) = self else {
            unreachable!()
        };

        // Read the smallest amount of input or length left of chunk.
        let to_read = (buf.len() as u64).min(*left) as usize;

        body.extend_from_slice(buf.take(to_read));
        *left -= to_read as u64;

        if *left == 0 {
            *self = Self::CrLf;
        }

        to_read > 0
    }

    /// CRLF after chunk data, or the final CRLF after the zero-size chunk.
    /// In the latter position anything else would be a trailer, which we refuse.
    fn expect_crlf(&mut self, buf: &mut Accumulator, next: Dechunker) -> Result<bool> {
        match buf.get(..2) {
            Some(b"\r\n") => {}
            Some(_) => return Err(ErrorKind::InvalidHeaders),
            None => {
                if matches!(buf.first(), Some(c) if *c != b'\r') {
                    return Err(ErrorKind::InvalidHeaders);
                }
                return Ok(false);
            }
        }

        buf.consume(2);
        *self = next;

        Ok(true)
    }
}
