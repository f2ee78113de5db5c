use crate::buffer::Accumulator;
use crate::chunk::Dechunker;
use crate::error::Result;
use crate::util::compare_lowercase_ascii;
use crate::{ErrorKind, HeaderTable};

/// How the request body is delimited. Decided once, when the headers end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum BodyMode {
    #[default]
    None,
    Sized(u64),
    Chunked,
}

impl BodyMode {
    pub fn for_headers(headers: &HeaderTable) -> Result<Self> {
        // https://datatracker.ietf.org/doc/html/rfc2616#section-4.4
        // If the message does include a non-identity transfer-coding, the
        // Content-Length MUST be ignored.
        if let Some(value) = headers.get("transfer-encoding") {
            if compare_lowercase_ascii(value, "chunked") {
                return Ok(Self::Chunked);
            }
        }

        if let Some(value) = headers.get("content-length") {
            if value.is_empty() || !value.bytes().all(|c| c.is_ascii_digit()) {
                debug!("Bad content-length: {:?}", value);
                return Err(ErrorKind::InvalidHeaders);
            }
            let len = value
                .parse::<u64>()
                .map_err(|_| ErrorKind::InvalidHeaders)?;
            return Ok(Self::Sized(len));
        }

        Ok(Self::None)
    }

    pub fn has_body(&self) -> bool {
        matches!(self, BodyMode::Sized(n) if *n > 0) || matches!(self, BodyMode::Chunked)
    }
}

#[derive(Debug)]
pub(crate) enum BodyReader {
    /// Delimited by content-length.
    /// The value is what's left to receive.
    LengthDelimited(u64),
    /// Chunked transfer encoding
    Chunked(Dechunker),
}

impl BodyReader {
    pub fn new(mode: BodyMode) -> Self {
        match mode {
            BodyMode::None => BodyReader::LengthDelimited(0),
            BodyMode::Sized(n) => BodyReader::LengthDelimited(n),
            BodyMode::Chunked => BodyReader::Chunked(Dechunker::new()),
        }
    }

    /// Moves body bytes from `buf` to `body`. Returns `true` when the body is complete.
    pub fn read(&mut self, buf: &mut Accumulator, body: &mut Vec<u8>) -> Result<bool> {
        match self {
            BodyReader::LengthDelimited(left) => {
                let to_read = (buf.len() as u64).min(*left) as usize;

                body.extend_from_slice(buf.take(to_read));
                *left -= to_read as u64;

                trace!("Read body: {}, left: {}", to_read, left);

                Ok(*left == 0)
            }
            BodyReader::Chunked(dechunker) => dechunker.parse_input(buf, body),
        }
    }

    pub fn is_ended(&self) -> bool {
        match self {
            BodyReader::LengthDelimited(v) => *v == 0,
            BodyReader::Chunked(v) => v.is_ended(),
        }
    }
}
