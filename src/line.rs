use std::fmt;
use std::str;

use crate::buffer::Accumulator;
use crate::error::Result;
use crate::util::is_visible;
use crate::ErrorKind;

/// HTTP version as a major.minor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpVersion {
    pub major: u8,
    pub minor: u8,
}

impl HttpVersion {
    pub const HTTP_11: HttpVersion = HttpVersion { major: 1, minor: 1 };
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// The first line of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    method: String,
    target: String,
    version: HttpVersion,
}

impl RequestLine {
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The request target as sent. Not validated as a URI.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn version(&self) -> HttpVersion {
        self.version
    }
}

/// Parse the request line once a full line is buffered.
///
/// `Ok(None)` means no CRLF yet, and the buffer is left untouched. The line,
/// CRLF included, may be at most `max_bytes` long.
pub(crate) fn parse_request_line(
    buf: &mut Accumulator,
    max_bytes: usize,
) -> Result<Option<RequestLine>> {
    let Some(i) = buf.find_crlf() else {
        if buf.len() > max_bytes {
            debug!("Pending request line exceeds {} bytes", max_bytes);
            return Err(ErrorKind::HeadersTooLarge);
        }
        return Ok(None);
    };

    if i + 2 > max_bytes {
        debug!("Request line exceeds {} bytes", max_bytes);
        return Err(ErrorKind::HeadersTooLarge);
    }

    let line = parse_line(&buf[..i])?;

    trace!("Request line: {} {} HTTP/{}", line.method, line.target, line.version);

    buf.consume(i + 2);

    Ok(Some(line))
}

fn parse_line(line: &[u8]) -> Result<RequestLine> {
    let mut parts = line.split(|c| *c == b' ');

    let (Some(method), Some(target), Some(version), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ErrorKind::InvalidRequestLine);
    };

    if method.is_empty() || !method.iter().all(|c| is_visible(*c)) {
        return Err(ErrorKind::InvalidRequestLine);
    }

    if target.is_empty() || target.iter().any(|c| c.is_ascii_control()) {
        return Err(ErrorKind::InvalidRequestLine);
    }

    let version = parse_version(version)?;

    if version != HttpVersion::HTTP_11 {
        return Err(ErrorKind::UnsupportedVersion);
    }

    Ok(RequestLine {
        method: to_string(method)?,
        target: to_string(target)?,
        version,
    })
}

/// Exactly `HTTP/<digit>.<digit>`.
fn parse_version(v: &[u8]) -> Result<HttpVersion> {
    let [b'H', b'T', b'T', b'P', b'/', major, b'.', minor] = *v else {
        return Err(ErrorKind::InvalidRequestLine);
    };

    if !major.is_ascii_digit() || !minor.is_ascii_digit() {
        return Err(ErrorKind::InvalidRequestLine);
    }

    Ok(HttpVersion {
        major: major - b'0',
        minor: minor - b'0',
    })
}

fn to_string(b: &[u8]) -> Result<String> {
    str::from_utf8(b)
        .map(ToOwned::to_owned)
        .map_err(|_| ErrorKind::InvalidRequestLine)
}
