use std::fmt;
use std::str;

use crate::buffer::Accumulator;
use crate::error::Result;
use crate::util::{is_visible, trim_ows};
use crate::{Config, ErrorKind};

/// Headers that decide body framing. These must never repeat.
const FRAMING: &[&str] = &["content-length", "transfer-encoding"];

/// Request headers in order of first appearance.
///
/// Names are stored lower-cased. A name sent more than once has its values
/// joined with `", "` in arrival order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderTable {
    entries: Vec<(String, String)>,
}

impl HeaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `name` must already be lower-case.
    pub(crate) fn insert(&mut self, name: String, value: String) -> Result<()> {
        let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) else {
            self.entries.push((name, value));
            return Ok(());
        };

        if FRAMING.contains(&name.as_str()) {
            debug!("Repeated framing header: {}", name);
            return Err(ErrorKind::InvalidHeaders);
        }

        existing.push_str(", ");
        existing.push_str(&value);

        Ok(())
    }
}

impl fmt::Debug for HeaderTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Reads header lines until the empty line, enforcing the size caps.
#[derive(Debug)]
pub(crate) struct HeaderReader {
    consumed: usize,
    lines: usize,
    max_bytes: usize,
    max_lines: usize,
}

impl HeaderReader {
    pub fn new(config: &Config) -> Self {
        HeaderReader {
            consumed: 0,
            lines: 0,
            max_bytes: config.get_max_header_bytes(),
            max_lines: config.get_max_headers(),
        }
    }

    /// Returns `true` once the empty line ending the headers is consumed.
    pub fn read(&mut self, buf: &mut Accumulator, headers: &mut HeaderTable) -> Result<bool> {
        loop {
            let Some(i) = buf.find_crlf() else {
                // An unterminated line counts too, or a sender could grow it forever.
                if self.consumed + buf.len() > self.max_bytes {
                    debug!("Pending header line exceeds {} bytes", self.max_bytes);
                    return Err(ErrorKind::HeadersTooLarge);
                }
                return Ok(false);
            };

            let used = i + 2;

            if self.consumed + used > self.max_bytes {
                debug!("Headers exceed {} bytes", self.max_bytes);
                return Err(ErrorKind::HeadersTooLarge);
            }

            if i == 0 {
                buf.consume(used);
                self.consumed += used;
                trace!("Headers done: {} lines, {} bytes", self.lines, self.consumed);
                return Ok(true);
            }

            self.lines += 1;
            if self.lines > self.max_lines {
                debug!("More than {} header lines", self.max_lines);
                return Err(ErrorKind::HeadersTooLarge);
            }

            let (name, value) = parse_header(&buf[..i])?;
            trace!("Header: {}: {}", name, value);
            headers.insert(name, value)?;

            buf.consume(used);
            self.consumed += used;
        }
    }
}

fn parse_header(line: &[u8]) -> Result<(String, String)> {
    let Some(colon) = line.iter().position(|c| *c == b':') else {
        return Err(ErrorKind::InvalidHeaders);
    };

    let name = trim_ows(&line[..colon]);
    if name.is_empty() || !name.iter().all(|c| is_visible(*c)) {
        return Err(ErrorKind::InvalidHeaders);
    }

    let value = trim_ows(&line[colon + 1..]);
    if value.iter().any(|c| matches!(c, b'\r' | b'\n' | b'\0')) {
        return Err(ErrorKind::InvalidHeaders);
    }

    let name = str::from_utf8(name).map_err(|_| ErrorKind::InvalidHeaders)?;
    let value = str::from_utf8(value).map_err(|_| ErrorKind::InvalidHeaders)?;

    Ok((name.to_ascii_lowercase(), value.to_owned()))
}
