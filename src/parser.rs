use std::mem;

use crate::body::{BodyMode, BodyReader};
use crate::buffer::Accumulator;
use crate::error::Result;
use crate::header::HeaderReader;
use crate::line::parse_request_line;
use crate::{Config, ErrorKind, HeaderTable, Request, RequestLine};

/// Where the parser is in the request.
///
/// States only ever move forward. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    AwaitingRequestLine,
    AwaitingHeaders,
    AwaitingBody,
    Done,
    Failed(ErrorKind),
}

impl ParserState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ParserState::Done | ParserState::Failed(_))
    }
}

/// Result of [`Parser::feed`].
#[derive(Debug)]
pub enum Outcome {
    /// At least one state transition happened and the parser now waits for input.
    Progressed,
    /// Nothing could advance, more input is needed.
    ///
    /// Also returned for input fed after the request was complete, which is
    /// ignored. Check [`Parser::is_done`] before feeding a parser that may
    /// already have handed out its request.
    NeedMoreData,
    /// The request is complete. This is handed out exactly once.
    Complete(Request),
    /// The input is malformed. Every further `feed` reports the same kind.
    Failed(ErrorKind),
}

/// Incremental HTTP/1.1 request parser.
///
/// Feed it bytes in whatever pieces they arrive from the network. Bytes after the
/// end of the request are never consumed, see [`Parser::remaining`].
#[derive(Debug)]
pub struct Parser {
    state: ParserState,
    buf: Accumulator,
    line: Option<RequestLine>,
    headers: HeaderTable,
    header_reader: HeaderReader,
    body_reader: BodyReader,
    body: Vec<u8>,
    max_request_line: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Parser {
            state: ParserState::AwaitingRequestLine,
            buf: Accumulator::new(),
            line: None,
            headers: HeaderTable::new(),
            header_reader: HeaderReader::new(config),
            body_reader: BodyReader::new(BodyMode::None),
            body: Vec::new(),
            max_request_line: config.get_max_request_line(),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ParserState::Done
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ParserState::Failed(_))
    }

    /// Input not (yet) consumed by the parser.
    ///
    /// Once done, these are the bytes following the request.
    pub fn remaining(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_remaining(self) -> Vec<u8> {
        self.buf.into_vec()
    }

    /// Append `input` and advance as far as the buffered bytes allow.
    ///
    /// A parser reads one request. Once it is done, `input` is dropped and the
    /// outcome is [`Outcome::NeedMoreData`], see [`Parser::is_done`].
    pub fn feed(&mut self, input: &[u8]) -> Outcome {
        match self.state {
            ParserState::Failed(kind) => return Outcome::Failed(kind),
            ParserState::Done => {
                debug!("Feed after request was complete, ignoring {} bytes", input.len());
                return Outcome::NeedMoreData;
            }
            _ => {}
        }

        self.buf.append(input);

        let before = self.state;

        while !self.state.is_terminal() {
            match self.step() {
                Ok(true) => {}
                Ok(false) => break,
                Err(kind) => {
                    debug!("Request failed in {:?}: {}", self.state, kind);
                    self.state = ParserState::Failed(kind);
                    return Outcome::Failed(kind);
                }
            }
        }

        if self.is_done() {
            if let Some(request) = self.take_request() {
                return Outcome::Complete(request);
            }
        }

        if self.state != before {
            Outcome::Progressed
        } else {
            Outcome::NeedMoreData
        }
    }

    /// Run the sub-parser for the current state once.
    /// `Ok(false)` means it needs more input.
    fn step(&mut self) -> Result<bool> {
        match self.state {
            ParserState::AwaitingRequestLine => {
                let Some(line) = parse_request_line(&mut self.buf, self.max_request_line)? else {
                    return Ok(false);
                };
                self.line = Some(line);
                self.transition(ParserState::AwaitingHeaders);
            }

            ParserState::AwaitingHeaders => {
                if !self.header_reader.read(&mut self.buf, &mut self.headers)? {
                    return Ok(false);
                }

                let mode = BodyMode::for_headers(&self.headers)?;
                trace!("Body mode: {:?}", mode);

                if mode.has_body() {
                    self.body_reader = BodyReader::new(mode);
                    self.transition(ParserState::AwaitingBody);
                } else {
                    self.transition(ParserState::Done);
                }
            }

            ParserState::AwaitingBody => {
                if !self.body_reader.read(&mut self.buf, &mut self.body)? {
                    return Ok(false);
                }
                debug_assert!(self.body_reader.is_ended());
                self.transition(ParserState::Done);
            }

            ParserState::Done | ParserState::Failed(_) => return Ok(false),
        }

        Ok(true)
    }

    fn transition(&mut self, next: ParserState) {
        trace!("State {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn take_request(&mut self) -> Option<Request> {
        let line = self.line.take()?;

        Some(Request {
            line,
            headers: mem::take(&mut self.headers),
            body: mem::take(&mut self.body),
        })
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
