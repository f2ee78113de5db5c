//! Incremental, sans-io http 1.1 request parser.
//!
//! Bytes are fed to a [`Parser`] in whatever pieces they arrive from the network.
//! A token, header line or CRLF split across reads is fine, as is an entire request
//! arriving in one read. The parser tells apart "not enough data yet" from
//! "malformed" and never consumes input past the end of the request.
//!
//! # Example
//!
//! ```
//! use trickle::{ErrorKind, Outcome, Parser};
//!
//! let mut parser = Parser::new();
//!
//! // Incomplete request line.
//! let outcome = parser.feed(b"POST /upload HT");
//! assert!(matches!(outcome, Outcome::NeedMoreData));
//!
//! // The request line and part of the headers.
//! let outcome = parser.feed(b"TP/1.1\r\nHost: example.test\r\nContent-Len");
//! assert!(matches!(outcome, Outcome::Progressed));
//!
//! // Headers done, start of body.
//! let outcome = parser.feed(b"gth: 11\r\n\r\nhello");
//! assert!(matches!(outcome, Outcome::Progressed));
//!
//! // The rest of the body completes the request.
//! let request = match parser.feed(b" world") {
//!     Outcome::Complete(request) => request,
//!     _ => unreachable!(),
//! };
//!
//! assert_eq!(request.method(), "POST");
//! assert_eq!(request.target(), "/upload");
//! assert_eq!(request.version().to_string(), "1.1");
//! assert_eq!(request.header("Host"), Some("example.test"));
//! assert_eq!(request.body(), b"hello world");
//!
//! // Malformed input fails with a specific kind.
//! let mut parser = Parser::new();
//! let outcome = parser.feed(b"GET / HTTP/2.0\r\n\r\n");
//! assert!(matches!(outcome, Outcome::Failed(ErrorKind::UnsupportedVersion)));
//! ```
//!
//! To read straight off an [`std::io::Read`], use [`parse_from_stream`].

#[macro_use]
extern crate log;

mod buffer;
mod util;

mod error;
pub use error::{Error, ErrorKind};

mod config;
pub use config::Config;

mod line;
pub use line::{HttpVersion, RequestLine};

mod header;
pub use header::HeaderTable;

mod chunk;

mod body;

mod request;
pub use request::Request;

mod parser;
pub use parser::{Outcome, Parser, ParserState};

mod stream;
pub use stream::{parse_from_stream, parse_from_stream_with, read_request};

pub mod server;

#[cfg(test)]
mod test;
