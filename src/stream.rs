use std::io;

use crate::{Config, Error, ErrorKind, Outcome, Parser, Request};

/// Read one request from `source` using the default [`Config`].
///
/// ```
/// let input: &[u8] = b"GET /hello HTTP/1.1\r\nHost: example.test\r\n\r\n";
///
/// let req = trickle::parse_from_stream(input)?;
///
/// assert_eq!(req.method(), "GET");
/// assert_eq!(req.target(), "/hello");
/// assert_eq!(req.header("host"), Some("example.test"));
/// # Ok::<(), trickle::Error>(())
/// ```
pub fn parse_from_stream<R: io::Read>(source: R) -> Result<Request, Error> {
    parse_from_stream_with(source, &Config::default())
}

/// Read one request from `source`, with limits and read size from `config`.
pub fn parse_from_stream_with<R: io::Read>(mut source: R, config: &Config) -> Result<Request, Error> {
    let mut parser = Parser::with_config(config);
    read_request(&mut parser, &mut source, config.get_read_chunk_size())
}

/// Drive `parser` with reads of at most `chunk_size` bytes until the request is
/// complete, fails, or `source` ends.
///
/// Surplus bytes read past the end of the request stay in the parser, see
/// [`Parser::remaining`].
pub fn read_request<R: io::Read>(
    parser: &mut Parser,
    source: &mut R,
    chunk_size: usize,
) -> Result<Request, Error> {
    let mut chunk = vec![0; chunk_size.max(1)];

    loop {
        let n = match source.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Read failed: {}", e);
                return Err(e.into());
            }
        };

        if n == 0 {
            debug!("Source ended in state: {:?}", parser.state());
            return Err(ErrorKind::IncompleteRequest.into());
        }

        trace!("Read {} bytes", n);

        match parser.feed(&chunk[..n]) {
            Outcome::Complete(request) => return Ok(request),
            Outcome::Failed(kind) => return Err(kind.into()),
            Outcome::Progressed | Outcome::NeedMoreData => {}
        }
    }
}
