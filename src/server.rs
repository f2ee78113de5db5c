//! Accepting connections and reading their requests.
//!
//! Routing and writing responses is left to the caller, which gets the write half
//! of the connection back together with the parsed request.

use std::io;

use crate::stream::read_request;
use crate::{Config, Error, Parser, Request};

/// Source of connections, each split in a read and a write half.
pub trait Acceptor {
    type Reader: io::Read + Send + 'static;
    type Writer: io::Write + Send + 'static;

    fn accept(&mut self) -> io::Result<(Self::Reader, Self::Writer)>;
}

/// Accept one connection and read a single request from it.
///
/// An error accepting is [`Error::Io`]. Errors parsing the request drop the
/// connection.
pub fn accept_request<A: Acceptor>(
    acceptor: &mut A,
    config: &Config,
) -> Result<(Request, A::Writer), Error> {
    let (mut reader, writer) = acceptor.accept()?;

    let mut parser = Parser::with_config(config);
    let request = read_request(&mut parser, &mut reader, config.get_read_chunk_size())?;

    debug!("{} {}", request.method(), request.target());

    Ok((request, writer))
}

pub mod tcp {
    use std::io;
    use std::net::{TcpListener, TcpStream};

    use super::Acceptor;

    pub struct TcpAcceptor(pub TcpListener);

    impl Acceptor for TcpAcceptor {
        type Reader = TcpStream;
        type Writer = TcpStream;

        fn accept(&mut self) -> io::Result<(Self::Reader, Self::Writer)> {
            let (stream1, addr) = self.0.accept()?;
            trace!("Accepted connection from {}", addr);
            let stream2 = stream1.try_clone()?;
            Ok((stream1, stream2))
        }
    }
}
