use crate::{HeaderTable, HttpVersion, RequestLine};

/// A fully parsed request.
///
/// Only ever produced once the parser reaches its `Done` state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub(crate) line: RequestLine,
    pub(crate) headers: HeaderTable,
    pub(crate) body: Vec<u8>,
}

impl Request {
    pub fn line(&self) -> &RequestLine {
        &self.line
    }

    pub fn method(&self) -> &str {
        self.line.method()
    }

    pub fn target(&self) -> &str {
        self.line.target()
    }

    pub fn version(&self) -> HttpVersion {
        self.line.version()
    }

    pub fn headers(&self) -> &HeaderTable {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// The body with any transfer-coding removed. Empty if the request had none.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_parts(self) -> (RequestLine, HeaderTable, Vec<u8>) {
        (self.line, self.headers, self.body)
    }
}

#[cfg(feature = "http_crate")]
impl TryFrom<Request> for http::Request<Vec<u8>> {
    type Error = http::Error;

    fn try_from(req: Request) -> Result<Self, Self::Error> {
        let mut builder = http::Request::builder()
            .version(http::Version::HTTP_11)
            .method(req.method())
            .uri(req.target());

        for (name, value) in req.headers().iter() {
            builder = builder.header(name, value);
        }

        builder.body(req.body)
    }
}
