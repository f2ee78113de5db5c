/// Limits and sizes for parsing requests.
///
/// ```
/// use trickle::Config;
///
/// let config = Config::new()
///     .max_header_bytes(16 * 1024)
///     .read_chunk_size(4096);
///
/// assert_eq!(config.get_max_header_bytes(), 16 * 1024);
/// assert_eq!(config.get_max_headers(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_request_line: usize,
    max_header_bytes: usize,
    max_headers: usize,
    read_chunk_size: usize,
}

const DEFAULT_MAX_REQUEST_LINE: usize = 8 * 1024;
const DEFAULT_MAX_HEADER_BYTES: usize = 8 * 1024;
const DEFAULT_MAX_HEADERS: usize = 100;
const DEFAULT_READ_CHUNK_SIZE: usize = 1024;

impl Config {
    pub fn new() -> Self {
        Config {
            max_request_line: DEFAULT_MAX_REQUEST_LINE,
            max_header_bytes: DEFAULT_MAX_HEADER_BYTES,
            max_headers: DEFAULT_MAX_HEADERS,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
        }
    }

    /// Cap on the request line, CRLF included.
    pub fn max_request_line(mut self, v: usize) -> Self {
        self.max_request_line = v;
        self
    }

    /// Cap on the total bytes of the header block, CRLFs included.
    pub fn max_header_bytes(mut self, v: usize) -> Self {
        self.max_header_bytes = v;
        self
    }

    /// Cap on the number of header lines.
    pub fn max_headers(mut self, v: usize) -> Self {
        self.max_headers = v;
        self
    }

    /// Size of each read from a byte source. Clamped to at least 1.
    pub fn read_chunk_size(mut self, v: usize) -> Self {
        self.read_chunk_size = v.max(1);
        self
    }

    pub fn get_max_request_line(&self) -> usize {
        self.max_request_line
    }

    pub fn get_max_header_bytes(&self) -> usize {
        self.max_header_bytes
    }

    pub fn get_max_headers(&self) -> usize {
        self.max_headers
    }

    pub fn get_read_chunk_size(&self) -> usize {
        self.read_chunk_size
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
