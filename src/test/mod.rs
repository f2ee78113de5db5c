use crate::{Config, ErrorKind, Outcome, Parser, Request};


mod split;

/// Feed `chunks` in order, one `feed` per chunk, and return how it ended.
///
/// `Ok(None)` means the input ran out before the request was complete.
fn feed_all<'a>(
    config: &Config,
    chunks: impl IntoIterator<Item = &'a [u8]>,
) -> Result<Option<Request>, ErrorKind> {
    let mut parser = Parser::with_config(config);

    for chunk in chunks {
        match parser.feed(chunk) {
            Outcome::Complete(r) => return Ok(Some(r)),
            Outcome::Failed(kind) => return Err(kind),
            Outcome::Progressed | Outcome::NeedMoreData => {}
        }
    }

    Ok(None)
}

fn parse_whole(input: &[u8]) -> Request {
    feed_all(&Config::default(), [input])
        .expect("valid request")
        .expect("complete request")
}

trait TestSliceExt {
    fn as_str(&self) -> &str;
}

impl TestSliceExt for [u8] {
    fn as_str(&self) -> &str {
        std::str::from_utf8(self).unwrap()
    }
}
