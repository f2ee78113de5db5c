#![no_main]

use libfuzzer_sys::fuzz_target;
use trickle::{Config, ErrorKind, Outcome, Parser, Request};

fn run<'a>(chunks: impl IntoIterator<Item = &'a [u8]>) -> Result<Option<Request>, ErrorKind> {
    let config = Config::new().max_header_bytes(512).max_headers(16);
    let mut parser = Parser::with_config(&config);

    for chunk in chunks {
        match parser.feed(chunk) {
            Outcome::Complete(r) => return Ok(Some(r)),
            Outcome::Failed(kind) => return Err(kind),
            Outcome::Progressed | Outcome::NeedMoreData => {}
        }
    }

    Ok(None)
}

fuzz_target!(|data: &[u8]| {
    let Some((split, input)) = data.split_first() else {
        return;
    };

    let at = (*split as usize).min(input.len());
    let (a, b) = input.split_at(at);

    let whole = run([input]);
    let split = run([a, b]);
    let bytewise = run(input.chunks(1));

    assert_eq!(whole, split);
    assert_eq!(whole, bytewise);
});
