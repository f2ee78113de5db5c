use super::{feed_all, parse_whole};
use crate::{Config, ErrorKind};

const REQUESTS: &[&[u8]] = &[
    b"GET /a HTTP/1.1\r\n\r\n",
    b"GET / HTTP/1.1\r\nHost: a\r\nAccept: */*\r\nHost: b\r\n\r\n",
    b"POST /form HTTP/1.1\r\n\
        Host: example.test\r\n\
        Content-Type: text/plain\r\n\
        Content-Length: 13\r\n\
        \r\n\
        hello, world!",
    b"PUT /chunked HTTP/1.1\r\n\
        transfer-encoding: Chunked\r\n\
        \r\n\
        4\r\nwiki\r\n\
        5;name=val\r\npedia\r\n\
        e\r\n in\r\n\r\nchunks.\r\n\
        0\r\n\
        \r\n",
    b"DELETE /x?y=%20 HTTP/1.1\r\nX-Empty:\r\nX-Spaced:   a  b   \r\n\r\n",
];

const INVALID: &[(&[u8], ErrorKind)] = &[
    (b"GET / HTTP/2.0\r\n\r\n", ErrorKind::UnsupportedVersion),
    (b"GET /  HTTP/1.1\r\n\r\n", ErrorKind::InvalidRequestLine),
    (b"GET / HTTP/1.1\r\nNoColon\r\n\r\n", ErrorKind::InvalidHeaders),
    (
        b"POST / HTTP/1.1\r\nContent-Length: 1\r\nContent-Length: 1\r\n\r\nx",
        ErrorKind::InvalidHeaders,
    ),
    (
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\nxyz\r\n",
        ErrorKind::InvalidHeaders,
    ),
    (
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n0\r\nTrailer: 1\r\n\r\n",
        ErrorKind::InvalidHeaders,
    ),
    (
        b"POST / HTTP/1.1\r\nTransfer-Encoding: chunked\r\n\r\n\r\n\r\n",
        ErrorKind::InvalidHeaders,
    ),
];

#[test]
fn every_single_split() {
    for input in REQUESTS {
        let expected = parse_whole(input);

        for i in 0..=input.len() {
            let (a, b) = input.split_at(i);
            let req = feed_all(&Config::default(), [a, b]).unwrap().unwrap();
            assert_eq!(req, expected, "split at {}", i);
        }
    }
}

#[test]
fn every_double_split() {
    for input in REQUESTS {
        let expected = parse_whole(input);

        for i in 0..=input.len() {
            for j in i..=input.len() {
                let chunks = [&input[..i], &input[i..j], &input[j..]];
                let req = feed_all(&Config::default(), chunks).unwrap().unwrap();
                assert_eq!(req, expected, "split at {}, {}", i, j);
            }
        }
    }
}

#[test]
fn byte_at_a_time() {
    for input in REQUESTS {
        let expected = parse_whole(input);
        let req = feed_all(&Config::default(), input.chunks(1))
            .unwrap()
            .unwrap();
        assert_eq!(req, expected);
    }
}

#[test]
fn random_partitions() {
    let mut rng = fastrand::Rng::with_seed(42);

    for input in REQUESTS {
        let expected = parse_whole(input);

        for _ in 0..200 {
            let mut chunks = vec![];
            let mut rest = *input;
            while !rest.is_empty() {
                let n = rng.usize(0..=rest.len().min(12));
                let (a, b) = rest.split_at(n);
                chunks.push(a);
                rest = b;
            }

            let req = feed_all(&Config::default(), chunks.iter().copied())
                .unwrap()
                .unwrap();
            assert_eq!(req, expected);
        }
    }
}

#[test]
fn prefixes_are_never_complete() {
    for input in REQUESTS {
        for i in 0..input.len() {
            let r = feed_all(&Config::default(), [&input[..i]]).unwrap();
            assert!(r.is_none(), "complete at prefix {}", i);
        }
    }
}

#[test]
fn failures_are_split_invariant() {
    for (input, kind) in INVALID {
        for i in 0..=input.len() {
            let (a, b) = input.split_at(i);
            let r = feed_all(&Config::default(), [a, b]);
            assert_eq!(r, Err(*kind), "split at {}", i);
        }

        let r = feed_all(&Config::default(), input.chunks(1));
        assert_eq!(r, Err(*kind));
    }
}
