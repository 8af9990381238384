//! Sink failure propagation tests

use std::io::{self, Write};

use scrawl_json::ScribeError;

/// Sink that accepts a fixed number of bytes and then fails every write.
struct FailAfter {
    limit: usize,
    written: Vec<u8>,
}

impl FailAfter {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            written: Vec::new(),
        }
    }
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "sink refused write"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn failure_on_first_byte_surfaces_from_the_entry_point() {
    let mut sink = FailAfter::new(0);
    let result = scrawl_json::object(&mut sink);
    match result {
        Err(ScribeError::Io(error)) => {
            assert_eq!(error.kind(), io::ErrorKind::WriteZero);
            assert_eq!(error.to_string(), "sink refused write");
        }
        _ => panic!("expected an I/O error"),
    }
    assert!(sink.written.is_empty());
}

#[test]
fn failure_mid_document_surfaces_from_the_failing_call() {
    // Room for `{` and `"a":1` but not the next member's separator + key
    let mut sink = FailAfter::new(6);
    let object = scrawl_json::object(&mut sink).unwrap().with("a", 1).unwrap();
    let result = object.with("b", 2);
    assert!(matches!(result, Err(ScribeError::Io(_))));
    // Whatever reached the sink before the failure stays written
    assert_eq!(sink.written, b"{\"a\":1");
}

#[test]
fn failure_during_streamed_value_is_immediate() {
    // `["` fits, the first append does not
    let mut sink = FailAfter::new(2);
    let value = scrawl_json::array(&mut sink).unwrap().value().unwrap();
    let result = value.append("too long for the sink");
    assert!(matches!(result, Err(ScribeError::Io(_))));
    assert_eq!(sink.written, b"[\"");
}

#[test]
fn io_error_details_pass_through_unchanged() {
    let mut sink = FailAfter::new(0);
    let error = match scrawl_json::array(&mut sink) {
        Err(ScribeError::Io(error)) => error,
        _ => panic!("expected an I/O error"),
    };
    assert_eq!(error.kind(), io::ErrorKind::WriteZero);
    let message = format!("{}", ScribeError::Io(error));
    assert_eq!(message, "I/O error: sink refused write");
}
