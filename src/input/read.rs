use crate::error::FilterError;
use serde_json::Value;
use std::io::Read;

/// Drain `reader` to EOF, then parse everything read as one JSON document.
///
/// The whole input is buffered before parsing starts; nothing is streamed.
pub fn read_document<R: Read>(mut reader: R) -> Result<Value, FilterError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| FilterError::Io {
            action: "read standard input",
            source,
        })?;

    parse_document(&bytes)
}

/// Parse UTF-8 JSON text into a value. Shape-agnostic: any JSON value is accepted.
///
/// Surrounding whitespace is allowed; anything else after the value is not.
pub fn parse_document(bytes: &[u8]) -> Result<Value, FilterError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::io;

    fn parse_err(input: &[u8]) -> String {
        match parse_document(input) {
            Err(FilterError::Parse(msg)) => msg,
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn parses_array_with_surrounding_whitespace() {
        let value = parse_document(b"  \n[{\"name\": \"grafana\"}]\n\n").unwrap();
        assert_eq!(value, json!([{"name": "grafana"}]));
    }

    #[test]
    fn accepts_any_json_shape() {
        assert_eq!(parse_document(b"{\"a\": 1}").unwrap(), json!({"a": 1}));
        assert_eq!(parse_document(b"42").unwrap(), json!(42));
    }

    #[test]
    fn keeps_integers_wider_than_64_bits() {
        let value = parse_document(b"[123456789012345678901234567890, -0]").unwrap();
        assert_eq!(value[0].to_string(), "123456789012345678901234567890");
        assert_eq!(value[1].to_string(), "-0");
    }

    #[test]
    fn rejects_malformed_text() {
        let msg = parse_err(b"oops");
        assert!(msg.contains("line 1 column 1"), "{}", msg);
    }

    #[test]
    fn rejects_empty_input() {
        let msg = parse_err(b"");
        assert!(msg.contains("EOF"), "{}", msg);
    }

    #[test]
    fn rejects_trailing_garbage() {
        let msg = parse_err(b"[] []");
        assert!(msg.contains("trailing characters"), "{}", msg);
    }

    #[test]
    fn rejects_invalid_utf8() {
        parse_err(b"[\"\xff\"]");
    }

    #[test]
    fn read_document_drains_reader() {
        let input: &[u8] = br#"[{"name":"grafana-dev"},{"name":"grafana"}]"#;
        let value = read_document(input).unwrap();
        assert_eq!(value, json!([{"name": "grafana-dev"}, {"name": "grafana"}]));
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn read_failure_is_io_error() {
        match read_document(FailingReader) {
            Err(FilterError::Io { action, source }) => {
                assert_eq!(action, "read standard input");
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
