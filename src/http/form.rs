//! Form body decoding module
//!
//! Decodes `application/x-www-form-urlencoded` bodies and query strings:
//! `+` becomes a space, `%XX` sequences are percent-decoded, pairs are
//! separated by `&`. Invalid percent escapes pass through literally rather
//! than failing the request.

/// Extract the first value for `name` from an urlencoded payload.
///
/// Returns `None` when the field is absent. An empty value (`name=` or a
/// bare `name`) returns `Some(String::new())`; callers decide whether empty
/// counts as missing.
pub fn field(payload: &[u8], name: &str) -> Option<String> {
    let payload = std::str::from_utf8(payload).ok()?;
    for pair in payload.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if decode(key) == name {
            return Some(decode(value));
        }
    }
    None
}

/// Decode one urlencoded component
fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(high), Some(low)) => {
                        out.push((high << 4) | low);
                        i += 3;
                    }
                    // Malformed escape: keep the literal '%'
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            other => {
                out.push(other);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_field_value() {
        let body = b"html_content=%3Cp%3Ehi%3C%2Fp%3E";
        assert_eq!(field(body, "html_content").unwrap(), "<p>hi</p>");
    }

    #[test]
    fn plus_decodes_to_space() {
        assert_eq!(field(b"q=hello+world", "q").unwrap(), "hello world");
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(field(b"a=1&a=2&b=3", "a").unwrap(), "1");
    }

    #[test]
    fn missing_field_is_none() {
        assert!(field(b"a=1&b=2", "html_content").is_none());
    }

    #[test]
    fn empty_value_is_some_empty() {
        assert_eq!(field(b"html_content=", "html_content").unwrap(), "");
        assert_eq!(field(b"html_content", "html_content").unwrap(), "");
    }

    #[test]
    fn malformed_escape_passes_through() {
        assert_eq!(field(b"q=100%zz", "q").unwrap(), "100%zz");
        assert_eq!(field(b"q=100%", "q").unwrap(), "100%");
    }

    #[test]
    fn utf8_roundtrip() {
        // "caf\u{e9}" urlencoded
        assert_eq!(field(b"name=caf%C3%A9", "name").unwrap(), "café");
    }

    #[test]
    fn encoded_key_matches() {
        assert_eq!(field(b"html%5Fcontent=x", "html_content").unwrap(), "x");
    }
}
