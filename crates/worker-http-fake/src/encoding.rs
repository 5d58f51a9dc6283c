//! Text encodings and query-string encoding helpers.

use crate::collections::NameValueCollection;
use serde::{Deserialize, Serialize};

/// Text encoding used for request bodies and query-string escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1; characters above U+00FF encode as `?`
    Latin1,
    /// 7-bit ASCII; non-ASCII characters encode as `?`
    Ascii,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "iso-8859-1",
            TextEncoding::Ascii => "us-ascii",
        }
    }

    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            TextEncoding::Utf8 => text.as_bytes().to_vec(),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
                .collect(),
            TextEncoding::Ascii => text
                .chars()
                .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
                .collect(),
        }
    }

    /// Decode bytes, replacing invalid sequences with U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Ascii => bytes
                .iter()
                .map(|&b| if b.is_ascii() { char::from(b) } else { '\u{FFFD}' })
                .collect(),
        }
    }
}

/// Percent-encode a query collection as `key=value` pairs joined with `&`.
///
/// Entries whose key is absent or empty are skipped. Multi-valued keys are
/// written once, with their values comma-joined.
pub fn encode_query_string(query: &NameValueCollection, encoding: TextEncoding) -> String {
    query
        .iter()
        .filter_map(|(key, value)| {
            let key = key.filter(|k| !k.is_empty())?;
            Some(format!(
                "{}={}",
                encode_component(key, encoding),
                encode_component(&value, encoding)
            ))
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string into a collection, URL-decoding both keys and values.
///
/// A leading `?` is ignored. Segments without `=` are kept as unkeyed values,
/// and `+` decodes to a space.
pub fn parse_query_string(query: &str, encoding: TextEncoding) -> NameValueCollection {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut collection = NameValueCollection::new();

    for pair in query.split('&').filter(|s| !s.is_empty()) {
        match pair.split_once('=') {
            Some((key, value)) => collection.add(
                decode_component(key, encoding),
                decode_component(value, encoding),
            ),
            None => collection.add_entry(None, decode_component(pair, encoding)),
        }
    }

    collection
}

fn encode_component(text: &str, encoding: TextEncoding) -> String {
    urlencoding::encode_binary(&encoding.encode(text)).into_owned()
}

fn decode_component(text: &str, encoding: TextEncoding) -> String {
    let spaced = text.replace('+', " ");
    encoding.decode(&urlencoding::decode_binary(spaced.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin1_replaces_unmappable() {
        assert_eq!(TextEncoding::Latin1.encode("é€"), vec![0xE9, b'?']);
        assert_eq!(TextEncoding::Latin1.decode(&[0xE9]), "é");
    }

    #[test]
    fn test_ascii_decode_marks_high_bytes() {
        assert_eq!(TextEncoding::Ascii.decode(&[b'a', 0xFF]), "a\u{FFFD}");
    }

    #[test]
    fn test_encode_query_string_escapes_reserved() {
        let query: NameValueCollection = [("q", "a b&c"), ("plus", "1+1")].into_iter().collect();
        assert_eq!(
            encode_query_string(&query, TextEncoding::Utf8),
            "q=a%20b%26c&plus=1%2B1"
        );
    }

    #[test]
    fn test_encode_query_string_skips_missing_keys() {
        let mut query = NameValueCollection::new();
        query.add_entry(None, "orphan");
        query.add("", "empty");
        query.add("k", "v");
        assert_eq!(encode_query_string(&query, TextEncoding::Utf8), "k=v");
    }

    #[test]
    fn test_encode_query_string_joins_repeated_keys() {
        let query: NameValueCollection = [("tag", "a"), ("tag", "b")].into_iter().collect();
        assert_eq!(encode_query_string(&query, TextEncoding::Utf8), "tag=a%2Cb");
    }

    #[test]
    fn test_parse_query_string_basic() {
        let query = parse_query_string("?q=123&r=456&s=789", TextEncoding::Utf8);
        assert_eq!(query.len(), 3);
        assert_eq!(query.get("q").as_deref(), Some("123"));
        assert_eq!(query.get("r").as_deref(), Some("456"));
        assert_eq!(query.get("s").as_deref(), Some("789"));
    }

    #[test]
    fn test_parse_query_string_decodes_plus_and_percent() {
        let query = parse_query_string("name=John+Smith&city=S%C3%A3o%20Paulo", TextEncoding::Utf8);
        assert_eq!(query.get("name").as_deref(), Some("John Smith"));
        assert_eq!(query.get("city").as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_parse_query_string_keeps_bare_segments_unkeyed() {
        let query = parse_query_string("flag&k=v", TextEncoding::Utf8);
        assert_eq!(query.len(), 2);
        assert_eq!(query.unkeyed().as_deref(), Some("flag"));
    }

    #[test]
    fn test_parse_query_string_empty() {
        assert!(parse_query_string("", TextEncoding::Utf8).is_empty());
        assert!(parse_query_string("?", TextEncoding::Utf8).is_empty());
    }

    #[test]
    fn test_latin1_round_trip_through_query() {
        let query: NameValueCollection = [("name", "café")].into_iter().collect();
        let encoded = encode_query_string(&query, TextEncoding::Latin1);
        assert_eq!(encoded, "name=caf%E9");
        let parsed = parse_query_string(&encoded, TextEncoding::Latin1);
        assert_eq!(parsed.get("name").as_deref(), Some("café"));
    }
}
