use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFeed {
    pub text: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw feed bytes into UTF-8 using: BOM -> Content-Type charset ->
/// XML declaration encoding -> chardetng fallback.
pub fn decode_feed(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedFeed, DecodeError> {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    if let Some(label) = declared_encoding(bytes) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            key.trim()
                .eq_ignore_ascii_case("charset")
                .then(|| value.trim().trim_matches(&['"', '\''][..]).to_string())
        })
        .next()
}

/// Reads `encoding="..."` from a leading `<?xml ... ?>` declaration.
fn declared_encoding(bytes: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_event_into(&mut buf) {
            Ok(Event::Decl(decl)) => {
                let label = decl.encoding()?.ok()?;
                return Some(String::from_utf8_lossy(&label).into_owned());
            }
            Ok(Event::Start(_) | Event::Empty(_) | Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<DecodedFeed, DecodeError> {
    let (text, _, had_errors) = enc.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedFeed {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_header_wins_over_detection() {
        let bytes = b"<office>M\xfcnchen</office>";
        let decoded = decode_feed(bytes, Some("text/xml; charset=ISO-8859-1")).unwrap();
        assert_eq!(decoded.text, "<office>München</office>");
    }

    #[test]
    fn xml_declaration_is_honoured() {
        let bytes = b"<?xml version=\"1.0\" encoding='ISO-8859-1'?><office>M\xfcnchen</office>";
        let decoded = decode_feed(bytes, Some("application/xml")).unwrap();
        assert!(decoded.text.ends_with("<office>München</office>"));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let decoded = decode_feed(b"\xEF\xBB\xBF<a/>", None).unwrap();
        assert_eq!(decoded.text, "<a/>");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = decode_feed(b"<a>\xff\xfe\xfd</a>", Some("text/xml; charset=utf-8")).unwrap_err();
        assert!(matches!(err, DecodeError::DecodeFailure { .. }));
    }

    #[test]
    fn declaration_without_encoding_is_ignored() {
        assert_eq!(declared_encoding(b"<?xml version=\"1.0\"?><a/>"), None);
        assert_eq!(
            declared_encoding(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"),
            Some("UTF-8".to_string())
        );
        assert_eq!(
            declared_encoding(b"<?xml version='1.0' encoding='windows-1252'?>\n<a>\xe9</a>"),
            Some("windows-1252".to_string())
        );
        assert_eq!(declared_encoding(b"<a encoding=\"latin1\"/>"), None);
    }
}
