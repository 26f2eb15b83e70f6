//! Decoding and lenient parsing of the fetched results page.

use encoding_rs::Encoding;
use scraper::Html;

use crate::error::ScraperError;

/// Decodes `markup` under the declared `encoding` label and builds an HTML5
/// document tree.
///
/// Tree construction follows the HTML5 parsing algorithm, so unclosed cells,
/// missing `tbody` elements and stray end tags are repaired rather than
/// rejected.
///
/// # Errors
///
/// - [`ScraperError::UnknownEncoding`] if `encoding` is not a WHATWG encoding label.
/// - [`ScraperError::Decode`] if the bytes contain sequences that are invalid
///   under that encoding.
pub fn parse_document(markup: &[u8], encoding: &str) -> Result<Html, ScraperError> {
    let text = decode(markup, encoding)?;
    let document = Html::parse_document(&text);
    if !document.errors.is_empty() {
        tracing::debug!(
            parse_errors = document.errors.len(),
            "results page is not well-formed; parser repaired it"
        );
    }
    Ok(document)
}

fn decode(markup: &[u8], label: &str) -> Result<String, ScraperError> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ScraperError::UnknownEncoding(label.to_owned()))?;
    encoding
        .decode_without_bom_handling_and_without_replacement(markup)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| ScraperError::Decode {
            encoding: encoding.name().to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{find_first, ElementLike};

    #[test]
    fn parses_utf8_markup() {
        let doc = parse_document(
            "<html><body><p>Café</p></body></html>".as_bytes(),
            "utf-8",
        )
        .unwrap();
        let p = find_first(&doc.root_element(), "p").unwrap();
        assert_eq!(p.direct_text().as_deref(), Some("Café"));
    }

    #[test]
    fn decodes_latin1_label() {
        let doc = parse_document(b"<p>Caf\xe9</p>", "ISO-8859-1").unwrap();
        let p = find_first(&doc.root_element(), "p").unwrap();
        assert_eq!(p.direct_text().as_deref(), Some("Café"));
    }

    #[test]
    fn tolerates_malformed_markup() {
        let doc = parse_document(
            b"<div id=x><table><tr><td>Name:<td>CAFE<tr><td>Addr</table></span>",
            "utf-8",
        )
        .unwrap();
        let tbody = find_first(&doc.root_element(), "tbody").expect("tbody inserted");
        assert_eq!(ElementLike::child_elements(&tbody).len(), 2);
    }

    #[test]
    fn rejects_invalid_utf8() {
        let err = parse_document(b"<p>\xff\xfe</p>", "utf-8").unwrap_err();
        assert!(
            matches!(err, ScraperError::Decode { ref encoding } if encoding == "UTF-8"),
            "expected Decode error, got: {err:?}"
        );
    }

    #[test]
    fn rejects_unknown_encoding_label() {
        let err = parse_document(b"<p>x</p>", "klingon").unwrap_err();
        assert!(
            matches!(err, ScraperError::UnknownEncoding(ref l) if l == "klingon"),
            "expected UnknownEncoding, got: {err:?}"
        );
    }
}
