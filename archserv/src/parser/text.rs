//! Décodage du contenu brut d'un fichier de relevé
//!
//! Les exports d'instruments sont souvent en Latin-9: on valide d'abord
//! l'UTF-8 (SIMD), sinon on décode en ISO-8859-15.

use std::borrow::Cow;

use encoding_rs::ISO_8859_15;

/// Décode les bytes en texte, sans jamais échouer
pub fn decode(data: &[u8]) -> Cow<'_, str> {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

    match simdutf8::basic::from_utf8(data) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            tracing::debug!("Contenu non UTF-8, décodage ISO-8859-15");
            let (decoded, _, _) = ISO_8859_15.decode(data);
            decoded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrowed() {
        let text = decode(b"ST01 1.000 2.000 3.000\n");
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "ST01 1.000 2.000 3.000\n");
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = decode(b"\xEF\xBB\xBFST01 1.000 2.000 3.000");
        assert!(text.starts_with("ST01"));
    }

    #[test]
    fn test_decode_latin9_fallback() {
        // 0xE9 = 'é' en ISO-8859-15, invalide seul en UTF-8
        let text = decode(b"# relev\xE9\nST01 1.000 2.000 3.000");
        assert!(text.contains("relevé"));
        assert!(text.contains("ST01"));
    }
}
