//! Décodage des clés de points ArchServ
//!
//! Une clé codée a la forme `CCCCGCCIII`:
//! - `CCCC`: contexte (4 chiffres)
//! - `G`: groupe (1 lettre, normalisée en majuscule)
//! - `CC`: code (2 chiffres, voir [`crate::codes`])
//! - `III`: index (3 chiffres)
//!
//! Tout autre identifiant est un nom de station libre.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::codes::Code;
use crate::ArchServError;

static KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})([A-Za-z])([0-9]{2})([0-9]{3})$").expect("static key pattern")
});

/// Clé codée d'un point levé
///
/// L'ordre total suit le tuple (contexte, groupe, code, index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuredKey {
    context: u16,
    group: char,
    code: u8,
    index: u16,
}

/// Clé décodée: structurée (point) ou brute (station)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Structured(StructuredKey),
    Raw(String),
}

impl StructuredKey {
    /// Construit une clé en vérifiant qu'elle tient dans la forme canonique
    pub fn new(context: u16, group: char, code: u8, index: u16) -> Result<Self, ArchServError> {
        if context > 9999 || code > 99 || index > 999 || !group.is_ascii_alphabetic() {
            return Err(ArchServError::InvalidKey(format!(
                "{context}/{group}/{code}/{index}"
            )));
        }
        Ok(Self {
            context,
            group: group.to_ascii_uppercase(),
            code,
            index,
        })
    }

    pub fn context(&self) -> u16 {
        self.context
    }

    pub fn group(&self) -> char {
        self.group
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn index(&self) -> u16 {
        self.index
    }

    /// Code connu de la table, s'il existe
    pub fn known_code(&self) -> Option<Code> {
        Code::from_value(self.code)
    }

    fn from_token(token: &str) -> Option<Self> {
        let caps = KEY_RE.captures(token)?;
        Some(Self {
            context: caps[1].parse().ok()?,
            group: caps[2].chars().next()?.to_ascii_uppercase(),
            code: caps[3].parse().ok()?,
            index: caps[4].parse().ok()?,
        })
    }
}

impl fmt::Display for StructuredKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{}{:02}{:03}",
            self.context, self.group, self.code, self.index
        )
    }
}

impl FromStr for StructuredKey {
    type Err = ArchServError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ArchServError::InvalidKey(s.to_string()))
    }
}

impl Key {
    pub fn is_raw(&self) -> bool {
        matches!(self, Key::Raw(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Structured(key) => fmt::Display::fmt(key, f),
            Key::Raw(name) => f.write_str(name),
        }
    }
}

/// Décode un identifiant: clé structurée si la forme correspond, sinon nom brut.
///
/// Ne retourne jamais d'erreur: un nom de station est un cas normal.
pub fn decode(token: &str) -> Key {
    match StructuredKey::from_token(token) {
        Some(key) => Key::Structured(key),
        None => Key::Raw(token.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StructuredKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_decode_structured() {
        match decode("0012A01003") {
            Key::Structured(k) => {
                assert_eq!(k.context(), 12);
                assert_eq!(k.group(), 'A');
                assert_eq!(k.code(), 1);
                assert_eq!(k.index(), 3);
                assert_eq!(k.known_code(), Some(Code::Height));
            }
            other => panic!("Expected structured key, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_lowercase_group() {
        let Key::Structured(k) = decode("0012b06001") else {
            panic!("Expected structured key");
        };
        assert_eq!(k.group(), 'B');
        assert_eq!(k.to_string(), "0012B06001");
    }

    #[test]
    fn test_decode_station_fallback() {
        for token in [
            "ST01",
            "BASE1",
            "0012A0100",
            "0012A010033",
            "012A01003",
            "00121A1003",
            "0012A01O03",
            "X0012A01003",
            "0012_01003",
            "",
        ] {
            assert_eq!(decode(token), Key::Raw(token.to_string()), "{token}");
        }
    }

    #[test]
    fn test_decode_rejects_non_ascii_digits() {
        // Chiffres arabo-indiens: pas de forme codée
        let token = "٠٠١٢A01003";
        assert!(decode(token).is_raw());
    }

    #[test]
    fn test_canonical_roundtrip() {
        for (context, group, code, index) in [
            (0, 'A', 0, 0),
            (12, 'A', 1, 3),
            (9999, 'Z', 99, 999),
            (1, 'q', 93, 10),
        ] {
            let k = StructuredKey::new(context, group, code, index).unwrap();
            let text = k.to_string();
            assert_eq!(text.len(), 10);
            let Key::Structured(decoded) = decode(&text) else {
                panic!("{text} should decode");
            };
            assert_eq!(decoded, k);
            assert_eq!(decoded.to_string(), text);
        }
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(StructuredKey::new(10000, 'A', 0, 0).is_err());
        assert!(StructuredKey::new(0, 'A', 100, 0).is_err());
        assert!(StructuredKey::new(0, 'A', 0, 1000).is_err());
        assert!(StructuredKey::new(0, '1', 0, 0).is_err());
    }

    #[test]
    fn test_from_str_invalid() {
        match "ST01".parse::<StructuredKey>() {
            Err(ArchServError::InvalidKey(s)) => assert_eq!(s, "ST01"),
            other => panic!("Expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_ordering_priority() {
        // contexte > groupe > code > index
        assert!(key("0001Z99999") < key("0002A00000"));
        assert!(key("0001A99999") < key("0001B00000"));
        assert!(key("0001A01999") < key("0001A02000"));
        assert!(key("0001A01001") < key("0001A01002"));
        assert_eq!(key("0001a01001"), key("0001A01001"));
    }

    #[test]
    fn test_ordering_transitive() {
        let a = key("0001A00001");
        let b = key("0001A06001");
        let c = key("0001B00001");
        assert!(a < b && b < c);
        assert!(a < c);
    }
}
