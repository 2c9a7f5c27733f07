//! Parser d'une ligne de relevé (station ou point codé)
//!
//! Grammaire: `<clé> <x> <y> <z> [<code>]`, champs séparés par des blancs.
//! Les coordonnées sont des décimaux signés avec point obligatoire
//! (`-12.500`, pas `12` ni `1e3`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::key::decode;
use crate::types::Record;
use crate::ArchServError;

static LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([A-Za-z0-9_]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)\s+(-?[0-9]+\.[0-9]+)(?:\s+([A-Za-z0-9_]+))?$",
    )
    .expect("static line pattern")
});

/// Parse une ligne en enregistrement.
///
/// La station/point est déduite du décodage de la clé, pas de la présence du code.
pub fn parse(line: &str) -> Result<Record, ArchServError> {
    let line = line.trim();
    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| ArchServError::malformed(line))?;

    let coord = |i: usize| fast_parse_f64(&caps[i]).ok_or_else(|| ArchServError::malformed(line));

    Ok(Record {
        key: decode(&caps[1]),
        x: coord(2)?,
        y: coord(3)?,
        z: coord(4)?,
        code: caps.get(5).map(|m| m.as_str().to_string()),
    })
}

/// Utilise fast-float, les coordonnées étant déjà validées par la regex
#[inline]
fn fast_parse_f64(s: &str) -> Option<f64> {
    fast_float::parse(s).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;

    #[test]
    fn test_parse_station() {
        let record = parse("ST01 1234.560 9876.540 312.100").unwrap();
        assert_eq!(record.key, Key::Raw("ST01".into()));
        assert_eq!(record.xyz(), (1234.56, 9876.54, 312.1));
        assert_eq!(record.code, None);
        assert!(record.is_station());
    }

    #[test]
    fn test_parse_encoded_point() {
        let record = parse("0012A01003 1234.560 9876.540 312.100 FND").unwrap();
        let Key::Structured(key) = record.key else {
            panic!("Expected structured key");
        };
        assert_eq!(
            (key.context(), key.group(), key.code(), key.index()),
            (12, 'A', 1, 3)
        );
        assert_eq!(record.code.as_deref(), Some("FND"));
        assert!(!record.is_station());
    }

    #[test]
    fn test_station_with_code_is_still_station() {
        let record = parse("BASE1 100.000 200.000 10.000 CP").unwrap();
        assert!(record.is_station());
        assert_eq!(record.code.as_deref(), Some("CP"));
    }

    #[test]
    fn test_point_without_code_is_still_point() {
        let record = parse("0001A00001 101.500 201.500 10.200").unwrap();
        assert!(!record.is_station());
        assert_eq!(record.code, None);
    }

    #[test]
    fn test_parse_negative_and_tabs() {
        let record = parse("  P_1\t-0.500\t\t-12.250   -3.000  ").unwrap();
        assert_eq!(record.xyz(), (-0.5, -12.25, -3.0));
    }

    #[test]
    fn test_parse_malformed() {
        for line in [
            "ST01 1234 9876.540 312.100",
            "ST01 1234.560 9876.540",
            "ST01 1.0e3 9876.540 312.100",
            "ST01 +1.000 2.000 3.000",
            "ST01 1.000 2.000 3.000 FND extra",
            "ST-01 1.000 2.000 3.000",
            "ST01 1.000 2.000 3.000 F-D",
            "ST01,1.000,2.000,3.000",
            "1.000 2.000 3.000",
        ] {
            match parse(line) {
                Err(ArchServError::MalformedLine { line_no, line: l }) => {
                    assert_eq!(line_no, None);
                    assert_eq!(l, line);
                }
                other => panic!("Expected MalformedLine for {line:?}, got {other:?}"),
            }
        }
    }
}
