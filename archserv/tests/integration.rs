//! Tests d'intégration sur des fichiers de relevé

use std::path::PathBuf;

use archserv::{ArchServError, Code, GeometryKind};

fn write_fixture(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("archserv_{}_{}", std::process::id(), name));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_parse_survey_file() {
    let path = write_fixture(
        "survey.txt",
        b"BASE1 100.000 200.000 10.000\r\n\
          0001A00001 101.500 201.500 10.200 NL\r\n\
          \r\n\
          0001A00002 102.500 202.500 10.300 NL\r\n\
          0001B06001 150.000 250.000 11.000 CIR\r\n\
          ST02 300.000 400.000 12.500\r\n",
    );

    let dataset = archserv::parse(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let stations: Vec<&str> = dataset.stations.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(stations, vec!["BASE1", "ST02"]);
    assert_eq!(dataset.points.len(), 3);

    let features = dataset.features();
    assert_eq!(features.len(), 2);
    assert_eq!(features.point_count(), 3);

    let nails = features.get(1, 0).unwrap();
    let keys: Vec<String> = nails[&'A'].iter().map(|p| p.key.to_string()).collect();
    assert_eq!(keys, vec!["0001A00001", "0001A00002"]);

    let circle = features.get(1, 6).unwrap();
    assert_eq!(circle[&'B'][0].code.as_deref(), Some("CIR"));

    let kinds: Vec<GeometryKind> = features
        .sorted_keys()
        .iter()
        .filter_map(|k| k.known_code())
        .map(Code::geometry_kind)
        .collect();
    assert_eq!(kinds, vec![GeometryKind::Point, GeometryKind::Point]);
}

#[test]
fn test_parse_latin9_file() {
    let path = write_fixture(
        "latin9.txt",
        b"STATION\xC9 1.000 2.000 3.000\n0002C92001 1.000 2.000 3.000 LIM\n",
    );

    // 'É' n'est pas un caractère de mot ASCII: la ligne est rejetée
    let result = archserv::parse(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(ArchServError::MalformedLine { line_no, line }) => {
            assert_eq!(line_no, Some(1));
            assert_eq!(line, "STATIONÉ 1.000 2.000 3.000");
        }
        other => panic!("Expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn test_parse_fails_fast_on_third_line() {
    let path = write_fixture(
        "broken.txt",
        b"ST01 1.000 2.000 3.000\n\
          0001A00001 1.000 2.000 3.000\n\
          0001A00002 1.000 2.000\n\
          0001A00003 1.000 2.000 3.000\n",
    );

    let result = archserv::parse(&path);
    std::fs::remove_file(&path).ok();

    match result {
        Err(ArchServError::MalformedLine { line_no, line }) => {
            assert_eq!(line_no, Some(3));
            assert_eq!(line, "0001A00002 1.000 2.000");
        }
        other => panic!("Expected MalformedLine, got {other:?}"),
    }
}

#[test]
fn test_parse_empty_file() {
    let path = write_fixture("empty.txt", b"\n\n   \n");

    let dataset = archserv::parse(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(dataset.points.is_empty());
    assert!(dataset.stations.is_empty());
    assert!(dataset.features().is_empty());
}
