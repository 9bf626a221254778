use crate::dict::{parse_text_dict, DictError, TrieDictionary};
use crate::ErrorKind;

const SAMPLE: &str = "语言\t語言\n发\t發 髮\n\n头发\t頭髮\n";

#[test]
fn test_parse_entries_in_file_order() {
    let entries = parse_text_dict(SAMPLE).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].0, "语言");
    assert_eq!(entries[1].1, vec!["發".to_string(), "髮".to_string()]);
}

#[test]
fn test_parse_tolerates_bom_and_crlf() {
    let entries = parse_text_dict("\u{feff}发\t發\r\n后\t後 后\r\n").unwrap();
    assert_eq!(entries[0].0, "发");
    assert_eq!(entries[1].1, vec!["後".to_string(), "后".to_string()]);
}

#[test]
fn test_missing_tab() {
    let err = parse_text_dict("语言\t語言\n发 發\n").unwrap_err();
    assert!(matches!(err, DictError::InvalidTextDictionary { line: 2, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidTextDictionary);
}

#[test]
fn test_empty_key() {
    let err = parse_text_dict("\t發\n").unwrap_err();
    assert!(matches!(err, DictError::InvalidTextDictionary { line: 1, .. }));
}

#[test]
fn test_no_candidates() {
    let err = parse_text_dict("发\t  \n").unwrap_err();
    assert!(err.to_string().contains("no candidates"));
}

#[test]
fn test_duplicate_key() {
    let err = parse_text_dict("发\t發\n后\t後\n发\t髮\n").unwrap_err();
    assert!(matches!(err, DictError::InvalidTextDictionary { line: 3, .. }));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_text_roundtrip() {
    let dict = TrieDictionary::from_text(SAMPLE).unwrap();
    assert_eq!(dict.len(), 3);
    let text = dict.to_text();
    let again = TrieDictionary::from_text(&text).unwrap();
    assert_eq!(again.to_text(), text);
    assert_eq!(again.get("发").unwrap(), ["發", "髮"]);
}

#[test]
fn test_from_text_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("STPhrases.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    let dict = TrieDictionary::from_text_file(&path).unwrap();
    assert_eq!(dict.get("语言").unwrap(), ["語言"]);

    let err = TrieDictionary::from_text_file(&dir.path().join("nope.txt"))
        .err()
        .unwrap();
    assert_eq!(err.kind(), ErrorKind::FileNotFound);
}

#[test]
fn test_from_text_file_reports_line_of_bad_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.txt");
    std::fs::write(&path, b"\xe8\xaf\xad\t\xe8\xaa\x9e\n\n\xff\tx\n").unwrap();
    let err = TrieDictionary::from_text_file(&path).err().unwrap();
    assert!(matches!(err, DictError::InvalidTextDictionary { line: 3, .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidTextDictionary);
    assert!(err.to_string().contains("byte 9"));
}
