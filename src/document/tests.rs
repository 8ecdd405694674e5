// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::value::ValueKind;

#[test]
fn test_decode_from_bytes() {
    let config_content = br#"
name = "TestApp"
debug = true
workers = 4
ratio = 0.75

[server]
host = "localhost"
port = 8080
features = ["auth", "logging"]
"#;
    let doc = Document::decode(config_content).expect("Failed to decode config");

    assert_eq!(doc.len(), 5);
    assert_eq!(doc.get_str("name").unwrap(), "TestApp");
    assert!(doc.get_bool("debug").unwrap());
    assert_eq!(doc.get_int("workers").unwrap(), 4);
    assert_eq!(doc.get_float("ratio").unwrap(), 0.75);

    let server = doc.get_table("server").expect("Failed to get server");
    assert_eq!(server.len(), 3);
    assert_eq!(server.get_str_list("features").unwrap(), vec!["auth", "logging"]);
}

#[test]
fn test_decode_malformed() {
    let err = Document::decode(b"[mysql\nhost = ").unwrap_err();
    assert!(matches!(err, CfgError::Decode(_)));
    assert_eq!(err.code(), 100);
}

#[test]
fn test_decode_invalid_utf8() {
    let err = Document::decode(&[0x6b, 0x3d, 0xff, 0xfe]).unwrap_err();
    assert!(matches!(err, CfgError::InvalidUtf8(_)));
}

#[test]
fn test_decode_rejects_datetime() {
    let err = Document::decode(b"[db]\ncreated = 1979-05-27T07:32:00Z").unwrap_err();
    match err {
        CfgError::UnsupportedValue { key, kind } => {
            assert_eq!(key, "db.created");
            assert_eq!(kind, "datetime");
        }
        other => panic!("Expected UnsupportedValue, got {:?}", other),
    }
}

#[test]
fn test_decode_rejects_array_of_tables() {
    let err = Document::decode(b"[[hosts]]\nname = \"a\"\n").unwrap_err();
    assert!(matches!(err, CfgError::UnsupportedValue { .. }));
}

#[test]
fn test_decode_rejects_mixed_array() {
    let err = Document::decode(br#"mixed = ["a", 1]"#).unwrap_err();
    assert!(matches!(err, CfgError::UnsupportedValue { .. }));
}

#[test]
fn test_decode_list_types() {
    let doc: Document = r#"
names = ["a", "b"]
counts = [1, 2, 3]
weights = [0.5, 2.0]
widened = [1, 2.5]
flags = [true, false]
empty = []
"#
    .parse()
    .unwrap();

    assert_eq!(doc.get_str_list("names").unwrap(), vec!["a", "b"]);
    assert_eq!(doc.get_int_list("counts").unwrap(), vec![1, 2, 3]);
    assert_eq!(doc.get_float_list("weights").unwrap(), vec![0.5, 2.0]);
    assert_eq!(doc.get_float_list("widened").unwrap(), vec![1.0, 2.5]);
    assert_eq!(doc.get_bool_list("flags").unwrap(), vec![true, false]);
    assert_eq!(doc.value("empty"), Some(&Value::StringList(vec![])));
    assert!(doc.get_int_list("empty").unwrap().is_empty());
}

#[test]
fn test_order_preservation() {
    let doc: Document = r#"
first = "1"
second = "2"
third = "3"
"#
    .parse()
    .unwrap();
    let keys: Vec<&str> = doc.keys().collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_empty_document() {
    let doc: Document = "".parse().unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.len(), 0);
}

// ===== Access Tests =====

#[test]
fn test_get_missing_key() {
    let doc: Document = "a = 1".parse().unwrap();
    let err = doc.get_int("b").unwrap_err();
    assert!(matches!(err, CfgError::MissingKey { ref key } if key == "b"));
}

#[test]
fn test_get_type_mismatch_names_key() {
    let doc: Document = "port = \"3306\"".parse().unwrap();
    match doc.get_int("port").unwrap_err() {
        CfgError::TypeMismatch {
            key,
            expected,
            found,
        } => {
            assert_eq!(key, "port");
            assert_eq!(expected, ValueKind::Int);
            assert_eq!(found, ValueKind::String);
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_get_optional() {
    let doc: Document = "a = 1".parse().unwrap();
    assert_eq!(doc.get_optional::<i64>("a").unwrap(), Some(1));
    assert_eq!(doc.get_optional::<i64>("b").unwrap(), None);
    assert!(doc.get_optional::<String>("a").is_err());
}

#[test]
fn test_get_or() {
    let doc: Document = "timeout = 30".parse().unwrap();
    assert_eq!(doc.get_or("timeout", 5_u64), 30);
    assert_eq!(doc.get_or("retries", 3_u64), 3);
}

#[test]
fn test_get_path() {
    let doc: Document = r#"
[server.tls]
port = 8443
"#
    .parse()
    .unwrap();
    let port: u16 = doc.get_path("server.tls.port").unwrap();
    assert_eq!(port, 8443);
    assert!(matches!(
        doc.get_path::<u16>("server.plain.port"),
        Err(CfgError::MissingKey { .. })
    ));
}

#[test]
fn test_contains_and_insert() {
    let mut doc = Document::new();
    assert!(!doc.contains_key("host"));
    assert_eq!(doc.insert("host", "a"), None);
    assert_eq!(doc.insert("host", "b"), Some(Value::String("a".into())));
    assert_eq!(doc.get_str("host").unwrap(), "b");
}

// ===== Conversion Tests =====

#[test]
fn test_string_conversion() {
    let value = Value::String("hello".to_string());
    let result: Result<String> = value.try_into();
    assert_eq!(result.unwrap(), "hello");
}

#[test]
fn test_string_conversion_error() {
    let value = Value::Int(42);
    let result: Result<String> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_f32_conversion() {
    let value = Value::Float(2.5);
    let result: Result<f32> = value.try_into();
    assert_eq!(result.unwrap(), 2.5_f32);
}

#[test]
fn test_int_is_not_float() {
    let value = Value::Int(1);
    let result: Result<f64> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_u16_conversion() {
    let value = Value::Int(65535);
    let result: Result<u16> = value.try_into();
    assert_eq!(result.unwrap(), 65535);
}

#[test]
fn test_u16_conversion_out_of_range() {
    let value = Value::Int(65536);
    let result: Result<u16> = value.try_into();
    assert!(matches!(
        result,
        Err(CfgError::OutOfRange {
            value: 65536,
            target: "u16"
        })
    ));
}

#[test]
fn test_u8_negative_out_of_range() {
    let value = Value::Int(-1);
    let result: Result<u8> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_i32_conversion() {
    let value = Value::Int(-42);
    let result: Result<i32> = value.try_into();
    assert_eq!(result.unwrap(), -42);
}

#[test]
fn test_vec_conversion_is_strict() {
    let value = Value::IntList(vec![1, 2]);
    let result: Result<Vec<String>> = value.try_into();
    assert!(result.is_err());
}

#[test]
fn test_table_conversion() {
    let mut inner = Document::new();
    inner.insert("a", 1_i64);
    let value = Value::Table(inner.clone());
    let result: Result<Document> = value.try_into();
    assert_eq!(result.unwrap(), inner);
}
