#![cfg(feature = "serde")]

use thdecode::{LzssParams, decompress_with};

#[test]
fn params_load_from_json() {
    let json = r#"{
        "index_size": 13,
        "length_size": 4,
        "min_length": 3,
        "initial_write_index": 1
    }"#;

    let params: LzssParams = serde_json::from_str(json).unwrap();
    assert_eq!(params, LzssParams::ZUN);
    assert_eq!(
        decompress_with(&[0xA0, 0xD0, 0x80, 0x00], &params).unwrap(),
        b"AB"
    );
}

#[test]
fn params_serialize_field_names() {
    let value = serde_json::to_value(LzssParams::new(12, 4, 2, 4078)).unwrap();
    assert_eq!(value["index_size"], 12);
    assert_eq!(value["initial_write_index"], 4078);
}
