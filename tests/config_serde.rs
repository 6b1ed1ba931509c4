//! Persisting view configuration with the `serde` feature.

#![cfg(feature = "serde")]

use hexview_rust::{OffsetFormat, RowConfig, RowInsets, ViewConfig};

#[test]
fn config_round_trips_through_json() {
    let config = ViewConfig {
        row: RowConfig::new(32, 8, 12, RowInsets::new(2, 3, 1, 0).unwrap(), 1).unwrap(),
        offset: OffsetFormat {
            prefix: "0x".to_string(),
            suffix: String::new(),
            min_digits: 6,
            uppercase: false,
        },
        text_placeholder: '?',
        ..ViewConfig::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let back: ViewConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
    back.validate().unwrap();
}

#[test]
fn missing_fields_take_defaults() {
    let back: ViewConfig = serde_json::from_str(r#"{"area_gap": 20}"#).unwrap();
    assert_eq!(back.area_gap, 20);
    assert_eq!(back.row, RowConfig::default());
    assert_eq!(back.text_placeholder, '.');
}

#[test]
fn loaded_config_is_validated_separately() {
    let json = r#"{
        "row": {
            "bytes_per_row": 16,
            "bytes_per_group": 0,
            "group_gap": 8,
            "insets": {"left": 0, "right": 0, "top": 0, "bottom": 0},
            "caret_width": 2
        }
    }"#;
    let loaded: ViewConfig = serde_json::from_str(json).unwrap();
    let err = loaded.validate().unwrap_err();
    assert!(err.to_string().contains("bytes_per_group"));
}
