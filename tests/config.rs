use std::fs;
use tempfile::NamedTempFile;
use wifid_config::{ChangeFlags, DeviceConfig};

#[test]
fn parses_a_full_device_section() {
    let input = r#"
device_name = "Office AP"
manufacturer = "Acme Networks"
model_name = "AP-1"
model_number = "001"
serial_number = "SN-12345"
config_methods = "display keypad"
external_sim = true
"#;
    let cfg = DeviceConfig::from_toml(input).expect("parse");
    assert_eq!(cfg.device_name, "Office AP");
    assert_eq!(cfg.manufacturer, "Acme Networks");
    assert_eq!(cfg.serial_number, "SN-12345");
    assert!(cfg.external_sim);
}

#[test]
fn missing_fields_default_to_empty() {
    let cfg = DeviceConfig::from_toml("").expect("empty config parses");
    assert_eq!(cfg, DeviceConfig::default());
}

#[test]
fn canonicalizes_config_methods_token_order() {
    let cfg = DeviceConfig::from_toml(r#"config_methods = "keypad display""#).expect("parse");
    assert_eq!(cfg.config_methods, "display keypad ");
}

#[test]
fn rejects_an_oversized_device_name() {
    let input = format!("device_name = \"{}\"", "a".repeat(33));
    let err = DeviceConfig::from_toml(&input).expect_err("33 bytes must fail");
    let message = err.to_string();
    assert!(
        message.contains("device_name must be at most 32 bytes"),
        "unexpected parse error: {message}"
    );
}

#[test]
fn rejects_unknown_config_method_tokens() {
    let err = DeviceConfig::from_toml(r#"config_methods = "display telepathy""#)
        .expect_err("unknown token must fail");
    let message = err.to_string();
    assert!(
        message.contains("unknown config method token: telepathy"),
        "unexpected parse error: {message}"
    );
}

#[test]
fn seeds_a_record_with_an_empty_change_set() {
    let input = r#"
device_name = "Office AP"
config_methods = "pushbutton"
"#;
    let record = DeviceConfig::from_toml(input).expect("parse").into_record();
    assert_eq!(record.device_name, "Office AP");
    assert_eq!(record.config_methods, "pushbutton ");
    assert_eq!(record.changed_parameters, ChangeFlags::empty());
}

#[test]
fn loads_config_from_file() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), "device_name = \"Office AP\"\n").expect("write");

    let cfg = DeviceConfig::from_path(file.path()).expect("load");
    assert_eq!(cfg.device_name, "Office AP");
}

#[test]
fn example_template_round_trips() {
    let rendered = DeviceConfig::example_toml();
    let cfg = DeviceConfig::from_toml(&rendered).expect("template parses");
    assert_eq!(cfg, DeviceConfig::default());
}
