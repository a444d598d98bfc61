use crate::record::{
    ConfigRecord, DEVICE_NAME_MAX_LEN, MANUFACTURER_MAX_LEN, MODEL_NAME_MAX_LEN,
    MODEL_NUMBER_MAX_LEN, SERIAL_NUMBER_MAX_LEN,
};
use crate::wps::{encode_config_methods, parse_config_methods};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Device identity section of the daemon configuration file. Seeds a
/// fresh [`ConfigRecord`] at startup; runtime changes go through the
/// parameter setters, which enforce the same limits.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DeviceConfig {
    pub device_name: String,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub serial_number: String,
    pub config_methods: String,
    pub external_sim: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DeviceConfigRaw {
    device_name: String,
    manufacturer: String,
    model_name: String,
    model_number: String,
    serial_number: String,
    config_methods: String,
    external_sim: bool,
}

impl<'de> Deserialize<'de> for DeviceConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = DeviceConfigRaw::deserialize(deserializer)?;
        let methods = parse_config_methods(&raw.config_methods)
            .map_err(|err| D::Error::custom(format!("config_methods is invalid: {err}")))?;
        let cfg = Self {
            device_name: raw.device_name,
            manufacturer: raw.manufacturer,
            model_name: raw.model_name,
            model_number: raw.model_number,
            serial_number: raw.serial_number,
            config_methods: encode_config_methods(methods),
            external_sim: raw.external_sim,
        };
        cfg.validate().map_err(D::Error::custom)?;
        Ok(cfg)
    }
}

impl DeviceConfig {
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    }

    pub fn example_toml() -> String {
        toml::to_string_pretty(&Self::default()).expect("valid device config template")
    }

    /// Builds the daemon's runtime record with an empty change set.
    pub fn into_record(self) -> ConfigRecord {
        ConfigRecord {
            device_name: self.device_name,
            manufacturer: self.manufacturer,
            model_name: self.model_name,
            model_number: self.model_number,
            serial_number: self.serial_number,
            config_methods: self.config_methods,
            external_sim: self.external_sim,
            ..ConfigRecord::default()
        }
    }

    fn validate(&self) -> Result<(), String> {
        require_max_len("device_name", &self.device_name, DEVICE_NAME_MAX_LEN)?;
        require_max_len("manufacturer", &self.manufacturer, MANUFACTURER_MAX_LEN)?;
        require_max_len("model_name", &self.model_name, MODEL_NAME_MAX_LEN)?;
        require_max_len("model_number", &self.model_number, MODEL_NUMBER_MAX_LEN)?;
        require_max_len("serial_number", &self.serial_number, SERIAL_NUMBER_MAX_LEN)
    }
}

fn require_max_len(field: &str, value: &str, limit: usize) -> Result<(), String> {
    if value.len() > limit {
        return Err(format!("{field} must be at most {limit} bytes"));
    }
    Ok(())
}
