//! Validated configuration-parameter updates for the wifid daemon.
//!
//! The management transport decodes remote calls into typed values and
//! hands them to the setters in [`params`]; every accepted change is
//! recorded in the [`record::ConfigRecord`] change set and pushed into
//! the daemon's reconfiguration pipeline.

pub mod config;
pub mod error;
pub mod params;
pub mod record;
pub mod status;
pub mod wps;

pub use config::DeviceConfig;
pub use error::{ParamError, UnknownConfigMethod};
pub use params::{
    set_external_sim, set_wps_config_methods, set_wps_device_name, set_wps_manufacturer,
    set_wps_model_name, set_wps_model_number, set_wps_serial_number, ReconfigSink,
};
pub use record::{ChangeFlags, ConfigRecord};
pub use status::{ParamStatus, ParamStatusCode};
pub use wps::{encode_config_methods, parse_config_methods, WpsConfigMethods};
