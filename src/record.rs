use bitflags::bitflags;

/// Maximum byte length of the WPS device name.
pub const DEVICE_NAME_MAX_LEN: usize = 32;
/// Maximum byte length of the WPS manufacturer string.
pub const MANUFACTURER_MAX_LEN: usize = 64;
/// Maximum byte length of the WPS model name.
pub const MODEL_NAME_MAX_LEN: usize = 32;
/// Maximum byte length of the WPS model number.
pub const MODEL_NUMBER_MAX_LEN: usize = 32;
/// Maximum byte length of the WPS serial number.
pub const SERIAL_NUMBER_MAX_LEN: usize = 32;

bitflags! {
    /// Configuration groups with pending changes, consumed and cleared
    /// by the daemon's reconfiguration routine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ChangeFlags: u32 {
        const DEVICE_NAME = 1 << 0;
        const CONFIG_METHODS = 1 << 1;
        /// Shared by the manufacturer, model name, model number and
        /// serial number setters: the WPS descriptive strings are
        /// re-applied as one group.
        const WPS_STRING = 1 << 8;
    }
}

/// Mutable configuration state, created at startup and owned by the
/// daemon for its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    pub device_name: String,
    pub manufacturer: String,
    pub model_name: String,
    pub model_number: String,
    pub serial_number: String,
    /// Canonical space-joined config-method token list.
    pub config_methods: String,
    pub external_sim: bool,
    pub changed_parameters: ChangeFlags,
}

impl ConfigRecord {
    /// Hands the pending change set to the reconfiguration routine and
    /// resets it.
    pub fn take_changed_parameters(&mut self) -> ChangeFlags {
        std::mem::take(&mut self.changed_parameters)
    }
}
