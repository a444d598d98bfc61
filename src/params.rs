use crate::error::ParamError;
use crate::record::{
    ChangeFlags, ConfigRecord, DEVICE_NAME_MAX_LEN, MANUFACTURER_MAX_LEN, MODEL_NAME_MAX_LEN,
    MODEL_NUMBER_MAX_LEN, SERIAL_NUMBER_MAX_LEN,
};
use crate::wps::{encode_config_methods, WpsConfigMethods};
use log::warn;

/// Reconfiguration pipeline notified after every successful update of a
/// flagged parameter.
pub trait ReconfigSink {
    /// Applies whatever re-initialization the pending change flags call
    /// for. Failures are logged by the caller and never propagated.
    fn config_changed(&mut self, record: &mut ConfigRecord) -> Result<(), std::io::Error>;
}

/// Validates `value`, replaces the destination field, merges `flag` into
/// the pending change set and notifies `sink`. A rejected value leaves
/// the record, the change set and the sink untouched. `max_size` of
/// `None` means the field is unbounded.
fn set_string_param(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    value: &str,
    max_size: Option<usize>,
    flag: ChangeFlags,
    dest: fn(&mut ConfigRecord) -> &mut String,
) -> Result<(), ParamError> {
    if let Some(limit) = max_size {
        if value.len() > limit {
            return Err(ParamError::ValueTooLong);
        }
    }
    *dest(record) = value.to_owned();
    record.changed_parameters.insert(flag);
    if let Err(err) = sink.config_changed(record) {
        warn!("reconfiguration sink failed after parameter update: {err}");
    }
    Ok(())
}

/// Sets the WPS device name (at most [`DEVICE_NAME_MAX_LEN`] bytes).
pub fn set_wps_device_name(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    name: &str,
) -> Result<(), ParamError> {
    set_string_param(
        record,
        sink,
        name,
        Some(DEVICE_NAME_MAX_LEN),
        ChangeFlags::DEVICE_NAME,
        |record| &mut record.device_name,
    )
}

/// Sets the WPS manufacturer string (at most [`MANUFACTURER_MAX_LEN`]
/// bytes). Merges the shared [`ChangeFlags::WPS_STRING`] flag, as do the
/// model name, model number and serial number setters.
pub fn set_wps_manufacturer(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    manufacturer: &str,
) -> Result<(), ParamError> {
    set_string_param(
        record,
        sink,
        manufacturer,
        Some(MANUFACTURER_MAX_LEN),
        ChangeFlags::WPS_STRING,
        |record| &mut record.manufacturer,
    )
}

/// Sets the WPS model name (at most [`MODEL_NAME_MAX_LEN`] bytes).
pub fn set_wps_model_name(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    model_name: &str,
) -> Result<(), ParamError> {
    set_string_param(
        record,
        sink,
        model_name,
        Some(MODEL_NAME_MAX_LEN),
        ChangeFlags::WPS_STRING,
        |record| &mut record.model_name,
    )
}

/// Sets the WPS model number (at most [`MODEL_NUMBER_MAX_LEN`] bytes).
pub fn set_wps_model_number(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    model_number: &str,
) -> Result<(), ParamError> {
    set_string_param(
        record,
        sink,
        model_number,
        Some(MODEL_NUMBER_MAX_LEN),
        ChangeFlags::WPS_STRING,
        |record| &mut record.model_number,
    )
}

/// Sets the WPS serial number (at most [`SERIAL_NUMBER_MAX_LEN`] bytes).
pub fn set_wps_serial_number(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    serial_number: &str,
) -> Result<(), ParamError> {
    set_string_param(
        record,
        sink,
        serial_number,
        Some(SERIAL_NUMBER_MAX_LEN),
        ChangeFlags::WPS_STRING,
        |record| &mut record.serial_number,
    )
}

/// Stores the canonical encoding of `methods`. The destination is
/// unbounded, so the call cannot fail on size; the `Result` shape is
/// kept for uniformity with the other setters.
pub fn set_wps_config_methods(
    record: &mut ConfigRecord,
    sink: &mut dyn ReconfigSink,
    methods: WpsConfigMethods,
) -> Result<(), ParamError> {
    let encoded = encode_config_methods(methods);
    set_string_param(record, sink, &encoded, None, ChangeFlags::CONFIG_METHODS, |record| {
        &mut record.config_methods
    })
}

/// Routes EAP-SIM/AKA authentication through an external SIM. Takes
/// effect immediately: no change flag is merged and no reconfiguration
/// runs, unlike every other setter.
pub fn set_external_sim(record: &mut ConfigRecord, enabled: bool) {
    record.external_sim = enabled;
}
