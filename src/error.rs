use thiserror::Error;

/// Rejection produced by the parameter setters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// The proposed value exceeds the destination field's byte limit.
    #[error("parameter value exceeds the field size limit")]
    ValueTooLong,
}

/// A config-methods token outside the capability vocabulary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown config method token: {0}")]
pub struct UnknownConfigMethod(pub String);
