use crate::error::ParamError;
use serde::{Deserialize, Serialize};

/// Outcome codes reported to the management transport.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParamStatusCode {
    Success,
    ArgsInvalid,
}

/// Transport-facing result of a parameter operation. `message` is
/// reserved for diagnostic text and currently always empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ParamStatus {
    pub code: ParamStatusCode,
    pub message: String,
}

impl ParamStatus {
    pub fn success() -> Self {
        Self { code: ParamStatusCode::Success, message: String::new() }
    }

    pub fn args_invalid() -> Self {
        Self { code: ParamStatusCode::ArgsInvalid, message: String::new() }
    }
}

impl From<Result<(), ParamError>> for ParamStatus {
    fn from(outcome: Result<(), ParamError>) -> Self {
        match outcome {
            Ok(()) => Self::success(),
            Err(ParamError::ValueTooLong) => Self::args_invalid(),
        }
    }
}
