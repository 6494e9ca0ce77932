//! Stable error codes surfaced to callers (HTTP layer, UI).

pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const INVALID_RULE_SET: &str = "INVALID_RULE_SET";
pub const UNKNOWN_FINDING: &str = "UNKNOWN_FINDING";
pub const INVALID_ENUM_VALUE: &str = "INVALID_ENUM_VALUE";
pub const UNSUPPORTED_FIELD: &str = "UNSUPPORTED_FIELD";
pub const EMPTY_CORRECTION: &str = "EMPTY_CORRECTION";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";

/// Every error type in the workspace maps to one stable code.
pub trait SurveyErrorCode {
    fn error_code(&self) -> &'static str;
}
