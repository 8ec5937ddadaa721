use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown condition tag: {0}")]
    UnknownCondition(String),

    #[error("{field} value {value} is outside range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
