#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("instruction requires {required} accounts, got {provided}")]
    InsufficientAccounts { required: usize, provided: usize },

    #[error("payload truncated: expected {expected} bytes, got {available}")]
    TruncatedPayload { expected: usize, available: usize },

    #[error("invalid value {value:#04x} for enum field `{field}`")]
    InvalidEnumValue { field: &'static str, value: u8 },

    #[error("malformed payload: {reason}")]
    MalformedPayload { reason: String },
}
