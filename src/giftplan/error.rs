use thiserror::Error;

#[derive(Error, Debug)]
pub enum GiftPlanError {
    #[error("No plan loaded. Run `giftplan load` first.")]
    NoPlan,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not decode plan: {0}")]
    Decode(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<base64::DecodeError> for GiftPlanError {
    fn from(err: base64::DecodeError) -> Self {
        GiftPlanError::Decode(format!("invalid base64: {}", err))
    }
}

impl From<std::string::FromUtf8Error> for GiftPlanError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        GiftPlanError::Decode(format!("payload is not UTF-8: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, GiftPlanError>;
