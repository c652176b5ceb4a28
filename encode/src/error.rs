use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("{0}")]
    IoErr(#[from] std::io::Error),

    #[error("Invalid base64 data in the decode: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid base16 data in the decode: {0}")]
    InvalidBase16(#[from] hex::FromHexError),
}
