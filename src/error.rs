use cipher::CipherError;
use encode::EncodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncryptorError {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("{0}")]
    Config(#[from] ::config::ConfigError),
}

impl EncryptorError {
    pub fn cipher(&self) -> Option<&CipherError> {
        match self {
            Self::Cipher(e) => Some(e),
            _ => None,
        }
    }
}
