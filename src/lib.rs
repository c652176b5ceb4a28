//! AES-128, RSA and digest helpers over a pluggable [`CryptoProvider`].
//!
//! ```no_run
//! use encryptor::{AesEncryptor, EncryptorConfig, RsaEncryptor};
//!
//! let config = EncryptorConfig::load_or_default(Some("encryptor.json"));
//! let aes = AesEncryptor::from_config(&config);
//! let c = aes.encrypt_to_base64("hello world", "1234567890123456", Some("0000000000000000"));
//!
//! let rsa = RsaEncryptor::from_config(&config);
//! ```

pub mod aes;
pub mod config;
pub mod digest;
pub mod error;
pub mod rsa;

pub use aes::AesEncryptor;
pub use config::EncryptorConfig;
pub use digest::DigestExt;
pub use error::EncryptorError;
pub use rsa::RsaEncryptor;

pub use cipher::rsa::{KeyRole, Signature};
pub use cipher::{CipherError, CryptoProvider, PaddingMode, RustCryptoProvider};

/// 记录错误并丢弃
pub fn log_error<T>(x: Result<T, anyhow::Error>) -> Option<T> {
    x.map_err(|e| {
        log::error!("{e}");
    })
    .ok()
}
