#[macro_use]
mod macros;

mod error;
pub use error::{CipherError, ProviderStatus};

pub mod provider;
pub use provider::{CryptoProvider, KeyAlgorithm, Operation, RsaOperation, RustCryptoProvider};

pub mod cipher_mode;
pub use cipher_mode::PaddingMode;

pub mod block_cipher;
pub use block_cipher::{AesCipher, CipherConfig};

pub mod rsa;

pub trait Encrypt {
    // 写入ciphertext之前不清空
    fn encrypt(&self, plaintext: &[u8], ciphertext: &mut Vec<u8>) -> Result<(), CipherError>;
}

pub trait Decrypt {
    // 写入plaintext之前不清空
    fn decrypt(&self, ciphertext: &[u8], plaintext: &mut Vec<u8>) -> Result<(), CipherError>;
}

pub trait Cipher: Encrypt + Decrypt {}

impl<T> Cipher for T where T: Encrypt + Decrypt {}

pub trait Sign {
    // 写入sign之前不清空
    fn sign(&self, msg: &[u8], sign: &mut Vec<u8>) -> Result<(), CipherError>;
}

pub trait Verify {
    /// 任何失败都视为验证不通过
    fn verify(&self, msg: &[u8], sign: &[u8]) -> bool;
}

pub trait Signer: Sign + Verify {}

impl<T> Signer for T where T: Sign + Verify {}
