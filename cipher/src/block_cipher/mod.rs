//! # Advanced Encryption Standard(AES-128)
//!
//! 分组长度和密钥长度都固定为16字节. 分组加解密本身由provider完成, 这里只负责:
//!
//! - IV规整: 取IV字符串的UTF-8字节, 超过16字节截断, 不足16字节右侧补零, 未指定IV时为全零;
//! - 填充模式选择: 见[`PaddingMode::for_operation`];
//! - 输出缓冲: 分配`len + 16`字节, 按provider返回的实际写入字节数截断.

use crate::provider::{CryptoProvider, Operation, AES128_KEY_SIZE, AES_BLOCK_SIZE};
use crate::{CipherError, PaddingMode, ProviderStatus};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 构造后不再改变
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CipherConfig {
    padding: PaddingMode,
}

impl CipherConfig {
    pub const BLOCK_SIZE: usize = AES_BLOCK_SIZE;
    pub const KEY_SIZE: usize = AES128_KEY_SIZE;

    pub const fn new(padding: PaddingMode) -> Self {
        Self { padding }
    }

    pub const fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub const fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    pub const fn key_size(&self) -> usize {
        Self::KEY_SIZE
    }
}

#[derive(Clone, Debug, Default)]
pub struct AesCipher<P> {
    provider: P,
    config: CipherConfig,
}

impl<P: CryptoProvider> AesCipher<P> {
    pub fn new(provider: P, config: CipherConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> CipherConfig {
        self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn normalize_iv(iv: Option<&str>) -> [u8; AES_BLOCK_SIZE] {
        let mut buf = [0u8; AES_BLOCK_SIZE];
        if let Some(iv) = iv {
            let iv = iv.as_bytes();
            let n = iv.len().min(AES_BLOCK_SIZE);
            buf[..n].copy_from_slice(&iv[..n]);
        }
        buf
    }

    /// `op`实际使用的填充模式
    pub fn padding_for(&self, op: Operation) -> PaddingMode {
        let configured = self.config.padding();
        let mode = configured.for_operation(op);
        if mode != configured {
            log::debug!("aes: {op:?} uses {mode:?} instead of the configured {configured:?}");
        }
        mode
    }

    pub fn encrypt(
        &self,
        plaintext: &[u8],
        key: &[u8],
        iv: Option<&str>,
    ) -> Result<Vec<u8>, CipherError> {
        self.crypt(Operation::Encrypt, plaintext, key, iv)
    }

    pub fn decrypt(
        &self,
        ciphertext: &[u8],
        key: &[u8],
        iv: Option<&str>,
    ) -> Result<Vec<u8>, CipherError> {
        self.crypt(Operation::Decrypt, ciphertext, key, iv)
    }

    fn crypt(
        &self,
        op: Operation,
        input: &[u8],
        key: &[u8],
        iv: Option<&str>,
    ) -> Result<Vec<u8>, CipherError> {
        let mut iv = Self::normalize_iv(iv);
        let padding = self.padding_for(op);
        let mut buf = vec![0u8; input.len() + AES_BLOCK_SIZE];

        let res = self
            .provider
            .block_cipher(op, key, &iv, padding, input, buf.as_mut_slice());
        wipe(&mut iv);

        match res {
            Ok(n) => {
                wipe(&mut buf[n..]);
                buf.truncate(n);
                log::trace!("aes: {op:?} {} bytes into {n} bytes", input.len());
                Ok(buf)
            }
            Err(status) => {
                wipe(buf.as_mut_slice());
                log::debug!("aes: {op:?} with {padding:?} failed: {status:?}");
                Err(match status {
                    ProviderStatus::KeySizeError => CipherError::InvalidKeySize {
                        target: AES128_KEY_SIZE,
                        real: key.len(),
                    },
                    status => CipherError::Provider { op, status },
                })
            }
        }
    }
}

#[cfg(feature = "sec-zeroize")]
fn wipe(buf: &mut [u8]) {
    buf.zeroize();
}

#[cfg(not(feature = "sec-zeroize"))]
fn wipe(_buf: &mut [u8]) {}
