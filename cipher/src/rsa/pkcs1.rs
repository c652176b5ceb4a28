//! = RFC 8017
//!
//! == PKCS #1: RSA Cryptography Specification Version 2.2
//!
//! === PKCS1(Public Key Cryptography Standards v1.5)
//!
//! `em = 0x00 || 0x02 || ps || 0x00 || msg`, `ps`至少8字节, 故单块消息最长为`k - 11`字节.
//! 超长的消息按`k - 11`字节分块, 每块加密后固定输出`k`字节; 解密时按`k`字节切分密文.
//! 明文块和密文块的大小不同, 两者的边界并不对齐.
//!

use crate::provider::{CryptoProvider, RsaOperation};
use crate::rsa::{KeyMaterial, KeyRole, PrivateKey, PublicKey};
use crate::{CipherError, Decrypt, Encrypt};
use rayon::prelude::*;

/// PKCS#1 v1.5填充开销
pub const PKCS1_OVERHEAD: usize = 11;

/// 分块的PKCS#1 v1.5加解密.
///
/// 任意一块失败则整体失败, 不返回部分结果. 开启`parallel`后各块并行处理, 输出顺序和串行处理一致.
#[derive(Clone, Debug, Default)]
pub struct PKCS1<P> {
    provider: P,
    parallel: bool,
}

impl<P: CryptoProvider> PKCS1<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            parallel: false,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 模数的字节长度, 即每个密文块的长度
    pub fn key_len(&self, key: &KeyMaterial<P>) -> Result<usize, CipherError> {
        match key {
            KeyMaterial::Public(k) => self.public_len(k),
            KeyMaterial::Private(k) => self.private_len(k),
        }
    }

    /// 单个明文块的最大长度
    pub fn max_msg_len(key_len: usize) -> Result<usize, CipherError> {
        if key_len <= PKCS1_OVERHEAD {
            Err(CipherError::Other(format!(
                "rsa: the {key_len} bytes modulus is too short"
            )))
        } else {
            Ok(key_len - PKCS1_OVERHEAD)
        }
    }

    /// 返回的密文长度是`key_len`的整数倍. 消息不超过`max_msg_len`时直接返回provider的输出.
    pub fn encrypt(&self, plaintext: &[u8], key: &PublicKey<P>) -> Result<Vec<u8>, CipherError> {
        self.check(RsaOperation::PublicEncrypt)?;
        let klen = self.public_len(key)?;
        self.encrypt_inner(plaintext, klen, |block| {
            self.provider.rsa_encrypt(key.handle(), block)
        })
    }

    /// 私钥加密, 需要provider支持
    pub fn encrypt_with_private(
        &self,
        plaintext: &[u8],
        key: &PrivateKey<P>,
    ) -> Result<Vec<u8>, CipherError> {
        self.check(RsaOperation::PrivateEncrypt)?;
        let klen = self.private_len(key)?;
        self.encrypt_inner(plaintext, klen, |block| {
            self.provider.rsa_private_encrypt(key.handle(), block)
        })
    }

    pub fn decrypt(&self, ciphertext: &[u8], key: &KeyMaterial<P>) -> Result<Vec<u8>, CipherError> {
        match key {
            KeyMaterial::Public(k) => self.decrypt_public(ciphertext, k),
            KeyMaterial::Private(k) => self.decrypt_private(ciphertext, k),
        }
    }

    pub fn decrypt_private(
        &self,
        ciphertext: &[u8],
        key: &PrivateKey<P>,
    ) -> Result<Vec<u8>, CipherError> {
        self.check(RsaOperation::PrivateDecrypt)?;
        let klen = self.private_len(key)?;
        self.decrypt_inner(ciphertext, klen, |block| {
            self.provider.rsa_decrypt(key.handle(), block)
        })
    }

    /// 公钥解密, 需要provider支持
    pub fn decrypt_public(
        &self,
        ciphertext: &[u8],
        key: &PublicKey<P>,
    ) -> Result<Vec<u8>, CipherError> {
        self.check(RsaOperation::PublicDecrypt)?;
        let klen = self.public_len(key)?;
        self.decrypt_inner(ciphertext, klen, |block| {
            self.provider.rsa_public_decrypt(key.handle(), block)
        })
    }

    fn check(&self, op: RsaOperation) -> Result<(), CipherError> {
        if self.provider.supports(op) {
            Ok(())
        } else {
            log::warn!("rsa: the provider does not support {op:?}");
            Err(CipherError::Unsupported(op))
        }
    }

    fn public_len(&self, key: &PublicKey<P>) -> Result<usize, CipherError> {
        self.provider
            .public_modulus_len(key.handle())
            .ok_or_else(|| Self::unknown_modulus(KeyRole::Public))
    }

    fn private_len(&self, key: &PrivateKey<P>) -> Result<usize, CipherError> {
        self.provider
            .private_modulus_len(key.handle())
            .ok_or_else(|| Self::unknown_modulus(KeyRole::Private))
    }

    fn unknown_modulus(role: KeyRole) -> CipherError {
        CipherError::Other(format!("rsa: cannot determine the {role} key modulus size"))
    }

    fn encrypt_inner<F>(&self, plaintext: &[u8], klen: usize, f: F) -> Result<Vec<u8>, CipherError>
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, CipherError> + Sync,
    {
        let mlen = Self::max_msg_len(klen)?;
        if plaintext.len() <= mlen {
            log::trace!("rsa: encrypt {} bytes in a single block", plaintext.len());
            return f(plaintext);
        }

        let blocks = self.map_chunks(plaintext, mlen, &f)?;
        if let Some(block) = blocks.iter().find(|b| b.len() != klen) {
            return Err(CipherError::InvalidBlockSize {
                target: klen,
                real: block.len(),
            });
        }

        log::debug!(
            "rsa: encrypted {} bytes in {} chunks of at most {mlen} bytes",
            plaintext.len(),
            blocks.len()
        );
        Ok(blocks.concat())
    }

    fn decrypt_inner<F>(&self, ciphertext: &[u8], klen: usize, f: F) -> Result<Vec<u8>, CipherError>
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, CipherError> + Sync,
    {
        // 模数过短时没有合法的密文块
        Self::max_msg_len(klen)?;

        // 最后一块也必须是完整的`klen`字节
        if ciphertext.is_empty() || ciphertext.len() % klen != 0 {
            return Err(CipherError::InvalidBlockSize {
                target: klen,
                real: ciphertext.len() % klen,
            });
        }

        let blocks = self.map_chunks(ciphertext, klen, &f)?;
        log::debug!(
            "rsa: decrypted {} bytes in {} blocks",
            ciphertext.len(),
            blocks.len()
        );
        Ok(blocks.concat())
    }

    fn map_chunks<F>(&self, data: &[u8], size: usize, f: &F) -> Result<Vec<Vec<u8>>, CipherError>
    where
        F: Fn(&[u8]) -> Result<Vec<u8>, CipherError> + Sync,
    {
        if self.parallel {
            data.par_chunks(size).map(f).collect()
        } else {
            data.chunks(size).map(f).collect()
        }
    }
}

/// 绑定公钥的PKCS1加密
pub struct PKCS1Encrypt<P: CryptoProvider> {
    pkcs: PKCS1<P>,
    key: PublicKey<P>,
}

/// 绑定私钥的PKCS1解密
pub struct PKCS1Decrypt<P: CryptoProvider> {
    pkcs: PKCS1<P>,
    key: PrivateKey<P>,
}

impl<P: CryptoProvider> PKCS1Encrypt<P> {
    pub fn new(pkcs: PKCS1<P>, key: PublicKey<P>) -> Self {
        Self { pkcs, key }
    }

    pub fn key(&self) -> &PublicKey<P> {
        &self.key
    }

    pub fn key_len(&self) -> Result<usize, CipherError> {
        self.pkcs.public_len(&self.key)
    }

    pub fn max_msg_len(&self) -> Result<usize, CipherError> {
        PKCS1::<P>::max_msg_len(self.key_len()?)
    }
}

impl<P: CryptoProvider> PKCS1Decrypt<P> {
    pub fn new(pkcs: PKCS1<P>, key: PrivateKey<P>) -> Self {
        Self { pkcs, key }
    }

    pub fn key(&self) -> &PrivateKey<P> {
        &self.key
    }

    pub fn key_len(&self) -> Result<usize, CipherError> {
        self.pkcs.private_len(&self.key)
    }
}

impl<P: CryptoProvider + Clone> Clone for PKCS1Encrypt<P> {
    fn clone(&self) -> Self {
        Self::new(self.pkcs.clone(), self.key.clone())
    }
}

impl<P: CryptoProvider + Clone> Clone for PKCS1Decrypt<P> {
    fn clone(&self) -> Self {
        Self::new(self.pkcs.clone(), self.key.clone())
    }
}

impl<P: CryptoProvider> Encrypt for PKCS1Encrypt<P> {
    fn encrypt(&self, plaintext: &[u8], ciphertext: &mut Vec<u8>) -> Result<(), CipherError> {
        let c = self.pkcs.encrypt(plaintext, &self.key)?;
        ciphertext.extend(c);
        Ok(())
    }
}

impl<P: CryptoProvider> Decrypt for PKCS1Decrypt<P> {
    fn decrypt(&self, ciphertext: &[u8], plaintext: &mut Vec<u8>) -> Result<(), CipherError> {
        let m = self.pkcs.decrypt_private(ciphertext, &self.key)?;
        plaintext.extend(m);
        Ok(())
    }
}
