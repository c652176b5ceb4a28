//! RSASSA-PKCS1-v1_5 over a SHA1 digest
//!
//! `s = RSASP1(k, EMSA-PKCS1-v1_5(SHA1(msg)))`, 签名长度固定为模数的字节长度.

use crate::provider::{CryptoProvider, RsaOperation};
use crate::rsa::{PrivateKey, PublicKey};
use crate::{CipherError, Sign, Verify};
use crypto_hash::DigestAlgorithm;
use encode::{Base64, Encode};

/// 签名的原始字节
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 大写十六进制, 每字节两个字符
    pub fn to_upper_hex(&self) -> String {
        crypto_hash::to_upper_hex(self.as_bytes())
    }

    pub fn to_base64(&self) -> String {
        Base64::standard().encode_to_string(self.as_bytes())
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Vec<u8>> for Signature {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

impl From<Signature> for Vec<u8> {
    fn from(value: Signature) -> Self {
        value.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct PKCS1Signer<P> {
    provider: P,
}

impl<P: CryptoProvider> PKCS1Signer<P> {
    pub const DIGEST: DigestAlgorithm = DigestAlgorithm::SHA1;

    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 先计算`msg`的SHA1摘要, 再对摘要签名. 空消息没有摘要, 返回错误.
    pub fn sign(&self, msg: &[u8], key: &PrivateKey<P>) -> Result<Signature, CipherError> {
        if !self.provider.supports(RsaOperation::Sign) {
            return Err(CipherError::Unsupported(RsaOperation::Sign));
        }

        let digest = self.provider.digest(Self::DIGEST, msg).ok_or_else(|| {
            CipherError::Digest(format!("no {:?} digest for an empty message", Self::DIGEST))
        })?;

        let s = self.provider.rsa_sign(key.handle(), digest.as_slice())?;
        log::trace!("rsa: signed {} bytes into a {} bytes signature", msg.len(), s.len());
        Ok(Signature(s))
    }

    /// 摘要失败, 签名格式错误, 密钥不匹配等一律返回`false`
    pub fn verify(&self, msg: &[u8], signature: &[u8], key: &PublicKey<P>) -> bool {
        if !self.provider.supports(RsaOperation::Verify) {
            log::warn!("rsa: the provider does not support {:?}", RsaOperation::Verify);
            return false;
        }

        match self.provider.digest(Self::DIGEST, msg) {
            Some(digest) => self
                .provider
                .rsa_verify(key.handle(), digest.as_slice(), signature),
            None => false,
        }
    }
}

/// 绑定私钥的签名
pub struct PKCS1Sign<P: CryptoProvider> {
    signer: PKCS1Signer<P>,
    key: PrivateKey<P>,
}

/// 绑定公钥的验签
pub struct PKCS1Verify<P: CryptoProvider> {
    signer: PKCS1Signer<P>,
    key: PublicKey<P>,
}

impl<P: CryptoProvider> PKCS1Sign<P> {
    pub fn new(signer: PKCS1Signer<P>, key: PrivateKey<P>) -> Self {
        Self { signer, key }
    }

    pub fn sign_msg(&self, msg: &[u8]) -> Result<Signature, CipherError> {
        self.signer.sign(msg, &self.key)
    }
}

impl<P: CryptoProvider> PKCS1Verify<P> {
    pub fn new(signer: PKCS1Signer<P>, key: PublicKey<P>) -> Self {
        Self { signer, key }
    }
}

impl<P: CryptoProvider> Sign for PKCS1Sign<P> {
    fn sign(&self, msg: &[u8], sign: &mut Vec<u8>) -> Result<(), CipherError> {
        let s = self.sign_msg(msg)?;
        sign.extend(Vec::from(s));
        Ok(())
    }
}

impl<P: CryptoProvider> Verify for PKCS1Verify<P> {
    fn verify(&self, msg: &[u8], sign: &[u8]) -> bool {
        self.signer.verify(msg, sign, &self.key)
    }
}
