use crate::provider::{CryptoProvider, KeyAlgorithm};
use crate::rsa::pem;
use crate::CipherError;
use encode::{Base64, Decode};
use std::fmt::{Debug, Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyRole {
    Public,
    Private,
}

impl Display for KeyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public => f.write_str("public"),
            Self::Private => f.write_str("private"),
        }
    }
}

/// 公钥句柄, 只能用于加密和验签
pub struct PublicKey<P: CryptoProvider> {
    handle: P::PublicHandle,
}

/// 私钥句柄, 只能用于解密和签名
pub struct PrivateKey<P: CryptoProvider> {
    handle: P::PrivateHandle,
}

/// A key handle tagged with its role.
pub enum KeyMaterial<P: CryptoProvider> {
    Public(PublicKey<P>),
    Private(PrivateKey<P>),
}

impl<P: CryptoProvider> PublicKey<P> {
    pub fn from_handle(handle: P::PublicHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &P::PublicHandle {
        &self.handle
    }
}

impl<P: CryptoProvider> PrivateKey<P> {
    pub fn from_handle(handle: P::PrivateHandle) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &P::PrivateHandle {
        &self.handle
    }
}

impl<P: CryptoProvider> Clone for PublicKey<P> {
    fn clone(&self) -> Self {
        Self::from_handle(self.handle.clone())
    }
}

impl<P: CryptoProvider> Clone for PrivateKey<P> {
    fn clone(&self) -> Self {
        Self::from_handle(self.handle.clone())
    }
}

impl<P: CryptoProvider> Debug for PublicKey<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicKey").finish_non_exhaustive()
    }
}

impl<P: CryptoProvider> Debug for PrivateKey<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

impl<P: CryptoProvider> KeyMaterial<P> {
    pub fn role(&self) -> KeyRole {
        match self {
            Self::Public(_) => KeyRole::Public,
            Self::Private(_) => KeyRole::Private,
        }
    }

    pub fn public(&self) -> Option<&PublicKey<P>> {
        match self {
            Self::Public(k) => Some(k),
            Self::Private(_) => None,
        }
    }

    pub fn private(&self) -> Option<&PrivateKey<P>> {
        match self {
            Self::Public(_) => None,
            Self::Private(k) => Some(k),
        }
    }
}

impl<P: CryptoProvider> Clone for KeyMaterial<P> {
    fn clone(&self) -> Self {
        match self {
            Self::Public(k) => Self::Public(k.clone()),
            Self::Private(k) => Self::Private(k.clone()),
        }
    }
}

impl<P: CryptoProvider> Debug for KeyMaterial<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Public(k) => Debug::fmt(k, f),
            Self::Private(k) => Debug::fmt(k, f),
        }
    }
}

impl<P: CryptoProvider> From<PublicKey<P>> for KeyMaterial<P> {
    fn from(value: PublicKey<P>) -> Self {
        Self::Public(value)
    }
}

impl<P: CryptoProvider> From<PrivateKey<P>> for KeyMaterial<P> {
    fn from(value: PrivateKey<P>) -> Self {
        Self::Private(value)
    }
}

/// 从裸base64字符串(不含PEM首尾标记)导入RSA密钥.
///
/// 不缓存导入结果, 同一字符串可以重复导入.
#[derive(Clone, Debug, Default)]
pub struct KeyImporter<P> {
    provider: P,
}

impl<P: CryptoProvider> KeyImporter<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn import(&self, raw: &str, role: KeyRole) -> Result<KeyMaterial<P>, CipherError> {
        match role {
            KeyRole::Public => self.import_public(raw).map(KeyMaterial::Public),
            KeyRole::Private => self.import_private(raw).map(KeyMaterial::Private),
        }
    }

    pub fn import_public(&self, raw: &str) -> Result<PublicKey<P>, CipherError> {
        let pem = Self::wrap(raw, KeyRole::Public)?;
        let handle = self
            .provider
            .import_public_key(pem.as_bytes(), KeyAlgorithm::Rsa)
            .map_err(Self::import_error)?;

        log::debug!("rsa: imported public key from {} base64 chars", raw.len());
        Ok(PublicKey::from_handle(handle))
    }

    pub fn import_private(&self, raw: &str) -> Result<PrivateKey<P>, CipherError> {
        let pem = Self::wrap(raw, KeyRole::Private)?;
        let handle = self
            .provider
            .import_private_key(pem.as_bytes(), KeyAlgorithm::Rsa)
            .map_err(Self::import_error)?;

        log::debug!("rsa: imported private key from {} base64 chars", raw.len());
        Ok(PrivateKey::from_handle(handle))
    }

    fn wrap(raw: &str, role: KeyRole) -> Result<String, CipherError> {
        if raw.is_empty() {
            return Err(CipherError::KeyImport(format!("empty {role} key")));
        }

        if raw.contains("-----") {
            return Err(CipherError::KeyImport(
                "the key must be bare base64 without PEM markers".to_string(),
            ));
        }

        let der = Base64::standard()
            .decode_str(raw)
            .map_err(|e| CipherError::KeyImport(format!("malformed base64 {role} key: {e}")))?;
        if der.is_empty() {
            return Err(CipherError::KeyImport(format!("empty {role} key")));
        }

        Ok(pem::to_pem(raw, role))
    }

    fn import_error(e: CipherError) -> CipherError {
        match e {
            CipherError::KeyImport(_) => e,
            e => CipherError::KeyImport(e.to_string()),
        }
    }
}
