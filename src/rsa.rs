use crate::{EncryptorConfig, EncryptorError};
use cipher::rsa::{KeyImporter, KeyRole, PKCS1Signer, PrivateKey, PublicKey, Signature, PKCS1};
use cipher::{CipherError, CryptoProvider, RustCryptoProvider};
use encode::{Base64, Decode};
use std::fmt::{Debug, Formatter};

/// RSA加解密和签名.
///
/// 可以预先绑定一对默认密钥(`with_keys`), 也可以每次调用时显式传入裸base64密钥字符串(`*_with`).
/// 显式传入的密钥每次都重新导入, 不做缓存.
pub struct RsaEncryptor<P: CryptoProvider = RustCryptoProvider> {
    importer: KeyImporter<P>,
    pkcs: PKCS1<P>,
    signer: PKCS1Signer<P>,
    public_key: Option<PublicKey<P>>,
    private_key: Option<PrivateKey<P>>,
}

impl RsaEncryptor<RustCryptoProvider> {
    pub fn new() -> Self {
        Self::with_provider(RustCryptoProvider::new())
    }

    /// 导入配置中的默认密钥
    pub fn from_config(config: &EncryptorConfig) -> Result<Self, EncryptorError> {
        Self::new().parallel(config.rsa_parallel).with_keys(
            config.rsa_public_key.as_deref(),
            config.rsa_private_key.as_deref(),
        )
    }
}

impl Default for RsaEncryptor {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CryptoProvider + Clone> RsaEncryptor<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            importer: KeyImporter::new(provider.clone()),
            pkcs: PKCS1::new(provider.clone()),
            signer: PKCS1Signer::new(provider),
            public_key: None,
            private_key: None,
        }
    }

    /// 分块并行处理, 输出和串行一致
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.pkcs = self.pkcs.with_parallel(parallel);
        self
    }

    /// 绑定默认密钥, 任意一个导入失败则返回错误
    pub fn with_keys(
        mut self,
        public_key: Option<&str>,
        private_key: Option<&str>,
    ) -> Result<Self, EncryptorError> {
        if let Some(k) = public_key {
            self.public_key = Some(self.importer.import_public(k)?);
        }
        if let Some(k) = private_key {
            self.private_key = Some(self.importer.import_private(k)?);
        }
        Ok(self)
    }
}

impl<P: CryptoProvider> RsaEncryptor<P> {
    pub fn public_key(&self) -> Option<&PublicKey<P>> {
        self.public_key.as_ref()
    }

    pub fn private_key(&self) -> Option<&PrivateKey<P>> {
        self.private_key.as_ref()
    }

    fn default_public(&self) -> Result<&PublicKey<P>, CipherError> {
        self.public_key
            .as_ref()
            .ok_or(CipherError::MissingKey(KeyRole::Public))
    }

    fn default_private(&self) -> Result<&PrivateKey<P>, CipherError> {
        self.private_key
            .as_ref()
            .ok_or(CipherError::MissingKey(KeyRole::Private))
    }

    pub fn encrypt_by_public_key(&self, data: &[u8]) -> Result<Vec<u8>, EncryptorError> {
        Ok(self.pkcs.encrypt(data, self.default_public()?)?)
    }

    pub fn encrypt_by_public_key_str(&self, plaintext: &str) -> Result<Vec<u8>, EncryptorError> {
        self.encrypt_by_public_key(plaintext.as_bytes())
    }

    pub fn decrypt_by_private_key(&self, data: &[u8]) -> Result<Vec<u8>, EncryptorError> {
        Ok(self.pkcs.decrypt_private(data, self.default_private()?)?)
    }

    /// `ciphertext`的UTF-8字节即为密文
    pub fn decrypt_by_private_key_str(&self, ciphertext: &str) -> Result<Vec<u8>, EncryptorError> {
        self.decrypt_by_private_key(ciphertext.as_bytes())
    }

    pub fn decrypt_by_private_key_base64(
        &self,
        ciphertext: &str,
    ) -> Result<Vec<u8>, EncryptorError> {
        let c = Base64::standard().decode_str(ciphertext)?;
        self.decrypt_by_private_key(c.as_slice())
    }

    pub fn sign(&self, data: &[u8]) -> Result<Signature, EncryptorError> {
        Ok(self.signer.sign(data, self.default_private()?)?)
    }

    /// 签名的大写十六进制形式
    pub fn sign_str(&self, msg: &str) -> Result<String, EncryptorError> {
        self.sign(msg.as_bytes()).map(|s| s.to_upper_hex())
    }

    pub fn verify(&self, data: &[u8], signature: &[u8]) -> bool {
        match self.default_public() {
            Ok(k) => self.signer.verify(data, signature, k),
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    /// `signature`为base64编码
    pub fn verify_str(&self, msg: &str, signature: &str) -> bool {
        Self::decode_signature(signature)
            .map_or(false, |s| self.verify(msg.as_bytes(), s.as_slice()))
    }

    pub fn encrypt_with(&self, data: &[u8], public_key: &str) -> Result<Vec<u8>, EncryptorError> {
        let k = self.importer.import_public(public_key)?;
        Ok(self.pkcs.encrypt(data, &k)?)
    }

    pub fn encrypt_str_with(
        &self,
        plaintext: &str,
        public_key: &str,
    ) -> Result<Vec<u8>, EncryptorError> {
        self.encrypt_with(plaintext.as_bytes(), public_key)
    }

    pub fn decrypt_with(&self, data: &[u8], private_key: &str) -> Result<Vec<u8>, EncryptorError> {
        let k = self.importer.import_private(private_key)?;
        Ok(self.pkcs.decrypt_private(data, &k)?)
    }

    pub fn decrypt_str_with(
        &self,
        ciphertext: &str,
        private_key: &str,
    ) -> Result<Vec<u8>, EncryptorError> {
        self.decrypt_with(ciphertext.as_bytes(), private_key)
    }

    /// 公钥解密, provider不支持时返回`CipherError::Unsupported`
    pub fn decrypt_with_public_key(
        &self,
        data: &[u8],
        public_key: &str,
    ) -> Result<Vec<u8>, EncryptorError> {
        let k = self.importer.import_public(public_key)?;
        Ok(self.pkcs.decrypt_public(data, &k)?)
    }

    pub fn sign_with(&self, data: &[u8], private_key: &str) -> Result<Signature, EncryptorError> {
        let k = self.importer.import_private(private_key)?;
        Ok(self.signer.sign(data, &k)?)
    }

    pub fn verify_with(&self, data: &[u8], signature: &[u8], public_key: &str) -> bool {
        match self.importer.import_public(public_key) {
            Ok(k) => self.signer.verify(data, signature, &k),
            Err(e) => {
                log::debug!("{e}");
                false
            }
        }
    }

    pub fn verify_str_with(&self, msg: &str, signature: &str, public_key: &str) -> bool {
        Self::decode_signature(signature)
            .map_or(false, |s| self.verify_with(msg.as_bytes(), s.as_slice(), public_key))
    }

    fn decode_signature(signature: &str) -> Option<Vec<u8>> {
        Base64::standard()
            .decode_str(signature)
            .map_err(|e| log::debug!("rsa: malformed base64 signature: {e}"))
            .ok()
    }
}

impl<P: CryptoProvider> Debug for RsaEncryptor<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaEncryptor")
            .field("parallel", &self.pkcs.is_parallel())
            .field("public_key", &self.public_key.is_some())
            .field("private_key", &self.private_key.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::RsaEncryptor;
    use crate::{EncryptorConfig, EncryptorError};
    use cipher::rsa::KeyRole;
    use cipher::{CipherError, RsaOperation};
    use encode::{Base64, Encode};

    const PUBLIC_KEY: &str = "MIGfMA0GCSqGSIb3DQEBAQUAA4GNADCBiQKBgQDFxGe5if3CxhLAGRX3+qLO4Q2xS2+P98FoI/ncNdLWAg6DQ/o8XopMXJpuIRXYZWcp828bhNxcDULA1jpPJB8FL4H4Szgv5IW5X4qWoslRyaUxj2ACOYX/DbnBGM707qH+6VR8e877UtP9Xnnlg0pLEVZUb2CpGb3UCGX0ftg3CQIDAQAB";
    const PRIVATE_KEY: &str = "MIICeAIBADANBgkqhkiG9w0BAQEFAASCAmIwggJeAgEAAoGBAMXEZ7mJ/cLGEsAZFff6os7hDbFLb4/3wWgj+dw10tYCDoND+jxeikxcmm4hFdhlZynzbxuE3FwNQsDWOk8kHwUvgfhLOC/khblfipaiyVHJpTGPYAI5hf8NucEYzvTuof7pVHx7zvtS0/1eeeWDSksRVlRvYKkZvdQIZfR+2DcJAgMBAAECgYEArgob5fID+YZqNdddt+8/m6P+csoaEa5M7CLM3fgX5PHGZ8pIyxu/xVexJ73CBb+nPAnY+3S+n9ujpSRiCAeXq2APr21YP+EDDnOS4kEvtTxZQ79GoLTxDGpaUX5tlSDpRdAmlM1qX+KGurzAuWrp/nAeERB61k5C6Y5slLlTWqECQQD7txwg3rZQSgReg9VFzGITScmoYUC5JONsREVn6EV7Ab/tMQuOOuzXVA36hK8t0lq6EArj6yutImpB/PXjn0utAkEAySI1Nf1El7WEc0PJ7gB8SXs7MWMEq6Gq+B4e2xmStEUf09d/t8sXWNbd4KK4zs7+i12KgfyzDFoceQ0W+bbETQJACP7ELJCI51mdylrftjzVjGboo/HFxFgDII1YBZyRTxIC79D+3rhQWmmQjlFLiVGpGFkWaoqu5uMB9RW7G8VHiQJBAJySVYvOubvDoPS9m477r8Tf+kdKxpL5CgeWIvz6XlqYyNr3EcQ4g9czhItfALB1MG+7BJyF47fE2g9dojoIDa0CQQCN7W4DlZVy2IrePKOiDxGKffj0y7xyx2R3YfROQwSJEdr9FHSDdmPyY169rpKAVi+4S2Nyaw/4ncdE7hQjGCbH";

    #[test]
    fn rsa_missing_keys() {
        let rsa = RsaEncryptor::new();
        assert!(matches!(
            rsa.encrypt_by_public_key(b"hello"),
            Err(EncryptorError::Cipher(CipherError::MissingKey(KeyRole::Public)))
        ));
        assert!(matches!(
            rsa.sign(b"hello"),
            Err(EncryptorError::Cipher(CipherError::MissingKey(KeyRole::Private)))
        ));
        assert!(!rsa.verify(b"hello", &[0u8; 128]));
    }

    #[test]
    fn rsa_default_keys() {
        let config = EncryptorConfig {
            rsa_parallel: true,
            rsa_public_key: Some(PUBLIC_KEY.to_string()),
            rsa_private_key: Some(PRIVATE_KEY.to_string()),
            ..Default::default()
        };
        let rsa = RsaEncryptor::from_config(&config).unwrap();
        assert!(rsa.public_key().is_some() && rsa.private_key().is_some());

        let msg = "x".repeat(300);
        let c = rsa.encrypt_by_public_key_str(&msg).unwrap();
        assert_eq!(c.len(), 384);
        let b64 = Base64::standard().encode_to_string(c.as_slice());
        assert_eq!(rsa.decrypt_by_private_key_base64(&b64).unwrap(), msg.as_bytes());

        let hex = rsa.sign_str("test message").unwrap();
        assert_eq!(hex.len(), 256);
        let sig = rsa.sign(b"test message").unwrap();
        assert_eq!(sig.to_upper_hex(), hex);
        assert!(rsa.verify_str("test message", &sig.to_base64()));
        assert!(!rsa.verify_str("test message", &hex));
    }

    #[test]
    fn rsa_explicit_keys() {
        let rsa = RsaEncryptor::new();
        let c = rsa.encrypt_str_with("hello world", PUBLIC_KEY).unwrap();
        assert_eq!(rsa.decrypt_with(&c, PRIVATE_KEY).unwrap(), b"hello world");

        assert!(matches!(
            rsa.decrypt_with_public_key(&c, PUBLIC_KEY),
            Err(EncryptorError::Cipher(CipherError::Unsupported(RsaOperation::PublicDecrypt)))
        ));
        assert!(matches!(
            rsa.encrypt_with(b"hello", "bad key"),
            Err(EncryptorError::Cipher(CipherError::KeyImport(_)))
        ));

        let sig = rsa.sign_with(b"test message", PRIVATE_KEY).unwrap();
        assert!(rsa.verify_with(b"test message", sig.as_bytes(), PUBLIC_KEY));
        assert!(rsa.verify_str_with("test message", &sig.to_base64(), PUBLIC_KEY));
        assert!(!rsa.verify_with(b"test message", sig.as_bytes(), "bad key"));
        assert!(!rsa.verify_str_with("test message", "%%%", PUBLIC_KEY));
    }

    #[test]
    fn rsa_bad_config_key() {
        let config = EncryptorConfig {
            rsa_private_key: Some(PUBLIC_KEY.to_string()),
            ..Default::default()
        };
        assert!(RsaEncryptor::from_config(&config).is_err());
    }
}
