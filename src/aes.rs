use crate::{EncryptorConfig, EncryptorError};
use cipher::{AesCipher, CipherConfig, CryptoProvider, PaddingMode, RustCryptoProvider};
use encode::{Base64, Decode, Encode};

/// AES-128加解密, 密钥和IV由调用者每次传入.
///
/// 加密时除`PaddingMode::Ecb`外一律使用CBC + PKCS#7, 解密时使用构造时的模式.
#[derive(Clone, Debug)]
pub struct AesEncryptor<P = RustCryptoProvider> {
    cipher: AesCipher<P>,
}

impl AesEncryptor<RustCryptoProvider> {
    pub fn new(padding: PaddingMode) -> Self {
        Self::with_provider(RustCryptoProvider::new(), padding)
    }

    pub fn from_config(config: &EncryptorConfig) -> Self {
        Self::new(config.aes_padding)
    }
}

impl Default for AesEncryptor {
    fn default() -> Self {
        Self::new(PaddingMode::default())
    }
}

impl<P: CryptoProvider> AesEncryptor<P> {
    pub fn with_provider(provider: P, padding: PaddingMode) -> Self {
        Self {
            cipher: AesCipher::new(provider, CipherConfig::new(padding)),
        }
    }

    pub fn padding(&self) -> PaddingMode {
        self.cipher.config().padding()
    }

    pub fn encrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&str>,
    ) -> Result<Vec<u8>, EncryptorError> {
        Ok(self.cipher.encrypt(data, key, iv)?)
    }

    pub fn decrypt(
        &self,
        data: &[u8],
        key: &[u8],
        iv: Option<&str>,
    ) -> Result<Vec<u8>, EncryptorError> {
        Ok(self.cipher.decrypt(data, key, iv)?)
    }

    /// `ciphertext`的UTF-8字节即为密文
    pub fn decrypt_string(
        &self,
        ciphertext: &str,
        key: &str,
        iv: Option<&str>,
    ) -> Result<Vec<u8>, EncryptorError> {
        self.decrypt(ciphertext.as_bytes(), key.as_bytes(), iv)
    }

    pub fn decrypt_base64(
        &self,
        ciphertext: &str,
        key: &str,
        iv: Option<&str>,
    ) -> Result<Vec<u8>, EncryptorError> {
        let c = Base64::standard().decode_str(ciphertext)?;
        self.decrypt(c.as_slice(), key.as_bytes(), iv)
    }

    pub fn encrypt_string(
        &self,
        plaintext: &str,
        key: &str,
        iv: Option<&str>,
    ) -> Result<Vec<u8>, EncryptorError> {
        self.encrypt(plaintext.as_bytes(), key.as_bytes(), iv)
    }

    pub fn encrypt_to_base64(
        &self,
        plaintext: &str,
        key: &str,
        iv: Option<&str>,
    ) -> Result<String, EncryptorError> {
        let c = self.encrypt_string(plaintext, key, iv)?;
        Ok(Base64::standard().encode_to_string(c.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::AesEncryptor;
    use crate::{EncryptorConfig, EncryptorError};
    use cipher::{CipherError, PaddingMode};

    const KEY: &str = "1234567890123456";
    const IV: Option<&str> = Some("0000000000000000");

    #[test]
    fn aes_base64() {
        let aes = AesEncryptor::default();
        let c = aes.encrypt_to_base64("hello world", KEY, IV).unwrap();
        assert_eq!(c, "NuYHK/gWopkFB5VUf8bvfw==");
        assert_eq!(aes.decrypt_base64(&c, KEY, IV).unwrap(), b"hello world");

        assert!(matches!(
            aes.decrypt_base64("not base64!", KEY, IV),
            Err(EncryptorError::Encode(_))
        ));
    }

    #[test]
    fn aes_string() {
        let aes = AesEncryptor::new(PaddingMode::Pkcs7);
        let c = aes.encrypt_string("hello world", KEY, None).unwrap();
        assert_eq!(c.len(), 16);

        // 密文通常不是合法的UTF-8, 字符串形式的密文只能是ASCII等可见字节
        let r = aes.decrypt_string("0123456789abcdef", KEY, None);
        assert!(matches!(r, Ok(_) | Err(EncryptorError::Cipher(CipherError::Provider { .. }))));
    }

    #[test]
    fn aes_from_config() {
        let config = EncryptorConfig {
            aes_padding: PaddingMode::Ecb,
            ..Default::default()
        };
        let aes = AesEncryptor::from_config(&config);
        assert_eq!(aes.padding(), PaddingMode::Ecb);
        assert!(aes.encrypt_string("hello world", KEY, None).is_err());
        assert_eq!(aes.encrypt_string("0123456789abcdef", KEY, None).unwrap().len(), 16);
    }
}
