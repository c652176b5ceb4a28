//! Provider backed by the RustCrypto crates: `aes` + `cbc`/`ecb` for the block cipher, `rsa` for
//! key import and the PKCS#1 v1.5 primitives.

use crate::provider::{
    CryptoProvider, KeyAlgorithm, Operation, RsaOperation, AES128_KEY_SIZE, AES_BLOCK_SIZE,
};
use crate::rsa::pem;
use crate::{CipherError, PaddingMode, ProviderStatus};
use aes::Aes128;
use cbc::cipher::block_padding::{NoPadding, Padding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit};
use ::rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use ::rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use ::rsa::traits::PublicKeyParts;
use ::rsa::{Pkcs1v15Encrypt, Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

#[derive(Copy, Clone, Debug, Default)]
pub struct RustCryptoProvider;

impl RustCryptoProvider {
    pub const fn new() -> Self {
        Self
    }

    fn encrypt_padded<C, P>(
        cipher: C,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, ProviderStatus>
    where
        C: BlockEncryptMut,
        P: Padding<C::BlockSize>,
    {
        cipher
            .encrypt_padded_b2b_mut::<P>(input, output)
            .map(|x| x.len())
            .map_err(|_| ProviderStatus::BufferTooSmall)
    }

    fn decrypt_padded<C, P>(
        cipher: C,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, ProviderStatus>
    where
        C: BlockDecryptMut,
        P: Padding<C::BlockSize>,
    {
        cipher
            .decrypt_padded_b2b_mut::<P>(input, output)
            .map(|x| x.len())
            .map_err(|_| ProviderStatus::DecodeError)
    }

    fn check_algorithm(algorithm: KeyAlgorithm) -> Result<(), CipherError> {
        match algorithm {
            KeyAlgorithm::Rsa => Ok(()),
        }
    }

    fn pem_str(pem: &[u8]) -> Result<&str, CipherError> {
        std::str::from_utf8(pem)
            .map_err(|e| CipherError::KeyImport(format!("pem is not utf-8: {e}")))
    }
}

impl CryptoProvider for RustCryptoProvider {
    type PublicHandle = RsaPublicKey;
    type PrivateHandle = RsaPrivateKey;

    fn block_cipher(
        &self,
        op: Operation,
        key: &[u8],
        iv: &[u8; AES_BLOCK_SIZE],
        padding: PaddingMode,
        input: &[u8],
        output: &mut [u8],
    ) -> Result<usize, ProviderStatus> {
        // 密钥长度固定为AES-128, 多余的字节不参与运算
        let key = key
            .get(..AES128_KEY_SIZE)
            .ok_or(ProviderStatus::KeySizeError)?;

        let is_aligned = input.len() % AES_BLOCK_SIZE == 0;
        if !is_aligned && (op == Operation::Decrypt || !padding.is_padded()) {
            return Err(ProviderStatus::AlignmentError);
        }

        let need = if op == Operation::Encrypt && padding.is_padded() {
            (input.len() / AES_BLOCK_SIZE + 1) * AES_BLOCK_SIZE
        } else {
            input.len()
        };
        if output.len() < need {
            return Err(ProviderStatus::BufferTooSmall);
        }

        let key_err = |_| ProviderStatus::KeySizeError;
        match (op, padding) {
            (Operation::Encrypt, PaddingMode::Pkcs7) => Self::encrypt_padded::<_, Pkcs7>(
                Aes128CbcEnc::new_from_slices(key, iv).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Encrypt, PaddingMode::None) => Self::encrypt_padded::<_, NoPadding>(
                Aes128CbcEnc::new_from_slices(key, iv).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Encrypt, PaddingMode::EcbPkcs7) => Self::encrypt_padded::<_, Pkcs7>(
                Aes128EcbEnc::new_from_slice(key).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Encrypt, PaddingMode::Ecb) => Self::encrypt_padded::<_, NoPadding>(
                Aes128EcbEnc::new_from_slice(key).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Decrypt, PaddingMode::Pkcs7) => Self::decrypt_padded::<_, Pkcs7>(
                Aes128CbcDec::new_from_slices(key, iv).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Decrypt, PaddingMode::None) => Self::decrypt_padded::<_, NoPadding>(
                Aes128CbcDec::new_from_slices(key, iv).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Decrypt, PaddingMode::EcbPkcs7) => Self::decrypt_padded::<_, Pkcs7>(
                Aes128EcbDec::new_from_slice(key).map_err(key_err)?,
                input,
                output,
            ),
            (Operation::Decrypt, PaddingMode::Ecb) => Self::decrypt_padded::<_, NoPadding>(
                Aes128EcbDec::new_from_slice(key).map_err(key_err)?,
                input,
                output,
            ),
        }
    }

    fn import_public_key(
        &self,
        pem: &[u8],
        algorithm: KeyAlgorithm,
    ) -> Result<Self::PublicHandle, CipherError> {
        Self::check_algorithm(algorithm)?;
        let pem = Self::pem_str(pem)?;

        match RsaPublicKey::from_public_key_pem(pem) {
            Ok(key) => Ok(key),
            Err(e) => {
                // "PUBLIC KEY"里包的是PKCS#1 RSAPublicKey
                let der = pem::decode_der(pem)?;
                RsaPublicKey::from_pkcs1_der(der.as_slice()).map_err(|_| {
                    CipherError::KeyImport(format!("not a SPKI or PKCS#1 rsa public key: {e}"))
                })
            }
        }
    }

    fn import_private_key(
        &self,
        pem: &[u8],
        algorithm: KeyAlgorithm,
    ) -> Result<Self::PrivateHandle, CipherError> {
        Self::check_algorithm(algorithm)?;
        let pem = Self::pem_str(pem)?;

        match RsaPrivateKey::from_pkcs8_pem(pem) {
            Ok(key) => Ok(key),
            Err(e) => {
                let der = pem::decode_der(pem)?;
                RsaPrivateKey::from_pkcs1_der(der.as_slice()).map_err(|_| {
                    CipherError::KeyImport(format!("not a PKCS#8 or PKCS#1 rsa private key: {e}"))
                })
            }
        }
    }

    fn public_modulus_len(&self, key: &Self::PublicHandle) -> Option<usize> {
        Some(key.size())
    }

    fn private_modulus_len(&self, key: &Self::PrivateHandle) -> Option<usize> {
        Some(key.size())
    }

    fn rsa_encrypt(&self, key: &Self::PublicHandle, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        key.encrypt(&mut rand::thread_rng(), Pkcs1v15Encrypt, block)
            .map_err(|e| CipherError::Rsa(e.to_string()))
    }

    fn rsa_decrypt(
        &self,
        key: &Self::PrivateHandle,
        block: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        key.decrypt(Pkcs1v15Encrypt, block)
            .map_err(|e| CipherError::Rsa(e.to_string()))
    }

    fn rsa_sign(&self, key: &Self::PrivateHandle, digest: &[u8]) -> Result<Vec<u8>, CipherError> {
        key.sign(Pkcs1v15Sign::new::<Sha1>(), digest)
            .map_err(|e| CipherError::Rsa(e.to_string()))
    }

    fn rsa_verify(&self, key: &Self::PublicHandle, digest: &[u8], signature: &[u8]) -> bool {
        key.verify(Pkcs1v15Sign::new::<Sha1>(), digest, signature)
            .is_ok()
    }

    fn supports(&self, op: RsaOperation) -> bool {
        matches!(
            op,
            RsaOperation::PublicEncrypt
                | RsaOperation::PrivateDecrypt
                | RsaOperation::Sign
                | RsaOperation::Verify
        )
    }
}
