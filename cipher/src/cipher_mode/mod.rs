//! # Block cipher mode and padding selection
//!
//! ## The Electronic Codebook Mode(ECB)
//!
//! $$
//! C_j = Encrypt(P_j), j = 1...n
//! $$
//!
//! 给定的密钥, 每个明文块和密文块一一对应(如果不期待使用这一特性, 不应该使用ECB模式). <br>
//!
//! ## The Cipher Block Chaining Mode(CBC)
//!
//! $$
//! C_1 = Encrypt(P_1 \xor IV); C_j = Encrypt(P_j \xor C_{j-1}), j = 2...n
//! $$
//!
//! 未指定IV时使用全零IV. <br>
//!
//! ## PKCS#7
//!
//! 填充`k`个值为`k`的字节, `1 <= k <= BLOCK_SIZE`, 已对齐的数据也会补一个完整的块.

use crate::provider::Operation;
use serde::{Deserialize, Serialize};

impl_cipher_type!(
    /// Mode flags handed to the provider. The values are option bits: `1` asks for PKCS#7
    /// padding and `2` selects ECB instead of CBC.
    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    PaddingMode,
    u32,
    [
        /// CBC, input must be block aligned
        None = 0x0
    ],
    [
        /// CBC with PKCS#7 padding
        Pkcs7 = 0x1
    ],
    [
        /// ECB, input must be block aligned
        Ecb = 0x2
    ],
    [
        /// ECB with PKCS#7 padding
        EcbPkcs7 = 0x3
    ]
);

impl Default for PaddingMode {
    fn default() -> Self {
        Self::Pkcs7
    }
}

impl PaddingMode {
    const PKCS7_BIT: u32 = 0x1;
    const ECB_BIT: u32 = 0x2;

    pub const fn is_ecb(&self) -> bool {
        (*self as u32) & Self::ECB_BIT != 0
    }

    pub const fn is_padded(&self) -> bool {
        (*self as u32) & Self::PKCS7_BIT != 0
    }

    /// The mode actually used for `op`.
    ///
    /// Encryption rewrites every mode except plain `Ecb` to `Pkcs7`, so `None` and `EcbPkcs7`
    /// both encrypt as CBC with PKCS#7. Decryption keeps the configured mode.
    // FIXME: the rewrite also drops the ECB bit of `EcbPkcs7`; callers depend on it for now.
    pub fn for_operation(self, op: Operation) -> Self {
        match op {
            Operation::Encrypt if self != Self::Ecb => Self::Pkcs7,
            _ => self,
        }
    }
}
