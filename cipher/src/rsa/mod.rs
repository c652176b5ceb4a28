//! RSA
//!
//! - 密钥由[`KeyImporter`]从裸base64字符串导入, 先包装成PEM, 再交由provider生成密钥句柄;
//! - 公钥只能用于加密和验签, 私钥只能用于解密和签名, 由类型保证;
//! - 加密按`k - 11`字节分块, 每块输出固定`k`字节, $k$为模数的字节长度;
//! - 签名固定为对SHA1摘要做PKCS#1 v1.5签名.
//!

pub mod pem;

mod key;
pub use key::{KeyImporter, KeyMaterial, KeyRole, PrivateKey, PublicKey};

mod pkcs1;
pub use pkcs1::{PKCS1Decrypt, PKCS1Encrypt, PKCS1, PKCS1_OVERHEAD};

mod sign;
pub use sign::{PKCS1Sign, PKCS1Signer, PKCS1Verify, Signature};
