use encode::{Base16, Encode};
use std::io::Write;

mod output;
pub use output::Output;

mod error;
pub use error::HashError;

pub mod md;
pub use md::MD5;

pub mod sha;
pub use sha::SHA1;

/// 哈希算法实现该trait, 计算消息的摘要. 可直接调用`Digest::digest(msg)`生成消息的摘要, 或者通过`Write` trait将数据更新
/// 到`self`中后使用`self.finalize()`生成消息摘要.
///
/// 可用于如下应用中:
/// - 数据一致性验证;
/// - 参与数字签名的生成和验证;
pub trait Digest: Write {
    /// 哈希算法每次按块处理消息的块的位长度
    const BLOCK_BITS: usize;
    /// 哈希算法将每个块按该位长度划分为若干个单词
    const WORD_BITS: usize;
    /// 哈希算法生成的摘要的位长度
    const DIGEST_BITS: usize;

    /// 生成消息摘要
    fn digest(msg: &[u8]) -> Output<Self>;

    /// 生成消息摘要
    fn finalize(&mut self) -> Output<Self>;

    /// 重置哈希算法到初始化状态
    fn reset(&mut self);
}

/// Names a digest algorithm the providers know how to compute.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    MD5,
    SHA1,
}

impl DigestAlgorithm {
    pub const fn digest_len(&self) -> usize {
        match self {
            Self::MD5 => Output::<MD5>::bytes(),
            Self::SHA1 => Output::<SHA1>::bytes(),
        }
    }

    /// Digest of `data`, `None` for empty input.
    pub fn digest(&self, data: &[u8]) -> Option<Vec<u8>> {
        match self {
            Self::MD5 => md5(data).map(Vec::from),
            Self::SHA1 => sha1(data).map(Vec::from),
        }
    }
}

/// MD5 digest of `data`.
///
/// An empty input has no digest here, the guard runs before any hashing.
pub fn md5(data: &[u8]) -> Option<Output<MD5>> {
    (!data.is_empty()).then(|| MD5::digest(data))
}

/// SHA1 digest of `data`, `None` for empty input.
pub fn sha1(data: &[u8]) -> Option<Output<SHA1>> {
    (!data.is_empty()).then(|| SHA1::digest(data))
}

/// Renders bytes as uppercase hex, two characters per byte.
pub fn to_upper_hex(data: &[u8]) -> String {
    Base16::upper().encode_to_string(data)
}

#[cfg(test)]
mod tests {
    use super::{md5, sha1, to_upper_hex, DigestAlgorithm};

    #[test]
    fn empty_input_has_no_digest() {
        assert!(md5(b"").is_none());
        assert!(sha1(b"").is_none());
        assert!(DigestAlgorithm::MD5.digest(&[]).is_none());
        assert!(DigestAlgorithm::SHA1.digest(&[]).is_none());
    }

    #[test]
    fn digest_is_deterministic() {
        let (x, y) = (b"hello world".as_slice(), b"hello world!".as_slice());
        assert_eq!(md5(x).unwrap().as_ref(), md5(x).unwrap().as_ref());
        assert_ne!(md5(x).unwrap().as_ref(), md5(y).unwrap().as_ref());
        assert_eq!(sha1(x).unwrap().as_ref(), sha1(x).unwrap().as_ref());
        assert_ne!(sha1(x).unwrap().as_ref(), sha1(y).unwrap().as_ref());
    }

    #[test]
    fn algorithm_lengths() {
        assert_eq!(DigestAlgorithm::MD5.digest_len(), 16);
        assert_eq!(DigestAlgorithm::SHA1.digest_len(), 20);
        assert_eq!(
            DigestAlgorithm::SHA1.digest(b"abc").map(|d| d.len()),
            Some(20)
        );
    }

    #[test]
    fn upper_hex() {
        assert_eq!(to_upper_hex(&[]), "");
        assert_eq!(to_upper_hex(&[0x00, 0x0f, 0xab, 0xff]), "000FABFF");
    }
}
