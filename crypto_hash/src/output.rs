use crate::{Digest, HashError};
use std::{
    fmt::{Display, LowerHex, UpperHex},
    marker::PhantomData,
};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 消息哈希摘要输出。 按书写顺序存储, 即大端序.
#[derive(Clone, Debug)]
pub struct Output<T: ?Sized> {
    // Output是由哈希算法生成, 由实现算法保证`self.len() == Self::bytes()`
    pub(crate) data: Vec<u8>,
    pub(crate) digest: PhantomData<T>,
}

impl<T> Output<T> {
    pub fn iter(&self) -> std::slice::Iter<u8> {
        self.data.iter()
    }

    pub(crate) const fn from_vec(digest: Vec<u8>) -> Self {
        Self {
            data: digest,
            digest: PhantomData,
        }
    }

    /// 字节长度
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// 大写十六进制字符串
    pub fn to_upper_hex(&self) -> String {
        format!("{:X}", self)
    }
}

impl<T: Digest> Output<T> {
    /// 字节长度
    pub const fn bytes() -> usize {
        (<T>::DIGEST_BITS + 7) >> 3
    }

    /// 位长度
    pub const fn bits() -> usize {
        <T>::DIGEST_BITS
    }
}

impl<T: Digest> TryFrom<&[u8]> for Output<T> {
    type Error = HashError;

    /// `value.len() != Self::bytes()`会返回`HashError`
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.len() == Self::bytes() {
            Ok(Self::from_vec(value.to_vec()))
        } else {
            Err(HashError::MismatchingByteLen {
                target: Self::bytes(),
                real: value.len(),
            })
        }
    }
}

#[cfg(feature = "sec-zeroize")]
impl<T: ?Sized> Zeroize for Output<T> {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl<T> AsRef<[u8]> for Output<T> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<T> From<Output<T>> for Vec<u8> {
    fn from(value: Output<T>) -> Self {
        value.data
    }
}

impl<T> PartialEq for Output<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T> Eq for Output<T> {}

impl<T> Display for Output<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl<T> LowerHex for Output<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02x}", b))?;
        }

        Ok(())
    }
}

impl<T> UpperHex for Output<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0X")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02X}", b))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Output, MD5, SHA1};

    #[test]
    fn output_hex() {
        let x = Output::<MD5>::try_from([0xabu8; 16].as_slice()).unwrap();
        assert_eq!(format!("{:x}", x), "ab".repeat(16));
        assert_eq!(format!("{:#X}", x), format!("0X{}", "AB".repeat(16)));
        assert_eq!(x.to_string(), "ab".repeat(16));
        assert_eq!(x.to_upper_hex(), "AB".repeat(16));
    }

    #[test]
    fn output_len_checked() {
        assert_eq!(Output::<MD5>::bytes(), 16);
        assert_eq!(Output::<SHA1>::bits(), 160);
        assert!(Output::<SHA1>::try_from([0u8; 16].as_slice()).is_err());
    }
}
