//! MD5, [RFC 1321](https://www.rfc-editor.org/rfc/rfc1321)
//!
//! 仅用于数据一致性校验, 不应再用于安全相关的场景.

use crate::{Digest, Output};
use ::md5::Md5;
use std::fmt::{Debug, Formatter};
use std::io::Write;

#[derive(Clone, Default)]
pub struct MD5 {
    md: Md5,
}

impl MD5 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Debug for MD5 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("MD5")
    }
}

impl Write for MD5 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        ::md5::Digest::update(&mut self.md, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Digest for MD5 {
    const BLOCK_BITS: usize = 512;
    const WORD_BITS: usize = 32;
    const DIGEST_BITS: usize = 128;

    fn digest(msg: &[u8]) -> Output<Self> {
        Output::from_vec(<Md5 as ::md5::Digest>::digest(msg).to_vec())
    }

    fn finalize(&mut self) -> Output<Self> {
        Output::from_vec(::md5::Digest::finalize_reset(&mut self.md).to_vec())
    }

    fn reset(&mut self) {
        ::md5::Digest::reset(&mut self.md);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Digest, MD5};
    use std::io::Write;

    #[test]
    fn md5() {
        let cases = [
            ("hello world", "5EB63BBBE01EEED093CB22BB8F5ACDC3"),
            ("abc", "900150983CD24FB0D6963F7D28E17F72"),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "57EDF4A22BE3C955AC49DA2E2107B67A",
            ),
        ];

        let mut md5 = MD5::new();
        for (i, (msg, tgt)) in cases.into_iter().enumerate() {
            assert_eq!(MD5::digest(msg.as_bytes()).to_upper_hex(), tgt, "case {i} failed");

            md5.write_all(msg.as_bytes()).unwrap();
            assert_eq!(md5.finalize().to_upper_hex(), tgt, "case {i} failed");
        }
    }
}
