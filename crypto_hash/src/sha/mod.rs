//! SHA1, [FIPS 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)
//!
//! RSA签名的摘要算法固定为SHA1.

use crate::{Digest, Output};
use ::sha1::Sha1;
use std::fmt::{Debug, Formatter};
use std::io::Write;

#[derive(Clone, Default)]
pub struct SHA1 {
    sha: Sha1,
}

impl SHA1 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Debug for SHA1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("SHA1")
    }
}

impl Write for SHA1 {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        ::sha1::Digest::update(&mut self.sha, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Digest for SHA1 {
    const BLOCK_BITS: usize = 512;
    const WORD_BITS: usize = 32;
    const DIGEST_BITS: usize = 160;

    fn digest(msg: &[u8]) -> Output<Self> {
        Output::from_vec(<Sha1 as ::sha1::Digest>::digest(msg).to_vec())
    }

    fn finalize(&mut self) -> Output<Self> {
        Output::from_vec(::sha1::Digest::finalize_reset(&mut self.sha).to_vec())
    }

    fn reset(&mut self) {
        ::sha1::Digest::reset(&mut self.sha);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Digest, SHA1};
    use std::io::Write;

    #[test]
    fn sha1() {
        let cases = [
            ("hello world", "2AAE6C35C94FCFB415DBE95F408B9CE91EE846ED"),
            ("abc", "A9993E364706816ABA3E25717850C26C9CD0D89D"),
        ];

        let mut sha = SHA1::new();
        for (i, (msg, tgt)) in cases.into_iter().enumerate() {
            assert_eq!(SHA1::digest(msg.as_bytes()).to_upper_hex(), tgt, "case {i} failed");

            // 分段写入
            let (l, r) = msg.as_bytes().split_at(msg.len() / 2);
            sha.write_all(l).unwrap();
            sha.write_all(r).unwrap();
            assert_eq!(sha.finalize().to_upper_hex(), tgt, "case {i} failed");
        }

        sha.write_all(b"garbage").unwrap();
        sha.reset();
        sha.write_all(b"abc").unwrap();
        assert_eq!(
            sha.finalize().to_upper_hex(),
            "A9993E364706816ABA3E25717850C26C9CD0D89D"
        );
    }
}
