//! MD5/SHA1 helpers on byte slices and strings.
//!
//! 空输入没有摘要: `md5`/`sha1`返回`None`, `md5_string`返回空字符串.

pub trait DigestExt {
    fn md5(&self) -> Option<Vec<u8>>;

    fn sha1(&self) -> Option<Vec<u8>>;

    /// MD5摘要的大写十六进制形式
    fn md5_string(&self) -> String {
        self.md5()
            .map(|d| crypto_hash::to_upper_hex(d.as_slice()))
            .unwrap_or_default()
    }

    fn hex_string(&self) -> String;
}

impl DigestExt for [u8] {
    fn md5(&self) -> Option<Vec<u8>> {
        crypto_hash::md5(self).map(Vec::from)
    }

    fn sha1(&self) -> Option<Vec<u8>> {
        crypto_hash::sha1(self).map(Vec::from)
    }

    fn hex_string(&self) -> String {
        crypto_hash::to_upper_hex(self)
    }
}

impl DigestExt for str {
    fn md5(&self) -> Option<Vec<u8>> {
        self.as_bytes().md5()
    }

    fn sha1(&self) -> Option<Vec<u8>> {
        self.as_bytes().sha1()
    }

    fn hex_string(&self) -> String {
        self.as_bytes().hex_string()
    }
}

#[cfg(test)]
mod tests {
    use super::DigestExt;

    #[test]
    fn digest_ext() {
        assert_eq!("hello world".md5_string(), "5EB63BBBE01EEED093CB22BB8F5ACDC3");
        assert_eq!(
            b"hello world"[..].sha1().unwrap().hex_string(),
            "2AAE6C35C94FCFB415DBE95F408B9CE91EE846ED"
        );
        assert_eq!("hello world".md5(), b"hello world"[..].md5());
        assert_ne!("hello world".md5(), "hello worle".md5());

        assert_eq!("".md5(), None);
        assert_eq!(b""[..].sha1(), None);
        assert_eq!("".md5_string(), "");
        assert_eq!([0x0au8, 0xff].hex_string(), "0AFF");
    }
}
