use crate::{Decode, Encode, EncodeError};
use std::io::{Read, Write};

/// 十六进制编码, 解码时不区分大小写
#[derive(Clone, Copy)]
pub struct Base16 {
    is_upper: bool,
}

impl Base16 {
    pub fn new() -> Self {
        Self::upper()
    }

    pub fn upper() -> Self {
        Self { is_upper: true }
    }

    pub fn lower() -> Self {
        Self { is_upper: false }
    }
}

impl Default for Base16 {
    fn default() -> Self {
        Self::new()
    }
}

impl Encode for Base16 {
    fn encode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        let mut buf = Vec::with_capacity(1024);
        let ilen = in_data.read_to_end(&mut buf)?;

        let s = if self.is_upper {
            hex::encode_upper(buf.as_slice())
        } else {
            hex::encode(buf.as_slice())
        };
        out_data.write_all(s.as_bytes())?;

        Ok((ilen, s.len()))
    }
}

impl Decode for Base16 {
    fn decode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        let mut buf = Vec::with_capacity(1024);
        let ilen = in_data.read_to_end(&mut buf)?;

        let d = hex::decode(buf.as_slice())?;
        out_data.write_all(d.as_slice())?;

        Ok((ilen, d.len()))
    }
}
