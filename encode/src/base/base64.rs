use crate::{Decode, Encode, EncodeError};
use ::base64::engine::general_purpose::{STANDARD, URL_SAFE};
use ::base64::engine::GeneralPurpose;
use ::base64::Engine;
use std::io::{Read, Write};

#[derive(Clone)]
pub struct Base64 {
    engine: &'static GeneralPurpose,
}

impl Base64 {
    /// `is_std`使用标准码表, 还是URL版本码表
    pub fn new(is_std: bool) -> Self {
        let engine = if is_std { &STANDARD } else { &URL_SAFE };

        Self { engine }
    }

    pub fn standard() -> Self {
        Self::new(true)
    }
}

impl Default for Base64 {
    fn default() -> Self {
        Self::standard()
    }
}

impl Encode for Base64 {
    fn encode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        let mut buf = Vec::with_capacity(1024);
        let ilen = in_data.read_to_end(&mut buf)?;

        let s = self.engine.encode(buf.as_slice());
        out_data.write_all(s.as_bytes())?;

        Ok((ilen, s.len()))
    }
}

impl Decode for Base64 {
    fn decode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError> {
        let mut buf = Vec::with_capacity(1024);
        let ilen = in_data.read_to_end(&mut buf)?;

        let d = self.engine.decode(buf.as_slice())?;
        out_data.write_all(d.as_slice())?;

        Ok((ilen, d.len()))
    }
}
