use std::io::{Read, Write};

pub trait Encode {
    /// 返回读和写字节数
    fn encode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError>;

    fn encode_to_string(&mut self, data: &[u8]) -> String {
        let (mut data, mut buf) = (data, Vec::with_capacity(data.len() * 2));
        // 写入`Vec`不会失败, 编码输出只有ASCII字符
        match self.encode(&mut data, &mut buf) {
            Ok(_) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => String::new(),
        }
    }
}

pub trait Decode {
    fn decode<R: Read, W: Write>(
        &mut self,
        in_data: &mut R,
        out_data: &mut W,
    ) -> Result<(usize, usize), EncodeError>;

    fn decode_str(&mut self, data: &str) -> Result<Vec<u8>, EncodeError> {
        let (mut data, mut buf) = (data.as_bytes(), Vec::with_capacity(data.len()));
        self.decode(&mut data, &mut buf)?;
        Ok(buf)
    }
}

pub mod base;
pub use base::{Base16, Base64};

mod error;
pub use error::EncodeError;
