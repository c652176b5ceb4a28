use crate::provider::{Operation, RsaOperation};
use crate::rsa::KeyRole;
use thiserror::Error;

/// Status a provider reports for a failed block-cipher call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProviderStatus {
    ParamError,
    BufferTooSmall,
    AlignmentError,
    DecodeError,
    KeySizeError,
}

#[derive(Clone, Debug, Error)]
pub enum CipherError {
    /// 密钥导入失败: base64/DER格式错误, 或者provider不支持该密钥类型
    #[error("key import failed: {0}")]
    KeyImport(String),

    /// provider返回的状态不是成功
    #[error("{op:?} failed with provider status {status:?}")]
    Provider {
        op: Operation,
        status: ProviderStatus,
    },

    /// 不合法分组大小
    #[error("Invalid block data size `{real}` not match to target size `{target}`")]
    InvalidBlockSize { target: usize, real: usize },

    /// 不合法的密钥长度
    #[error("Invalid key size `{real}` not match to target size `{target}`")]
    InvalidKeySize { target: usize, real: usize },

    /// RSA原语执行失败, 例如填充格式错误
    #[error("rsa: {0}")]
    Rsa(String),

    #[error("no {0:?} key available")]
    MissingKey(KeyRole),

    #[error("digest failed: {0}")]
    Digest(String),

    #[error("{0:?} is not supported by the provider")]
    Unsupported(RsaOperation),

    #[error("{0}")]
    Other(String),
}
