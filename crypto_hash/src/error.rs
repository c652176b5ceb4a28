use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum HashError {
    /// 实际字节长度`real`和目标字节长度`target`不匹配
    #[error("real byte length `{real}` not match to target byte length `{target}`")]
    MismatchingByteLen { target: usize, real: usize },
}
