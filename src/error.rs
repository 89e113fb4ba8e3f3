use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HideItError>;

#[derive(Debug, Error)]
pub enum HideItError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 容器长度不足以容纳 salt + nonce
    #[error("malformed container: {len} bytes is shorter than the header")]
    MalformedContainer { len: usize },

    /// 认证失败：密码错误与数据损坏不做区分
    #[error("Invalid password or file corrupted")]
    IncorrectPasswordOrCorrupted,

    #[error("invalid path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("internal error")]
    Internal,
}
