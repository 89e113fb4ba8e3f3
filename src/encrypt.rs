//! hideit 文件加密流程实现
//!
//! 本模块负责将一个普通文件原地替换为 `.lock` 容器。
//!
//! 加密流程（严格顺序）：
//! 1. 读取整个明文文件
//! 2. 封装为容器（生成 salt / nonce，派生密钥，AEAD 加密）
//! 3. 原子写入 `<文件名>.lock`
//! 4. 删除原明文文件
//!
//! 注意：
//! - 不处理文件夹（见 folder 模块）
//! - 不做 UI / 密码输入

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::format::container;
use crate::fs::atomic::write_atomic;
use crate::fs::paths::locked_path;

/// 使用密码加密文件，返回容器路径
pub fn encrypt_file(path: &Path, password: &str) -> Result<PathBuf> {
    let out = locked_path(path)?;

    let plaintext = fs::read(path)?;
    debug!(path = %path.display(), bytes = plaintext.len(), "plaintext read");

    let sealed = container::seal(&plaintext, password)?;

    write_atomic(&out, &sealed)?;
    fs::remove_file(path)?;

    info!(from = %path.display(), to = %out.display(), "file hidden");
    Ok(out)
}
