//! hideit 文件解密流程实现
//!
//! 本模块负责将 `.lock` 容器还原为原始文件。
//!
//! 解密流程（严格顺序）：
//! 1. 计算输出路径（去掉最后一个扩展名）
//! 2. 读取整个容器
//! 3. 校验并解密
//! 4. 原子写入明文
//! 5. 删除容器
//!
//! 注意：
//! - 第 3 步失败时不写入、不删除任何文件，容器保持原样

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::Result;
use crate::format::container;
use crate::fs::atomic::write_atomic;
use crate::fs::paths::unlocked_path;

/// 使用密码解密容器，返回明文文件路径
pub fn decrypt_file(path: &Path, password: &str) -> Result<PathBuf> {
    let out = unlocked_path(path)?;

    let sealed = fs::read(path)?;
    debug!(path = %path.display(), bytes = sealed.len(), "container read");

    let plaintext = container::open(&sealed, password)?;

    write_atomic(&out, &plaintext)?;
    fs::remove_file(path)?;

    info!(from = %path.display(), to = %out.display(), "file restored");
    Ok(out)
}
