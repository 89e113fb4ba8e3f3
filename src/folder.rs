//! hideit 目录加密/解密实现
//!
//! 目录先打包为同级的 `<目录名>.tar`，再按普通文件加密为
//! `<目录名>.tar.lock`。本模块不直接接触任何密码学原语。
//!
//! 顺序约束：
//! - 归档必须完整落盘后才能加密
//! - 容器成功生成之前不得删除原目录

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::decrypt::decrypt_file;
use crate::encrypt::encrypt_file;
use crate::error::Result;
use crate::fs::archive::{create_archive, extract_archive};
use crate::fs::paths::archive_path;

/// 加密整个目录，返回 `<目录名>.tar.lock` 路径。
///
/// 加密失败时原目录保持不变；中间归档留在原处。
pub fn encrypt_dir(dir: &Path, password: &str) -> Result<PathBuf> {
    let tar_path = archive_path(dir)?;

    create_archive(dir, &tar_path)?;
    debug!(archive = %tar_path.display(), "directory archived");

    let out = encrypt_file(&tar_path, password)?;
    fs::remove_dir_all(dir)?;

    info!(from = %dir.display(), to = %out.display(), "directory hidden");
    Ok(out)
}

/// 解密 `.tar.lock` 容器并还原目录，返回目录路径。
///
/// 解密失败时直接返回错误，容器保持原样。
pub fn decrypt_dir(path: &Path, password: &str) -> Result<PathBuf> {
    let tar_path = decrypt_file(path, password)?;

    let parent = match tar_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let root = extract_archive(&tar_path, &parent)?;
    fs::remove_file(&tar_path)?;

    let out = tar_path.with_file_name(root);
    info!(from = %path.display(), to = %out.display(), "directory restored");
    Ok(out)
}
