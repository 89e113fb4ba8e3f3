//! 加密前后文件名的换算规则。
//!
//! - 加密：在完整文件名后追加 `.lock`（不替换原有扩展名）
//! - 解密：去掉最后一个扩展名
//! - 目录：先追加 `.tar` 打包，因此加密后为 `.tar.lock`

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{HideItError, Result};

pub const LOCK_EXT: &str = "lock";
pub const ARCHIVE_EXT: &str = "tar";

const DIR_CONTAINER_SUFFIX: &str = ".tar.lock";

/// `report.pdf` -> `report.pdf.lock`
pub fn locked_path(path: &Path) -> Result<PathBuf> {
    append_suffix(path, LOCK_EXT)
}

/// `report.pdf.lock` -> `report.pdf`
///
/// 没有扩展名时报错，避免输出路径与输入路径相同。
pub fn unlocked_path(path: &Path) -> Result<PathBuf> {
    let stem = path
        .extension()
        .and(path.file_stem())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| HideItError::InvalidPath(path.to_path_buf()))?;

    Ok(path.with_file_name(stem))
}

/// `notes` -> `notes.tar`
pub fn archive_path(dir: &Path) -> Result<PathBuf> {
    append_suffix(dir, ARCHIVE_EXT)
}

/// 文件名是否以 `.tar.lock` 结尾（即由目录加密而来）
pub fn is_dir_container(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| {
            name.len() > DIR_CONTAINER_SUFFIX.len() && name.ends_with(DIR_CONTAINER_SUFFIX)
        })
}

fn append_suffix(path: &Path, ext: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| HideItError::InvalidPath(path.to_path_buf()))?;

    let mut new_name = OsString::from(name);
    new_name.push(".");
    new_name.push(ext);

    Ok(path.with_file_name(new_name))
}
