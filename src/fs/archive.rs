//! 目录 <-> 单个 tar 文件（不压缩）。
//!
//! 设计要点：
//! - 递归遍历目录，条目统一挂在 `<目录名>/` 之下，解包后还原原目录名。
//! - 遍历按文件名排序，同一目录树得到相同的条目顺序。
//! - 不跟随符号链接，符号链接按链接本身写入。
//! - 解包时严格校验每个条目路径，防止路径穿越写出到目标目录之外。

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use tar::{Archive, Builder};
use tracing::debug;
use walkdir::WalkDir;

/// 将 `dir` 整棵目录树打包到 `archive_path`。
///
/// 失败时删除写了一半的归档文件。
pub fn create_archive(dir: &Path, archive_path: &Path) -> io::Result<()> {
    let result = write_archive(dir, archive_path);
    if result.is_err() {
        let _ = fs::remove_file(archive_path);
    }
    result
}

fn write_archive(dir: &Path, archive_path: &Path) -> io::Result<()> {
    if !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a directory: {dir:?}"),
        ));
    }

    let root_name = dir.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("directory has no name: {dir:?}"),
        )
    })?;

    let file = File::create(archive_path)?;
    let mut builder = Builder::new(BufWriter::new(file));
    builder.follow_symlinks(false);

    let mut entries = 0usize;
    for entry in WalkDir::new(dir).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(walkdir_to_io)?;

        let rel = entry.path().strip_prefix(dir).map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("cannot relativize path: {e}"))
        })?;

        let name = Path::new(root_name).join(rel);
        builder.append_path_with_name(entry.path(), &name)?;
        entries += 1;
    }

    // 确保归档完整落盘后才允许后续加密读取
    let mut writer = builder.into_inner()?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;

    debug!(archive = %archive_path.display(), entries, "archive written");
    Ok(())
}

/// 将 `archive_path` 解包到 `dest`，返回归档根条目的名字。
///
/// 所有条目必须位于同一个根目录下。先完整扫描一遍校验所有条目，
/// 校验通过后才开始写入 `dest`。
pub fn extract_archive(archive_path: &Path, dest: &Path) -> io::Result<OsString> {
    let root = scan_root(archive_path)?;

    let mut archive = Archive::new(File::open(archive_path)?);
    archive.set_preserve_permissions(true);
    archive.set_preserve_mtime(true);

    for entry in archive.entries()? {
        let mut entry = entry?;
        if !entry.unpack_in(dest)? {
            let rel = entry.path()?.into_owned();
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("archive entry escapes destination: {rel:?}"),
            ));
        }
    }

    Ok(root)
}

/// 只读扫描：校验每个条目路径，并确认只有一个根目录。
fn scan_root(archive_path: &Path) -> io::Result<OsString> {
    let mut archive = Archive::new(File::open(archive_path)?);
    let mut root: Option<OsString> = None;

    for entry in archive.entries()? {
        let entry = entry?;
        let rel = validate_relative_path(&entry.path()?)?;

        let first = match rel.components().next() {
            Some(Component::Normal(first)) => first.to_os_string(),
            _ => continue,
        };

        match &root {
            Some(existing) if *existing != first => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("archive has more than one root: {existing:?}, {first:?}"),
                ));
            }
            Some(_) => {}
            None => root = Some(first),
        }
    }

    root.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "archive is empty"))
}

/// 校验相对路径仅包含安全组件，防止 `..`、绝对路径、盘符路径等穿越问题。
fn validate_relative_path(rel: &Path) -> io::Result<PathBuf> {
    let mut safe = PathBuf::new();
    for comp in rel.components() {
        match comp {
            Component::CurDir => {}
            Component::Normal(v) => safe.push(v),
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("unsafe archive entry: {rel:?}"),
                ));
            }
        }
    }
    Ok(safe)
}

fn walkdir_to_io(err: walkdir::Error) -> io::Error {
    io::Error::other(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_raw_archive(path: &Path, names: &[&str]) {
        let mut builder = Builder::new(File::create(path).expect("create archive"));
        for name in names {
            let data = b"x";
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, &data[..])
                .expect("append entry");
        }
        builder.finish().expect("finish archive");
    }

    #[test]
    fn rejects_multiple_roots() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let archive = dir.path().join("two.tar");
        build_raw_archive(&archive, &["a/one.txt", "b/two.txt"]);

        let dest = dir.path().join("out");
        fs::create_dir(&dest).expect("create dest");

        let err = extract_archive(&archive, &dest).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(
            fs::read_dir(&dest).expect("list dest").count(),
            0,
            "rejected archive must not write anything"
        );
    }

    #[test]
    fn returns_root_name() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let archive = dir.path().join("one.tar");
        build_raw_archive(&archive, &["notes/a.txt", "notes/sub/b.txt"]);

        let dest = dir.path().join("out");
        fs::create_dir(&dest).expect("create dest");

        let root = extract_archive(&archive, &dest).expect("extract");
        assert_eq!(root, "notes");
        assert_eq!(fs::read(dest.join("notes/sub/b.txt")).expect("read"), b"x");
    }

    #[test]
    fn unsafe_components_are_rejected() {
        assert!(validate_relative_path(Path::new("../etc/passwd")).is_err());
        assert!(validate_relative_path(Path::new("/etc/passwd")).is_err());
        assert_eq!(
            validate_relative_path(Path::new("./notes/a.txt")).unwrap(),
            Path::new("notes/a.txt")
        );
    }

    #[test]
    fn failed_archive_is_removed() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("missing");
        let archive = dir.path().join("missing.tar");

        assert!(create_archive(&missing, &archive).is_err());
        assert!(!archive.exists());
    }
}
