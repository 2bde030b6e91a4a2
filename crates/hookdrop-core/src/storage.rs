//! 存储目录
//!
//! 目录本身就是"已接收文件"的唯一事实来源：文件名即身份，同名上传直接覆盖。
//! 这里只提供路径校验和目录读取，不做去重和完整性检查。

use crate::archive::ARCHIVE_NAME;
use crate::error::{Result, WebhookError};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// 存储目录中的一个文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub name: String,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// 校验文件名只包含单个普通路径分量
///
/// 拒绝空名、路径分隔符、`.`/`..` 以及 NUL，防止越出存储目录。
pub fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(WebhookError::EmptyFileName);
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(WebhookError::InvalidFileName(name.to_string()));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(WebhookError::InvalidFileName(name.to_string())),
    }
}

/// 获取扩展名（含前导 `.`）
///
/// 规则与常见的 `splitext` 一致：取最后一个 `.` 之后的部分，
/// 但文件名开头的点不算扩展名分隔符（`.env` 没有扩展名）。
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if !name[..idx].chars().all(|c| c == '.') => &name[idx..],
        _ => "",
    }
}

/// 确保存储目录存在
pub fn ensure_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// 校验文件名并返回其在存储目录中的路径（不检查是否存在）
pub fn file_path(dir: &Path, name: &str) -> Result<PathBuf> {
    validate_file_name(name)?;
    Ok(dir.join(name))
}

/// 列出存储目录中的普通文件（按文件名排序，不含打包生成的归档）
///
/// 目录不存在时返回空列表。
pub fn list_files(dir: &Path) -> io::Result<Vec<StoredFile>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        let Some(metadata) = entry_metadata(&entry)? else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            log::warn!("Skipping non UTF-8 file name in {:?}", dir);
            continue;
        };
        if name == ARCHIVE_NAME {
            continue;
        }
        files.push(StoredFile {
            name,
            size: metadata.len(),
            modified: metadata.modified().ok(),
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// 读取目录项的元数据，遍历期间已被删除的返回 `None`
fn entry_metadata(entry: &fs::DirEntry) -> io::Result<Option<fs::Metadata>> {
    match entry.metadata() {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::debug!("{:?} vanished while listing", entry.path());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// 删除存储目录中的文件
pub fn remove_file(dir: &Path, name: &str) -> Result<()> {
    let path = file_path(dir, name)?;
    match fs::remove_file(&path) {
        Ok(()) => {
            log::info!("Deleted {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(WebhookError::NotFound(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name() {
        assert!(validate_file_name("a.txt").is_ok());
        assert!(validate_file_name("report final.pdf").is_ok());
        assert!(validate_file_name("a..b.txt").is_ok());

        assert!(matches!(
            validate_file_name(""),
            Err(WebhookError::EmptyFileName)
        ));
        for bad in ["..", ".", "../etc/passwd", "a/b.txt", "a\\b.txt", "/abs.txt", "nul\0.txt"] {
            assert!(
                matches!(validate_file_name(bad), Err(WebhookError::InvalidFileName(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.txt"), ".txt");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".env"), "");
        assert_eq!(extension_of("..txt"), "");
        assert_eq!(extension_of(".config.txt"), ".txt");
        assert_eq!(extension_of("photo.JPG"), ".JPG");
        assert_eq!(extension_of("trailing."), ".");
    }

    #[test]
    fn test_list_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), b"bb").unwrap();
        fs::write(dir.path().join("a.png"), b"a").unwrap();
        fs::write(dir.path().join(ARCHIVE_NAME), b"zip").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.txt"]);
        assert_eq!(files[1].size, 2);
    }

    #[test]
    fn test_list_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let files = list_files(&dir.path().join("does-not-exist")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_entry_removed_during_listing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gone.txt"), b"x").unwrap();

        let entry = fs::read_dir(dir.path()).unwrap().next().unwrap().unwrap();
        fs::remove_file(dir.path().join("gone.txt")).unwrap();

        assert!(entry_metadata(&entry).unwrap().is_none());
    }

    #[test]
    fn test_remove_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"x").unwrap();

        remove_file(dir.path(), "a.txt").unwrap();
        assert!(!dir.path().join("a.txt").exists());

        assert!(matches!(
            remove_file(dir.path(), "a.txt"),
            Err(WebhookError::NotFound(_))
        ));
        assert!(matches!(
            remove_file(dir.path(), "../a.txt"),
            Err(WebhookError::InvalidFileName(_))
        ));
    }
}
