//! ZIP 打包
//!
//! 每次调用都重新遍历存储目录，把所有文件写入目录内固定位置的归档。

use crate::error::Result;
use crate::storage;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// 归档文件名，位于存储目录内，打包时自身不会被收录
pub const ARCHIVE_NAME: &str = "all_files.zip";

/// 一次打包的结果
#[derive(Debug)]
pub struct Archive {
    /// 写入磁盘的归档路径
    pub path: PathBuf,
    /// 归档中的条目名（与存储目录中的文件名一致）
    pub entries: Vec<String>,
    /// 归档内容
    pub bytes: Vec<u8>,
}

/// 打包存储目录中的全部文件（阻塞操作）
pub fn build_archive(dir: &Path) -> Result<Archive> {
    storage::ensure_dir(dir)?;
    let files = storage::list_files(dir)?;

    let mut buffer = Vec::new();
    let mut entries = Vec::with_capacity(files.len());
    {
        let mut zip = zip::ZipWriter::new(std::io::Cursor::new(&mut buffer));
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated);

        for file in &files {
            let contents = match fs::read(dir.join(&file.name)) {
                Ok(contents) => contents,
                // 列出之后又被删除
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            zip.start_file(file.name.as_str(), options)?;
            zip.write_all(&contents)?;
            entries.push(file.name.clone());
        }

        zip.finish()?;
    }

    let path = dir.join(ARCHIVE_NAME);
    fs::write(&path, &buffer)?;
    info!(
        "Built archive {:?} with {} entries ({} bytes)",
        path,
        entries.len(),
        buffer.len()
    );

    Ok(Archive {
        path,
        entries,
        bytes: buffer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_archive_contains_every_file_but_itself() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"hello").unwrap();
        fs::write(dir.path().join("b.pdf"), b"%PDF").unwrap();

        // 第二次打包时旧归档已经在目录里
        build_archive(dir.path()).unwrap();
        let archive = build_archive(dir.path()).unwrap();

        assert_eq!(archive.entries, vec!["a.txt", "b.pdf"]);
        assert_eq!(archive.path, dir.path().join(ARCHIVE_NAME));
        assert_eq!(fs::read(&archive.path).unwrap(), archive.bytes);

        let mut zip = zip::ZipArchive::new(std::io::Cursor::new(archive.bytes)).unwrap();
        assert_eq!(zip.len(), 2);
        let mut names: Vec<_> = zip.file_names().map(String::from).collect();
        names.sort();
        assert_eq!(names, vec!["a.txt", "b.pdf"]);

        let mut contents = String::new();
        zip.by_name("a.txt")
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "hello");
    }

    #[test]
    fn test_empty_directory_yields_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let storage = dir.path().join("fresh");

        let archive = build_archive(&storage).unwrap();
        assert!(archive.entries.is_empty());

        let zip = zip::ZipArchive::new(std::io::Cursor::new(archive.bytes)).unwrap();
        assert_eq!(zip.len(), 0);
    }
}
