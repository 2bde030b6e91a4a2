//! 平台相关操作
//!
//! 使用系统默认程序打开文件或目录。

use std::io;
use std::path::Path;

/// 用系统默认程序打开文件或目录（不等待其退出）
pub fn open_path(path: &Path) -> io::Result<()> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} 不存在", path.display()),
        ));
    }

    log::debug!("Opening {:?}", path);
    open::that_detached(path)
}
