//! 应用状态
//!
//! 使用 Dioxus signals 管理界面状态，文件数据本身由 `Inbox` 提供

use std::net::SocketAddr;

/// 接收服务状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ServerStatus {
    #[default]
    Stopped,
    Starting,
    Running(SocketAddr),
    Failed(String),
}

impl ServerStatus {
    /// 是否已启动或正在启动
    pub fn is_active(&self) -> bool {
        matches!(self, ServerStatus::Starting | ServerStatus::Running(_))
    }
}

/// 以人类可读的方式显示文件大小
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active() {
        assert!(!ServerStatus::Stopped.is_active());
        assert!(ServerStatus::Starting.is_active());
        assert!(ServerStatus::Running("127.0.0.1:5000".parse().unwrap()).is_active());
        // 启动失败后允许重试
        assert!(!ServerStatus::Failed("address in use".into()).is_active());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
    }
}
