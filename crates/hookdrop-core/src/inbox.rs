//! 共享收件箱状态
//!
//! GUI 线程和 HTTP 服务共用同一个 `Arc<Inbox>`，所有可变状态都在锁后面：
//!
//! - 存储目录 (`RwLock`)，可在运行时切换
//! - 上传历史 (`Mutex`)，每次成功上传追加一条，同名文件会出现多次
//! - 打包锁 (`tokio::sync::Mutex`)，同一时间只构建一个归档
//! - 事件广播，GUI 据此刷新文件列表
//!
//! 文件列表始终从磁盘读取，上传历史只是活动日志。

use crate::archive::{self, ARCHIVE_NAME, Archive};
use crate::config::Settings;
use crate::error::{Result, WebhookError};
use crate::storage::{self, StoredFile};
use log::{debug, info};
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError, RwLock};
use std::time::SystemTime;
use tokio::sync::broadcast;

/// 一次成功的上传
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedFile {
    pub name: String,
    pub size: u64,
    pub received_at: SystemTime,
}

/// 收件箱事件
#[derive(Debug, Clone)]
pub enum InboxEvent {
    /// 收到并保存了一个文件
    Received(ReceivedFile),
    /// 文件被删除
    Deleted(String),
    /// 存储目录已切换
    StorageChanged(PathBuf),
}

pub struct Inbox {
    settings: Settings,
    storage_dir: RwLock<PathBuf>,
    history: Mutex<Vec<ReceivedFile>>,
    events: broadcast::Sender<InboxEvent>,
    archive_lock: tokio::sync::Mutex<()>,
}

impl Inbox {
    pub fn new(settings: Settings) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            storage_dir: RwLock::new(settings.storage_dir.clone()),
            settings,
            history: Mutex::new(Vec::new()),
            events,
            archive_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// 启动时的设置（存储目录以 [`Inbox::storage_dir`] 为准）
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 当前存储目录
    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 切换存储目录（按需创建），并清空上传历史
    pub fn set_storage_dir(&self, dir: impl Into<PathBuf>) -> std::io::Result<()> {
        let dir = dir.into();
        storage::ensure_dir(&dir)?;
        {
            let mut current = self
                .storage_dir
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *current = dir.clone();
        }
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();

        info!("Storage directory changed to {:?}", dir);
        let _ = self.events.send(InboxEvent::StorageChanged(dir));
        Ok(())
    }

    /// 确保当前存储目录存在
    pub fn ensure_storage_dir(&self) -> std::io::Result<()> {
        storage::ensure_dir(&self.storage_dir())
    }

    /// 校验 `Authorization` 头
    ///
    /// 接受原样令牌或 `Bearer <token>`。
    pub fn authorize(&self, header: Option<&str>) -> Result<()> {
        let Some(value) = header else {
            return Err(WebhookError::Unauthorized);
        };
        let value = value.trim();
        let token = value.strip_prefix("Bearer ").unwrap_or(value);
        if token == self.settings.auth_token {
            Ok(())
        } else {
            Err(WebhookError::Unauthorized)
        }
    }

    /// 校验上传文件名和扩展名
    pub fn check_upload_name(&self, name: &str) -> Result<()> {
        storage::validate_file_name(name)?;
        if name == ARCHIVE_NAME {
            return Err(WebhookError::InvalidFileName(name.to_string()));
        }
        let ext = storage::extension_of(name);
        if !self.settings.is_allowed_extension(ext) {
            return Err(WebhookError::DisallowedType(ext.to_string()));
        }
        Ok(())
    }

    /// 保存上传的文件，同名文件直接覆盖
    pub async fn save_upload(&self, name: &str, data: &[u8]) -> Result<ReceivedFile> {
        self.check_upload_name(name)?;

        let dir = self.storage_dir();
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(name);
        tokio::fs::write(&path, data).await?;

        let received = ReceivedFile {
            name: name.to_string(),
            size: data.len() as u64,
            received_at: SystemTime::now(),
        };
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(received.clone());

        info!("Received {:?} ({} bytes)", path, received.size);
        let _ = self.events.send(InboxEvent::Received(received.clone()));
        Ok(received)
    }

    /// 当前存储目录中的文件
    pub fn list_files(&self) -> std::io::Result<Vec<StoredFile>> {
        storage::list_files(&self.storage_dir())
    }

    /// 存储目录中某个文件的路径（仅校验文件名）
    pub fn file_path(&self, name: &str) -> Result<PathBuf> {
        storage::file_path(&self.storage_dir(), name)
    }

    /// 删除文件
    pub fn delete(&self, name: &str) -> Result<()> {
        storage::remove_file(&self.storage_dir(), name)?;
        let _ = self.events.send(InboxEvent::Deleted(name.to_string()));
        Ok(())
    }

    /// 上传历史（按接收顺序）
    pub fn history(&self) -> Vec<ReceivedFile> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 订阅收件箱事件
    pub fn subscribe(&self) -> broadcast::Receiver<InboxEvent> {
        self.events.subscribe()
    }

    /// 重新打包存储目录
    ///
    /// 同一时间只有一个打包任务在运行，实际的文件读写在阻塞线程池中完成。
    pub async fn build_archive(&self) -> Result<Archive> {
        let _guard = self.archive_lock.lock().await;
        let dir = self.storage_dir();
        debug!("Building archive for {:?}", dir);

        tokio::task::spawn_blocking(move || archive::build_archive(&dir))
            .await
            .map_err(|e| WebhookError::Io(std::io::Error::other(e)))?
    }

    /// 上传入口 URL
    pub fn webhook_url(&self) -> String {
        format!("{}/", self.settings.base_url())
    }

    /// 单个文件的下载 URL
    pub fn file_url(&self, name: &str) -> String {
        format!(
            "{}/files/{}",
            self.settings.base_url(),
            urlencoding::encode(name)
        )
    }

    /// 全部文件打包下载的 URL
    pub fn archive_url(&self) -> String {
        format!("{}/files", self.settings.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn inbox_in(dir: &Path) -> Inbox {
        Inbox::new(Settings {
            storage_dir: dir.to_path_buf(),
            ..Default::default()
        })
    }

    #[test]
    fn test_authorize() {
        let inbox = Inbox::new(Settings::default());
        assert!(inbox.authorize(Some("secure_token_12345")).is_ok());
        assert!(inbox.authorize(Some("Bearer secure_token_12345")).is_ok());
        assert!(matches!(
            inbox.authorize(Some("wrong")),
            Err(WebhookError::Unauthorized)
        ));
        assert!(matches!(
            inbox.authorize(None),
            Err(WebhookError::Unauthorized)
        ));
    }

    #[test]
    fn test_check_upload_name() {
        let inbox = Inbox::new(Settings::default());
        assert!(inbox.check_upload_name("a.txt").is_ok());
        assert!(matches!(
            inbox.check_upload_name("run.exe"),
            Err(WebhookError::DisallowedType(ext)) if ext == ".exe"
        ));
        assert!(matches!(
            inbox.check_upload_name("README"),
            Err(WebhookError::DisallowedType(ext)) if ext.is_empty()
        ));
        assert!(matches!(
            inbox.check_upload_name(ARCHIVE_NAME),
            Err(WebhookError::InvalidFileName(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_upload_overwrites_and_logs_twice() {
        let dir = tempfile::tempdir().unwrap();
        let inbox = inbox_in(dir.path());
        let mut events = inbox.subscribe();

        inbox.save_upload("a.txt", b"first").await.unwrap();
        inbox.save_upload("a.txt", b"second").await.unwrap();

        assert_eq!(std::fs::read(dir.path().join("a.txt")).unwrap(), b"second");
        assert_eq!(inbox.history().len(), 2);
        assert_eq!(inbox.list_files().unwrap().len(), 1);

        assert!(matches!(events.recv().await.unwrap(), InboxEvent::Received(f) if f.size == 5));
        assert!(matches!(events.recv().await.unwrap(), InboxEvent::Received(f) if f.size == 6));
    }

    #[tokio::test]
    async fn test_rejected_upload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let inbox = inbox_in(dir.path());

        assert!(inbox.save_upload("evil.sh", b"rm -rf").await.is_err());
        assert!(inbox.save_upload("../a.txt", b"x").await.is_err());
        assert!(inbox.list_files().unwrap().is_empty());
        assert!(inbox.history().is_empty());
    }

    #[tokio::test]
    async fn test_set_storage_dir() {
        let dir = tempfile::tempdir().unwrap();
        let inbox = inbox_in(&dir.path().join("first"));
        inbox.save_upload("a.txt", b"x").await.unwrap();

        let second = dir.path().join("second");
        inbox.set_storage_dir(&second).unwrap();
        assert!(second.is_dir());
        assert_eq!(inbox.storage_dir(), second);
        assert!(inbox.history().is_empty());
        assert!(inbox.list_files().unwrap().is_empty());

        inbox.save_upload("b.txt", b"y").await.unwrap();
        assert!(second.join("b.txt").exists());
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), b"x").unwrap();
        let inbox = inbox_in(dir.path());
        let mut events = inbox.subscribe();

        inbox.delete("a.txt").unwrap();
        assert!(inbox.list_files().unwrap().is_empty());
        assert!(matches!(events.try_recv().unwrap(), InboxEvent::Deleted(n) if n == "a.txt"));
        assert!(matches!(inbox.delete("a.txt"), Err(WebhookError::NotFound(_))));
    }

    #[test]
    fn test_urls() {
        let inbox = Inbox::new(Settings::default());
        assert_eq!(inbox.webhook_url(), "http://localhost:5000/");
        assert_eq!(inbox.archive_url(), "http://localhost:5000/files");
        assert_eq!(
            inbox.file_url("my report.pdf"),
            "http://localhost:5000/files/my%20report.pdf"
        );
    }
}
