//! Hookdrop Core Library
//!
//! 本地 Webhook 文件接收器的核心实现：HTTP 接收服务、存储目录管理和 ZIP 打包。
//!
//! # 模块
//!
//! - **config**: 设置的加载与持久化
//! - **inbox**: GUI 与 HTTP 服务共享的收件箱状态
//! - **storage**: 存储目录的读取、校验和删除
//! - **archive**: 将存储目录打包为 ZIP
//! - **server**: 基于 axum 的 HTTP 路由与服务
//!
//! # 使用示例
//!
//! ```ignore
//! use std::sync::Arc;
//! use hookdrop_core::{Inbox, Settings, WebhookServer};
//!
//! let inbox = Arc::new(Inbox::new(Settings::load()));
//! let server = WebhookServer::new(inbox.clone());
//! let addr = server.start().await?;
//!
//! // 等待上传事件
//! let mut events = inbox.subscribe();
//! while let Ok(event) = events.recv().await {
//!     println!("{event:?}");
//! }
//! ```

pub mod archive;
pub mod config;
pub mod error;
pub mod inbox;
pub mod server;
pub mod storage;

pub use archive::{ARCHIVE_NAME, Archive};
pub use config::Settings;
pub use error::WebhookError;
pub use inbox::{Inbox, InboxEvent, ReceivedFile};
pub use server::{UploadResponse, WebhookServer, router};
pub use storage::StoredFile;
