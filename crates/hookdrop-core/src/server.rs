//! HTTP 接收服务
//!
//! # 路由
//!
//! - `POST /` 上传单个文件（multipart 字段 `file`，需要 `Authorization` 令牌）
//! - `GET /files/:name` 下载单个文件
//! - `GET /files` 重新打包并下载全部文件

use crate::archive::ARCHIVE_NAME;
use crate::error::{Result, WebhookError};
use crate::inbox::Inbox;
use crate::storage;
use axum::{
    Json, Router,
    body::Body,
    extract::{DefaultBodyLimit, Multipart, Path, State, multipart::MultipartRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// 上传成功的响应
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: String,
    pub size: u64,
}

/// 构建路由
pub fn router(inbox: Arc<Inbox>) -> Router {
    let body_limit = inbox.settings().max_upload_bytes;

    Router::new()
        .route("/", post(receive_upload))
        .route("/files", get(download_all))
        .route("/files/:name", get(download_file))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(inbox)
}

/// 接收服务
pub struct WebhookServer {
    inbox: Arc<Inbox>,
}

impl WebhookServer {
    pub fn new(inbox: Arc<Inbox>) -> Self {
        Self { inbox }
    }

    pub fn inbox(&self) -> &Arc<Inbox> {
        &self.inbox
    }

    async fn bind(&self) -> anyhow::Result<TcpListener> {
        self.inbox.ensure_storage_dir()?;
        let addr = self.inbox.settings().bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        Ok(listener)
    }

    /// 在后台启动服务，返回实际监听地址
    pub async fn start(&self) -> anyhow::Result<SocketAddr> {
        let listener = self.bind().await?;
        let addr = listener.local_addr()?;
        let app = router(self.inbox.clone());

        info!("Webhook server listening on {}", addr);

        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("Server error: {}", e);
            }
        });

        Ok(addr)
    }

    /// 在当前任务中运行服务，直到 `shutdown` 完成
    pub async fn run_until<F>(&self, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = self.bind().await?;
        info!("Webhook server listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.inbox.clone()))
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Webhook server stopped");
        Ok(())
    }
}

/// 上传处理器
///
/// 先校验令牌，再解析 multipart，保证未授权请求不会触发任何写入。
async fn receive_upload(
    State(inbox): State<Arc<Inbox>>,
    headers: HeaderMap,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if let Err(e) = inbox.authorize(token) {
        warn!("Rejected upload with invalid token");
        return Err(e);
    }

    let mut multipart = multipart.map_err(|e| multipart_error(e.status(), e.body_text()))?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e.status(), e.body_text()))?
    {
        if field.name() != Some("file") {
            debug!("Ignoring multipart field {:?}", field.name());
            continue;
        }

        // 没有 filename 参数的 `file` 字段只是普通表单字段
        let Some(name) = field.file_name().map(str::to_string) else {
            debug!("Ignoring `file` field without a filename");
            continue;
        };
        if name.is_empty() {
            return Err(WebhookError::EmptyFileName);
        }
        if let Err(e) = inbox.check_upload_name(&name) {
            warn!("Rejected upload {:?}: {}", name, e);
            return Err(e);
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;
        let received = inbox.save_upload(&name, &data).await?;

        return Ok(Json(UploadResponse {
            message: format!("file received: {}", received.name),
            file: received.name,
            size: received.size,
        }));
    }

    Err(WebhookError::MissingFile)
}

/// 超出请求体上限时返回 413，其余 multipart 错误都按格式错误处理
fn multipart_error(status: StatusCode, message: String) -> WebhookError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        warn!("Rejected upload over the size limit");
        WebhookError::PayloadTooLarge
    } else {
        WebhookError::Multipart(message)
    }
}

/// 单文件下载处理器
async fn download_file(
    State(inbox): State<Arc<Inbox>>,
    Path(name): Path<String>,
) -> Result<Response> {
    storage::validate_file_name(&name)?;
    let path = inbox.storage_dir().join(&name);

    let metadata = match tokio::fs::metadata(&path).await {
        Ok(m) if m.is_file() => m,
        Ok(_) => return Err(WebhookError::NotFound(name)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(WebhookError::NotFound(name));
        }
        Err(e) => return Err(e.into()),
    };
    let file = tokio::fs::File::open(&path).await?;

    debug!("Serving {:?}", path);

    let content_type = mime_guess::from_path(&path).first_or_octet_stream();
    let stream = tokio_util::io::ReaderStream::new(file);
    let headers = [
        (header::CONTENT_TYPE, content_type.to_string()),
        (header::CONTENT_LENGTH, metadata.len().to_string()),
    ];

    Ok((StatusCode::OK, headers, Body::from_stream(stream)).into_response())
}

/// 打包下载处理器
async fn download_all(State(inbox): State<Arc<Inbox>>) -> Result<Response> {
    let archive = inbox.build_archive().await?;

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{ARCHIVE_NAME}\""),
        ),
    ];
    Ok((headers, archive.bytes).into_response())
}
