//! HTTP Client - 与接收服务通信

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize, Debug)]
pub struct UploadResponse {
    pub message: String,
    pub file: String,
    pub size: u64,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    error: String,
}

pub struct WebhookClient {
    base_url: String,
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn file_url(&self, name: &str) -> String {
        format!("{}/files/{}", self.base_url, urlencoding::encode(name))
    }

    pub fn archive_url(&self) -> String {
        format!("{}/files", self.base_url)
    }

    /// 上传文件
    pub async fn upload(&self, path: &Path, token: &str) -> Result<UploadResponse> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .context("无效的文件名")?
            .to_string();
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("无法读取文件: {}", path.display()))?;

        let part = reqwest::multipart::Part::bytes(data).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/", self.base_url))
            .header(reqwest::header::AUTHORIZATION, token)
            .multipart(form)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            bail!(error_text(response).await)
        }
    }

    /// 下载单个文件
    pub async fn download(&self, name: &str) -> Result<Vec<u8>> {
        self.fetch(&self.file_url(name)).await
    }

    /// 下载全部文件的 ZIP
    pub async fn download_archive(&self) -> Result<Vec<u8>> {
        self.fetch(&self.archive_url()).await
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await?;
        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            bail!(error_text(response).await)
        }
    }
}

async fn error_text(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("{} ({})", body.error, status),
        Err(_) => format!("请求失败 ({})", status),
    }
}
