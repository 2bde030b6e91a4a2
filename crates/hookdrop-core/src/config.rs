//! 应用配置和持久化
//!
//! 提供存储目录、监听端口、访问令牌和扩展名白名单等设置的存储和读取。

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// 默认监听端口
pub const DEFAULT_PORT: u16 = 5000;

/// 默认访问令牌
pub const DEFAULT_TOKEN: &str = "secure_token_12345";

/// 默认存储目录（相对于工作目录）
pub const DEFAULT_STORAGE_DIR: &str = "received_files";

/// 默认单次上传大小上限 (64 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// 应用设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 接收文件的存储目录
    pub storage_dir: PathBuf,
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 上传时 `Authorization` 头必须携带的令牌
    pub auth_token: String,
    /// 允许的扩展名（含前导 `.`，区分大小写）
    pub allowed_extensions: BTreeSet<String>,
    /// 单次上传的请求体上限（字节）
    pub max_upload_bytes: usize,
    /// 对外分享链接使用的基础 URL，未设置时使用 `http://localhost:<port>`
    pub public_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            auth_token: DEFAULT_TOKEN.to_string(),
            allowed_extensions: [".txt", ".jpg", ".png", ".pdf"]
                .into_iter()
                .map(String::from)
                .collect(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            public_url: None,
        }
    }
}

impl Settings {
    /// 获取配置文件路径
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hookdrop");
        config_dir.join("settings.toml")
    }

    /// 加载设置（如果文件不存在则使用默认值）
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// 从指定路径加载设置，读取或解析失败时回退到默认值
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(settings) => {
                        debug!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        log::warn!("Failed to parse settings: {}, using defaults", e);
                    }
                },
                Err(e) => {
                    log::warn!("Failed to read settings file: {}, using defaults", e);
                }
            }
        }
        Self::default()
    }

    /// 保存设置
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// 保存设置到指定路径
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// 监听地址字符串，例如 `127.0.0.1:5000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 分享链接的基础 URL（不带结尾 `/`）
    pub fn base_url(&self) -> String {
        match &self.public_url {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => format!("http://localhost:{}", self.port),
        }
    }

    /// 扩展名是否在白名单中
    pub fn is_allowed_extension(&self, ext: &str) -> bool {
        self.allowed_extensions.contains(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.port, 5000);
        assert_eq!(settings.auth_token, "secure_token_12345");
        assert_eq!(settings.storage_dir, PathBuf::from("received_files"));
        assert!(settings.is_allowed_extension(".pdf"));
        assert!(!settings.is_allowed_extension(".exe"));
        // 与扩展名逐字比较，大小写敏感
        assert!(!settings.is_allowed_extension(".TXT"));
    }

    #[test]
    fn test_base_url() {
        let mut settings = Settings {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(settings.base_url(), "http://localhost:8080");

        settings.public_url = Some("https://drop.example.com/".to_string());
        assert_eq!(settings.base_url(), "https://drop.example.com");

        settings.public_url = Some("   ".to_string());
        assert_eq!(settings.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let settings = Settings {
            storage_dir: PathBuf::from("/srv/inbox"),
            port: 6001,
            allowed_extensions: [".csv".to_string()].into_iter().collect(),
            ..Default::default()
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "port = 7000\n").unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.port, 7000);
        assert_eq!(loaded.auth_token, DEFAULT_TOKEN);
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "port = \"not a number\"").unwrap();

        assert_eq!(Settings::load_from(&path), Settings::default());
        assert_eq!(
            Settings::load_from(&dir.path().join("missing.toml")),
            Settings::default()
        );
    }
}
