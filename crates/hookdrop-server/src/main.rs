//! Hookdrop Server
//!
//! 无界面的接收服务，适合在服务器或脚本中运行：
//! - 读取 `settings.toml`，命令行参数覆盖其中的值
//! - 在前台运行 HTTP 接收服务，Ctrl-C 退出

use anyhow::Result;
use clap::Parser;
use hookdrop_core::{Inbox, InboxEvent, Settings, WebhookServer};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hookdrop-server", version, about = "Hookdrop - 本地 Webhook 文件接收服务")]
struct Args {
    /// 监听地址 (默认: 127.0.0.1)
    #[arg(long)]
    host: Option<String>,
    /// 监听端口 (默认: 5000)
    #[arg(short, long)]
    port: Option<u16>,
    /// 存储目录
    #[arg(short, long)]
    dir: Option<PathBuf>,
    /// 上传令牌
    #[arg(short, long)]
    token: Option<String>,
    /// 允许的扩展名，可重复指定 (例如 --allow .txt --allow .csv)
    #[arg(short, long = "allow")]
    allow: Vec<String>,
    /// 将合并后的设置写回配置文件
    #[arg(long)]
    save: bool,
}

impl Args {
    /// 用命令行参数覆盖设置
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(host) = &self.host {
            settings.host.clone_from(host);
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if let Some(dir) = &self.dir {
            settings.storage_dir.clone_from(dir);
        }
        if let Some(token) = &self.token {
            settings.auth_token.clone_from(token);
        }
        if !self.allow.is_empty() {
            settings.allowed_extensions = self
                .allow
                .iter()
                .map(|ext| {
                    if ext.starts_with('.') {
                        ext.clone()
                    } else {
                        format!(".{ext}")
                    }
                })
                .collect();
        }
        settings
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // 桥接 log crate（hookdrop-core 使用）到 tracing
    let _ = tracing_log::LogTracer::init();

    // 初始化日志
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,hookdrop_core=debug")),
        )
        .try_init();

    let args = Args::parse();
    let settings = args.apply(Settings::load());
    if args.save {
        settings.save()?;
        tracing::info!("设置已保存: {:?}", Settings::config_path());
    }

    tracing::info!("Hookdrop Server starting...");
    tracing::info!("存储目录: {:?}", settings.storage_dir);
    tracing::info!(
        "允许的扩展名: {}",
        settings
            .allowed_extensions
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    );

    let inbox = Arc::new(Inbox::new(settings));
    tracing::info!("上传地址: {}", inbox.webhook_url());
    tracing::info!("打包下载: {}", inbox.archive_url());

    // 记录上传事件
    let mut events = inbox.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let InboxEvent::Received(file) = event {
                tracing::info!(file = %file.name, size = file.size, "文件已接收");
            }
        }
    });

    let server = WebhookServer::new(inbox);
    server
        .run_until(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("收到退出信号");
        })
        .await
}
