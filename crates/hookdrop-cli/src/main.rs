//! Hookdrop CLI
//!
//! 命令行客户端，通过 HTTP 与接收服务通信

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hookdrop_core::{ARCHIVE_NAME, Settings};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hookdrop", version, about = "Hookdrop - Webhook 文件接收工具")]
struct Cli {
    /// 接收服务地址 (默认: 配置文件中的地址)
    #[arg(short, long, global = true)]
    url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 上传文件
    Send {
        /// 要上传的文件路径
        file: PathBuf,
        /// 上传令牌 (默认: 配置文件中的令牌)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// 下载单个文件
    Get {
        /// 服务端的文件名
        name: String,
        /// 保存路径 (默认: 当前目录下同名文件)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 下载全部文件的 ZIP
    Archive {
        /// 保存路径 (默认: ./all_files.zip)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load();
    let base_url = cli.url.unwrap_or_else(|| settings.base_url());
    let client = client::WebhookClient::new(&base_url);

    match cli.command {
        Commands::Send { file, token } => {
            println!("📤 上传文件: {}", file.display());
            let token = token.unwrap_or(settings.auth_token);
            match client.upload(&file, &token).await {
                Ok(resp) => {
                    println!("✅ {}", resp.message);
                    println!("   {} ({} 字节)", client.file_url(&resp.file), resp.size);
                }
                Err(e) => {
                    eprintln!("❌ {}", e);
                    return Err(e);
                }
            }
        }
        Commands::Get { name, output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&name));
            println!("📥 下载: {}", client.file_url(&name));
            let data = client.download(&name).await.inspect_err(|e| {
                eprintln!("❌ {}", e);
            })?;
            tokio::fs::write(&output, &data).await?;
            println!("✅ 已保存到 {} ({} 字节)", output.display(), data.len());
        }
        Commands::Archive { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(ARCHIVE_NAME));
            println!("📦 打包下载: {}", client.archive_url());
            let data = client.download_archive().await.inspect_err(|e| {
                eprintln!("❌ {}", e);
            })?;
            tokio::fs::write(&output, &data).await?;
            println!("✅ 已保存到 {} ({} 字节)", output.display(), data.len());
        }
    }

    Ok(())
}
