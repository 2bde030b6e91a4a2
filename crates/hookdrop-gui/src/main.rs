//! Hookdrop GUI Application
//!
//! 基于 Dioxus 的桌面 GUI：启动本地 Webhook 接收服务，浏览、打开、删除已接收的文件，
//! 并生成可分享的下载链接。
//!
//! # 架构
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Dioxus Desktop App                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────────┐  │
//! │  │   Header    │  │ StoragePanel │  │ FileList/ActionBar │  │
//! │  │ (服务状态)   │  │  (存储目录)   │  │   (文件操作)        │  │
//! │  └─────────────┘  └──────────────┘  └────────────────────┘  │
//! ├─────────────────────────────────────────────────────────────┤
//! │              Arc<Inbox> + WebhookServer (axum)              │
//! │                   (hookdrop-core crate)                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod components;
mod dialogs;
mod platform;
mod state;
mod styles;

fn main() {
    // 初始化日志
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Hookdrop GUI...");

    // 启动 Dioxus 桌面应用
    dioxus::launch(app::App);
}
