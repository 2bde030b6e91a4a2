//! 原生对话框
//!
//! 警告和提示都使用 rfd 的模态消息框。

use rfd::{AsyncMessageDialog, MessageButtons, MessageLevel};

async fn show(level: MessageLevel, title: &'static str, message: String) {
    let _ = AsyncMessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// 警告对话框
pub async fn warning(title: &'static str, message: String) {
    log::warn!("{}: {}", title, message);
    show(MessageLevel::Warning, title, message).await;
}

/// 提示对话框
pub async fn info(title: &'static str, message: String) {
    show(MessageLevel::Info, title, message).await;
}
