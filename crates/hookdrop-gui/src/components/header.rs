//! 头部组件

use crate::state::ServerStatus;
use dioxus::prelude::*;

/// 应用头部：服务状态和启动按钮
#[component]
pub fn Header(status: ServerStatus, webhook_url: String, on_start: EventHandler<()>) -> Element {
    let status_class = match status {
        ServerStatus::Running(_) => "status-badge running",
        ServerStatus::Failed(_) => "status-badge error",
        _ => "status-badge",
    };

    let status_text = match &status {
        ServerStatus::Stopped => "服务未启动".to_string(),
        ServerStatus::Starting => "正在启动...".to_string(),
        ServerStatus::Running(addr) => format!("监听中 {addr}"),
        ServerStatus::Failed(err) => format!("启动失败: {err}"),
    };

    rsx! {
        div { class: "logo",
            h1 { "HOOKDROP" }
            p { class: "webhook-url", "Webhook: {webhook_url}" }
        }

        div { class: "header-actions",
            div { class: "{status_class}", "{status_text}" }
            button {
                class: "btn btn-primary",
                disabled: status.is_active(),
                onclick: move |_| on_start.call(()),
                "▶ 启动服务"
            }
        }
    }
}
