//! 存储目录组件

use dioxus::prelude::*;

/// 当前存储目录、文件计数和目录操作
#[component]
pub fn StoragePanel(
    dir: String,
    file_count: usize,
    on_change_folder: EventHandler<()>,
    on_open_folder: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "card-header",
            h2 { class: "card-title", "📁 存储目录" }
        }
        p { class: "folder-path", "{dir}" }
        div { class: "button-row",
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_change_folder.call(()),
                "更换目录"
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| on_open_folder.call(()),
                "打开目录"
            }
        }
        p { class: "counter", "已接收文件: {file_count}" }
    }
}
