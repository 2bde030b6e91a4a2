//! 文件操作按钮

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActionBarProps {
    pub on_open: EventHandler<()>,
    pub on_show_url: EventHandler<()>,
    pub on_delete: EventHandler<()>,
    pub on_archive_url: EventHandler<()>,
}

/// 针对选中文件和全部文件的操作
#[component]
pub fn ActionBar(props: ActionBarProps) -> Element {
    rsx! {
        div { class: "action-bar",
            button {
                class: "btn btn-secondary",
                onclick: move |_| props.on_open.call(()),
                "打开文件"
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| props.on_show_url.call(()),
                "获取文件链接"
            }
            button {
                class: "btn btn-danger",
                onclick: move |_| props.on_delete.call(()),
                "删除文件"
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| props.on_archive_url.call(()),
                "📦 打包下载链接"
            }
        }
    }
}
