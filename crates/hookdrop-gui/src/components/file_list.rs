//! 文件列表组件

use crate::state::format_size;
use dioxus::prelude::*;
use hookdrop_core::StoredFile;

#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    pub files: Vec<StoredFile>,
    pub selected: Option<String>,
    pub on_select: EventHandler<String>,
    pub on_refresh: EventHandler<()>,
}

/// 已接收文件列表
#[component]
pub fn FileList(props: FileListProps) -> Element {
    rsx! {
        div { class: "card-header",
            h2 { class: "card-title", "📥 已接收文件" }
            button {
                class: "btn btn-secondary btn-icon",
                onclick: move |_| props.on_refresh.call(()),
                "🔄"
            }
        }

        if props.files.is_empty() {
            div { class: "empty-state",
                div { class: "empty-state-icon", "📭" }
                p { class: "empty-state-text", "还没有收到文件" }
            }
        } else {
            div { class: "file-list",
                for file in props.files.iter() {
                    FileItem {
                        key: "{file.name}",
                        file: file.clone(),
                        is_selected: props.selected.as_ref() == Some(&file.name),
                        on_click: props.on_select,
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FileItemProps {
    file: StoredFile,
    is_selected: bool,
    on_click: EventHandler<String>,
}

#[component]
fn FileItem(props: FileItemProps) -> Element {
    let selected_class = if props.is_selected { "selected" } else { "" };
    let name = props.file.name.clone();
    let size = format_size(props.file.size);

    rsx! {
        div {
            class: "file-item {selected_class}",
            onclick: move |_| props.on_click.call(name.clone()),

            div { class: "file-name", "{props.file.name}" }
            div { class: "file-meta", "{size}" }
        }
    }
}
