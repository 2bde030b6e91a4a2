//! 上传记录组件

use crate::state::format_size;
use dioxus::prelude::*;
use hookdrop_core::ReceivedFile;

/// 最近的上传记录（新的在前）
///
/// 同名文件多次上传会出现多条记录，而文件列表只显示磁盘上的一份。
#[component]
pub fn ActivityLog(entries: Vec<ReceivedFile>) -> Element {
    rsx! {
        h3 { class: "section-title", "最近上传" }
        div { class: "activity-log",
            if entries.is_empty() {
                p { class: "activity-empty", "暂无记录" }
            }
            for entry in entries.iter().rev().take(50) {
                p { {format!("⬇ {} ({})", entry.name, format_size(entry.size))} }
            }
        }
    }
}
