//! 链接弹窗

use dioxus::prelude::*;

/// 显示可复制的下载链接
#[component]
pub fn UrlDialog(url: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h3 { "下载链接" }
                input {
                    class: "url-input",
                    r#type: "text",
                    readonly: true,
                    value: "{url}",
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| on_close.call(()),
                    "关闭"
                }
            }
        }
    }
}
