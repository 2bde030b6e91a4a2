//! 主应用组件

use dioxus::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;

use crate::components::{ActionBar, ActivityLog, FileList, Header, StoragePanel, UrlDialog};
use crate::state::ServerStatus;
use crate::styles::GLOBAL_CSS;
use crate::{dialogs, platform};

use hookdrop_core::{Inbox, InboxEvent, ReceivedFile, Settings, StoredFile, WebhookServer};

/// 从磁盘读取文件列表
fn read_files(inbox: &Inbox) -> Vec<StoredFile> {
    match inbox.list_files() {
        Ok(files) => files,
        Err(e) => {
            log::warn!("Failed to list {:?}: {}", inbox.storage_dir(), e);
            Vec::new()
        }
    }
}

/// 刷新文件列表，选中的文件不存在时取消选择
fn refresh(
    inbox: &Inbox,
    mut files: Signal<Vec<StoredFile>>,
    mut selected: Signal<Option<String>>,
) {
    let current = read_files(inbox);
    let still_there = selected
        .read()
        .as_ref()
        .is_some_and(|name| current.iter().any(|f| &f.name == name));
    if !still_there {
        selected.set(None);
    }
    files.set(current);
}

/// 把新的存储目录写回配置文件
fn persist_storage_dir(dir: PathBuf) {
    let mut settings = Settings::load();
    settings.storage_dir = dir;
    if let Err(e) = settings.save() {
        log::warn!("Failed to save settings: {}", e);
    }
}

/// 主应用
#[component]
pub fn App() -> Element {
    // 共享状态，与 HTTP 服务共用
    let inbox = use_hook(|| {
        let inbox = Inbox::new(Settings::load());
        if let Err(e) = inbox.ensure_storage_dir() {
            log::warn!("Failed to create {:?}: {}", inbox.storage_dir(), e);
        }
        Arc::new(inbox)
    });

    // 界面状态
    let mut server_status = use_signal(|| ServerStatus::Stopped);
    let mut storage_dir = use_signal({
        let inbox = inbox.clone();
        move || inbox.storage_dir()
    });
    let files = use_signal({
        let inbox = inbox.clone();
        move || read_files(&inbox)
    });
    let mut history = use_signal(Vec::<ReceivedFile>::new);
    let mut selected = use_signal(|| Option::<String>::None);
    let mut popup_url = use_signal(|| Option::<String>::None);

    // 订阅收件箱事件，磁盘内容变化时刷新列表
    use_future({
        let inbox = inbox.clone();
        move || {
            let inbox = inbox.clone();
            async move {
                let mut events = inbox.subscribe();
                loop {
                    match events.recv().await {
                        Ok(InboxEvent::Received(file)) => {
                            log::info!("Received {} ({} bytes)", file.name, file.size);
                        }
                        Ok(_) => {}
                        Err(RecvError::Lagged(skipped)) => {
                            log::warn!("Missed {} inbox events", skipped);
                        }
                        Err(RecvError::Closed) => break,
                    }
                    refresh(&inbox, files, selected);
                    history.set(inbox.history());
                    storage_dir.set(inbox.storage_dir());
                }
            }
        }
    });

    // 事件处理器
    let on_start = {
        let inbox = inbox.clone();
        move |_: ()| {
            if server_status.read().is_active() {
                return;
            }
            server_status.set(ServerStatus::Starting);

            let inbox = inbox.clone();
            spawn(async move {
                let server = WebhookServer::new(inbox);
                match server.start().await {
                    Ok(addr) => {
                        log::info!("Webhook configured at {}", server.inbox().webhook_url());
                        server_status.set(ServerStatus::Running(addr));
                    }
                    Err(e) => {
                        log::error!("Failed to start server: {}", e);
                        server_status.set(ServerStatus::Failed(e.to_string()));
                    }
                }
            });
        }
    };

    let on_change_folder = {
        let inbox = inbox.clone();
        move |_: ()| {
            let inbox = inbox.clone();
            spawn(async move {
                let Some(folder) = rfd::AsyncFileDialog::new()
                    .set_title("选择存储目录")
                    .set_directory(inbox.storage_dir())
                    .pick_folder()
                    .await
                else {
                    return;
                };

                let path = folder.path().to_path_buf();
                match inbox.set_storage_dir(&path) {
                    Ok(()) => {
                        persist_storage_dir(path);
                        storage_dir.set(inbox.storage_dir());
                        history.set(inbox.history());
                        refresh(&inbox, files, selected);
                    }
                    Err(e) => {
                        dialogs::warning("错误", format!("无法使用目录 {}: {e}", path.display()))
                            .await;
                    }
                }
            });
        }
    };

    let on_open_folder = {
        let inbox = inbox.clone();
        move |_: ()| {
            if let Err(e) = platform::open_path(&inbox.storage_dir()) {
                spawn(dialogs::warning("错误", format!("无法打开目录: {e}")));
            }
        }
    };

    let on_refresh = {
        let inbox = inbox.clone();
        move |_: ()| {
            refresh(&inbox, files, selected);
            history.set(inbox.history());
        }
    };

    let on_select = move |name: String| {
        selected.set(Some(name));
    };

    let on_open_file = {
        let inbox = inbox.clone();
        move |_: ()| {
            let current = selected.read().clone();
            let Some(name) = current else {
                spawn(dialogs::warning("提示", "请先选择一个文件".to_string()));
                return;
            };

            let result = inbox
                .file_path(&name)
                .map_err(|e| e.to_string())
                .and_then(|path| platform::open_path(&path).map_err(|e| e.to_string()));
            if let Err(e) = result {
                spawn(dialogs::warning("错误", format!("无法打开 {name}: {e}")));
                refresh(&inbox, files, selected);
            }
        }
    };

    let on_show_url = {
        let inbox = inbox.clone();
        move |_: ()| {
            let current = selected.read().clone();
            match current {
                Some(name) => popup_url.set(Some(inbox.file_url(&name))),
                None => {
                    spawn(dialogs::warning("提示", "请先选择一个文件".to_string()));
                }
            }
        }
    };

    let on_delete = {
        let inbox = inbox.clone();
        move |_: ()| {
            let current = selected.read().clone();
            let Some(name) = current else {
                spawn(dialogs::warning("提示", "请先选择一个文件".to_string()));
                return;
            };

            match inbox.delete(&name) {
                Ok(()) => {
                    selected.set(None);
                    refresh(&inbox, files, selected);
                    spawn(dialogs::info("成功", format!("文件 {name} 已删除")));
                }
                Err(e) => {
                    refresh(&inbox, files, selected);
                    spawn(dialogs::warning("错误", format!("删除 {name} 失败: {e}")));
                }
            }
        }
    };

    let on_archive_url = {
        let inbox = inbox.clone();
        move |_: ()| {
            popup_url.set(Some(inbox.archive_url()));
        }
    };

    let popup = popup_url.read().clone();

    rsx! {
        style { "{GLOBAL_CSS}" }

        div { class: "app-container",
            // 头部
            div { class: "bento-tile header-tile",
                Header {
                    status: server_status.read().clone(),
                    webhook_url: inbox.webhook_url(),
                    on_start: on_start,
                }
            }

            // 存储目录与上传记录 (Left Box)
            div { class: "bento-tile side-tile",
                StoragePanel {
                    dir: storage_dir.read().display().to_string(),
                    file_count: files.read().len(),
                    on_change_folder: on_change_folder,
                    on_open_folder: on_open_folder,
                }
                ActivityLog { entries: history.read().clone() }
            }

            // 文件列表 (Right Box)
            div { class: "bento-tile main-tile",
                FileList {
                    files: files.read().clone(),
                    selected: selected.read().clone(),
                    on_select: on_select,
                    on_refresh: on_refresh,
                }
                ActionBar {
                    on_open: on_open_file,
                    on_show_url: on_show_url,
                    on_delete: on_delete,
                    on_archive_url: on_archive_url,
                }
            }
        }

        match popup {
            Some(url) => rsx! {
                UrlDialog {
                    url: url,
                    on_close: move |_: ()| popup_url.set(None),
                }
            },
            None => rsx! {},
        }
    }
}
