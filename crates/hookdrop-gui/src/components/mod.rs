//! UI 组件模块

mod action_bar;
mod activity_log;
mod file_list;
mod header;
mod storage_panel;
mod url_dialog;

pub use action_bar::ActionBar;
pub use activity_log::ActivityLog;
pub use file_list::FileList;
pub use header::Header;
pub use storage_panel::StoragePanel;
pub use url_dialog::UrlDialog;
