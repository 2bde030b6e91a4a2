//! CSS 样式定义
//!
//! Bento 网格布局，粗边框 + 硬阴影风格

/// 全局 CSS 样式
pub const GLOBAL_CSS: &str = r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

:root {
    --primary: #FACC15;
    --accent: #22D3EE;
    --success: #4ADE80;
    --error: #FB7185;
    --bg: #F8FAFC;
    --border: #000000;
    --muted: #64748b;
    --shadow: 6px 6px 0px #000000;
    --shadow-sm: 3px 3px 0px #000000;
    --font-main: 'Outfit', 'Inter', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
}

body {
    font-family: var(--font-main);
    background-color: var(--bg);
    color: var(--border);
    padding: 24px;
    line-height: 1.5;
}

.app-container {
    max-width: 1100px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(12, 1fr);
    gap: 20px;
}

.bento-tile {
    background: white;
    border: 3px solid var(--border);
    box-shadow: var(--shadow);
    padding: 24px;
    overflow: hidden;
}

.header-tile {
    grid-column: span 12;
    display: flex;
    justify-content: space-between;
    align-items: center;
    background: var(--primary);
}

.side-tile {
    grid-column: span 5;
    display: flex;
    flex-direction: column;
    gap: 14px;
}

.main-tile {
    grid-column: span 7;
    display: flex;
    flex-direction: column;
    gap: 14px;
}

.logo h1 {
    font-size: 32px;
    font-weight: 900;
    letter-spacing: -1px;
}

.webhook-url {
    font-family: var(--font-mono);
    font-weight: 600;
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 12px;
}

.status-badge {
    background: white;
    border: 3px solid var(--border);
    padding: 6px 14px;
    font-weight: 800;
    text-transform: uppercase;
}

.status-badge.running {
    background: var(--success);
}

.status-badge.error {
    background: var(--error);
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.card-title {
    font-size: 20px;
    font-weight: 900;
}

.section-title {
    font-weight: 900;
    text-transform: uppercase;
    margin-top: 8px;
}

.folder-path {
    font-family: var(--font-mono);
    background: var(--bg);
    border: 2px solid var(--border);
    padding: 8px 10px;
    word-break: break-all;
}

.counter {
    font-weight: 800;
}

.button-row,
.action-bar {
    display: flex;
    flex-wrap: wrap;
    gap: 10px;
}

.btn {
    border: 3px solid var(--border);
    box-shadow: var(--shadow-sm);
    padding: 8px 16px;
    font-weight: 800;
    font-family: inherit;
    cursor: pointer;
    background: white;
}

.btn:active {
    transform: translate(2px, 2px);
    box-shadow: none;
}

.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}

.btn-primary {
    background: var(--accent);
}

.btn-secondary {
    background: white;
}

.btn-danger {
    background: var(--error);
}

.btn-icon {
    padding: 4px 10px;
}

.file-list {
    display: flex;
    flex-direction: column;
    gap: 6px;
    max-height: 360px;
    overflow-y: auto;
}

.file-item {
    display: flex;
    justify-content: space-between;
    padding: 10px 12px;
    border: 2px solid var(--border);
    cursor: pointer;
}

.file-item:hover {
    background: var(--bg);
}

.file-item.selected {
    background: var(--primary);
}

.file-name {
    font-weight: 700;
    word-break: break-all;
}

.file-meta {
    color: var(--muted);
    font-family: var(--font-mono);
    white-space: nowrap;
    margin-left: 12px;
}

.empty-state {
    text-align: center;
    padding: 40px 0;
}

.empty-state-icon {
    font-size: 48px;
}

.empty-state-text {
    font-weight: 700;
    color: var(--muted);
}

.activity-log {
    background: #0F172A;
    color: #e2e8f0;
    font-family: var(--font-mono);
    font-size: 13px;
    padding: 12px;
    min-height: 140px;
    max-height: 240px;
    overflow-y: auto;
}

.activity-empty {
    color: var(--muted);
}

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(15, 23, 42, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
}

.modal {
    background: white;
    border: 3px solid var(--border);
    box-shadow: var(--shadow);
    padding: 24px;
    width: 520px;
    display: flex;
    flex-direction: column;
    gap: 14px;
}

.url-input {
    font-family: var(--font-mono);
    border: 2px solid var(--border);
    padding: 8px;
    width: 100%;
}
"#;
