//! Nimbus 共享数据层
//!
//! 前端与后端共用的领域类型与纯逻辑：
//! - `models`: REST 协议上的实体与请求体
//! - `sanitize`: 富文本 HTML 的白名单净化与截断
//! - `date`: 时间戳的展示格式化
//!
//! 本 crate 不依赖 DOM 或 JS API，所有逻辑可在宿主机上直接测试。

pub mod date;
pub mod models;
pub mod sanitize;

pub use chrono::{DateTime, Utc};
pub use models::*;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 列表卡片正文的可见字符上限，超出部分截断并追加省略号
pub const CARD_PREVIEW_CHARS: usize = 200;

/// 未设置头像时使用的占位图
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";
