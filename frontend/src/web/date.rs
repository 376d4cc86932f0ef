//! 当前时间
//!
//! wasm32 上 chrono 默认没有时钟源，统一经由 js_sys::Date 取毫秒
//! 时间戳再转为 `DateTime<Utc>`。

use nimbus_shared::{DateTime, Utc};

/// 当前 UTC 时间
pub fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or(DateTime::UNIX_EPOCH)
}
