//! 页面内通知
//!
//! 每个页面持有自己的 [`Notifier`]，变更操作失败时弹出提示，
//! 3 秒后自动消失。

use leptos::prelude::*;
use std::time::Duration;

/// (消息内容, 是否出错)
type Notice = (String, bool);

/// 通知状态句柄，`Copy` 便于塞进事件闭包
#[derive(Clone, Copy)]
pub struct Notifier(RwSignal<Option<Notice>>);

impl Notifier {
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    pub fn success(&self, message: impl Into<String>) {
        self.0.try_set(Some((message.into(), false)));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.0.try_set(Some((message.into(), true)));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toast(notifier: Notifier) -> impl IntoView {
    let notice = notifier.0;

    // 3秒后清除通知
    Effect::new(move |_| {
        if notice.get().is_some() {
            set_timeout(
                move || {
                    notice.try_set(None);
                },
                Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || notice.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    let (_, is_err) = notice.get().unwrap_or_default();
                    if is_err {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.get().unwrap_or_default().0}</span>
                </div>
            </div>
        </Show>
    }
}
