//! 请求生命周期管理
//!
//! 每个页面持有一个 [`FetchScope`]：页面卸载时中止它名下所有
//! 在途请求，避免迟到的响应去更新已经销毁的界面状态；同时每个
//! 请求都有默认超时，超时同样通过中止信号生效。

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use std::time::Duration;
use web_sys::{AbortController, AbortSignal};

/// 单个请求的默认超时
const REQUEST_TIMEOUT_MS: u64 = 15_000;

/// 一组同生命周期请求的中止范围
///
/// controller 是单线程的 JS 对象，经 `SendWrapper` 存进响应式
/// 存储；句柄自身 `Copy`，方便塞进事件闭包与 `Callback`。
#[derive(Clone, Copy)]
pub struct FetchScope {
    controllers: StoredValue<SendWrapper<Vec<AbortController>>>,
}

impl FetchScope {
    pub fn new() -> Self {
        Self {
            controllers: StoredValue::new(SendWrapper::new(Vec::new())),
        }
    }

    /// 为一次请求生成中止信号。
    ///
    /// 每个请求有独立的 `AbortController`，超时中止只影响这一个
    /// 请求；controller 同时登记到 scope 里，随页面一起中止。
    /// 浏览器环境之外拿不到 controller 时返回 None（请求照常
    /// 发出，只是不可取消）。
    pub fn request_signal(&self) -> Option<AbortSignal> {
        let controller = AbortController::new().ok()?;
        let signal = controller.signal();

        let for_timeout = controller.clone();
        set_timeout(
            move || for_timeout.abort(),
            Duration::from_millis(REQUEST_TIMEOUT_MS),
        );

        self.controllers
            .try_update_value(|list| list.push(controller));
        Some(signal)
    }

    /// 中止名下全部在途请求
    pub fn cancel_all(&self) {
        self.controllers.try_update_value(|list| {
            for controller in list.drain(..) {
                controller.abort();
            }
        });
    }
}

impl Default for FetchScope {
    fn default() -> Self {
        Self::new()
    }
}

/// 创建与当前组件同生命周期的请求范围
pub fn use_fetch_scope() -> FetchScope {
    let scope = FetchScope::new();
    on_cleanup(move || scope.cancel_all());
    scope
}
