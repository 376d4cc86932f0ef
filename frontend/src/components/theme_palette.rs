//! 界面主题
//!
//! daisyUI 的主题通过根元素的 `data-theme` 属性切换，选择持久化
//! 到 LocalStorage，应用启动时恢复。页面本身展示每个主题的配色
//! 样板。

use crate::web::LocalStorage;
use leptos::prelude::*;

const THEME_KEY: &str = "nimbus_theme";

/// 可选主题列表，第一项为默认
pub const THEMES: &[&str] = &["light", "dark", "cupcake", "valentine", "aqua", "pastel", "night"];

fn apply_theme(name: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("data-theme", name);
    }
}

/// 切换并持久化主题
pub fn set_theme(name: &str) {
    apply_theme(name);
    LocalStorage::set(THEME_KEY, name);
}

/// 应用启动时恢复上次选择的主题
pub fn restore_theme() {
    if let Some(saved) = LocalStorage::get(THEME_KEY) {
        apply_theme(&saved);
    }
}

#[component]
pub fn ThemePalettePage() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-2">"Themes"</h1>
            <p class="text-base-content/70 mb-8">"Pick how Nimbus looks on this device."</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {THEMES
                    .iter()
                    .map(|&name| {
                        view! {
                            <div data-theme=name class="card bg-base-100 border border-base-300 shadow-sm">
                                <div class="card-body p-4">
                                    <div class="flex items-center justify-between">
                                        <span class="font-semibold">{name}</span>
                                        <button
                                            class="btn btn-primary btn-xs"
                                            on:click=move |_| set_theme(name)
                                        >
                                            "Apply"
                                        </button>
                                    </div>
                                    // 配色样板
                                    <div class="flex gap-2 mt-2">
                                        <div class="w-6 h-6 rounded-full bg-primary"></div>
                                        <div class="w-6 h-6 rounded-full bg-secondary"></div>
                                        <div class="w-6 h-6 rounded-full bg-accent"></div>
                                        <div class="w-6 h-6 rounded-full bg-neutral"></div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
