//! 顶部导航栏
//!
//! 品牌、社区分类下拉、主题切换与账号菜单。登录状态由会话
//! 上下文驱动：已登录显示头像菜单，未登录显示登录按钮。

use crate::api::use_api;
use crate::components::icons::{Cloud, LogOut};
use crate::components::theme_palette::{THEMES, set_theme};
use crate::session::{logout, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use nimbus_shared::{CATEGORIES, DEFAULT_AVATAR};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let router = use_router();

    let user = session.current_user();

    let on_logout = move |_| {
        logout(&session, &api);
        router.navigate(AppRoute::Login);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md z-30">
            <div class="flex-1">
                <a class="btn btn-ghost text-xl gap-2" on:click=move |_| router.navigate(AppRoute::Home)>
                    <Cloud attr:class="h-6 w-6 text-primary" /> "Nimbus"
                </a>
            </div>

            // 社区分类
            <div class="flex-none">
                <ul class="menu menu-horizontal px-1 z-40">
                    <li>
                        <details>
                            <summary>"Community"</summary>
                            <ul class="p-2 bg-base-100 rounded-box shadow min-w-[13rem]">
                                <li>
                                    <a on:click=move |_| router.navigate(AppRoute::Community)>"All posts"</a>
                                </li>
                                {CATEGORIES
                                    .iter()
                                    .map(|c| {
                                        let id = c.id;
                                        view! {
                                            <li>
                                                <a on:click=move |_| router.navigate(AppRoute::CommunityCategory(id))>
                                                    {c.name}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </details>
                    </li>
                </ul>
            </div>

            // 主题切换
            <div class="dropdown dropdown-end">
                <div tabindex="0" role="button" class="btn btn-ghost btn-sm">"Theme"</div>
                <ul tabindex="0" class="menu menu-sm dropdown-content bg-base-100 rounded-box z-40 mt-3 w-40 p-2 shadow">
                    {THEMES
                        .iter()
                        .map(|&name| {
                            view! {
                                <li><a on:click=move |_| set_theme(name)>{name}</a></li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            // 账号区
            <div class="flex-none ml-2">
                <Show
                    when=move || user.get().is_some()
                    fallback=move || view! {
                        <button
                            class="btn btn-primary btn-sm"
                            on:click=move |_| router.navigate(AppRoute::Login)
                        >
                            "Login"
                        </button>
                    }
                >
                    <div class="dropdown dropdown-end z-40">
                        <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar">
                            <div class="w-10 rounded-full">
                                <img
                                    alt="User avatar"
                                    src=move || {
                                        user.get()
                                            .and_then(|u| u.profile_picture)
                                            .unwrap_or_else(|| DEFAULT_AVATAR.to_string())
                                    }
                                />
                            </div>
                        </div>
                        <ul tabindex="0" class="menu menu-sm dropdown-content bg-base-100 rounded-box z-[1] mt-3 w-52 p-2 shadow">
                            <li>
                                <a on:click=move |_| {
                                    if let Some(u) = user.get() {
                                        router.navigate(AppRoute::UserProfile(u.id));
                                    }
                                }>
                                    "Profile"
                                </a>
                            </li>
                            <li>
                                <a on:click=move |_| router.navigate(AppRoute::Settings)>"Settings"</a>
                            </li>
                            <li>
                                <a on:click=move |_| router.navigate(AppRoute::ThemePalette)>"Theme palette"</a>
                            </li>
                            <li>
                                <a on:click=on_logout class="text-error gap-2">
                                    <LogOut attr:class="h-4 w-4" /> "Logout"
                                </a>
                            </li>
                        </ul>
                    </div>
                </Show>
            </div>
        </div>
    }
}
