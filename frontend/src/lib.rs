//! Nimbus 前端应用
//!
//! 一个社区论坛的单页客户端，采用 Context-Driven 架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（History API 引擎）
//! - `session`: 会话状态管理
//! - `api`: REST 适配层
//! - `thread`: 评论列表的乐观更新协调
//! - `components`: UI 组件与页面

mod api;
mod session;
mod thread;
mod components {
    mod comment_card;
    pub mod community;
    mod edit_comment_modal;
    mod edit_post_modal;
    mod forum_post_card;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod navbar;
    mod new_post_dialog;
    pub mod not_found;
    pub mod post_detail;
    mod recent_posts;
    pub mod require_auth;
    pub mod settings;
    pub mod theme_palette;
    mod toast;
    mod upload_widget;
    pub mod user_profile;
}

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，所有 window/history/
// localStorage 的访问都集中在这里。
pub(crate) mod web {
    mod date;
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use date::now_utc;
    pub use http::{FetchScope, use_fetch_scope};
    pub use storage::LocalStorage;
}

use crate::api::ForumApi;
use crate::components::community::CommunityPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::not_found::NotFoundPage;
use crate::components::post_detail::PostDetailPage;
use crate::components::require_auth::RequireAuth;
use crate::components::settings::SettingsPage;
use crate::components::theme_palette::{ThemePalettePage, restore_theme};
use crate::components::user_profile::UserProfilePage;
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

use leptos::prelude::*;

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，受保护路由包在
/// `RequireAuth` 里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::ThemePalette => view! { <ThemePalettePage /> }.into_any(),
        AppRoute::Settings => view! {
            <RequireAuth>
                <SettingsPage />
            </RequireAuth>
        }
        .into_any(),
        AppRoute::UserProfile(user_id) => view! {
            <RequireAuth>
                <UserProfilePage user_id=user_id />
            </RequireAuth>
        }
        .into_any(),
        AppRoute::Community => view! {
            <RequireAuth>
                <CommunityPage />
            </RequireAuth>
        }
        .into_any(),
        AppRoute::CommunityCategory(category_id) => view! {
            <RequireAuth>
                <CommunityPage category=category_id />
            </RequireAuth>
        }
        .into_any(),
        AppRoute::PostDetail(post_id) => view! {
            <RequireAuth>
                <PostDetailPage post_id=post_id />
            </RequireAuth>
        }
        .into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文与 API 客户端
    let session = SessionContext::new();
    provide_context(session);
    let api = ForumApi::default();
    provide_context(api);

    // 2. 恢复持久化的主题
    restore_theme();

    // 3. 启动时检查会话（"我是谁"请求）
    init_session(&session, &api);

    view! {
        <Router>
            <Chrome />
        </Router>
    }
}

/// 应用外壳：按路由决定是否显示导航栏
#[component]
fn Chrome() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex flex-col min-h-screen bg-base-100">
            <Show when=move || router.current_route().get().shows_navbar()>
                <Navbar />
            </Show>
            <main class="flex-grow">
                <RouterOutlet matcher=route_matcher />
            </main>
        </div>
    }
}
