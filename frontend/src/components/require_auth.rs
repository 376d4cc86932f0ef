//! 路由守卫组件
//!
//! 包住需要登录的页面：会话未定时渲染加载占位，未登录时记录
//! 来源并重定向到登录页，已登录时渲染子内容。自身没有状态。

use crate::session::{SessionState, use_session};
use crate::web::router::use_router;
use leptos::prelude::*;

/// 守卫决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// 会话检查尚未完成，先渲染加载占位
    Loading,
    /// 未登录，应重定向到登录页
    Redirect,
    /// 已登录，渲染受保护内容
    Allow,
}

/// 会话状态到守卫决策的纯映射
pub fn guard(state: &SessionState) -> Guard {
    match state {
        SessionState::Unresolved => Guard::Loading,
        SessionState::Anonymous => Guard::Redirect,
        SessionState::Authenticated(_) => Guard::Allow,
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let router = use_router();

    // 重定向是副作用，放在 Effect 里而不是渲染路径上
    Effect::new(move |_| {
        if guard(&session.state.get()) == Guard::Redirect {
            router.redirect_to_login(router.current_route().get_untracked());
        }
    });

    move || match guard(&session.state.get()) {
        Guard::Loading => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
        Guard::Redirect => ().into_any(),
        Guard::Allow => children().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_shared::User;

    fn user() -> User {
        User {
            id: 1,
            username: "ada".to_string(),
            pronouns: None,
            bio: None,
            profile_picture: None,
        }
    }

    #[test]
    fn unresolved_session_shows_loading() {
        assert_eq!(guard(&SessionState::Unresolved), Guard::Loading);
    }

    #[test]
    fn anonymous_session_redirects() {
        assert_eq!(guard(&SessionState::Anonymous), Guard::Redirect);
    }

    #[test]
    fn authenticated_session_renders_children() {
        assert_eq!(guard(&SessionState::Authenticated(user())), Guard::Allow);
    }
}
