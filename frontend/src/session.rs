//! 会话状态管理
//!
//! 会话由后端 Cookie 承载，前端只持有三态的内存镜像：
//! 启动时的"我是谁"请求还没回来是 `Unresolved`，之后要么是
//! `Authenticated(user)` 要么是 `Anonymous`。区分前两者才能让
//! 路由守卫在加载期不误判为未登录。

use crate::api::{ApiError, ForumApi};
use crate::web::FetchScope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::{Credentials, ProfilePatch, Registration, User};

/// 会话三态
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionState {
    /// 尚未完成启动时的会话检查
    #[default]
    Unresolved,
    /// 未登录
    Anonymous,
    /// 已登录
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }
}

/// 会话上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// 会话状态（只读）
    pub state: ReadSignal<SessionState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 当前登录用户（未登录为 None）
    pub fn current_user(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.get().user().cloned())
    }

    /// 当前登录用户名，用于卡片上的编辑/删除按钮判定
    pub fn viewer(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.get().user().map(|u| u.username.clone()))
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 初始化会话状态
///
/// 发出一次"我是谁"请求：成功进入已登录，失败进入未登录。
/// 这是应用生命周期内唯一一次自动会话检查。
pub fn init_session(ctx: &SessionContext, api: &ForumApi) {
    let api = api.clone();
    let set_state = ctx.set_state;
    // 应用级请求，不跟随任何页面的生命周期
    let scope = FetchScope::new();
    spawn_local(async move {
        match api.me(&scope).await {
            Ok(user) => set_state.set(SessionState::Authenticated(user)),
            Err(e) => {
                web_sys::console::log_1(&format!("[Session] no active session: {e}").into());
                set_state.set(SessionState::Anonymous);
            }
        }
    });
}

/// 登录；失败时会话状态保持不变，由调用方展示错误
pub async fn login(
    ctx: &SessionContext,
    api: &ForumApi,
    scope: &FetchScope,
    username: String,
    password: String,
) -> Result<(), ApiError> {
    let user = api
        .login(scope, &Credentials { username, password })
        .await?;
    ctx.set_state.set(SessionState::Authenticated(user));
    Ok(())
}

/// 注册并直接登录；失败时会话状态保持不变
pub async fn register(
    ctx: &SessionContext,
    api: &ForumApi,
    scope: &FetchScope,
    registration: Registration,
) -> Result<(), ApiError> {
    let user = api.register(scope, &registration).await?;
    ctx.set_state.set(SessionState::Authenticated(user));
    Ok(())
}

/// 注销
///
/// 先请求服务端作废会话 Cookie，之后无论成败都清空本地状态；
/// 服务端调用失败只记录日志（此时 Cookie 可能仍然有效，只能由
/// 后端过期机制兜底）。
pub fn logout(ctx: &SessionContext, api: &ForumApi) {
    let api = api.clone();
    let set_state = ctx.set_state;
    let scope = FetchScope::new();
    spawn_local(async move {
        if let Err(e) = api.logout(&scope).await {
            web_sys::console::warn_1(&format!("[Session] logout request failed: {e}").into());
        }
        set_state.set(SessionState::Anonymous);
    });
}

/// 保存个人资料，成功后刷新会话里的用户
pub async fn update_profile(
    ctx: &SessionContext,
    api: &ForumApi,
    scope: &FetchScope,
    user_id: i64,
    patch: &ProfilePatch,
) -> Result<User, ApiError> {
    let user = api.update_user(scope, user_id, patch).await?;
    ctx.set_state.set(SessionState::Authenticated(user.clone()));
    Ok(user)
}
