//! REST 适配层
//!
//! 所有网络访问的唯一入口。每个后端操作对应一个方法，出错时统一
//! 归一化为 [`ApiError`]，调用方只需要处理 `Result`。
//!
//! 会话通过 Cookie 携带，因此每个请求都带 `credentials: include`；
//! 取消与超时由调用方传入的 [`FetchScope`] 提供。

use crate::web::FetchScope;
use gloo_net::http::{Request, RequestBuilder, Response};
use nimbus_shared::{
    Comment, CommentPatch, Credentials, NewComment, NewPost, Post, PostPatch, ProfilePatch,
    Registration, User,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

// =========================================================
// 错误类型
// =========================================================

/// 网络边界的统一错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求没有到达服务器（断网、被中止、超时）
    Network(String),
    /// 服务器返回非 2xx 状态码，`message` 为响应体文本
    Status { status: u16, message: String },
    /// 响应体无法按预期解码
    Decode(String),
}

impl ApiError {
    /// 携带的 HTTP 状态码（仅 `Status` 变体有）
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status { status, message } if message.is_empty() => {
                write!(f, "request failed with status {status}")
            }
            ApiError::Status { status, message } => {
                write!(f, "request failed with status {status}: {message}")
            }
            ApiError::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

// =========================================================
// 响应归一化
// =========================================================

/// `content-type` 是否声明为 JSON（允许参数、忽略大小写）
fn content_type_is_json(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// 非 2xx 一律转为 `ApiError::Status` 并记录日志
async fn check(res: Response) -> Result<Response, ApiError> {
    if res.ok() {
        return Ok(res);
    }
    let status = res.status();
    let message = res.text().await.unwrap_or_default();
    let err = ApiError::Status { status, message };
    web_sys::console::warn_1(&format!("[Api] {err}").into());
    Err(err)
}

/// 按 content-type 解码 JSON 响应体
async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let content_type = res.headers().get("content-type");
    if !content_type_is_json(content_type.as_deref()) {
        // 文本响应走 read_text，出现在这里说明后端契约不符
        return Err(ApiError::Decode(format!(
            "expected a JSON body, got content-type {content_type:?}"
        )));
    }
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// 读取纯文本响应体
async fn read_text(res: Response) -> Result<String, ApiError> {
    res.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

// =========================================================
// 客户端
// =========================================================

/// 论坛 REST 客户端
///
/// `base_url` 为空时请求同源的 `/api` 路径。句柄 `Copy`，
/// 可以直接塞进事件闭包。
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForumApi {
    base_url: &'static str,
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ForumApi {
    leptos::prelude::use_context::<ForumApi>().expect("ForumApi should be provided")
}

impl ForumApi {
    pub fn new(base_url: &'static str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/'),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 挂上 Cookie 凭据与本次请求的中止信号
    fn prepare(builder: RequestBuilder, scope: &FetchScope) -> RequestBuilder {
        builder
            .credentials(RequestCredentials::Include)
            .abort_signal(scope.request_signal().as_ref())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        scope: &FetchScope,
        path: &str,
    ) -> Result<T, ApiError> {
        let res = Self::prepare(Request::get(&self.url(path)), scope)
            .send()
            .await
            .map_err(network)?;
        read_json(check(res).await?).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        scope: &FetchScope,
        body: &B,
    ) -> Result<T, ApiError> {
        let res = Self::prepare(builder, scope)
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(check(res).await?).await
    }

    async fn delete(&self, scope: &FetchScope, path: &str) -> Result<(), ApiError> {
        let res = Self::prepare(Request::delete(&self.url(path)), scope)
            .send()
            .await
            .map_err(network)?;
        check(res).await?;
        Ok(())
    }

    // =========================================================
    // 认证
    // =========================================================

    /// 会话检查（"我是谁"）
    pub async fn me(&self, scope: &FetchScope) -> Result<User, ApiError> {
        self.get_json(scope, "/api/users/me").await
    }

    pub async fn login(
        &self,
        scope: &FetchScope,
        credentials: &Credentials,
    ) -> Result<User, ApiError> {
        self.send_json(Request::post(&self.url("/api/auth/login")), scope, credentials)
            .await
    }

    pub async fn register(
        &self,
        scope: &FetchScope,
        registration: &Registration,
    ) -> Result<User, ApiError> {
        self.send_json(
            Request::post(&self.url("/api/auth/register")),
            scope,
            registration,
        )
        .await
    }

    /// 让服务端作废会话 Cookie，响应体内容不关心
    pub async fn logout(&self, scope: &FetchScope) -> Result<(), ApiError> {
        let res = Self::prepare(Request::post(&self.url("/api/auth/logout")), scope)
            .send()
            .await
            .map_err(network)?;
        let _ = read_text(check(res).await?).await;
        Ok(())
    }

    // =========================================================
    // 帖子
    // =========================================================

    pub async fn post(&self, scope: &FetchScope, id: i64) -> Result<Post, ApiError> {
        self.get_json(scope, &format!("/api/posts/{id}")).await
    }

    /// 全站最新帖子
    pub async fn posts(&self, scope: &FetchScope) -> Result<Vec<Post>, ApiError> {
        self.get_json(scope, "/api/posts").await
    }

    pub async fn posts_by_user(
        &self,
        scope: &FetchScope,
        user_id: i64,
    ) -> Result<Vec<Post>, ApiError> {
        self.get_json(scope, &format!("/api/posts/user/{user_id}")).await
    }

    pub async fn posts_by_category(
        &self,
        scope: &FetchScope,
        category_id: i64,
    ) -> Result<Vec<Post>, ApiError> {
        self.get_json(scope, &format!("/api/posts/category/{category_id}"))
            .await
    }

    pub async fn create_post(
        &self,
        scope: &FetchScope,
        new_post: &NewPost,
    ) -> Result<Post, ApiError> {
        self.send_json(Request::post(&self.url("/api/posts")), scope, new_post)
            .await
    }

    pub async fn update_post(
        &self,
        scope: &FetchScope,
        id: i64,
        patch: &PostPatch,
    ) -> Result<Post, ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/api/posts/{id}"))),
            scope,
            patch,
        )
        .await
    }

    pub async fn delete_post(&self, scope: &FetchScope, id: i64) -> Result<(), ApiError> {
        self.delete(scope, &format!("/api/posts/{id}")).await
    }

    // =========================================================
    // 评论
    // =========================================================

    pub async fn comments_by_post(
        &self,
        scope: &FetchScope,
        post_id: i64,
    ) -> Result<Vec<Comment>, ApiError> {
        self.get_json(scope, &format!("/api/posts/{post_id}/comments"))
            .await
    }

    pub async fn create_comment(
        &self,
        scope: &FetchScope,
        new_comment: &NewComment,
    ) -> Result<Comment, ApiError> {
        self.send_json(Request::post(&self.url("/api/comments")), scope, new_comment)
            .await
    }

    pub async fn update_comment(
        &self,
        scope: &FetchScope,
        id: i64,
        patch: &CommentPatch,
    ) -> Result<Comment, ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/api/comments/{id}"))),
            scope,
            patch,
        )
        .await
    }

    pub async fn delete_comment(&self, scope: &FetchScope, id: i64) -> Result<(), ApiError> {
        self.delete(scope, &format!("/api/comments/{id}")).await
    }

    // =========================================================
    // 用户
    // =========================================================

    pub async fn user(&self, scope: &FetchScope, id: i64) -> Result<User, ApiError> {
        self.get_json(scope, &format!("/api/users/{id}")).await
    }

    pub async fn update_user(
        &self,
        scope: &FetchScope,
        id: i64,
        patch: &ProfilePatch,
    ) -> Result<User, ApiError> {
        self.send_json(
            Request::put(&self.url(&format!("/api/users/{id}"))),
            scope,
            patch,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // content-type 判定
    // =========================================================

    #[test]
    fn json_content_types_are_recognized() {
        assert!(content_type_is_json(Some("application/json")));
        assert!(content_type_is_json(Some("application/json; charset=utf-8")));
        assert!(content_type_is_json(Some("Application/JSON")));
    }

    #[test]
    fn non_json_content_types_are_rejected() {
        assert!(!content_type_is_json(Some("text/plain")));
        assert!(!content_type_is_json(Some("text/html; charset=utf-8")));
        assert!(!content_type_is_json(None));
    }

    // =========================================================
    // 错误类型
    // =========================================================

    #[test]
    fn status_error_carries_the_code() {
        let err = ApiError::Status {
            status: 404,
            message: "post not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "request failed with status 404: post not found");

        assert_eq!(ApiError::Network("offline".to_string()).status(), None);
    }

    #[test]
    fn status_error_without_body_still_reads_well() {
        let err = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}
