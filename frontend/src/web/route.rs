//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 落地页 (默认路由)
    #[default]
    Home,
    /// 登录 / 注册
    Login,
    /// 主题配色演示
    ThemePalette,
    /// 个人设置 (需要认证)
    Settings,
    /// 用户主页 (需要认证)
    UserProfile(i64),
    /// 社区全部帖子 (需要认证)
    Community,
    /// 社区分类帖子 (需要认证)
    CommunityCategory(i64),
    /// 帖子详情 (需要认证)
    PostDetail(i64),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// 带参数的段必须是整数 id，否则视为未找到。
    pub fn from_path(path: &str) -> Self {
        // 去掉 query 与 hash
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["palette"] => Self::ThemePalette,
            ["settings"] => Self::Settings,
            ["community"] => Self::Community,
            ["user", id] => id.parse().map(Self::UserProfile).unwrap_or(Self::NotFound),
            ["community", id] => id
                .parse()
                .map(Self::CommunityCategory)
                .unwrap_or(Self::NotFound),
            ["posts", id] => id.parse().map(Self::PostDetail).unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::ThemePalette => "/palette".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::UserProfile(id) => format!("/user/{id}"),
            Self::Community => "/community".to_string(),
            Self::CommunityCategory(id) => format!("/community/{id}"),
            Self::PostDetail(id) => format!("/posts/{id}"),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Settings
                | Self::UserProfile(_)
                | Self::Community
                | Self::CommunityCategory(_)
                | Self::PostDetail(_)
        )
    }

    /// 落地页与登录页不显示导航栏
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Self::Home | Self::Login)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_static_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/palette"), AppRoute::ThemePalette);
        assert_eq!(AppRoute::from_path("/settings"), AppRoute::Settings);
        assert_eq!(AppRoute::from_path("/community"), AppRoute::Community);
    }

    #[test]
    fn parses_parameterized_routes() {
        assert_eq!(AppRoute::from_path("/community/3"), AppRoute::CommunityCategory(3));
        assert_eq!(AppRoute::from_path("/posts/42"), AppRoute::PostDetail(42));
        assert_eq!(AppRoute::from_path("/user/7"), AppRoute::UserProfile(7));
    }

    #[test]
    fn junk_ids_are_not_found() {
        assert_eq!(AppRoute::from_path("/posts/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/community/3/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/nonsense"), AppRoute::NotFound);
    }

    #[test]
    fn ignores_query_and_hash() {
        assert_eq!(AppRoute::from_path("/community/3?sort=new"), AppRoute::CommunityCategory(3));
        assert_eq!(AppRoute::from_path("/settings#avatar"), AppRoute::Settings);
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::ThemePalette,
            AppRoute::Settings,
            AppRoute::UserProfile(7),
            AppRoute::Community,
            AppRoute::CommunityCategory(3),
            AppRoute::PostDetail(42),
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn guard_covers_protected_routes() {
        assert!(AppRoute::Settings.requires_auth());
        assert!(AppRoute::Community.requires_auth());
        assert!(AppRoute::CommunityCategory(3).requires_auth());
        assert!(AppRoute::PostDetail(1).requires_auth());
        assert!(AppRoute::UserProfile(1).requires_auth());

        assert!(!AppRoute::Home.requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::ThemePalette.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }

    #[test]
    fn navbar_is_hidden_on_landing_and_login() {
        assert!(!AppRoute::Home.shows_navbar());
        assert!(!AppRoute::Login.shows_navbar());
        assert!(AppRoute::Community.shows_navbar());
        assert!(AppRoute::NotFound.shows_navbar());
    }
}
