//! REST 协议上的实体与请求体
//!
//! 字段名通过 serde 统一映射为 camelCase，与后端 JSON 保持一致。
//! 时间字段为 RFC 3339 UTC 时间戳。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 注册用户
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// 帖子，作者信息以扁平字段内嵌
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub title: String,
    /// 富文本 HTML，渲染前必须经过 `sanitize::clean`
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub likes: i64,
    pub comments: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

/// 评论，归属于唯一的帖子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    /// 富文本 HTML，渲染前必须经过 `sanitize::clean`
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    pub user_id: i64,
    pub post_id: i64,
}

// =========================================================
// 请求体 (Request Payloads)
// =========================================================

/// 登录凭据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// 注册信息
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub username: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// 新建帖子
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub category_id: i64,
    pub user_id: i64,
}

/// 帖子编辑（仅标题与正文可改）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub title: String,
    pub body: String,
}

/// 新建评论
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub body: String,
    pub user_id: i64,
    pub post_id: i64,
}

/// 评论编辑
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPatch {
    pub body: String,
}

/// 个人资料编辑
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

// =========================================================
// 社区分类 (Categories)
// =========================================================

/// 社区分类，当前为固定列表
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: 1, name: "Rainy Days & Silver Linings" },
    Category { id: 2, name: "Calm in the Storm" },
    Category { id: 3, name: "Fluff Therapy" },
    Category { id: 4, name: "Cloud Nine Creations" },
    Category { id: 5, name: "Cumulus Care" },
    Category { id: 6, name: "Rainbow" },
];

/// 按 id 查找分类名
pub fn category_name(id: i64) -> Option<&'static str> {
    CATEGORIES.iter().find(|c| c.id == id).map(|c| c.name)
}

// =========================================================
// 客户端权限判断
// =========================================================

/// 编辑/删除按钮是否对当前访问者可见。
///
/// 仅用于界面展示；真正的授权必须由后端校验。
pub fn can_modify(viewer_username: Option<&str>, author_username: &str) -> bool {
    viewer_username == Some(author_username)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================
    // 权限判断
    // =========================================================

    #[test]
    fn can_modify_requires_matching_username() {
        assert!(can_modify(Some("ada"), "ada"));
        assert!(!can_modify(Some("ada"), "grace"));
        assert!(!can_modify(None, "ada"));
    }

    #[test]
    fn can_modify_is_case_sensitive() {
        assert!(!can_modify(Some("Ada"), "ada"));
    }

    // =========================================================
    // 协议字段名
    // =========================================================

    #[test]
    fn post_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Stratus watching",
            "body": "<p>Slow clouds today.</p>",
            "createdAt": "2025-03-14T09:26:00Z",
            "likes": 3,
            "comments": 1,
            "username": "ada",
            "profilePicture": "https://img.example/ada.png",
            "categoryId": 2,
            "categoryName": "Calm in the Storm"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.username, "ada");
        assert_eq!(post.category_id, 2);
        assert_eq!(post.category_name.as_deref(), Some("Calm in the Storm"));
        assert_eq!(post.profile_picture.as_deref(), Some("https://img.example/ada.png"));
        assert!(post.pronouns.is_none());
    }

    #[test]
    fn user_serializes_to_camel_case() {
        let user = User {
            id: 1,
            username: "ada".to_string(),
            pronouns: Some("she/her".to_string()),
            bio: None,
            profile_picture: Some("https://img.example/ada.png".to_string()),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"profilePicture\""));
        assert!(json.contains("\"pronouns\""));
        // 未设置的可选字段不应出现在 JSON 中
        assert!(!json.contains("\"bio\""));
    }

    #[test]
    fn comment_round_trips() {
        let json = r#"{
            "id": 12,
            "body": "<p>same</p>",
            "createdAt": "2025-03-14T10:00:00Z",
            "username": "grace",
            "userId": 4,
            "postId": 7
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.post_id, 7);
        assert_eq!(comment.user_id, 4);

        let back = serde_json::to_string(&comment).unwrap();
        assert!(back.contains("\"postId\":7"));
    }

    // =========================================================
    // 分类
    // =========================================================

    #[test]
    fn category_lookup() {
        assert_eq!(category_name(3), Some("Fluff Therapy"));
        assert_eq!(category_name(99), None);
    }
}
