//! 评论列表的乐观更新协调
//!
//! 发表评论时先把本地合成的条目插入列表（隐藏网络延迟），服务端
//! 确认后用真实实体原位替换，失败则回滚。待确认条目用独立的
//! [`PendingId`] 标识，确认与回滚都按 id 定位而不是按位置，
//! 因此并发提交互不干扰。
//!
//! 纯数据结构，不依赖 DOM，可在宿主机上直接测试。

use nimbus_shared::Comment;

/// 待确认条目的本地标识，与服务端 id 空间完全隔离
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingId(u64);

/// 评论列表中的一项
#[derive(Debug, Clone, PartialEq)]
pub enum ThreadEntry {
    /// 已提交、尚未得到服务端确认
    Pending { id: PendingId, comment: Comment },
    /// 服务端确认过的评论
    Confirmed(Comment),
}

impl ThreadEntry {
    pub fn comment(&self) -> &Comment {
        match self {
            ThreadEntry::Pending { comment, .. } => comment,
            ThreadEntry::Confirmed(comment) => comment,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ThreadEntry::Pending { .. })
    }

    /// 列表渲染用的稳定 key，两个 id 空间不会互相冲突
    pub fn key(&self) -> String {
        match self {
            ThreadEntry::Pending { id, .. } => format!("pending-{}", id.0),
            ThreadEntry::Confirmed(comment) => format!("comment-{}", comment.id),
        }
    }
}

/// 一个帖子下的评论列表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    entries: Vec<ThreadEntry>,
    next_pending: u64,
}

impl CommentThread {
    /// 用服务端返回的列表整体初始化
    pub fn from_server(comments: Vec<Comment>) -> Self {
        Self {
            entries: comments.into_iter().map(ThreadEntry::Confirmed).collect(),
            next_pending: 0,
        }
    }

    pub fn entries(&self) -> &[ThreadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 乐观插入：追加待确认条目，返回其标识
    pub fn push_pending(&mut self, comment: Comment) -> PendingId {
        let id = PendingId(self.next_pending);
        self.next_pending += 1;
        self.entries.push(ThreadEntry::Pending { id, comment });
        id
    }

    /// 服务端确认：把待确认条目原位替换为真实实体。
    ///
    /// 条目已经不在时（比如列表被整体重载过）按 id 去重后追加，
    /// 保证同一条评论不会出现两份。
    pub fn confirm(&mut self, pending: PendingId, confirmed: Comment) {
        let slot = self
            .entries
            .iter()
            .position(|e| matches!(e, ThreadEntry::Pending { id, .. } if *id == pending));
        match slot {
            Some(i) => self.entries[i] = ThreadEntry::Confirmed(confirmed),
            None => {
                if !self.entries.iter().any(|e| {
                    matches!(e, ThreadEntry::Confirmed(c) if c.id == confirmed.id)
                }) {
                    self.entries.push(ThreadEntry::Confirmed(confirmed));
                }
            }
        }
    }

    /// 提交失败的回滚：只移除这一个待确认条目
    pub fn rollback(&mut self, pending: PendingId) {
        self.entries
            .retain(|e| !matches!(e, ThreadEntry::Pending { id, .. } if *id == pending));
    }

    /// 编辑成功后替换对应的已确认评论
    pub fn apply_update(&mut self, updated: Comment) {
        for entry in &mut self.entries {
            if let ThreadEntry::Confirmed(c) = entry {
                if c.id == updated.id {
                    *c = updated;
                    return;
                }
            }
        }
    }

    /// 删除成功后移除对应的已确认评论
    pub fn remove(&mut self, comment_id: i64) {
        self.entries
            .retain(|e| !matches!(e, ThreadEntry::Confirmed(c) if c.id == comment_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_shared::{DateTime, Utc};

    // =========================================================
    // 辅助函数
    // =========================================================

    fn ts() -> DateTime<Utc> {
        DateTime::UNIX_EPOCH
    }

    fn comment(id: i64, body: &str) -> Comment {
        Comment {
            id,
            body: body.to_string(),
            created_at: ts(),
            username: "ada".to_string(),
            profile_picture: None,
            pronouns: None,
            user_id: 1,
            post_id: 9,
        }
    }

    fn thread_with(ids: &[i64]) -> CommentThread {
        CommentThread::from_server(ids.iter().map(|&id| comment(id, "existing")).collect())
    }

    // =========================================================
    // 确认
    // =========================================================

    #[test]
    fn confirm_replaces_the_pending_entry_in_place() {
        let mut thread = thread_with(&[1, 2]);
        let pending = thread.push_pending(comment(0, "draft"));
        assert_eq!(thread.len(), 3);

        thread.confirm(pending, comment(3, "draft"));

        // 确认后恰好一条，既没有重复也没有遗留待确认条目
        assert_eq!(thread.len(), 3);
        assert!(thread.entries().iter().all(|e| !e.is_pending()));
        assert_eq!(thread.entries()[2].comment().id, 3);
    }

    #[test]
    fn confirm_after_reload_does_not_duplicate() {
        let mut thread = thread_with(&[1]);
        let pending = thread.push_pending(comment(0, "draft"));

        // 列表被整体重载，服务端已经包含这条评论
        thread = thread_with(&[1, 5]);
        thread.confirm(pending, comment(5, "draft"));

        assert_eq!(thread.len(), 2);
    }

    // =========================================================
    // 回滚
    // =========================================================

    #[test]
    fn rollback_restores_the_previous_length() {
        let mut thread = thread_with(&[1, 2]);
        let before = thread.len();

        let pending = thread.push_pending(comment(0, "draft"));
        thread.rollback(pending);

        assert_eq!(thread.len(), before);
        assert!(thread.entries().iter().all(|e| !e.is_pending()));
    }

    #[test]
    fn rollback_is_keyed_by_identity_not_position() {
        let mut thread = thread_with(&[1]);
        let first = thread.push_pending(comment(0, "first draft"));
        let second = thread.push_pending(comment(0, "second draft"));

        // 先提交的失败回滚，不能殃及后提交的
        thread.rollback(first);

        assert_eq!(thread.len(), 2);
        let still_pending: Vec<_> = thread.entries().iter().filter(|e| e.is_pending()).collect();
        assert_eq!(still_pending.len(), 1);
        assert_eq!(still_pending[0].comment().body, "second draft");

        thread.confirm(second, comment(7, "second draft"));
        assert_eq!(thread.len(), 2);
        assert!(thread.entries().iter().all(|e| !e.is_pending()));
    }

    // =========================================================
    // 编辑与删除
    // =========================================================

    #[test]
    fn apply_update_replaces_matching_comment() {
        let mut thread = thread_with(&[1, 2]);
        thread.apply_update(comment(2, "edited"));

        assert_eq!(thread.entries()[1].comment().body, "edited");
        assert_eq!(thread.entries()[0].comment().body, "existing");
    }

    #[test]
    fn remove_deletes_only_the_matching_comment() {
        let mut thread = thread_with(&[1, 2, 3]);
        thread.remove(2);

        let ids: Vec<i64> = thread.entries().iter().map(|e| e.comment().id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    // =========================================================
    // 渲染 key
    // =========================================================

    #[test]
    fn keys_are_unique_across_id_spaces() {
        let mut thread = thread_with(&[0]);
        thread.push_pending(comment(0, "draft"));

        let keys: Vec<String> = thread.entries().iter().map(ThreadEntry::key).collect();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }
}
