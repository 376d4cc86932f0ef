//! 帖子详情页
//!
//! 帖子与评论并发拉取，任一失败替换到 404。评论发表走乐观
//! 插入：先把本地合成的条目放进列表，服务端确认后按待确认 id
//! 原位替换，失败按同一 id 回滚（见 `thread` 模块）。
//! 删除前必须经过浏览器确认框；变更失败弹 toast，本地状态不动。

use crate::api::use_api;
use crate::components::comment_card::CommentCard;
use crate::components::edit_comment_modal::EditCommentModal;
use crate::components::edit_post_modal::EditPostModal;
use crate::components::forum_post_card::ForumPostCard;
use crate::components::toast::{Notifier, Toast};
use crate::session::use_session;
use crate::thread::CommentThread;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::{now_utc, use_fetch_scope};
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::{Comment, CommentPatch, NewComment, Post, PostPatch, sanitize};

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

#[component]
pub fn PostDetailPage(post_id: i64) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();
    let scope = use_fetch_scope();
    let notifier = Notifier::new();

    let viewer = session.viewer();

    let (post, set_post) = signal(Option::<Post>::None);
    let (thread, set_thread) = signal(CommentThread::default());
    let (draft, set_draft) = signal(String::new());
    let (posting, set_posting) = signal(false);
    let (editing_post, set_editing_post) = signal(Option::<Post>::None);
    let (editing_comment, set_editing_comment) = signal(Option::<Comment>::None);
    let (saving, set_saving) = signal(false);

    // 初始加载
    Effect::new(move |_| {
        spawn_local(async move {
            let (post_result, comments_result) = futures::join!(
                api.post(&scope, post_id),
                api.comments_by_post(&scope, post_id),
            );
            match (post_result, comments_result) {
                (Ok(loaded), Ok(comments)) => {
                    set_post.try_set(Some(loaded));
                    set_thread.try_set(CommentThread::from_server(comments));
                }
                (Err(e), _) | (_, Err(e)) => {
                    web_sys::console::warn_1(
                        &format!("[PostDetail] failed to load post {post_id}: {e}").into(),
                    );
                    router.replace(AppRoute::NotFound);
                }
            }
        });
    });

    // 评论发表：乐观插入 + 按 id 确认/回滚
    let handle_comment_submit = move |_| {
        let body = draft.get();
        // 纯空白内容在本地拦下，不发请求
        if sanitize::is_blank(&body) {
            return;
        }
        let Some(user) = session.state.get().user().cloned() else {
            return;
        };
        set_posting.set(true);

        // 本地合成的占位条目，id 字段无意义，真实 id 由服务端分配
        let temp = Comment {
            id: 0,
            body: body.clone(),
            created_at: now_utc(),
            username: user.username.clone(),
            profile_picture: user.profile_picture.clone(),
            pronouns: user.pronouns.clone(),
            user_id: user.id,
            post_id,
        };
        let Some(pending) = set_thread.try_update(|t| t.push_pending(temp)) else {
            set_posting.set(false);
            return;
        };

        let user_id = user.id;
        spawn_local(async move {
            let request = NewComment {
                body,
                user_id,
                post_id,
            };
            match api.create_comment(&scope, &request).await {
                Ok(created) => {
                    set_thread.try_update(|t| t.confirm(pending, created));
                    set_draft.try_set(String::new());
                }
                Err(e) => {
                    set_thread.try_update(|t| t.rollback(pending));
                    notifier.error(format!("Failed to post comment: {e}"));
                }
            }
            set_posting.try_set(false);
        });
    };

    // 帖子编辑
    let handle_save_post = move |patch: PostPatch| {
        set_saving.set(true);
        spawn_local(async move {
            match api.update_post(&scope, post_id, &patch).await {
                Ok(updated) => {
                    set_post.try_set(Some(updated));
                    set_editing_post.try_set(None);
                    notifier.success("Post updated");
                }
                Err(e) => notifier.error(format!("Failed to update post: {e}")),
            }
            set_saving.try_set(false);
        });
    };

    // 帖子删除
    let handle_delete_post = move |_| {
        if !confirm("Are you sure you want to delete this post?") {
            return;
        }
        spawn_local(async move {
            match api.delete_post(&scope, post_id).await {
                Ok(()) => router.navigate(AppRoute::Home),
                Err(e) => notifier.error(format!("Failed to delete post: {e}")),
            }
        });
    };

    // 评论编辑
    let handle_save_comment = move |patch: CommentPatch| {
        let Some(target) = editing_comment.get_untracked() else {
            return;
        };
        set_saving.set(true);
        spawn_local(async move {
            match api.update_comment(&scope, target.id, &patch).await {
                Ok(updated) => {
                    set_thread.try_update(|t| t.apply_update(updated));
                    set_editing_comment.try_set(None);
                    notifier.success("Comment updated");
                }
                Err(e) => notifier.error(format!("Failed to update comment: {e}")),
            }
            set_saving.try_set(false);
        });
    };

    // 评论删除
    let handle_delete_comment = move |comment_id: i64| {
        if !confirm("Delete this comment?") {
            return;
        }
        spawn_local(async move {
            match api.delete_comment(&scope, comment_id).await {
                Ok(()) => {
                    set_thread.try_update(|t| t.remove(comment_id));
                }
                Err(e) => notifier.error(format!("Failed to delete comment: {e}")),
            }
        });
    };

    view! {
        <div class="max-w-4xl mx-auto p-4 md:p-8">
            <Toast notifier=notifier />

            <Show
                when=move || post.get().is_some()
                fallback=|| view! {
                    <div class="flex justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                {move || post.get().map(|loaded| view! {
                    <ForumPostCard
                        post=loaded
                        viewer=viewer
                        detail=true
                        on_edit=Callback::new(move |_| set_editing_post.set(post.get_untracked()))
                        on_delete=Callback::new(handle_delete_post)
                    />
                })}

                // 评论区
                <div class="bg-base-100 rounded-lg shadow-md p-6 mt-8">
                    <h2 class="text-2xl font-bold mb-4">
                        "Comments (" {move || thread.with(|t| t.len())} ")"
                    </h2>

                    <div class="mb-6">
                        <textarea
                            rows="4"
                            placeholder="Add a comment..."
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            prop:value=draft
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                        <button
                            class="btn btn-primary mt-2"
                            disabled=move || posting.get() || draft.with(|d| sanitize::is_blank(d))
                            on:click=handle_comment_submit
                        >
                            {move || if posting.get() { "Posting..." } else { "Post Comment" }}
                        </button>
                    </div>

                    <div class="space-y-4">
                        <For
                            each=move || thread.get().entries().to_vec()
                            key=|entry| entry.key()
                            children=move |entry| {
                                let comment = entry.comment().clone();
                                let comment_id = comment.id;
                                let for_edit = comment.clone();
                                view! {
                                    <CommentCard
                                        comment=comment
                                        viewer=viewer
                                        pending=entry.is_pending()
                                        on_edit=Callback::new(move |_| {
                                            set_editing_comment.set(Some(for_edit.clone()))
                                        })
                                        on_delete=Callback::new(move |_| handle_delete_comment(comment_id))
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            <EditPostModal
                editing=editing_post
                saving=saving
                on_save=handle_save_post
                on_close=Callback::new(move |_| set_editing_post.set(None))
            />
            <EditCommentModal
                editing=editing_comment
                saving=saving
                on_save=handle_save_comment
                on_close=Callback::new(move |_| set_editing_comment.set(None))
            />
        </div>
    }
}
