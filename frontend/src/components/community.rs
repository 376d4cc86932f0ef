//! 社区帖子流
//!
//! 按分类或全站拉取帖子列表，卡片点击进入详情。发帖走
//! `NewPostDialog`，成功后把返回的实体插到列表最前面，
//! 失败弹 toast 且列表不变。

use crate::api::use_api;
use crate::components::forum_post_card::ForumPostCard;
use crate::components::icons::RefreshCw;
use crate::components::new_post_dialog::NewPostDialog;
use crate::components::recent_posts::RecentPosts;
use crate::components::toast::{Notifier, Toast};
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::use_fetch_scope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::{NewPost, Post, category_name};

#[component]
pub fn CommunityPage(
    /// 限定分类；None 为全站最新
    #[prop(into, optional)]
    category: Option<i64>,
) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();
    let scope = use_fetch_scope();
    let notifier = Notifier::new();

    let viewer = session.viewer();

    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);

    let load = move || {
        set_loading.set(true);
        spawn_local(async move {
            let result = match category {
                Some(id) => api.posts_by_category(&scope, id).await,
                None => api.posts(&scope).await,
            };
            match result {
                Ok(data) => {
                    set_posts.try_set(data);
                }
                Err(e) => {
                    notifier.error(format!("Failed to load posts: {e}"));
                }
            }
            set_loading.try_set(false);
        });
    };

    // 初始加载
    Effect::new(move |_| load());

    let handle_create = move |new_post: NewPost| {
        spawn_local(async move {
            match api.create_post(&scope, &new_post).await {
                Ok(created) => {
                    set_posts.try_update(|list| list.insert(0, created));
                    notifier.success("Post published");
                }
                Err(e) => {
                    notifier.error(format!("Failed to publish post: {e}"));
                }
            }
        });
    };

    let heading = category
        .and_then(category_name)
        .unwrap_or("All posts");
    let is_empty = move || posts.with(|p| p.is_empty());

    view! {
        <div class="max-w-6xl mx-auto p-4 md:p-8">
            <Toast notifier=notifier />

            <div class="flex items-center justify-between mb-6">
                <div class="flex items-center gap-2">
                    <h1 class="text-3xl font-bold">{heading}</h1>
                    <button
                        class="btn btn-ghost btn-circle btn-sm"
                        disabled=move || loading.get()
                        on:click=move |_| load()
                    >
                        <RefreshCw attr:class=move || {
                            if loading.get() { "h-4 w-4 animate-spin" } else { "h-4 w-4" }
                        } />
                    </button>
                </div>
                <NewPostDialog category=category on_create=handle_create />
            </div>

            <div class="flex gap-8 items-start">
                <div class="flex-1">
                    <Show when=move || loading.get() && is_empty()>
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    </Show>
                    <Show when=move || !loading.get() && is_empty()>
                        <p class="text-center py-16 text-base-content/50">
                            "Nothing here yet. Be the first to post."
                        </p>
                    </Show>
                    <For
                        each=move || posts.get()
                        key=|post| post.id
                        children=move |post| {
                            let post_id = post.id;
                            view! {
                                <ForumPostCard
                                    post=post
                                    viewer=viewer
                                    on_click=Callback::new(move |_| router.navigate(AppRoute::PostDetail(post_id)))
                                />
                            }
                        }
                    />
                </div>
                <RecentPosts posts=posts />
            </div>
        </div>
    }
}
