//! 用户主页
//!
//! 用户资料与其帖子并发拉取，两个请求都结束后才撤掉加载态；
//! 用户拉取失败显示"未找到"，帖子拉取失败只记录日志。

use crate::api::use_api;
use crate::components::forum_post_card::ForumPostCard;
use crate::session::use_session;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::use_fetch_scope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::{DEFAULT_AVATAR, Post, User};

#[component]
pub fn UserProfilePage(user_id: i64) -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let router = use_router();
    let scope = use_fetch_scope();

    let viewer = session.viewer();

    let (user, set_user) = signal(Option::<User>::None);
    let (posts, set_posts) = signal(Vec::<Post>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            let (user_result, posts_result) = futures::join!(
                api.user(&scope, user_id),
                api.posts_by_user(&scope, user_id),
            );
            match user_result {
                Ok(loaded) => {
                    set_user.try_set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Profile] failed to load user {user_id}: {e}").into(),
                    );
                }
            }
            match posts_result {
                Ok(list) => {
                    set_posts.try_set(list);
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[Profile] failed to load posts for user {user_id}: {e}").into(),
                    );
                }
            }
            set_loading.try_set(false);
        });
    });

    view! {
        <div class="max-w-4xl mx-auto py-8 px-4">
            <Show
                when=move || !loading.get()
                fallback=|| view! {
                    <div class="flex justify-center items-center h-screen">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                    </div>
                }
            >
                <Show
                    when=move || user.get().is_some()
                    fallback=|| view! { <p class="text-center mt-8">"User not found."</p> }
                >
                    {move || user.get().map(|profile| view! {
                        <div class="flex flex-col items-center mb-8">
                            <div class="avatar mb-4">
                                <div class="w-32 rounded-full border-2 border-accent">
                                    <img
                                        src=profile.profile_picture.clone().unwrap_or_else(|| DEFAULT_AVATAR.to_string())
                                        alt=profile.username.clone()
                                    />
                                </div>
                            </div>
                            <h1 class="text-3xl font-bold text-accent">
                                {profile.username.clone()}
                                {profile.pronouns.clone().map(|p| view! {
                                    <span class="text-xl"> " (" {p} ")"</span>
                                })}
                            </h1>
                            {profile.bio.clone().map(|bio| view! {
                                <p class="mt-4 text-center max-w-xl">{bio}</p>
                            })}
                        </div>
                    })}

                    <div>
                        <h2 class="text-2xl font-semibold text-accent mb-4 text-center">"Posts"</h2>
                        <Show when=move || posts.with(|p| p.is_empty())>
                            <p class="text-center text-base-content/60">"No posts available."</p>
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
                                        on_click=Callback::new(move |_| {
                                            router.navigate(AppRoute::PostDetail(post_id))
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
