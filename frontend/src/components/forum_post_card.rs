//! 帖子卡片
//!
//! 列表与详情共用：列表模式截断正文并整卡可点，详情模式渲染
//! 全文。正文 HTML 先净化再注入。编辑/删除按钮只对作者本人
//! 显示，这只是界面上的便利，真正的授权在后端。

use crate::components::icons::{Edit, MessageCircle, ThumbsUp, Trash2};
use leptos::prelude::*;
use nimbus_shared::{CARD_PREVIEW_CHARS, DEFAULT_AVATAR, Post, can_modify, date, sanitize};

#[component]
pub fn ForumPostCard(
    post: Post,
    /// 当前登录用户名，决定操作按钮是否显示
    #[prop(into)]
    viewer: Signal<Option<String>>,
    /// 详情模式：渲染全文，不截断
    #[prop(optional)]
    detail: bool,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] on_edit: Option<Callback<()>>,
    #[prop(into, optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let clean_body = sanitize::clean(&post.body);
    let body_html = if detail {
        clean_body
    } else {
        sanitize::truncate(&clean_body, CARD_PREVIEW_CHARS)
    };

    let author = post.username.clone();
    let show_actions = Signal::derive(move || can_modify(viewer.get().as_deref(), &author));

    let avatar = post
        .profile_picture
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let date = date::date_time(&post.created_at);
    let username = post.username.clone();

    let card_class = if on_click.is_some() {
        "card bg-base-100 shadow-md w-full max-w-2xl mx-auto my-4 cursor-pointer hover:bg-base-200 transition-colors duration-200"
    } else {
        "card bg-base-100 shadow-md w-full max-w-2xl mx-auto my-4"
    };

    view! {
        <div
            class=card_class
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="card-body">
                <div class="flex items-center gap-4">
                    <div class="avatar">
                        <div class="w-10 rounded-full border-2 border-accent">
                            <img src=avatar alt=username.clone() />
                        </div>
                    </div>
                    <div>
                        <h2 class="text-lg font-semibold">
                            {username}
                            {post.pronouns.clone().map(|p| view! {
                                <span class="text-sm font-normal text-base-content/70">" (" {p} ")"</span>
                            })}
                        </h2>
                        <p class="text-sm text-base-content/60">{date}</p>
                    </div>
                    {post.category_name.clone().map(|name| view! {
                        <span class="badge badge-accent badge-outline ml-auto">{name}</span>
                    })}
                </div>

                <h3 class="card-title">{post.title.clone()}</h3>
                <div class="prose max-w-none text-base-content" inner_html=body_html></div>

                <div class="card-actions justify-between items-center">
                    <div class="flex gap-4">
                        <button class="btn btn-ghost btn-sm gap-1">
                            <ThumbsUp attr:class="w-4 h-4" />
                            <span>{post.likes}</span>
                        </button>
                        <button class="btn btn-ghost btn-sm gap-1">
                            <MessageCircle attr:class="w-4 h-4" />
                            <span>{post.comments}</span>
                        </button>
                    </div>
                    <Show when=move || show_actions.get()>
                        <div class="flex gap-2">
                            <button
                                class="btn btn-ghost btn-sm"
                                on:click=move |ev: leptos::web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    if let Some(cb) = on_edit {
                                        cb.run(());
                                    }
                                }
                            >
                                <Edit attr:class="w-4 h-4 text-accent" />
                            </button>
                            <button
                                class="btn btn-ghost btn-sm"
                                on:click=move |ev: leptos::web_sys::MouseEvent| {
                                    ev.stop_propagation();
                                    if let Some(cb) = on_delete {
                                        cb.run(());
                                    }
                                }
                            >
                                <Trash2 attr:class="w-4 h-4 text-error" />
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
