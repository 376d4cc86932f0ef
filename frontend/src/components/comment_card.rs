//! 评论卡片
//!
//! 待确认（乐观插入）的条目半透明显示并隐藏操作按钮。

use crate::components::icons::{Edit, Trash2};
use leptos::prelude::*;
use nimbus_shared::{Comment, DEFAULT_AVATAR, can_modify, date, sanitize};

#[component]
pub fn CommentCard(
    comment: Comment,
    #[prop(into)] viewer: Signal<Option<String>>,
    /// 尚未得到服务端确认
    #[prop(optional)]
    pending: bool,
    #[prop(into, optional)] on_edit: Option<Callback<()>>,
    #[prop(into, optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let body_html = sanitize::clean(&comment.body);

    let author = comment.username.clone();
    let show_actions =
        Signal::derive(move || !pending && can_modify(viewer.get().as_deref(), &author));

    let avatar = comment
        .profile_picture
        .clone()
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let date = date::date_time(&comment.created_at);
    let username = comment.username.clone();

    let wrapper_class = if pending {
        "bg-base-100 rounded-xl shadow-sm p-4 mb-4 border border-base-200 opacity-60"
    } else {
        "bg-base-100 rounded-xl shadow-sm p-4 mb-4 border border-base-200"
    };

    view! {
        <div class=wrapper_class>
            <div class="flex items-start gap-4">
                <div class="avatar">
                    <div class="w-10 rounded-full border-2 border-accent">
                        <img src=avatar alt=username.clone() />
                    </div>
                </div>
                <div class="flex-1">
                    <div class="flex items-center gap-2 mb-2">
                        <h3 class="font-medium text-base-content">{username}</h3>
                        {comment.pronouns.clone().map(|p| view! {
                            <span class="text-sm text-base-content/70">"(" {p} ")"</span>
                        })}
                        <span class="text-sm text-base-content/70">{date}</span>
                    </div>
                    <div class="prose max-w-none text-base-content" inner_html=body_html></div>
                    <Show when=move || show_actions.get()>
                        <div class="flex gap-2 mt-2">
                            <button
                                class="btn btn-ghost btn-sm hover:bg-accent/10"
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
                                class="btn btn-ghost btn-sm hover:bg-error/10"
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
