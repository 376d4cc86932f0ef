//! 发帖对话框
//!
//! 触发按钮加模态表单。提交时组装 `NewPost` 上抛给父级发请求，
//! 自身立即关闭并清空表单，失败由父级的 toast 提示。

use crate::components::icons::Plus;
use crate::session::use_session;
use leptos::prelude::*;
use nimbus_shared::{CATEGORIES, NewPost, sanitize};

#[component]
pub fn NewPostDialog(
    /// 预选的分类（来自当前路由）
    category: Option<i64>,
    #[prop(into)] on_create: Callback<NewPost>,
) -> impl IntoView {
    let session = use_session();

    let default_category = category.unwrap_or(CATEGORIES[0].id);

    let (open, set_open) = signal(false);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    // 表单字段
    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());
    let (category_id, set_category_id) = signal(default_category);

    let reset_form = move || {
        set_title.set(String::new());
        set_body.set(String::new());
        set_category_id.set(default_category);
    };

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if sanitize::is_blank(&body.get()) {
            return;
        }
        let Some(user_id) = session.state.get().user().map(|u| u.id) else {
            return;
        };

        on_create.run(NewPost {
            title: title.get(),
            body: body.get(),
            category_id: category_id.get(),
            user_id,
        });
        set_open.set(false);
        reset_form();
    };

    view! {
        // 触发按钮
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            <Plus attr:class="h-4 w-4" /> "New Post"
        </button>

        // 模态框内容
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Share something"</h3>
                <p class="py-4 text-base-content/70">"Pick a community and write your post."</p>

                <form on:submit=on_submit class="space-y-4">
                    <div class="form-control">
                        <label for="new-post-title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="new-post-title"
                            type="text"
                            required
                            placeholder="A calm observation"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label">
                            <span class="label-text">"Community"</span>
                        </label>
                        <select
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse::<i64>() {
                                    set_category_id.set(id);
                                }
                            }
                        >
                            {CATEGORIES
                                .iter()
                                .map(|c| {
                                    let id = c.id;
                                    view! {
                                        <option value=id.to_string() selected=move || category_id.get() == id>
                                            {c.name}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="form-control">
                        <label for="new-post-body" class="label">
                            <span class="label-text">"Body"</span>
                        </label>
                        <textarea
                            id="new-post-body"
                            rows="8"
                            required
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                            prop:value=body
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Publish"</button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
