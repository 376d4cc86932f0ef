//! 帖子编辑对话框
//!
//! 打开/关闭由父级的 `editing` 信号驱动；提交只上抛 `PostPatch`，
//! 网络调用与成功后的关闭都由父级完成，失败时对话框保持打开。

use leptos::prelude::*;
use nimbus_shared::{Post, PostPatch};

#[component]
pub fn EditPostModal(
    /// Some 时打开，值为正在编辑的帖子
    #[prop(into)]
    editing: Signal<Option<Post>>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<PostPatch>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (title, set_title) = signal(String::new());
    let (body, set_body) = signal(String::new());

    // 打开时把表单同步为当前帖子内容
    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            match editing.get() {
                Some(post) => {
                    set_title.set(post.title);
                    set_body.set(post.body);
                    if !dialog.open() {
                        let _ = dialog.show_modal();
                    }
                }
                None => {
                    if dialog.open() {
                        dialog.close();
                    }
                }
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        on_save.run(PostPatch {
            title: title.get(),
            body: body.get(),
        });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Edit post"</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="edit-post-title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input
                            id="edit-post-title"
                            type="text"
                            required
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=title
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="edit-post-body" class="label">
                            <span class="label-text">"Body"</span>
                        </label>
                        <textarea
                            id="edit-post-body"
                            rows="8"
                            required
                            on:input=move |ev| set_body.set(event_target_value(&ev))
                            prop:value=body
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || saving.get() class="btn btn-primary">
                            {move || if saving.get() {
                                view! { <span class="loading loading-spinner"></span> "Saving..." }.into_any()
                            } else {
                                "Save".into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
