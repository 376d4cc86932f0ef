//! 评论编辑对话框
//!
//! 与帖子编辑同一套机制，只有正文一个字段。

use leptos::prelude::*;
use nimbus_shared::{Comment, CommentPatch};

#[component]
pub fn EditCommentModal(
    /// Some 时打开，值为正在编辑的评论
    #[prop(into)]
    editing: Signal<Option<Comment>>,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] on_save: Callback<CommentPatch>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (body, set_body) = signal(String::new());

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            match editing.get() {
                Some(comment) => {
                    set_body.set(comment.body);
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
        on_save.run(CommentPatch { body: body.get() });
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| on_close.run(())>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Edit comment"</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <textarea
                            rows="5"
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
