//! 个人设置页
//!
//! 编辑代词、简介与头像。保存成功后会话里的用户随之更新，
//! 失败弹 toast、表单内容保留。

use crate::api::use_api;
use crate::components::toast::{Notifier, Toast};
use crate::components::upload_widget::UploadWidget;
use crate::session::{update_profile, use_session};
use crate::web::use_fetch_scope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::{DEFAULT_AVATAR, ProfilePatch};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let scope = use_fetch_scope();
    let notifier = Notifier::new();

    // 以进入页面时的用户资料预填表单；页面在路由守卫之内，
    // 正常情况下一定有登录用户
    let current = session.state.get_untracked().user().cloned();
    let user_id = current.as_ref().map(|u| u.id);
    let username = current.as_ref().map(|u| u.username.clone()).unwrap_or_default();

    let (pronouns, set_pronouns) = signal(
        current.as_ref().and_then(|u| u.pronouns.clone()).unwrap_or_default(),
    );
    let (bio, set_bio) = signal(current.as_ref().and_then(|u| u.bio.clone()).unwrap_or_default());
    let (avatar_url, set_avatar_url) = signal(
        current.and_then(|u| u.profile_picture).unwrap_or_default(),
    );
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = user_id else {
            return;
        };
        set_saving.set(true);

        let pronouns = pronouns.get();
        let bio = bio.get();
        let avatar = avatar_url.get();
        let patch = ProfilePatch {
            pronouns: (!pronouns.trim().is_empty()).then_some(pronouns),
            bio: (!bio.trim().is_empty()).then_some(bio),
            profile_picture: (!avatar.is_empty()).then_some(avatar),
        };

        spawn_local(async move {
            match update_profile(&session, &api, &scope, user_id, &patch).await {
                Ok(_) => notifier.success("Profile updated"),
                Err(e) => notifier.error(format!("Failed to update profile: {e}")),
            }
            set_saving.try_set(false);
        });
    };

    view! {
        <div class="max-w-lg mx-auto p-4 md:p-8">
            <Toast notifier=notifier />

            <div class="card bg-base-100 shadow-xl">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <h1 class="card-title text-2xl">"Settings"</h1>

                    <div class="flex items-center gap-4">
                        <div class="avatar">
                            <div class="w-16 rounded-full border-2 border-accent">
                                <img
                                    src=move || {
                                        let url = avatar_url.get();
                                        if url.is_empty() { DEFAULT_AVATAR.to_string() } else { url }
                                    }
                                    alt="Profile picture"
                                />
                            </div>
                        </div>
                        <div>
                            <p class="font-semibold">{username}</p>
                            <UploadWidget on_upload=move |url: String| set_avatar_url.set(url) />
                        </div>
                    </div>

                    <div class="form-control">
                        <label class="label" for="settings-pronouns">
                            <span class="label-text">"Pronouns"</span>
                        </label>
                        <input
                            id="settings-pronouns"
                            type="text"
                            placeholder="they/them"
                            on:input=move |ev| set_pronouns.set(event_target_value(&ev))
                            prop:value=pronouns
                            class="input input-bordered"
                        />
                    </div>

                    <div class="form-control">
                        <label class="label" for="settings-bio">
                            <span class="label-text">"Bio"</span>
                        </label>
                        <textarea
                            id="settings-bio"
                            rows="4"
                            placeholder="A few words about your corner of the sky"
                            on:input=move |ev| set_bio.set(event_target_value(&ev))
                            prop:value=bio
                            class="textarea textarea-bordered"
                        ></textarea>
                    </div>

                    <div class="card-actions justify-end">
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
        </div>
    }
}
