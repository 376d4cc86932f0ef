//! 登录 / 注册页
//!
//! 同一张表单在两种模式间切换。认证失败只显示行内提示，
//! 会话状态不变；成功后由下面的 Effect 统一处理回跳。

use crate::api::use_api;
use crate::components::icons::Cloud;
use crate::components::upload_widget::UploadWidget;
use crate::session::{login, register, use_session};
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use crate::web::use_fetch_scope;
use leptos::prelude::*;
use leptos::task::spawn_local;
use nimbus_shared::Registration;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let api = use_api();
    let router = use_router();
    let scope = use_fetch_scope();

    let (is_sign_up, set_is_sign_up) = signal(false);
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (pronouns, set_pronouns) = signal(String::new());
    let (custom_pronouns, set_custom_pronouns) = signal(String::new());
    let (avatar_url, set_avatar_url) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);

    // 已登录就离开登录页：优先回到守卫记录的来源路由。
    // 登录成功引起的状态变化也走这里，提交回调里不再导航。
    Effect::new(move |_| {
        if session.state.get().is_authenticated() {
            let target = router.take_login_redirect().unwrap_or(AppRoute::Community);
            router.navigate(target);
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if username.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let result = if is_sign_up.get_untracked() {
                let chosen = if pronouns.get_untracked() == "other" {
                    custom_pronouns.get_untracked()
                } else {
                    pronouns.get_untracked()
                };
                let avatar = avatar_url.get_untracked();
                let registration = Registration {
                    username: username.get_untracked(),
                    password: password.get_untracked(),
                    pronouns: (!chosen.trim().is_empty()).then_some(chosen),
                    profile_picture: (!avatar.is_empty()).then_some(avatar),
                };
                register(&session, &api, &scope, registration).await
            } else {
                login(
                    &session,
                    &api,
                    &scope,
                    username.get_untracked(),
                    password.get_untracked(),
                )
                .await
            };

            if let Err(e) = result {
                web_sys::console::warn_1(&format!("[Login] authentication failed: {e}").into());
                set_error_msg.try_set(Some(if is_sign_up.get_untracked() {
                    "Sign up failed. Please try again.".to_string()
                } else {
                    "Login failed. Hope you didn't forget your password.".to_string()
                }));
            }
            set_is_submitting.try_set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <Cloud attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">
                            {move || if is_sign_up.get() {
                                "Sign up for an account"
                            } else {
                                "Sign in to your account"
                            }}
                        </h1>
                        <p class="text-base-content/70">
                            {move || if is_sign_up.get() {
                                "Already have an account? "
                            } else {
                                "Not a member? "
                            }}
                            <button
                                type="button"
                                class="link link-primary font-semibold"
                                on:click=move |_| {
                                    set_error_msg.set(None);
                                    set_is_sign_up.update(|v| *v = !*v);
                                }
                            >
                                {move || if is_sign_up.get() { "Sign in" } else { "Sign up" }}
                            </button>
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                required
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete=move || if is_sign_up.get() { "new-password" } else { "current-password" }
                                required
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                        </div>

                        <Show when=move || is_sign_up.get()>
                            <div class="form-control">
                                <label class="label" for="pronouns">
                                    <span class="label-text">"Pronouns"</span>
                                </label>
                                <select
                                    id="pronouns"
                                    class="select select-bordered"
                                    on:change=move |ev| set_pronouns.set(event_target_value(&ev))
                                >
                                    <option value="" disabled selected=move || pronouns.get().is_empty()>
                                        "Select pronouns"
                                    </option>
                                    <option value="they/them" selected=move || pronouns.get() == "they/them">"They/Them"</option>
                                    <option value="she/her" selected=move || pronouns.get() == "she/her">"She/Her"</option>
                                    <option value="he/him" selected=move || pronouns.get() == "he/him">"He/Him"</option>
                                    <option value="other" selected=move || pronouns.get() == "other">"Other (please specify)"</option>
                                </select>
                                <Show when=move || pronouns.get() == "other">
                                    <input
                                        type="text"
                                        placeholder="Type your pronouns"
                                        on:input=move |ev| set_custom_pronouns.set(event_target_value(&ev))
                                        prop:value=custom_pronouns
                                        class="input input-bordered mt-2"
                                    />
                                </Show>
                            </div>

                            <div class="form-control">
                                <label class="label">
                                    <span class="label-text">"Profile Picture"</span>
                                </label>
                                <div class="flex items-center gap-4">
                                    <UploadWidget on_upload=move |url: String| set_avatar_url.set(url) />
                                    <Show when=move || !avatar_url.get().is_empty()>
                                        <div class="avatar">
                                            <div class="w-16 rounded-full">
                                                <img src=move || avatar_url.get() alt="Profile preview" />
                                            </div>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                        </Show>

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Working..." }.into_any()
                                } else if is_sign_up.get() {
                                    "Sign up".into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
