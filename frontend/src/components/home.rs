//! 落地页

use crate::components::icons::Cloud;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-screen bg-black text-white">
            <div class="hero-content text-center">
                <div class="max-w-md flex flex-col items-center gap-4">
                    <Cloud attr:class="h-16 w-16 text-sky-300" />
                    <h1 class="text-5xl font-bold">"Nimbus"</h1>
                    <p class="text-white/70">
                        "A calm corner of the internet. Watch the clouds, share what you see."
                    </p>
                    <div class="flex gap-3 mt-4">
                        <button
                            class="btn bg-sky-200 hover:bg-sky-300 text-sky-800 border-none"
                            on:click=move |_| router.navigate(AppRoute::Community)
                        >
                            "Enter the community"
                        </button>
                        <button
                            class="btn btn-ghost text-white"
                            on:click=move |_| router.navigate(AppRoute::Login)
                        >
                            "Sign in"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
