//! 404 页面

use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <main class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <p class="text-base font-semibold text-primary">"404"</p>
                    <h1 class="mt-4 text-3xl font-bold tracking-tight sm:text-5xl">"Page not found"</h1>
                    <p class="mt-4 text-base-content/70">
                        "Sorry, we couldn't find the page you're looking for."
                    </p>
                    <div class="mt-10 flex justify-center">
                        <a
                            class="link link-hover text-sm font-semibold"
                            on:click=move |_| router.navigate(AppRoute::Home)
                        >
                            "← Back to home"
                        </a>
                    </div>
                </div>
            </div>
        </main>
    }
}
