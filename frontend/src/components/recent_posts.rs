//! 最新帖子侧栏

use leptos::prelude::*;
use nimbus_shared::Post;

/// 侧栏条数上限
const RECENT_LIMIT: usize = 5;

#[component]
pub fn RecentPosts(#[prop(into)] posts: Signal<Vec<Post>>) -> impl IntoView {
    let recent = move || {
        let mut list = posts.get();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list.truncate(RECENT_LIMIT);
        list
    };

    view! {
        <aside class="w-64 p-4 shadow-md rounded-box bg-base-100 self-start hidden lg:block">
            <h2 class="text-xl font-bold mb-4">"Recent Posts"</h2>
            <div class="space-y-2">
                <For
                    each=recent
                    key=|post| post.id
                    children=move |post| {
                        view! {
                            <div class="card bg-neutral">
                                <div class="card-body p-2">
                                    <h3 class="text-sm font-semibold text-neutral-content">{post.title}</h3>
                                    <p class="text-xs text-neutral-content">
                                        "by " {post.username}
                                        {post.pronouns.map(|p| view! {
                                            <span class="text-accent">" (" {p} ")"</span>
                                        })}
                                    </p>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </aside>
    }
}
