//! Shared layout wrapper with navigation and content container. It
//! centralizes header markup so routes can focus on content. Navigation is
//! client-side only; the API enforces real access control.

use crate::app_lib::build_info;
use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::{
    components::A,
    hooks::{use_location, use_navigate},
};

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    let is_authenticated = session.is_authenticated;
    let location = use_location();
    let navigate = use_navigate();
    let on_login = move || location.pathname.get() == "/login";

    let sign_out = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <div class="min-h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="border-b border-gray-200 dark:border-gray-700">
                <div class="max-w-screen-lg flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="flex items-center space-x-2">
                        <span class="font-semibold text-lg text-gray-900 dark:text-white">
                            "Ensaluti"
                        </span>
                    </A>
                    <nav class="flex items-center gap-4 text-sm font-medium">
                        <Show
                            when=move || is_authenticated.get()
                            fallback=move || {
                                view! {
                                    <Show when=move || !on_login()>
                                        <A
                                            href="/login"
                                            {..}
                                            class="text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-400"
                                        >
                                            "Sign in"
                                        </A>
                                    </Show>
                                }
                            }
                        >
                            <button
                                type="button"
                                class="text-gray-900 hover:text-blue-700 dark:text-white dark:hover:text-blue-400"
                                on:click=sign_out.clone()
                            >
                                "Sign out"
                            </button>
                        </Show>
                    </nav>
                </div>
            </header>
            <main class="flex-1 max-w-screen-lg w-full mx-auto p-4">{children()}</main>
            <footer class="border-t border-gray-200 dark:border-gray-700">
                <div class="max-w-screen-lg mx-auto p-4 text-xs text-gray-400 dark:text-gray-500">
                    {format!("build {}", short_sha(build_info::git_commit_hash()))}
                </div>
            </footer>
        </div>
    }
}

fn short_sha(sha: &str) -> &str {
    if sha.len() > 8 { &sha[..8] } else { sha }
}
