//! Default authenticated view. Greets the profile and offers sign-out; the
//! route guard keeps it unreachable until restoration resolves.

use crate::components::AppShell;
use crate::features::auth::state::use_session;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <AppShell>
            {move || {
                session
                    .user()
                    .map(|user| {
                        let provider = user
                            .provider
                            .clone()
                            .unwrap_or_else(|| "LOCAL".to_string());
                        view! {
                            <div class="max-w-lg">
                                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                                    {format!("Welcome, {}", user.name)}
                                </h1>
                                <dl class="mt-6 space-y-3 text-sm">
                                    <div class="flex gap-2">
                                        <dt class="text-gray-500 dark:text-gray-400 w-24">"Email"</dt>
                                        <dd class="text-gray-900 dark:text-white">{user.email.clone()}</dd>
                                    </div>
                                    <div class="flex gap-2">
                                        <dt class="text-gray-500 dark:text-gray-400 w-24">"Signed in via"</dt>
                                        <dd class="text-gray-900 dark:text-white">{provider}</dd>
                                    </div>
                                </dl>
                            </div>
                        }
                    })
            }}
        </AppShell>
    }
}
