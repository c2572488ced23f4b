//! Centered card layout for the public auth pages (sign-in, registration,
//! account linking). Keeps the forms visually consistent without pulling in
//! the full application shell.

use leptos::prelude::*;

#[component]
pub fn AuthLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4 dark:bg-gray-900">
            <div class="w-full max-w-md">
                <div class="text-center mb-6">
                    <span class="font-semibold text-2xl text-gray-900 dark:text-white">
                        "Ensaluti"
                    </span>
                </div>
                <div class="bg-white rounded-xl border border-gray-200 p-6 shadow-sm dark:bg-gray-800 dark:border-gray-700">
                    {children()}
                </div>
            </div>
        </div>
    }
}
