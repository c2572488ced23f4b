//! Alert banners for success and error messages. Messages must be safe to
//! render and should never include secrets or tokens.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-red-300 bg-red-50 px-4 py-3 text-sm text-red-800 dark:border-red-500 dark:bg-red-950/40 dark:text-red-200"
        }
        AlertKind::Success => {
            "rounded-md border border-green-300 bg-green-50 px-4 py-3 text-sm text-green-800 dark:border-green-500 dark:bg-green-950/40 dark:text-green-200"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
