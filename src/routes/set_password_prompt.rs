//! Explanatory page for a password login against an OAuth-only account. The
//! identity service answered with `requiresPasswordSet=true` and no tokens,
//! so there is no credential to authorize the linking form yet; the user must
//! re-authenticate with the provider first.

use crate::app_lib::config::AppConfig;
use crate::components::{AuthLayout, Button, ButtonVariant};
use crate::routes::provider_icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SetPasswordPromptPage() -> impl IntoView {
    let authorize_url = AppConfig::load().oauth_authorize_url;

    view! {
        <AuthLayout>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white mb-1">
                "Password not set"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                "This account was created with Google. Please sign in with Google to set a password."
            </p>
            <div class="space-y-3">
                <a href=authorize_url>
                    <Button variant=ButtonVariant::Provider>
                        {provider_icon()}
                        "Continue with Google"
                    </Button>
                </a>
                <A href="/login">
                    <Button variant=ButtonVariant::Secondary>"Back to login"</Button>
                </A>
            </div>
        </AuthLayout>
    }
}
