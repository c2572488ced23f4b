mod home;
pub(crate) mod login;
mod not_found;
mod oauth_callback;
mod register;
mod set_password;
mod set_password_prompt;

pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use oauth_callback::OAuthCallbackPage;
pub(crate) use register::RegisterPage;
pub(crate) use set_password::SetPasswordPage;
pub(crate) use set_password_prompt::SetPasswordPromptPage;

use crate::features::auth::RequireAuth;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/set-password-prompt") view=SetPasswordPromptPage />
            // The identity service redirects here with ?code=<opaque> after
            // external consent.
            <Route path=path!("/oauth/callback") view=OAuthCallbackPage />
            <ParentRoute path=path!("") view=RequireAuth>
                <Route path=path!("") view=HomePage />
                // Requires the session installed by the code exchange.
                <Route path=path!("set-password") view=SetPasswordPage />
            </ParentRoute>
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}

/// Google mark rendered on provider buttons.
pub(crate) fn provider_icon() -> impl IntoView {
    view! {
        <svg width="18" height="18" viewBox="0 0 18 18" fill="none" aria-hidden="true">
            <path
                d="M17.64 9.2c0-.637-.057-1.251-.164-1.84H9v3.481h4.844a4.14 4.14 0 0 1-1.796 2.716v2.259h2.908c1.702-1.567 2.684-3.875 2.684-6.615Z"
                fill="#4285F4"
            ></path>
            <path
                d="M9 18c2.43 0 4.467-.806 5.956-2.18l-2.908-2.259c-.806.54-1.837.86-3.048.86-2.344 0-4.328-1.584-5.036-3.711H.957v2.332A8.997 8.997 0 0 0 9 18Z"
                fill="#34A853"
            ></path>
            <path
                d="M3.964 10.71A5.41 5.41 0 0 1 3.682 9c0-.593.102-1.17.282-1.71V4.958H.957A8.996 8.996 0 0 0 0 9c0 1.452.348 2.827.957 4.042l3.007-2.332Z"
                fill="#FBBC05"
            ></path>
            <path
                d="M9 3.58c1.321 0 2.508.454 3.44 1.345l2.582-2.58C13.463.891 11.426 0 9 0A8.997 8.997 0 0 0 .957 4.958L3.964 7.29C4.672 5.163 6.656 3.58 9 3.58Z"
                fill="#EA4335"
            ></path>
        </svg>
    }
}
