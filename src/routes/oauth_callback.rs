//! Handles the redirect back from the external OAuth consent step. The
//! one-time authorization code arrives as a query parameter and is exchanged
//! exactly once; the address bar is scrubbed before the exchange so the code
//! never survives in history. No code or token text is ever rendered.

use crate::app_lib::OnceLatch;
use crate::components::{AuthLayout, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_session;
use crate::features::auth::types::{AuthResponse, OAuthCodeRequest};
use crate::routes::login::OAUTH_FAILED_FLAG;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, window};

/// Default destination once a session is installed.
pub(crate) const DEFAULT_AUTHENTICATED_ROUTE: &str = "/";

/// First protocol step: classify the redirect before any network call.
#[derive(Debug, PartialEq)]
pub(crate) enum ExchangeStep {
    /// Defined failure, not a crash: redirect to sign-in with the flag.
    MissingCode,
    Exchange(String),
}

pub(crate) fn classify_code(code: Option<String>) -> ExchangeStep {
    match code {
        Some(code) if !code.trim().is_empty() => ExchangeStep::Exchange(code),
        _ => ExchangeStep::MissingCode,
    }
}

/// Destination for a successful exchange. A session that still needs a
/// password goes to account linking; its credential is already valid, so
/// this stays an authenticated sub-flow rather than a new sign-in.
pub(crate) fn completion_route(response: &AuthResponse) -> &'static str {
    if response.requires_password_set {
        "/set-password"
    } else {
        DEFAULT_AUTHENTICATED_ROUTE
    }
}

fn failure_route() -> String {
    format!("/login?error={OAUTH_FAILED_FLAG}")
}

thread_local! {
    // The consent redirect always lands on a fresh page load, so a one-shot
    // latch per load is exactly one exchange per code even when the effect
    // re-runs re-entrantly.
    static EXCHANGE_ONCE: OnceLatch = const { OnceLatch::new() };
}

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let exchange_action = Action::new_local(move |code: &String| {
        let request = OAuthCodeRequest { code: code.clone() };
        async move { client::exchange_code(&request).await }
    });

    let start_navigate = navigate.clone();
    Effect::new(move |_| {
        if !EXCHANGE_ONCE.with(OnceLatch::acquire) {
            return;
        }

        let step = classify_code(code_from_query());
        scrub_code_from_url();

        match step {
            ExchangeStep::MissingCode => {
                start_navigate(&failure_route(), Default::default());
            }
            ExchangeStep::Exchange(code) => {
                exchange_action.dispatch(code);
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = exchange_action.value().get() {
            match result {
                Ok(response) => match (response.access_token.clone(), response.user.clone()) {
                    (Some(access_token), Some(user)) => {
                        let destination = completion_route(&response);
                        session.login(access_token, user, response.refresh_token);
                        navigate(destination, Default::default());
                    }
                    // A response without a usable credential installs nothing.
                    _ => navigate(&failure_route(), Default::default()),
                },
                Err(_) => navigate(&failure_route(), Default::default()),
            }
        }
    });

    view! {
        <AuthLayout>
            <div class="flex flex-col items-center py-8">
                <Spinner />
                <p class="mt-4 text-sm text-gray-500 dark:text-gray-400">
                    "Completing sign-in..."
                </p>
            </div>
        </AuthLayout>
    }
}

fn code_from_query() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get("code")
}

fn scrub_code_from_url() {
    let Some(window) = window() else {
        return;
    };
    let history = match window.history() {
        Ok(history) => history,
        Err(_) => return,
    };
    let _ = history.replace_state_with_url(&JsValue::NULL, "", Some("/oauth/callback"));
}

#[cfg(test)]
mod tests {
    use super::{ExchangeStep, classify_code, completion_route};
    use crate::features::auth::types::AuthResponse;

    #[test]
    fn missing_code_is_a_defined_failure() {
        assert_eq!(classify_code(None), ExchangeStep::MissingCode);
        assert_eq!(classify_code(Some(String::new())), ExchangeStep::MissingCode);
        assert_eq!(
            classify_code(Some("   ".to_string())),
            ExchangeStep::MissingCode
        );
    }

    #[test]
    fn present_code_is_exchanged() {
        assert_eq!(
            classify_code(Some("abc123".to_string())),
            ExchangeStep::Exchange("abc123".to_string())
        );
    }

    #[test]
    fn completed_exchange_routes_by_password_state() {
        let linked = AuthResponse {
            access_token: Some("at-1".to_string()),
            refresh_token: Some("rt-1".to_string()),
            user: None,
            requires_password_set: false,
        };
        assert_eq!(completion_route(&linked), "/");

        let needs_password = AuthResponse {
            requires_password_set: true,
            ..linked
        };
        assert_eq!(completion_route(&needs_password), "/set-password");
    }
}
