//! Sign-in page. Password sign-in posts credentials directly; the provider
//! button hands off to the external consent page, which redirects back to
//! `/oauth/callback`. A `from` query parameter carries the destination a
//! guard preserved, and `error=oauth_failed` renders the generic failure
//! banner without leaking any detail.

use crate::app_lib::config::AppConfig;
use crate::components::{Alert, AlertKind, AuthLayout, Button, ButtonVariant, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::state::use_session;
use crate::features::auth::types::LoginRequest;
use crate::routes::provider_icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use web_sys::{UrlSearchParams, window};

/// Marker appended to the sign-in URL when an OAuth flow fails. Only the
/// flag travels in the URL; the failure detail never does.
pub(crate) const OAUTH_FAILED_FLAG: &str = "oauth_failed";

/// Destination to resume after sign-in. Only same-origin absolute paths are
/// honored so a crafted link cannot bounce the user elsewhere.
pub(crate) fn resume_target(from: Option<String>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/".to_string(),
    }
}

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let oauth_failed = query_param("error").as_deref() == Some(OAUTH_FAILED_FLAG);
    let authorize_url = AppConfig::load().oauth_authorize_url;

    let login_action = Action::new_local(move |input: &LoginInput| {
        let request = LoginRequest {
            email: input.email.clone(),
            password: input.password.clone(),
        };
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(response) if response.requires_password_set => {
                    // OAuth-only account: no tokens were issued, so this is
                    // not a sign-in. Explain instead of opening the linking
                    // form, which nothing could authorize yet.
                    navigate("/set-password-prompt", Default::default());
                }
                Ok(response) => match (response.access_token, response.user) {
                    (Some(access_token), Some(user)) => {
                        session.login(access_token, user, response.refresh_token);
                        navigate(&resume_target(query_param("from")), Default::default());
                    }
                    _ => set_error.set(Some(
                        "Login failed. Please try again.".to_string(),
                    )),
                },
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if email_value.is_empty() || password_value.trim().is_empty() {
            set_error.set(Some("Email and password are required.".to_string()));
            return;
        }

        login_action.dispatch(LoginInput {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <AuthLayout>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white mb-1">
                "Welcome back"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">"Sign in to your account"</p>
            {oauth_failed
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <Alert
                                kind=AlertKind::Error
                                message="Sign-in with your identity provider failed. Please try again."
                                    .to_string()
                            />
                        </div>
                    }
                })}
            <form on:submit=on_submit novalidate>
                <TextField
                    id="email"
                    label="Email"
                    input_type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    value=email
                />
                <TextField
                    id="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                />
                <Button button_type="submit" disabled=login_action.pending()>
                    "Sign in"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-4"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-4">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>
            <div class="flex items-center gap-3 my-5 text-xs text-gray-400">
                <span class="flex-1 border-t border-gray-200 dark:border-gray-700"></span>
                "or"
                <span class="flex-1 border-t border-gray-200 dark:border-gray-700"></span>
            </div>
            <a href=authorize_url>
                <Button variant=ButtonVariant::Provider>
                    {provider_icon()}
                    "Continue with Google"
                </Button>
            </a>
            <p class="mt-6 text-sm text-center text-gray-500 dark:text-gray-400">
                "Don't have an account? "
                <A href="/register" {..} class="text-blue-700 hover:underline dark:text-blue-400">
                    "Sign up"
                </A>
            </p>
        </AuthLayout>
    }
}

/// Reads a parameter from the current query string.
fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let trimmed = search.trim_start_matches('?');
    if trimmed.is_empty() {
        return None;
    }
    let params = UrlSearchParams::new_with_str(trimmed).ok()?;
    params.get(name)
}

#[cfg(test)]
mod tests {
    use super::resume_target;

    #[test]
    fn resume_defaults_to_home() {
        assert_eq!(resume_target(None), "/");
        assert_eq!(resume_target(Some(String::new())), "/");
    }

    #[test]
    fn resume_honors_preserved_paths() {
        assert_eq!(
            resume_target(Some("/set-password".to_string())),
            "/set-password"
        );
    }

    #[test]
    fn resume_rejects_external_destinations() {
        assert_eq!(resume_target(Some("https://evil.example".to_string())), "/");
        assert_eq!(resume_target(Some("//evil.example".to_string())), "/");
    }
}
