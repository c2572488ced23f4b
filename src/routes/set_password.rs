//! Account-linking form shown to OAuth users on their first sign-in. The
//! route is guarded: the session already holds a valid access token installed
//! by the code exchange, and the submission is authorized with it. On success
//! the re-issued tokens replace the current session.

use crate::components::{Alert, AlertKind, AuthLayout, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::state::use_session;
use crate::features::auth::types::SetPasswordRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_CHARS: usize = 8;

/// Local checks before the request leaves the browser. The server remains
/// the authority on password policy.
pub(crate) fn validate_passwords(password: &str, confirm: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required.")
    } else if password.chars().count() < MIN_PASSWORD_CHARS {
        Some("Password must be at least 8 characters.")
    } else if password != confirm {
        Some("Passwords do not match.")
    } else {
        None
    }
}

#[derive(Clone)]
struct SetPasswordInput {
    password: String,
    confirm_password: String,
    access_token: String,
}

#[component]
pub fn SetPasswordPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit_action = Action::new_local(move |input: &SetPasswordInput| {
        let request = SetPasswordRequest {
            password: input.password.clone(),
            confirm_password: input.confirm_password.clone(),
        };
        let access_token = input.access_token.clone();
        async move { client::set_password(&request, &access_token).await }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(response) => match (response.access_token, response.user) {
                    (Some(access_token), Some(user)) => {
                        session.login(access_token, user, response.refresh_token);
                        navigate("/", Default::default());
                    }
                    _ => set_error.set(Some(
                        "Failed to set password. Please try again.".to_string(),
                    )),
                },
                Err(err) if err.is_unauthorized() => {
                    // The linking token expired mid-flow; force a clean
                    // sign-out rather than retrying with a dead credential.
                    session.logout();
                    navigate("/login", Default::default());
                }
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();
        if let Some(message) = validate_passwords(&password_value, &confirm_value) {
            set_error.set(Some(message.to_string()));
            return;
        }

        let Some(access_token) = session.access_token() else {
            set_error.set(Some("Your session expired. Please sign in again.".to_string()));
            return;
        };

        submit_action.dispatch(SetPasswordInput {
            password: password_value,
            confirm_password: confirm_value,
            access_token,
        });
    };

    view! {
        <AuthLayout>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white mb-1">
                "Set your password"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                "You signed in with Google. Set a password to also log in with email."
            </p>
            <form on:submit=on_submit novalidate>
                <TextField
                    id="password"
                    label="New password"
                    input_type="password"
                    placeholder="Min. 8 characters"
                    autocomplete="new-password"
                    value=password
                />
                <TextField
                    id="confirm_password"
                    label="Confirm password"
                    input_type="password"
                    autocomplete="new-password"
                    value=confirm_password
                />
                <Button button_type="submit" disabled=submit_action.pending()>
                    "Set password & continue"
                </Button>
                {move || {
                    submit_action
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
        </AuthLayout>
    }
}

#[cfg(test)]
mod tests {
    use super::validate_passwords;

    #[test]
    fn rejects_short_and_mismatched_passwords() {
        assert_eq!(validate_passwords("", ""), Some("Password is required."));
        assert_eq!(
            validate_passwords("short", "short"),
            Some("Password must be at least 8 characters.")
        );
        assert_eq!(
            validate_passwords("long-enough", "different"),
            Some("Passwords do not match.")
        );
    }

    #[test]
    fn accepts_matching_passwords() {
        assert_eq!(validate_passwords("long-enough", "long-enough"), None);
    }
}
