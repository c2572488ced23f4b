//! Registration page. A successful registration returns a full token pair,
//! so the user is signed in immediately. Only shape checks run locally; the
//! server owns the real validation and its message is surfaced verbatim.

use crate::components::{Alert, AlertKind, AuthLayout, Button, Spinner, TextField};
use crate::features::auth::client;
use crate::features::auth::state::use_session;
use crate::features::auth::types::RegisterRequest;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

const MIN_PASSWORD_CHARS: usize = 12;

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let phone_number = RwSignal::new(String::new());
    let country = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { client::register(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(response) => match (response.access_token, response.user) {
                    (Some(access_token), Some(user)) => {
                        session.login(access_token, user, response.refresh_token);
                        navigate("/", Default::default());
                    }
                    _ => set_error.set(Some(
                        "Registration failed. Please try again.".to_string(),
                    )),
                },
                Err(err) => set_error.set(Some(err.user_message())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Name, email, and password are required.".to_string()));
            return;
        }
        if !email_value.contains('@') {
            set_error.set(Some("Enter a valid email address.".to_string()));
            return;
        }
        if password_value.chars().count() < MIN_PASSWORD_CHARS {
            set_error.set(Some(
                "Password must be at least 12 characters.".to_string(),
            ));
            return;
        }

        register_action.dispatch(RegisterRequest {
            name: name_value,
            email: email_value,
            password: password_value,
            phone_country_code: None,
            phone_number: optional(phone_number.get_untracked()),
            address_line1: None,
            city: None,
            state: None,
            zip_code: None,
            country: optional(country.get_untracked()),
        });
    };

    view! {
        <AuthLayout>
            <h1 class="text-xl font-semibold text-gray-900 dark:text-white mb-1">
                "Create your account"
            </h1>
            <p class="text-sm text-gray-500 dark:text-gray-400 mb-6">
                "A few details and you're in"
            </p>
            <form on:submit=on_submit novalidate>
                <TextField id="name" label="Name" autocomplete="name" value=name />
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
                    placeholder="Min. 12 characters"
                    autocomplete="new-password"
                    value=password
                />
                <TextField
                    id="phone_number"
                    label="Phone (optional)"
                    input_type="tel"
                    autocomplete="tel"
                    value=phone_number
                />
                <TextField
                    id="country"
                    label="Country (optional)"
                    autocomplete="country-name"
                    value=country
                />
                <Button button_type="submit" disabled=register_action.pending()>
                    "Sign up"
                </Button>
                {move || {
                    register_action
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
            <p class="mt-6 text-sm text-center text-gray-500 dark:text-gray-400">
                "Already have an account? "
                <A href="/login" {..} class="text-blue-700 hover:underline dark:text-blue-400">
                    "Sign in"
                </A>
            </p>
        </AuthLayout>
    }
}
