//! Route guard for protected destinations. The guard defers every decision
//! until the session store is initialized so the unauthenticated view never
//! flashes while restoration is in flight.

use crate::features::auth::state::use_session;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

/// Routing decision for a protected destination.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuardDecision {
    /// Restoration has not resolved: render nothing, redirect nowhere.
    Wait,
    Allow,
    RedirectToLogin,
}

/// Pure gate. Never decides before the store is initialized.
pub fn decide(initialized: bool, authenticated: bool) -> GuardDecision {
    if !initialized {
        GuardDecision::Wait
    } else if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::RedirectToLogin
    }
}

/// Sign-in target carrying the originally requested path so a successful
/// login can resume it. The root path adds no marker.
pub fn login_redirect_target(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        "/login".to_string()
    } else {
        format!("/login?from={requested}")
    }
}

/// Layout guard for protected routes. Renders a neutral loading state until
/// the store initializes, then either the nested outlet or a redirect to
/// sign-in.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if decide(session.initialized(), session.is_authenticated.get())
            == GuardDecision::RedirectToLogin
        {
            let requested = location.pathname.get();
            navigate(&login_redirect_target(&requested), Default::default());
        }
    });

    view! {
        {move || match decide(session.initialized(), session.is_authenticated.get()) {
            GuardDecision::Allow => view! { <Outlet /> }.into_any(),
            // The redirect effect fires right after; keep the screen neutral
            // in the meantime.
            GuardDecision::Wait | GuardDecision::RedirectToLogin => view! {
                <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
                    <div class="animate-pulse text-gray-400">"Loading..."</div>
                </div>
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::{GuardDecision, decide, login_redirect_target};

    #[test]
    fn no_decision_before_initialization() {
        // Whether or not a session landed already, the guard must wait.
        assert_eq!(decide(false, false), GuardDecision::Wait);
        assert_eq!(decide(false, true), GuardDecision::Wait);
    }

    #[test]
    fn initialized_store_decides_by_authentication() {
        assert_eq!(decide(true, true), GuardDecision::Allow);
        assert_eq!(decide(true, false), GuardDecision::RedirectToLogin);
    }

    #[test]
    fn redirect_preserves_requested_destination() {
        assert_eq!(
            login_redirect_target("/set-password"),
            "/login?from=/set-password"
        );
        assert_eq!(login_redirect_target("/"), "/login");
        assert_eq!(login_redirect_target(""), "/login");
    }
}
