//! Session store and provider. The provider runs the restoration sequencer
//! once per page load and exposes derived auth signals for guards and
//! routes. The access token and profile live in memory only; the refresh
//! credential is delegated to durable storage. Nothing outside this store
//! mutates session state.

use crate::app_lib::OnceLatch;
use crate::features::auth::types::UserProfile;
use crate::features::auth::{client, restore, storage};
use leptos::{prelude::*, task::spawn_local};

/// In-memory credential plus profile, installed and cleared as one unit so
/// no consumer ever observes a half-updated session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserProfile,
}

#[derive(Clone, Copy)]
/// Session context shared through Leptos. Owns the only mutable session
/// state in the application.
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    initialized: RwSignal<bool>,
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    fn new() -> Self {
        let session = RwSignal::new(None);
        let initialized = RwSignal::new(false);
        let is_authenticated = Signal::derive(move || session.get().is_some());
        Self {
            session,
            initialized,
            is_authenticated,
        }
    }

    /// Immutable snapshot of the current session.
    pub fn session(&self) -> Option<Session> {
        self.session.get()
    }

    /// Access token snapshot for authorizing a request, read untracked so
    /// event handlers do not subscribe to session changes.
    pub fn access_token(&self) -> Option<String> {
        self.session
            .get_untracked()
            .map(|session| session.access_token)
    }

    /// Current profile, if signed in.
    pub fn user(&self) -> Option<UserProfile> {
        self.session.get().map(|session| session.user)
    }

    /// True once restoration has resolved. Gates every routing decision;
    /// never reverts to false.
    pub fn initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Installs a new session, fully replacing any previous one. A supplied
    /// refresh token overwrites the persisted credential.
    pub fn login(&self, access_token: String, user: UserProfile, refresh_token: Option<String>) {
        if let Some(token) = refresh_token.as_deref() {
            storage::write_refresh_token(token);
        }
        self.session.set(Some(Session { access_token, user }));
    }

    /// Signs out locally and revokes the session server-side. The revoke is
    /// best effort: its result is discarded and local sign-out proceeds
    /// unconditionally.
    pub fn logout(&self) {
        if let Some(session) = self.session.get_untracked() {
            spawn_local(async move {
                let _ = client::logout(&session.access_token).await;
            });
        }
        self.session.set(None);
        storage::clear_refresh_token();
    }

    /// Marks restoration as resolved. Called once by the sequencer.
    pub(crate) fn mark_initialized(&self) {
        self.initialized.set(true);
    }
}

thread_local! {
    // The sequencer must run at most once per page load even if the provider
    // mounts re-entrantly, so the latch lives outside the component.
    static RESTORE_ONCE: OnceLatch = const { OnceLatch::new() };
}

/// Provides the session context and starts restoration once per page load.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::new();
    provide_context(session);

    if RESTORE_ONCE.with(OnceLatch::acquire) {
        spawn_local(async move {
            restore::run(session).await;
        });
    }

    view! { {children()} }
}

/// Returns the session context or a fallback empty, uninitialized context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::new)
}
