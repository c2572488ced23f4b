//! Auth feature module covering the session store, startup restoration, and
//! the typed identity-service client. It keeps authentication logic out of
//! the UI and must stay aligned with backend protocol expectations. This
//! module touches security boundaries and must avoid logging secrets or
//! token material.
//!
//! Flow Overview: the session provider runs the restoration sequencer once
//! per page load, converting the persisted refresh credential into a live
//! session before any guard decides. Sign-in, registration, the one-time
//! OAuth code exchange, and account linking all install their result through
//! the same session store; logout revokes best-effort and always clears
//! local state.

pub(crate) mod client;
mod guards;
pub(crate) mod restore;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod types;

pub(crate) use guards::RequireAuth;
