//! Shared frontend utilities for API access, configuration, errors, and build
//! metadata.
//!
//! ## Core Authentication Flows
//!
//! ### Password sign-in
//!
//! The client POSTs to `/auth/login`. A completed sign-in returns an access
//! token, a refresh token, and the profile. An OAuth-only account answers with
//! `requiresPasswordSet=true` and no tokens; the client sends the user to an
//! explanatory page instead of treating the request as a sign-in.
//!
//! ### Session restoration
//!
//! On page load the client reads the persisted refresh token and exchanges it
//! once via `/auth/refresh`. The session store stays gated behind its
//! `initialized` flag until that single attempt resolves either way.
//!
//! ### OAuth code exchange
//!
//! The identity service redirects to `/oauth/callback?code=<opaque>` after
//! external consent. The client exchanges the one-time code exactly once via
//! `/auth/oauth2/token` and routes on the result.
//!
//! Centralizing these helpers keeps network behavior consistent and avoids
//! duplicated logic in routes and features. These utilities do not handle
//! secrets directly, but callers must still avoid logging sensitive data.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod once;

pub(crate) use api::{post_empty_with_bearer, post_json, post_json_with_bearer};
pub(crate) use errors::AppError;
pub(crate) use once::OnceLatch;
