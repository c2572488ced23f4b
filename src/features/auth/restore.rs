//! Startup session restoration. Converts the persisted refresh credential
//! into a live session with exactly one network attempt per page load. The
//! session store stays gated until the attempt resolves either way, so guards
//! never decide against a half-restored session.

use crate::app_lib::AppError;
use crate::features::auth::state::SessionContext;
use crate::features::auth::types::{AuthResponse, RefreshRequest, UserProfile};
use crate::features::auth::{client, storage};

/// What the sequencer should do with the persisted credential.
#[derive(Debug, PartialEq)]
pub enum RestorePlan {
    /// Nothing persisted: become initialized without touching the network.
    NoStoredCredential,
    /// Attempt a single refresh with the stored token.
    Refresh(String),
}

pub fn plan(stored: Option<String>) -> RestorePlan {
    match stored {
        Some(token) if !token.is_empty() => RestorePlan::Refresh(token),
        _ => RestorePlan::NoStoredCredential,
    }
}

/// Store transition derived from the refresh attempt.
#[derive(Debug, PartialEq)]
pub enum RestoreOutcome {
    /// Install the restored session, persisting the rotated refresh token
    /// when the server returned one.
    Restored {
        access_token: String,
        user: UserProfile,
        rotated_refresh_token: Option<String>,
    },
    /// Drop the persisted credential and stay signed out.
    SignedOut,
}

/// Reduces the refresh result to a store transition. A response without a
/// usable token-and-profile pair counts as a failure: no partial session is
/// ever installed.
pub fn outcome(result: Result<AuthResponse, AppError>) -> RestoreOutcome {
    match result {
        Ok(AuthResponse {
            access_token: Some(access_token),
            user: Some(user),
            refresh_token,
            ..
        }) => RestoreOutcome::Restored {
            access_token,
            user,
            rotated_refresh_token: refresh_token,
        },
        _ => RestoreOutcome::SignedOut,
    }
}

/// Runs the restoration sequence and marks the session initialized on both
/// paths. The caller holds the one-shot latch; this function itself is not
/// re-entrancy safe.
pub async fn run(session: SessionContext) {
    match plan(storage::read_refresh_token()) {
        RestorePlan::NoStoredCredential => {}
        RestorePlan::Refresh(token) => {
            let request = RefreshRequest {
                refresh_token: token,
            };
            match outcome(client::refresh(&request).await) {
                RestoreOutcome::Restored {
                    access_token,
                    user,
                    rotated_refresh_token,
                } => session.login(access_token, user, rotated_refresh_token),
                RestoreOutcome::SignedOut => storage::clear_refresh_token(),
            }
        }
    }

    session.mark_initialized();
}

#[cfg(test)]
mod tests {
    use super::{RestoreOutcome, RestorePlan, outcome, plan};
    use crate::app_lib::AppError;
    use crate::features::auth::types::{AuthResponse, UserProfile};

    fn profile() -> UserProfile {
        UserProfile {
            id: "u-1".to_string(),
            email: "ada@inbox.im".to_string(),
            name: "Ada".to_string(),
            provider: Some("GOOGLE".to_string()),
            password_set: true,
        }
    }

    #[test]
    fn no_stored_credential_skips_the_network() {
        assert_eq!(plan(None), RestorePlan::NoStoredCredential);
        assert_eq!(plan(Some(String::new())), RestorePlan::NoStoredCredential);
    }

    #[test]
    fn stored_credential_plans_exactly_one_refresh() {
        assert_eq!(
            plan(Some("rt-1".to_string())),
            RestorePlan::Refresh("rt-1".to_string())
        );
    }

    #[test]
    fn successful_refresh_restores_and_rotates() {
        let response = AuthResponse {
            access_token: Some("at-2".to_string()),
            refresh_token: Some("rt-2".to_string()),
            user: Some(profile()),
            requires_password_set: false,
        };

        assert_eq!(
            outcome(Ok(response)),
            RestoreOutcome::Restored {
                access_token: "at-2".to_string(),
                user: profile(),
                rotated_refresh_token: Some("rt-2".to_string()),
            }
        );
    }

    #[test]
    fn refresh_without_rotation_keeps_no_stale_token() {
        let response = AuthResponse {
            access_token: Some("at-2".to_string()),
            refresh_token: None,
            user: Some(profile()),
            requires_password_set: false,
        };

        match outcome(Ok(response)) {
            RestoreOutcome::Restored {
                rotated_refresh_token,
                ..
            } => assert_eq!(rotated_refresh_token, None),
            other => panic!("expected restore, got {other:?}"),
        }
    }

    #[test]
    fn failed_refresh_signs_out() {
        let rejected = Err(AppError::Unauthorized("Refresh token revoked".to_string()));
        assert_eq!(outcome(rejected), RestoreOutcome::SignedOut);

        let unreachable = Err(AppError::Network("connection refused".to_string()));
        assert_eq!(outcome(unreachable), RestoreOutcome::SignedOut);
    }

    #[test]
    fn partial_response_never_installs_a_session() {
        let missing_user = AuthResponse {
            access_token: Some("at-2".to_string()),
            refresh_token: Some("rt-2".to_string()),
            user: None,
            requires_password_set: false,
        };
        assert_eq!(outcome(Ok(missing_user)), RestoreOutcome::SignedOut);

        let missing_token = AuthResponse {
            access_token: None,
            refresh_token: None,
            user: Some(profile()),
            requires_password_set: true,
        };
        assert_eq!(outcome(Ok(missing_token)), RestoreOutcome::SignedOut);
    }
}
