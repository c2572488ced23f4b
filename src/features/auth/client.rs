//! Typed wrappers for the identity-service auth endpoints. These helpers
//! centralize paths and bearer headers, keeping auth flows consistent and
//! preventing token leakage in route code. The gateway holds no state of its
//! own.

use crate::app_lib::{AppError, post_empty_with_bearer, post_json, post_json_with_bearer};
use crate::features::auth::types::{
    AuthResponse, LoginRequest, OAuthCodeRequest, RefreshRequest, RegisterRequest,
    SetPasswordRequest,
};

/// Creates a new account and returns tokens for immediate sign-in.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/register", request).await
}

/// Authenticates by email and password.
/// An OAuth-only account answers with `requiresPasswordSet=true` and no
/// tokens; that response is not a completed sign-in.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/login", request).await
}

/// Exchanges a refresh token for a rotated token pair.
pub async fn refresh(request: &RefreshRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/refresh", request).await
}

/// Exchanges the one-time authorization code delivered by redirect.
/// The code is single-use server-side; call this at most once per code.
pub async fn exchange_code(request: &OAuthCodeRequest) -> Result<AuthResponse, AppError> {
    post_json("/auth/oauth2/token", request).await
}

/// Sets a password on an OAuth-linked account. Requires the access token
/// installed by the code exchange and returns re-issued tokens.
pub async fn set_password(
    request: &SetPasswordRequest,
    access_token: &str,
) -> Result<AuthResponse, AppError> {
    post_json_with_bearer("/auth/set-password", request, access_token).await
}

/// Revokes the current session server-side. Best effort: callers discard the
/// result so sign-out never blocks on the network.
pub async fn logout(access_token: &str) -> Result<(), AppError> {
    post_empty_with_bearer("/auth/logout", access_token).await
}
