//! Request and response types for auth-related API calls. These payloads
//! carry credentials and token material, so they must never be logged.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthCodeRequest {
    pub code: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPasswordRequest {
    pub password: String,
    pub confirm_password: String,
}

/// Profile snapshot returned alongside tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub password_set: bool,
}

/// Shape returned by every identity-service call that can authenticate.
///
/// A password login against an OAuth-only account carries
/// `requiresPasswordSet=true` and no tokens; the same flag on the code
/// exchange path arrives together with a valid token pair. Callers must not
/// collapse the two cases.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub requires_password_set: bool,
}

#[cfg(test)]
mod tests {
    use super::{AuthResponse, LoginRequest};

    #[test]
    fn auth_response_parses_full_token_pair() {
        let body = r#"{
            "accessToken": "at-1",
            "refreshToken": "rt-1",
            "user": {"id": "u-1", "email": "a@b.c", "name": "Ada", "provider": "GOOGLE", "passwordSet": false},
            "requiresPasswordSet": true
        }"#;

        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.access_token.as_deref(), Some("at-1"));
        assert_eq!(response.refresh_token.as_deref(), Some("rt-1"));
        assert!(response.requires_password_set);
        assert_eq!(response.user.unwrap().name, "Ada");
    }

    #[test]
    fn auth_response_tolerates_tokenless_password_prompt() {
        // A password login against an OAuth-only account returns no tokens.
        let body = r#"{"requiresPasswordSet": true, "user": {"id": "u-1", "email": "a@b.c", "name": "Ada"}}"#;

        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert!(response.requires_password_set);
        assert!(response.access_token.is_none());
        assert!(response.refresh_token.is_none());
    }

    #[test]
    fn requires_password_set_defaults_to_false() {
        let body = r#"{"accessToken": "at-1", "refreshToken": "rt-1"}"#;

        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert!(!response.requires_password_set);
    }

    #[test]
    fn requests_serialize_camel_case() {
        let request = LoginRequest {
            email: "a@b.c".to_string(),
            password: "secret".to_string(),
        };
        let encoded = serde_json::to_string(&request).unwrap();
        assert_eq!(encoded, r#"{"email":"a@b.c","password":"secret"}"#);
    }
}
