use std::sync::{Arc, Mutex};

use log::{debug, info, warn};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{AuthError, AuthProvider};
use crate::models::{ProfileDraft, User};

/// Client for a GoTrue-compatible auth service.
#[derive(Clone)]
pub struct RemoteAuth {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: Arc<Mutex<Option<String>>>,
}

#[derive(Debug, Deserialize)]
struct RemoteUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Value,
}

#[derive(Debug, Deserialize)]
struct SessionBody {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    user: Option<RemoteUser>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl From<RemoteUser> for User {
    fn from(u: RemoteUser) -> User {
        let email = u.email.unwrap_or_default();
        let name = u
            .user_metadata
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| email.clone());
        User { id: u.id, email, name }
    }
}

/// Picks the most specific message GoTrue put in an error body.
fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

/// Sign-in replies with a session; sign-up replies with either a session or a bare user.
fn decode_session(body: &str) -> Result<(Option<String>, User), AuthError> {
    let value: Value = serde_json::from_str(body).map_err(|e| AuthError::Internal(e.to_string()))?;
    let session: SessionBody = serde_json::from_value(value.clone()).map_err(|e| AuthError::Internal(e.to_string()))?;
    let user = match session.user {
        Some(u) => u,
        None => serde_json::from_value::<RemoteUser>(value).map_err(|e| AuthError::Internal(e.to_string()))?,
    };
    Ok((session.access_token, user.into()))
}

impl RemoteAuth {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            access_token: Arc::new(Mutex::new(None)),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    fn store_token(&self, token: Option<String>) {
        match self.access_token.lock() {
            Ok(mut slot) => *slot = token,
            Err(_) => warn!("[Auth] token slot poisoned"),
        }
    }

    fn current_token(&self) -> Option<String> {
        self.access_token.lock().ok().and_then(|t| t.clone())
    }

    async fn post(&self, path: &str, payload: &Value, bearer: Option<&str>) -> Result<String, AuthError> {
        let mut req = self.http.post(self.endpoint(path)).header("apikey", &self.anon_key).json(payload);
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| AuthError::Transport(e.to_string()))?;
        debug!("[Auth] POST {path} -> {status}");
        if status.is_client_error() {
            return Err(AuthError::Rejected(error_message(status, &body)));
        }
        if !status.is_success() {
            return Err(AuthError::Transport(error_message(status, &body)));
        }
        Ok(body)
    }
}

impl AuthProvider for RemoteAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let body = self
            .post("token?grant_type=password", &json!({ "email": email, "password": password }), None)
            .await?;
        let (token, user) = decode_session(&body)?;
        self.store_token(token);
        info!("[Auth] Signed in {}", user.email);
        Ok(user)
    }

    async fn sign_up(&self, email: &str, password: &str, profile: &ProfileDraft) -> Result<User, AuthError> {
        let payload = json!({ "email": email, "password": password, "data": profile });
        let body = self.post("signup", &payload, None).await?;
        let (token, user) = decode_session(&body)?;
        self.store_token(token);
        info!("[Auth] Registered {}", user.email);
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(token) = self.current_token() else {
            return Ok(());
        };
        self.post("logout", &json!({}), Some(&token)).await?;
        self.store_token(None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_description() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(error_message(StatusCode::BAD_REQUEST, body), "Invalid login credentials");
        assert_eq!(error_message(StatusCode::UNPROCESSABLE_ENTITY, r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "<html>"),
            "request failed with status 502 Bad Gateway"
        );
    }

    #[test]
    fn session_and_bare_user_bodies_decode() {
        let session = r#"{"access_token":"tok","user":{"id":"u1","email":"a@b.c","user_metadata":{"name":"Ada"}}}"#;
        let (token, user) = decode_session(session).unwrap();
        assert_eq!(token.as_deref(), Some("tok"));
        assert_eq!(user, User { id: "u1".into(), email: "a@b.c".into(), name: "Ada".into() });

        let bare = r#"{"id":"u2","email":"b@c.d"}"#;
        let (token, user) = decode_session(bare).unwrap();
        assert!(token.is_none());
        assert_eq!(user.name, "b@c.d");

        assert!(matches!(decode_session("[]"), Err(AuthError::Internal(_))));
    }

    #[test]
    fn endpoint_joins_base_url() {
        let auth = RemoteAuth::new("https://auth.example.com", "anon");
        assert_eq!(auth.endpoint("signup"), "https://auth.example.com/auth/v1/signup");
        assert!(auth.current_token().is_none());
    }
}
