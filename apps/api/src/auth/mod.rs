//! Email/password sign-in against the hosted auth database (Supabase GoTrue).
//!
//! The client is built once in `main` and handed to handlers through
//! [`crate::state::AppState`]; handlers only see the [`CredentialVerifier`] seam.

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::config::SupabaseConfig;

pub mod handlers;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Auth API error (status {status}): {message}")]
    Upstream { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedInUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub user: SignedInUser,
    pub access_token: String,
}

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}

/// `user_metadata.full_name`, else the email local part, else the whole email.
pub fn display_name(full_name: Option<&str>, email: &str) -> String {
    full_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .or_else(|| email.split('@').next().filter(|local| !local.is_empty()))
        .unwrap_or(email)
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// GoTrue wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: GoTrueUser,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
    #[serde(default)]
    last_sign_in_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct UserMetadata {
    full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GoTrueError {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
}

impl TokenResponse {
    fn into_session(self, requested_email: &str) -> Session {
        let email = self
            .user
            .email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| requested_email.to_string());
        let full_name = self
            .user
            .user_metadata
            .and_then(|m| m.full_name);
        Session {
            user: SignedInUser {
                id: self.user.id,
                name: display_name(full_name.as_deref(), &email),
                email,
                last_sign_in_at: self.user.last_sign_in_at,
            },
            access_token: self.access_token,
        }
    }
}

/// Password-grant client for a Supabase project.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(config: &SupabaseConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client for Supabase")?;
        Ok(Self {
            client,
            url: config.url.clone(),
            anon_key: config.anon_key.clone(),
        })
    }
}

#[async_trait]
impl CredentialVerifier for SupabaseAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let response = self
            .client
            .post(format!("{}/auth/v1/token", self.url))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password })
            .send()
            .await?;

        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED) {
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<GoTrueError>(&body).unwrap_or_default();
            return Err(AuthError::Upstream {
                status: status.as_u16(),
                message: parsed
                    .error_description
                    .or(parsed.msg)
                    .or(parsed.message)
                    .unwrap_or(body),
            });
        }

        let token: TokenResponse = response.json().await?;
        let session = token.into_session(email);
        debug!(
            "Supabase sign-in for {} (last sign-in {:?})",
            session.user.id, session.user.last_sign_in_at
        );
        Ok(session)
    }
}
