use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{IdentityProvider, Navigator};
use crate::domain::session::{AccessToken, Session, SessionError};

const OAUTH_SCOPE: &str = "email openid phone";

/// Token endpoint response for the authorization-code grant.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub token_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// Cognito-style hosted-UI identity provider: builds the authorize and
/// logout URLs, exchanges the authorization code at the token endpoint, and
/// caches the signed-in user for the lifetime of the tab.
pub struct HostedUiIdentityProvider {
    authority: String,
    client_id: String,
    redirect_uri: String,
    navigator: Arc<dyn Navigator>,
    http_client: reqwest::Client,
    user: Mutex<Option<AccessToken>>,
}

impl HostedUiIdentityProvider {
    pub fn new(
        authority: String,
        client_id: String,
        redirect_uri: String,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            authority,
            client_id,
            redirect_uri,
            navigator,
            http_client: reqwest::Client::new(),
            user: Mutex::new(None),
        }
    }

    /// Hosted login page with the authorization-code flow parameters.
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/oauth2/authorize?client_id={}&response_type=code&scope={}&redirect_uri={}",
            self.authority,
            self.client_id,
            urlencoding::encode(OAUTH_SCOPE),
            urlencoding::encode(&self.redirect_uri)
        )
    }

    /// Hosted logout endpoint; the post-logout redirect URI is URL-encoded.
    pub fn logout_url(&self) -> String {
        format!(
            "{}/logout?client_id={}&logout_uri={}",
            self.authority,
            self.client_id,
            urlencoding::encode(&self.redirect_uri)
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, SessionError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.client_id.as_str()),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .http_client
            .post(format!("{}/oauth2/token", self.authority))
            .header("Accept", "application/json")
            .form(&params)
            .send()
            .await
            .map_err(|e| SessionError::Provider(format!("Token exchange failed: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SessionError::Provider(format!(
                "Token exchange failed: {}",
                error_text
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| SessionError::Provider(format!("Failed to parse token response: {}", e)))
    }

    /// Redirect completion: trade the code for tokens and cache the user.
    pub async fn complete_sign_in(&self, code: &str) -> Result<Session, SessionError> {
        let tokens = self.exchange_code(code).await?;
        let access_token = AccessToken::new(tokens.access_token);
        *self.user.lock().await = Some(access_token.clone());
        tracing::info!("sign-in completed");
        Ok(Session::Authenticated { access_token })
    }
}

#[async_trait]
impl IdentityProvider for HostedUiIdentityProvider {
    async fn current_session(&self) -> Session {
        match self.user.lock().await.clone() {
            Some(access_token) => Session::Authenticated { access_token },
            None => Session::Unauthenticated,
        }
    }

    async fn begin_sign_in(&self) -> Result<(), SessionError> {
        self.navigator.navigate(&self.authorize_url());
        Ok(())
    }

    async fn remove_user(&self) -> Result<(), SessionError> {
        *self.user.lock().await = None;
        Ok(())
    }

    fn sign_out_redirect(&self) {
        self.navigator.navigate(&self.logout_url());
    }
}
