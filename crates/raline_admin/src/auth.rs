//! Login state for the admin surfaces.

use std::sync::Arc;

use raline_api::{RalineApiClient, RegisterResponse, UserInfo};
use session_store::{JsonSlot, Persistence, SessionStoreError, SharedStore, TokenStore, USER_KEY};

use crate::error::{AdminError, FormError, Result};
use crate::forms::{ForgotForm, LoginForm, RegisterForm};

/// Which verification code to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    Register,
    Reset,
}

/// Issues, remembers and forgets the admin session.
///
/// The request client must share `tokens` so that calls made after
/// [`AuthService::login`] carry the new bearer.
pub struct AuthService {
    client: Arc<RalineApiClient>,
    tokens: Arc<TokenStore>,
    profile: JsonSlot<Option<UserInfo>>,
}

impl AuthService {
    pub fn new(client: Arc<RalineApiClient>, tokens: Arc<TokenStore>, store: SharedStore) -> Self {
        Self {
            client,
            tokens,
            profile: JsonSlot::new(store, USER_KEY),
        }
    }

    pub fn client(&self) -> &RalineApiClient {
        &self.client
    }

    /// Validate, log in and remember the issued token in the chosen tier.
    pub async fn login(&self, form: &LoginForm, persistence: Persistence) -> Result<UserInfo> {
        let request = form.validate()?;
        let user = self.client.login(&request, None).await?;
        let token = user.token.as_deref().unwrap_or_default();

        self.tokens.remember(token, persistence)?;
        self.profile.save(&Some(user.clone()))?;
        tracing::info!(email = %request.email, ?persistence, "logged in");
        Ok(user)
    }

    /// Profile of the current bearer. On failure every token tier is cleared
    /// and the request error is returned.
    pub async fn get_user_info(&self) -> Result<UserInfo> {
        match self.client.get_user_info(None).await {
            Ok(user) => {
                self.profile.save(&Some(user.clone()))?;
                Ok(user)
            }
            Err(error) => {
                tracing::warn!(%error, "fetching user info failed, clearing session");
                if let Err(clear_error) = self.logout() {
                    tracing::error!(error = %clear_error, "failed to clear session");
                }
                Err(error.into())
            }
        }
    }

    /// Forget the session locally. The server is not contacted.
    pub fn logout(&self) -> std::result::Result<(), SessionStoreError> {
        let tokens_cleared = self.tokens.clear();
        let profile_cleared = self.profile.clear();
        tracing::info!("logged out");
        tokens_cleared?;
        profile_cleared
    }

    /// Last profile seen by login or [`AuthService::get_user_info`].
    pub fn cached_user(&self) -> Result<Option<UserInfo>> {
        Ok(self.profile.load()?)
    }

    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.tokens.resolve()?.is_some())
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<RegisterResponse> {
        let request = form.validate()?;
        let response = self.client.register(&request, None).await?;
        tracing::info!(email = %request.email, "registered");
        Ok(response)
    }

    /// Finish a password reset.
    pub async fn forgot(&self, form: &ForgotForm) -> Result<()> {
        let request = form.validate()?;
        self.client.forgot(&request, None).await?;
        tracing::info!(email = %request.email, "password reset requested");
        Ok(())
    }

    /// Ask the server to mail a verification code.
    pub async fn send_code(&self, purpose: CodePurpose, email: &str) -> Result<()> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AdminError::Form(FormError::MissingEmail));
        }
        match purpose {
            CodePurpose::Register => self.client.send_register_code(email, None).await?,
            CodePurpose::Reset => self.client.send_reset_code(email, None).await?,
        }
        tracing::info!(email, ?purpose, "verification code sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use raline_api::{ApiConfig, RalineApiClient, UserInfo};
    use session_store::{KeyValueStore, MemoryStore, TokenStore, TOKEN_KEY, USER_KEY};

    use super::{AuthService, CodePurpose};
    use crate::error::{AdminError, FormError};

    #[tokio::test]
    async fn logout_clears_every_tier_without_network() {
        let session = MemoryStore::shared();
        let persistent = MemoryStore::shared();
        let tokens = Arc::new(TokenStore::new(session.clone(), persistent.clone()));
        tokens.set_in_memory(Some("mem".to_owned())).expect("memory");
        session.set(TOKEN_KEY, "sess").expect("session");
        persistent.set(TOKEN_KEY, "disk").expect("persistent");

        // Nothing listens here; any request would fail.
        let client = Arc::new(
            RalineApiClient::new(ApiConfig::new("http://127.0.0.1:9"))
                .expect("client")
                .with_token_store(tokens.clone()),
        );
        let auth = AuthService::new(client, tokens.clone(), persistent.clone());
        persistent
            .set(USER_KEY, &serde_json::to_string(&Some(UserInfo::default())).expect("json"))
            .expect("seed profile");

        auth.logout().expect("logout");
        assert_eq!(tokens.resolve().expect("resolve"), None);
        assert_eq!(session.get(TOKEN_KEY).expect("get"), None);
        assert_eq!(persistent.get(TOKEN_KEY).expect("get"), None);
        assert_eq!(auth.cached_user().expect("profile"), None);
        assert!(!auth.is_logged_in().expect("state"));
    }

    #[tokio::test]
    async fn send_code_requires_email() {
        let tokens = Arc::new(TokenStore::new(MemoryStore::shared(), MemoryStore::shared()));
        let client =
            Arc::new(RalineApiClient::new(ApiConfig::new("http://127.0.0.1:9")).expect("client"));
        let auth = AuthService::new(client, tokens, MemoryStore::shared());

        let error = auth
            .send_code(CodePurpose::Reset, "  ")
            .await
            .expect_err("missing email");
        assert!(matches!(error, AdminError::Form(FormError::MissingEmail)));
    }
}
