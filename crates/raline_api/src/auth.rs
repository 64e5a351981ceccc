//! `token` and account endpoints.

use crate::client::{AbortSignal, RalineApiClient};
use crate::error::RalineApiError;
use crate::payload::{EmailRequest, ForgotRequest, LoginRequest, RegisterRequest, TwoFactorConfirm};
use crate::records::{RegisterResponse, TwoFactorSetup, UserInfo};
use crate::request::RequestSpec;

impl RalineApiClient {
    /// `POST token`. The returned profile always carries a token.
    pub async fn login(
        &self,
        credentials: &LoginRequest,
        abort: Option<&AbortSignal>,
    ) -> Result<UserInfo, RalineApiError> {
        let spec = RequestSpec::post("token")
            .with_operation("Login")
            .with_body(credentials)?;
        let user: UserInfo = self.send(spec, abort).await?.decode_data()?;
        if user.token.as_deref().map_or(true, str::is_empty) {
            return Err(RalineApiError::MissingField("token"));
        }
        Ok(user)
    }

    /// `GET token`: profile of the current bearer.
    pub async fn get_user_info(
        &self,
        abort: Option<&AbortSignal>,
    ) -> Result<UserInfo, RalineApiError> {
        let spec = RequestSpec::get("token").with_operation("Get user info");
        self.send(spec, abort).await?.decode_data()
    }

    /// `POST user`.
    pub async fn register(
        &self,
        request: &RegisterRequest,
        abort: Option<&AbortSignal>,
    ) -> Result<RegisterResponse, RalineApiError> {
        let spec = RequestSpec::post("user")
            .with_operation("Register")
            .with_body(request)?;
        let response = self.send(spec, abort).await?;
        match response.data() {
            serde_json::Value::Object(_) => response.decode_data(),
            _ => Ok(RegisterResponse::default()),
        }
    }

    /// `POST user/password`: finish a password reset.
    pub async fn forgot(
        &self,
        request: &ForgotRequest,
        abort: Option<&AbortSignal>,
    ) -> Result<(), RalineApiError> {
        let spec = RequestSpec::post("user/password")
            .with_operation("Reset password")
            .with_body(request)?;
        self.send(spec, abort).await.map(|_| ())
    }

    /// `POST user/register-validate-code`.
    pub async fn send_register_code(
        &self,
        email: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<(), RalineApiError> {
        let spec = RequestSpec::post("user/register-validate-code")
            .with_operation("Send register code")
            .with_body(&EmailRequest { email })?;
        self.send(spec, abort).await.map(|_| ())
    }

    /// `POST user/reset-validate-code`.
    pub async fn send_reset_code(
        &self,
        email: &str,
        abort: Option<&AbortSignal>,
    ) -> Result<(), RalineApiError> {
        let spec = RequestSpec::post("user/reset-validate-code")
            .with_operation("Send reset code")
            .with_body(&EmailRequest { email })?;
        self.send(spec, abort).await.map(|_| ())
    }

    /// `GET token/2fa`, optionally for a given email before login.
    pub async fn get_2fa_token(
        &self,
        email: Option<&str>,
        abort: Option<&AbortSignal>,
    ) -> Result<TwoFactorSetup, RalineApiError> {
        let mut spec = RequestSpec::get("token/2fa").with_operation("Get 2FA token");
        if let Some(email) = email.filter(|email| !email.is_empty()) {
            spec = spec.with_query("email", email);
        }
        self.send(spec, abort).await?.decode_data()
    }

    /// `POST token/2fa`: confirm enrollment with a one-time code.
    pub async fn confirm_2fa(
        &self,
        request: &TwoFactorConfirm,
        abort: Option<&AbortSignal>,
    ) -> Result<(), RalineApiError> {
        let spec = RequestSpec::post("token/2fa")
            .with_operation("Confirm 2FA")
            .with_body(request)?;
        self.send(spec, abort).await.map(|_| ())
    }
}
