//! Admin form validation. Each form turns into its request payload only when
//! every check passes.

use raline_api::{ForgotRequest, LoginRequest, ProfileUpdate, RegisterRequest};

use crate::error::FormError;

const MIN_NICK_CHARS: usize = 2;

fn required(value: &str, error: FormError) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(error);
    }
    Ok(value.to_owned())
}

fn matching_passwords(password: &str, again: &str) -> Result<String, FormError> {
    if password.is_empty() || again.is_empty() || password != again {
        return Err(FormError::PasswordMismatch);
    }
    Ok(password.to_owned())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Two-factor code, when the account has it enabled.
    pub code: Option<String>,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = required(&self.email, FormError::MissingEmail)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        let mut request = LoginRequest::new(email, self.password.clone());
        if let Some(code) = self.code.as_deref() {
            request = request.with_code(code.trim());
        }
        Ok(request)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub nick: String,
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_again: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let nick = self.nick.trim();
        if nick.chars().count() < MIN_NICK_CHARS {
            return Err(FormError::IllegalNickname);
        }
        let email = required(&self.email, FormError::MissingEmail)?;
        let code = required(&self.code, FormError::MissingCode)?;
        let password = matching_passwords(&self.password, &self.password_again)?;

        Ok(RegisterRequest {
            name: nick.to_owned(),
            email,
            passwd: password,
            validate_code: code,
            ..RegisterRequest::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotForm {
    pub email: String,
    pub code: String,
    pub password: String,
    pub password_again: String,
}

impl ForgotForm {
    pub fn validate(&self) -> Result<ForgotRequest, FormError> {
        let email = required(&self.email, FormError::MissingEmail)?;
        let code = required(&self.code, FormError::MissingCode)?;
        let password = matching_passwords(&self.password, &self.password_again)?;

        Ok(ForgotRequest {
            email,
            password,
            validate_code: code,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub gender: String,
}

impl ProfileForm {
    pub fn validate(&self) -> Result<ProfileUpdate, FormError> {
        let name = required(&self.name, FormError::MissingProfile)?;
        let gender = required(&self.gender, FormError::MissingProfile)?;
        Ok(ProfileUpdate {
            name: Some(name),
            gender: Some(gender),
            ..ProfileUpdate::default()
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub password: String,
    pub confirm: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<ProfileUpdate, FormError> {
        if self.password.is_empty() || self.confirm.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.password != self.confirm {
            return Err(FormError::PasswordMismatch);
        }
        Ok(ProfileUpdate {
            password: Some(self.password.clone()),
            ..ProfileUpdate::default()
        })
    }
}

pub fn avatar_update(url: &str) -> Result<ProfileUpdate, FormError> {
    Ok(ProfileUpdate {
        avatar: Some(required(url, FormError::MissingAvatar)?),
        ..ProfileUpdate::default()
    })
}
