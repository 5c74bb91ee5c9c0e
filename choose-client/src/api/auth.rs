//! Auth client
//!
//! Login and the two token-bearing verification flows store the returned
//! token in the transport's token store. Logout clears it before calling
//! the backend, whatever the backend then answers.

use serde::de::IgnoredAny;
use shared::client::{
    EmailRequest, LoginRequest, RegisterRequest, ResetPasswordRequest, SetPasswordRequest,
    TokenRequest,
};
use shared::models::{AuthSession, User, UserDto};
use tracing::info;

use super::unauthorized_as_none;
use crate::{ClientResult, HttpClient};

pub struct AuthApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> AuthApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Sign in with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let dto: UserDto = self.http.post("/auth/login", &body).await?;
        if let Some(token) = dto.token.as_deref().filter(|t| !t.is_empty()) {
            self.http.token_store().set(token);
            info!("Logged in, token stored");
        }
        Ok(User::from(dto))
    }

    /// Register without a password; the account is activated from the
    /// verification email.
    pub async fn register(&self, name: &str, email: &str) -> ClientResult<()> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
        };
        let _: IgnoredAny = self.http.post("/auth/register", &body).await?;
        Ok(())
    }

    /// Current user, or `None` when not signed in
    pub async fn get_me(&self) -> ClientResult<Option<User>> {
        let dto: Option<UserDto> = unauthorized_as_none(self.http.get("/auth/me").await)?;
        Ok(dto.map(User::from))
    }

    pub async fn logout(&self) -> ClientResult<()> {
        self.http.token_store().remove();
        info!("Local token cleared");
        let _: IgnoredAny = self.http.post_empty("/auth/logout").await?;
        Ok(())
    }

    /// Confirm an email address and sign the user in
    pub async fn verify_email(&self, token: &str) -> ClientResult<Option<AuthSession>> {
        self.token_flow("/auth/verify-email", token).await
    }

    pub async fn resend_verification(&self) -> ClientResult<()> {
        let _: IgnoredAny = self.http.post_empty("/auth/resend-verification").await?;
        Ok(())
    }

    pub async fn forgot_password(&self, email: &str) -> ClientResult<()> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        let _: IgnoredAny = self.http.post("/auth/forgot-password", &body).await?;
        Ok(())
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> ClientResult<()> {
        let body = ResetPasswordRequest {
            token: token.to_string(),
            new_password: new_password.to_string(),
        };
        let _: IgnoredAny = self.http.post("/auth/reset-password", &body).await?;
        Ok(())
    }

    /// Email a magic sign-in link
    pub async fn login_magic(&self, email: &str) -> ClientResult<()> {
        let body = EmailRequest {
            email: email.to_string(),
        };
        let _: IgnoredAny = self.http.post("/auth/login-magic", &body).await?;
        Ok(())
    }

    /// Complete a magic-link sign-in
    pub async fn login_verify(&self, token: &str) -> ClientResult<Option<AuthSession>> {
        self.token_flow("/auth/login-verify", token).await
    }

    /// First-time password setup. `token` comes from the emailed link; the
    /// session cookie or bearer token identifies the user otherwise.
    pub async fn set_password(&self, new_password: &str, token: Option<&str>) -> ClientResult<()> {
        let body = SetPasswordRequest {
            new_password: new_password.to_string(),
            token: token.filter(|t| !t.is_empty()).map(str::to_string),
        };
        let _: IgnoredAny = self.http.post("/auth/set-password", &body).await?;
        Ok(())
    }

    /// POST a one-time token; a response carrying a bearer token signs the
    /// user in.
    async fn token_flow(&self, path: &str, token: &str) -> ClientResult<Option<AuthSession>> {
        let body = TokenRequest {
            token: token.to_string(),
        };
        let dto: Option<UserDto> = self.http.post(path, &body).await?;
        let Some(mut dto) = dto else {
            return Ok(None);
        };
        let Some(token) = dto.token.take().filter(|t| !t.is_empty()) else {
            return Ok(None);
        };

        self.http.token_store().set(&token);
        info!(path, "Signed in via one-time token");
        Ok(Some(AuthSession {
            user: User::from(dto),
            token,
        }))
    }
}
