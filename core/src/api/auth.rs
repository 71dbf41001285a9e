//! Authentication endpoints.
use super::client::{decode, json_body, ApiClient};
use super::transport::{Request, Transport};
use crate::constants::MIN_PASSWORD_LENGTH;
use crate::system::Credentials;
use crate::types::Role;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Login credentials.
#[derive(Serialize, Debug, Clone)]
pub struct LoginArgs {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,

    #[serde(default)]
    user: LoginUser,
}

#[derive(Deserialize, Default)]
struct LoginUser {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    role: Role,
}

/// New account details.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignupArgs {
    pub name: String,
    pub email: String,
    pub password: String,
    pub graduation_year: String,
}

/// Password reset form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasswordReset {
    pub password: String,
    pub confirm: String,
}

impl PasswordReset {
    /// Checks the passwords before contacting the backend.
    pub fn validate(&self) -> Result {
        if self.password != self.confirm {
            return Err(Error::Validation("Passwords do not match".to_string()));
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(Error::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        Ok(())
    }
}

/// User facing description of a failed signup.
pub fn describe_signup_error(err: &Error) -> String {
    match err {
        Error::Validation(msg) if msg.contains("exists") => {
            "This email is already registered.".to_string()
        }
        Error::Validation(msg) if msg.contains("year") => {
            "Please enter a valid graduation year (1950–2030).".to_string()
        }
        Error::Network(_) => "Network error. Please check your connection.".to_string(),
        err => err.to_string(),
    }
}

/// User facing description of a failed login.
pub fn describe_login_error(err: &Error) -> String {
    match err {
        Error::PendingApproval => {
            "Your account is pending approval. You will receive an email when approved."
                .to_string()
        }
        Error::InvalidCredentials => "Invalid email or password.".to_string(),
        Error::Network(_) => "Network error. Please check your connection.".to_string(),
        err => err.to_string(),
    }
}

impl<T> ApiClient<T>
where
    T: Transport,
{
    /// Exchanges an email and password for session [`Credentials`].
    #[tracing::instrument(skip(self, args), fields(email = %args.email))]
    pub async fn login(&self, args: &LoginArgs) -> Result<Credentials> {
        let request = Request::post("/api/auth/login").json(json_body(args)?);
        let response = self.transport().send(request).await?;
        if !response.is_success() {
            return Err(Error::from_login_status(response.status, &response.body));
        }

        let LoginResponse { token, user } = decode(&response)?;
        Ok(Credentials::new(
            token,
            user.role,
            user.name.unwrap_or_default(),
        ))
    }

    /// Creates an account pending approval.
    #[tracing::instrument(skip(self, args), fields(email = %args.email))]
    pub async fn signup(&self, args: &SignupArgs) -> Result {
        self.submit(Request::post("/api/auth/signup").json(json_body(args)?))
            .await
    }

    /// Requests a password reset link.
    ///
    /// # Returns
    /// The backend's confirmation message.
    #[tracing::instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<String> {
        let request =
            Request::post("/api/auth/forgot-password").json(serde_json::json!({ "email": email }));

        let msg = self.message(request).await?;
        Ok(msg.unwrap_or_else(|| "Check your email for a password reset link.".to_string()))
    }

    /// Completes a password reset.
    /// The reset token comes from the emailed link and is not a session credential.
    #[tracing::instrument(skip_all)]
    pub async fn reset_password(
        &self,
        reset_token: &str,
        reset: &PasswordReset,
    ) -> Result<String> {
        reset.validate()?;
        let request = Request::post(format!("/api/auth/reset-password/{reset_token}"))
            .json(serde_json::json!({ "password": reset.password }));

        let msg = self.message(request).await?;
        Ok(msg.unwrap_or_else(|| "Password has been reset.".to_string()))
    }
}
