use serde::Deserialize;
use validator::Validate;

/// Credentials submitted by the login form.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    /// Operator email address.
    #[validate(email)]
    pub email: String,
    /// Operator password, compared against the configured secret.
    #[validate(length(min = 1))]
    pub password: String,
}
