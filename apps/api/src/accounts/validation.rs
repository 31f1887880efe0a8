use serde::Deserialize;

use crate::errors::AppError;
use crate::profile::validation::{ProfilePayload, ProfileUpdate};

/// Sign-up body: credentials plus the same fields as a profile update.
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationPayload {
    pub email: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: ProfilePayload,
}

/// A validated sign-up. Holds the plain password until it is hashed.
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub profile: ProfileUpdate,
}

impl TryFrom<RegistrationPayload> for NewAccount {
    type Error = AppError;

    fn try_from(payload: RegistrationPayload) -> Result<Self, AppError> {
        let email = payload.email.trim().to_lowercase();
        if email.is_empty() || payload.password.is_empty() {
            return Err(AppError::Validation("Missing required fields".to_string()));
        }
        if !is_plausible_email(&email) {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }

        let profile = ProfileUpdate::try_from(payload.profile)?;

        Ok(NewAccount {
            email,
            password: payload.password,
            profile,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
