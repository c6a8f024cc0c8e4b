//! Auth request/response types and client-side form validation.
//!
//! Field names go over the wire in camelCase (`userId`, `birthDate`, ...).
//! Validation mirrors the rules the auth service enforces so most mistakes
//! are caught before a round trip.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::{
    BIRTH_DATE_FORMAT, PASSWORD_MAX_LEN, PASSWORD_MIN_LEN, PASSWORD_SPECIALS, USER_ID_MAX_LEN,
    USER_ID_MIN_LEN, USER_NAME_MAX_LEN,
};

/// A form rule that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("User ID must be between {} and {} characters", USER_ID_MIN_LEN, USER_ID_MAX_LEN)]
    UserIdLength,
    #[error("Password must be between {} and {} characters", PASSWORD_MIN_LEN, PASSWORD_MAX_LEN)]
    PasswordLength,
    #[error("Name must be at most {} characters", USER_NAME_MAX_LEN)]
    UserNameTooLong,
    #[error("Birth date must look like 2000-01-01")]
    InvalidBirthDate,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password needs a letter, a digit and one of {}", PASSWORD_SPECIALS)]
    PasswordPolicy,
}

impl ValidationError {
    /// Wire name of the offending field, for inline error placement.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::UserIdLength => "userId",
            ValidationError::PasswordLength | ValidationError::PasswordPolicy => "password",
            ValidationError::UserNameTooLong => "userName",
            ValidationError::InvalidBirthDate => "birthDate",
            ValidationError::PasswordMismatch => "confirmPassword",
        }
    }
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("userId", &self.user_id)?;
        require("password", &self.password)?;
        Ok(())
    }
}

/// Body of `POST /api/auth/join`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub user_id: String,
    pub password: String,
    pub user_name: String,
    pub birth_date: String,
    pub confirm_password: String,
}

impl SignUpRequest {
    /// Check every field, reporting the first failure in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("userId", &self.user_id)?;
        require("password", &self.password)?;
        require("userName", &self.user_name)?;
        require("birthDate", &self.birth_date)?;
        require("confirmPassword", &self.confirm_password)?;

        let id_len = self.user_id.chars().count();
        if !(USER_ID_MIN_LEN..=USER_ID_MAX_LEN).contains(&id_len) {
            return Err(ValidationError::UserIdLength);
        }

        let pw_len = self.password.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&pw_len) {
            return Err(ValidationError::PasswordLength);
        }

        if self.user_name.chars().count() > USER_NAME_MAX_LEN {
            return Err(ValidationError::UserNameTooLong);
        }

        parse_birth_date(&self.birth_date)?;

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        if !meets_password_policy(&self.password) {
            return Err(ValidationError::PasswordPolicy);
        }

        Ok(())
    }
}

/// User profile returned by login, join and `GET /api/user/me`.
///
/// `access_token` is only populated by login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    #[serde(default)]
    pub join_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub access_token: Option<String>,
}

impl UserResponse {
    /// The issued token, if the server sent a non-empty one.
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// `{ "message": ... }` acknowledgement used by logout and withdraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` birth date.
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    // chrono accepts single-digit months and days; the server does not
    if value.len() != 10 {
        return Err(ValidationError::InvalidBirthDate);
    }
    NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT).map_err(|_| ValidationError::InvalidBirthDate)
}

/// At least one ASCII letter, one digit and one special; nothing else allowed.
pub fn meets_password_policy(password: &str) -> bool {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);

    password.chars().count() >= PASSWORD_MIN_LEN
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_signup() -> SignUpRequest {
        SignUpRequest {
            user_id: "gildong".to_string(),
            password: "secret12!".to_string(),
            user_name: "Hong Gildong".to_string(),
            birth_date: "1995-04-12".to_string(),
            confirm_password: "secret12!".to_string(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(
            LoginRequest::new("  ", "pw").validate(),
            Err(ValidationError::Required("userId"))
        );
        assert_eq!(
            LoginRequest::new("user", "").validate(),
            Err(ValidationError::Required("password"))
        );
        assert!(LoginRequest::new("user", "pw").validate().is_ok());
    }

    #[test]
    fn login_request_serializes_camel_case() {
        let json = serde_json::to_value(LoginRequest::new("user", "pw")).unwrap();
        assert_eq!(json, serde_json::json!({"userId": "user", "password": "pw"}));
    }

    #[test]
    fn signup_accepts_valid_form() {
        assert!(valid_signup().validate().is_ok());
    }

    #[test]
    fn signup_rejects_short_user_id() {
        let req = SignUpRequest {
            user_id: "abc".to_string(),
            ..valid_signup()
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err, ValidationError::UserIdLength);
        assert_eq!(err.field(), "userId");
    }

    #[test]
    fn signup_rejects_mismatched_confirmation() {
        let req = SignUpRequest {
            confirm_password: "secret12?".to_string(),
            ..valid_signup()
        };
        assert_eq!(req.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn mismatch_is_reported_before_policy() {
        let req = SignUpRequest {
            password: "alllettersonly".to_string(),
            confirm_password: "different-one".to_string(),
            ..valid_signup()
        };
        assert_eq!(req.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn signup_rejects_bad_birth_dates() {
        for bad in ["1995-4-12", "1995/04/12", "1995-02-30", "yesterday!"] {
            let req = SignUpRequest {
                birth_date: bad.to_string(),
                ..valid_signup()
            };
            assert_eq!(
                req.validate(),
                Err(ValidationError::InvalidBirthDate),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn signup_rejects_long_name() {
        let req = SignUpRequest {
            user_name: "x".repeat(USER_NAME_MAX_LEN + 1),
            ..valid_signup()
        };
        assert_eq!(req.validate(), Err(ValidationError::UserNameTooLong));
    }

    #[test]
    fn password_policy() {
        assert!(meets_password_policy("abcd123!"));
        assert!(meets_password_policy("Z9&Z9&Z9"));
        // missing special
        assert!(!meets_password_policy("abcd1234"));
        // missing digit
        assert!(!meets_password_policy("abcdefg!"));
        // missing letter
        assert!(!meets_password_policy("1234567!"));
        // disallowed character
        assert!(!meets_password_policy("abcd 123!"));
        assert!(!meets_password_policy("abcd123^"));
        // too short
        assert!(!meets_password_policy("ab1!"));
    }

    #[test]
    fn user_response_parses_login_payload() {
        let json = serde_json::json!({
            "userId": "gildong",
            "userName": "Hong Gildong",
            "joinDate": "2024-03-01T09:30:00",
            "accessToken": "eyJhbGciOi"
        });
        let user: UserResponse = serde_json::from_value(json).unwrap();
        assert_eq!(user.user_id, "gildong");
        assert_eq!(user.token(), Some("eyJhbGciOi"));
        assert!(user.join_date.is_some());
    }

    #[test]
    fn user_response_without_token() {
        let json = serde_json::json!({
            "userId": "gildong",
            "userName": "Hong Gildong",
            "joinDate": null,
            "accessToken": null
        });
        let user: UserResponse = serde_json::from_value(json).unwrap();
        assert_eq!(user.token(), None);
        assert_eq!(user.join_date, None);
    }
}
