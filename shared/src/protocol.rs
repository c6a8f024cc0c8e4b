/// Durable storage key holding the access token.
/// Shared between the startup check, the login flow and logout.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Scheme used in the `Authorization` header for the access token.
pub const TOKEN_TYPE: &str = "Bearer";

/// Allowed user id length (inclusive).
pub const USER_ID_MIN_LEN: usize = 4;
pub const USER_ID_MAX_LEN: usize = 50;

/// Allowed password length (inclusive).
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 100;

/// Maximum display name length.
pub const USER_NAME_MAX_LEN: usize = 50;

/// Special characters a password must draw at least one from.
pub const PASSWORD_SPECIALS: &str = "@$!%*#?&";

/// Birth date wire format (`YYYY-MM-DD`).
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format the value of an `Authorization` header for a token.
pub fn bearer(token: &str) -> String {
    format!("{} {}", TOKEN_TYPE, token)
}
