use shared::ApiClientConfig;
use web_sys::window;

/// Used when neither a build-time override nor a window location exists.
const FALLBACK_BASE_URL: &str = "http://localhost:8080";

/// Get the base HTTP URL of the auth API.
///
/// `PORTAL_API_URL` at build time wins; otherwise the page's own origin
/// (e.g. "https://myapp.com") is used.
pub fn get_base_url() -> String {
    if let Some(url) = option_env!("PORTAL_API_URL").filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    let Some(window) = window() else {
        return FALLBACK_BASE_URL.to_string();
    };
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:8080".to_string());

    format!("{}//{}", protocol, host)
}

/// Client configuration for anonymous calls (login, join, health).
pub fn api_config() -> ApiClientConfig {
    ApiClientConfig::new(get_base_url())
}

/// Client configuration carrying the session token.
pub fn authed_config(token: &str) -> ApiClientConfig {
    api_config().with_token(token)
}

/// Group digits in threes (e.g., 42950 -> "42,950")
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-dollar amount with commas (e.g., 42950 -> "$42,950")
pub fn format_dollars(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// Up to two uppercase initials for an avatar (e.g., "Hong Gildong" -> "HG")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(2421), "2,421");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn formats_dollars() {
        assert_eq!(format_dollars(42950), "$42,950");
        assert_eq!(format_dollars(18), "$18");
    }

    #[test]
    fn builds_initials() {
        assert_eq!(initials("Hong Gildong"), "HG");
        assert_eq!(initials("ada"), "A");
        assert_eq!(initials("  grace  brewster murray "), "GB");
        assert_eq!(initials(""), "");
    }
}
