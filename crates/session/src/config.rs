//! Entitlement configuration: admin credentials, code allowlist, checkout.
//!
//! The credential pair and valid-code set are fixed data shipped with the
//! app, not user data. They are injectable so tests can substitute
//! fixtures without touching the matching logic.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};

use afroman_core::{Price, VerificationCode};

/// The external checkout link opened in the device browser. The app never
/// observes its outcome; completion is inferred from manual code entry.
const CHECKOUT_URL: &str = "https://buy.stripe.com/7sYdRb1Nj5xCfSlfKd6Na07";

/// Verification codes handed out after a completed checkout.
const BUILTIN_CODES: [&str; 3] = ["AFROMAN2025", "PREMIUM2025", "EXCLUSIVE2025"];

const BUILTIN_ADMIN_USERNAME: &str = "admin";
const BUILTIN_ADMIN_PASSWORD: &str = "afroman2025";

/// Subscription price in cents, for display ($19.99 one-time).
const SUBSCRIPTION_PRICE_CENTS: i64 = 1999;

/// The configured admin credential pair.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: SecretString,
}

impl AdminCredentials {
    /// Create a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Exact, case-sensitive match on both fields. No trimming.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Injectable entitlement configuration.
#[derive(Debug, Clone)]
pub struct EntitlementConfig {
    admin: AdminCredentials,
    valid_codes: HashSet<VerificationCode>,
    checkout_url: String,
    subscription_price: Price,
}

impl EntitlementConfig {
    /// Create a configuration from explicit parts.
    #[must_use]
    pub fn new(
        admin: AdminCredentials,
        valid_codes: impl IntoIterator<Item = VerificationCode>,
        checkout_url: impl Into<String>,
        subscription_price: Price,
    ) -> Self {
        Self {
            admin,
            valid_codes: valid_codes.into_iter().collect(),
            checkout_url: checkout_url.into(),
            subscription_price,
        }
    }

    /// The configuration shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        let valid_codes = BUILTIN_CODES
            .iter()
            .filter_map(|code| VerificationCode::parse(code).ok())
            .collect();

        Self {
            admin: AdminCredentials::new(BUILTIN_ADMIN_USERNAME, BUILTIN_ADMIN_PASSWORD),
            valid_codes,
            checkout_url: CHECKOUT_URL.to_owned(),
            subscription_price: Price::from_cents(SUBSCRIPTION_PRICE_CENTS),
        }
    }

    /// The configured admin credential pair.
    #[must_use]
    pub const fn admin(&self) -> &AdminCredentials {
        &self.admin
    }

    /// Whether a normalized code is in the allowlist.
    #[must_use]
    pub fn is_valid_code(&self, code: &VerificationCode) -> bool {
        self.valid_codes.contains(code)
    }

    /// The external checkout URL.
    #[must_use]
    pub fn checkout_url(&self) -> &str {
        &self.checkout_url
    }

    /// The one-time subscription price, for display.
    #[must_use]
    pub const fn subscription_price(&self) -> Price {
        self.subscription_price
    }
}

impl Default for EntitlementConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_is_exact_and_case_sensitive() {
        let admin = AdminCredentials::new("admin", "afroman2025");
        assert!(admin.matches("admin", "afroman2025"));
        assert!(!admin.matches("Admin", "afroman2025"));
        assert!(!admin.matches("admin", "AFROMAN2025"));
        assert!(!admin.matches("admin", " afroman2025"));
        assert!(!admin.matches("", ""));
    }

    #[test]
    fn test_debug_redacts_password() {
        let admin = AdminCredentials::new("admin", "afroman2025");
        let debug = format!("{admin:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("afroman2025"));
    }

    #[test]
    fn test_builtin_codes_accepted() {
        let config = EntitlementConfig::builtin();
        for code in ["AFROMAN2025", "PREMIUM2025", "EXCLUSIVE2025"] {
            let code = VerificationCode::parse(code).unwrap();
            assert!(config.is_valid_code(&code), "expected {code} to be valid");
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let config = EntitlementConfig::builtin();
        let code = VerificationCode::parse("NOTACODE").unwrap();
        assert!(!config.is_valid_code(&code));
    }

    #[test]
    fn test_fixture_config_substitutes_allowlist() {
        let config = EntitlementConfig::new(
            AdminCredentials::new("root", "hunter2"),
            [VerificationCode::parse("TESTCODE").unwrap()],
            "https://pay.example.com/checkout",
            Price::from_cents(500),
        );
        assert!(config.admin().matches("root", "hunter2"));
        assert!(config.is_valid_code(&VerificationCode::parse("testcode").unwrap()));
        assert!(!config.is_valid_code(&VerificationCode::parse("AFROMAN2025").unwrap()));
        assert_eq!(config.checkout_url(), "https://pay.example.com/checkout");
        assert_eq!(config.subscription_price().display(), "$5.00");
    }
}
