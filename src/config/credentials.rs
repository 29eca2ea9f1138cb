//! Credential resolution for the chat endpoint.
//!
//! Keys come from the config file or an environment variable and are
//! wrapped so they never end up in logs.

use super::types::ChatConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution for the chat endpoint.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    Configured(SecureString),
    Unconfigured { reason: String },
}

impl ChatConfig {
    /// Resolve the API key: `api_key` first, then the `api_key_env` variable.
    pub fn resolve_credential(&self) -> CredentialStatus {
        self.resolve_credential_with(|name| std::env::var(name).ok())
    }

    /// Same as [`resolve_credential`](Self::resolve_credential) with an
    /// injectable environment lookup.
    pub fn resolve_credential_with(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> CredentialStatus {
        if let Some(key) = self.api_key.as_deref().filter(|k| !k.is_empty()) {
            return CredentialStatus::Configured(SecureString::new(key.to_string()));
        }
        match lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()) {
            Some(key) => CredentialStatus::Configured(SecureString::new(key.trim().to_string())),
            None => CredentialStatus::Unconfigured {
                reason: format!("chat.api_key is not set and ${} is empty", self.api_key_env),
            },
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.resolve_credential(), CredentialStatus::Configured(_))
    }
}
