use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

/// Credentials for the transactional email relay used by the contact form.
///
/// Loaded by the server at startup and handed to the browser through the
/// `get_mail_config` server function. The public key is a browser-side key, so
/// shipping it to the client is expected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    #[error("environment variable {0} is empty")]
    Empty(&'static str),
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or(ConfigError::Missing(key))?;
            let value = value.trim();
            if value.is_empty() {
                return Err(ConfigError::Empty(key));
            }
            Ok(value.to_string())
        };
        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            endpoint: lookup(ENDPOINT_VAR)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}
