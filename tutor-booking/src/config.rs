//! # Contact Form Configuration
//!
//! Settings for the contact information step, stored as YAML. Every key is
//! optional; anything left out falls back to `ContactFormConfig::default()`.
//!
//! ```yaml
//! prefill_policy: snapshot
//! currency_code: QAR
//! session_duration_label: 1 hour
//! confirm_route: /book-session/confirm
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How signed-in user values are applied to the name and email fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefillPolicy {
    /// Re-apply on every session change, overwriting any edits (last write wins)
    Observe,
    /// Apply once when the screen mounts and ignore later session changes
    Snapshot,
}

impl Default for PrefillPolicy {
    fn default() -> Self {
        Self::Observe
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormConfig {
    pub prefill_policy: PrefillPolicy,
    /// Currency shown in front of the price in the booking summary
    pub currency_code: String,
    /// Fixed session length shown in the booking summary
    pub session_duration_label: String,
    /// Route pushed when the contact details are accepted
    pub confirm_route: String,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            prefill_policy: PrefillPolicy::default(),
            currency_code: "QAR".to_string(),
            session_duration_label: "1 hour".to_string(),
            confirm_route: shared::CONFIRM_ROUTE.to_string(),
        }
    }
}

impl ContactFormConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ContactFormConfig =
            serde_yaml::from_str(yaml).context("Failed to parse contact form config")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContactFormConfig::default();
        assert_eq!(config.prefill_policy, PrefillPolicy::Observe);
        assert_eq!(config.currency_code, "QAR");
        assert_eq!(config.session_duration_label, "1 hour");
        assert_eq!(config.confirm_route, "/book-session/confirm");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ContactFormConfig::from_yaml_str("prefill_policy: snapshot\n").unwrap();
        assert_eq!(config.prefill_policy, PrefillPolicy::Snapshot);
        assert_eq!(config.currency_code, "QAR");
        assert_eq!(config.confirm_route, "/book-session/confirm");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ContactFormConfig::from_yaml_str("").unwrap();
        assert_eq!(config, ContactFormConfig::default());
    }

    #[test]
    fn test_invalid_policy_rejected() {
        assert!(ContactFormConfig::from_yaml_str("prefill_policy: sometimes\n").is_err());
    }
}
