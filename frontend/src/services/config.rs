use tutor_booking::ContactFormConfig;

const BUNDLED_CONFIG: &str = include_str!("../../contact_form.yaml");

/// Contact form settings shipped with the page, default settings if they do not parse
pub fn load_config() -> ContactFormConfig {
    parse_config(BUNDLED_CONFIG).unwrap_or_else(|e| {
        gloo::console::error!(format!("{:#}; using default contact form settings", e));
        ContactFormConfig::default()
    })
}

fn parse_config(yaml: &str) -> anyhow::Result<ContactFormConfig> {
    ContactFormConfig::from_yaml_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_booking::PrefillPolicy;

    #[test]
    fn test_bundled_config_parses() {
        let config = parse_config(BUNDLED_CONFIG).unwrap();
        assert_eq!(config.prefill_policy, PrefillPolicy::Observe);
        assert_eq!(config.currency_code, "QAR");
        assert_eq!(config.confirm_route, "/book-session/confirm");
    }

    #[test]
    fn test_snapshot_config_parses() {
        let config = parse_config("prefill_policy: snapshot\n").unwrap();
        assert_eq!(config.prefill_policy, PrefillPolicy::Snapshot);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(parse_config("prefill_policy: [observe\n").is_err());
    }
}
