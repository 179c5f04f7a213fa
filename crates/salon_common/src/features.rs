//! Runtime feature switches.
//!
//! A feature is on when its `use_*` flag is set and its configuration
//! section is present. Only mail delivery is switchable today.

use salon_config::AppConfig;

/// Returns `true` when `use_feature` is set and the section exists.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Email notifications need `use_mail = true` and a `[mail]` section.
pub fn is_mail_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_mail, config.mail.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use salon_config::MailConfig;

    #[test]
    fn test_mail_requires_flag_and_section() {
        let mut config = AppConfig::default();
        assert!(!is_mail_enabled(&config));

        config.use_mail = true;
        assert!(!is_mail_enabled(&config));

        config.mail = Some(MailConfig {
            api_url: "http://localhost/send".into(),
            api_key: "k".into(),
            from_address: "salon@example.com".into(),
            from_name: None,
            business_name: None,
        });
        assert!(is_mail_enabled(&config));

        config.use_mail = false;
        assert!(!is_mail_enabled(&config));
    }
}
