use desk_config::{ApiConfig, DeskConfig, ENV_PREFIX, PollConfig, SessionConfig, UiConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("API", config.api == ApiConfig::default(), "BASE_URL"),
        ("POLL", config.poll == PollConfig::default(), "INTERVAL_SECS"),
        ("UI", config.ui == UiConfig::default(), "NOTICE_SECS"),
        ("SESSION", config.session == SessionConfig::default(), "BACKEND"),
    ];

    sections
        .into_iter()
        .filter(|(section, is_default, _)| *is_default && has_single_underscore_key(&env_keys, section))
        .map(|(section, _, example)| {
            format!(
                "{section} config appears default while {ENV_PREFIX}{section}_* env vars exist. \
                 Use double underscores (example: {ENV_PREFIX}{section}__{example})."
            )
        })
        .collect()
}

/// `EXAMDESK_API_BASE_URL` instead of `EXAMDESK_API__BASE_URL`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let prefix = format!("{ENV_PREFIX}{section}_");
    let nested = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&prefix) && !key.starts_with(&nested))
}

#[cfg(test)]
mod tests {
    use desk_config::DeskConfig;
    use pretty_assertions::assert_eq;

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "x".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &DeskConfig::default(),
            env(&["EXAMDESK_API_BASE_URL", "EXAMDESK_POLL_INTERVAL_SECS"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("EXAMDESK_API__BASE_URL"));
    }

    #[test]
    fn nested_keys_do_not_warn() {
        let warnings = collect_unconfigured_warnings(
            &DeskConfig::default(),
            env(&["EXAMDESK_SESSION__TOKEN", "EXAMDESK_LOG", "EXAMDESK_KEYRING_SERVICE"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_do_not_warn() {
        let mut config = DeskConfig::default();
        config.api.base_url = "https://exams.example.com".to_string();
        let warnings =
            collect_unconfigured_warnings(&config, env(&["EXAMDESK_API_BASE_URL"]));
        assert_eq!(warnings, Vec::<String>::new());
    }
}
