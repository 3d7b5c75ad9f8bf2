use desk_config::DeskConfig;
use figment::Jail;

#[test]
fn env_overrides_nested_keys() {
    Jail::expect_with(|jail| {
        jail.set_env("EXAMDESK_API__BASE_URL", "https://staging.example.com");
        jail.set_env("EXAMDESK_POLL__INTERVAL_SECS", "2");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://staging.example.com");
        assert_eq!(config.poll.interval_secs, 2);
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("examdesk.toml", "[ui]\ndefault_limit = 7\n")?;
        jail.set_env("EXAMDESK_UI__DEFAULT_LIMIT", "9");

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.ui.default_limit, 9);
        Ok(())
    });
}

#[test]
fn session_env_tier_does_not_break_config() {
    Jail::expect_with(|jail| {
        jail.set_env("EXAMDESK_SESSION__TOKEN", "jwt-from-ci");
        jail.set_env("EXAMDESK_SESSION__ROLE", "admin");

        let config = DeskConfig::load().expect("config loads");
        assert!(config.session.path.is_empty());
        Ok(())
    });
}
