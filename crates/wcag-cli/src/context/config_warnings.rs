use wcag_config::{ENV_PREFIX, WcagConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &WcagConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &WcagConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let sections = [
        ("BACKEND", config.backend.is_configured(), "WCAG_BACKEND__PROJECT_URL"),
        ("AUTH", !config.auth.url.is_empty(), "WCAG_AUTH__URL"),
        ("SERVER", config.server.is_hosted_configured(), "WCAG_SERVER__SUPABASE_URL"),
        ("GENERAL", !config.general.preferences_path.is_empty(), "WCAG_GENERAL__HEALTH_POLL_SECS"),
    ];

    sections
        .into_iter()
        .filter(|(section, configured, _)| !configured && has_mistyped_key(&env_keys, section))
        .map(|(section, _, example)| {
            format!(
                "{} config appears default while {ENV_PREFIX}{section}_* env vars exist. Use double underscores (example: {example}).",
                section.to_ascii_lowercase()
            )
        })
        .collect()
}

/// `WCAG_<SECTION>_KEY` instead of `WCAG_<SECTION>__KEY`.
fn has_mistyped_key(keys: &[String], section: &str) -> bool {
    let single = format!("{ENV_PREFIX}{section}_");
    let double = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}

#[cfg(test)]
mod tests {
    use wcag_config::{BackendConfig, WcagConfig};

    use super::collect_unconfigured_warnings;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter()
            .map(|key| ((*key).to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_unconfigured_warnings(
            &WcagConfig::default(),
            env(&["WCAG_BACKEND_ANON_KEY", "WCAG_SERVER_SUPABASE_URL"]),
        );
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("WCAG_BACKEND__PROJECT_URL"));
    }

    #[test]
    fn double_underscore_keys_are_not_mistyped() {
        let warnings = collect_unconfigured_warnings(
            &WcagConfig::default(),
            env(&["WCAG_BACKEND__ANON_KEY", "WCAG_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn configured_sections_are_not_reported() {
        let config = WcagConfig {
            backend: BackendConfig {
                project_url: "https://abc.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let warnings = collect_unconfigured_warnings(&config, env(&["WCAG_BACKEND_TIMEOUT_SECS"]));
        assert!(warnings.is_empty());
    }
}
