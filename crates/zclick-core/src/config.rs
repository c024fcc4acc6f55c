use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let gsc_access_token = lookup("GSC_ACCESS_TOKEN").ok();
    let log_level = or_default("ZCLICK_LOG_LEVEL", "info");
    let gsc_timeout_secs = parse_u64("ZCLICK_GSC_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("ZCLICK_USER_AGENT", "zclick/0.1 (search-analytics)");

    Ok(AppConfig {
        gsc_access_token,
        log_level,
        gsc_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_defaults_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.gsc_access_token.is_none());
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.gsc_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "zclick/0.1 (search-analytics)");
    }

    #[test]
    fn build_app_config_picks_up_access_token() {
        let mut map = HashMap::new();
        map.insert("GSC_ACCESS_TOKEN", "ya29.secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.gsc_access_token.as_deref(), Some("ya29.secret"));
    }

    #[test]
    fn build_app_config_timeout_override() {
        let mut map = HashMap::new();
        map.insert("ZCLICK_GSC_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.gsc_timeout_secs, 60);
    }

    #[test]
    fn build_app_config_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("ZCLICK_GSC_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ZCLICK_GSC_TIMEOUT_SECS"),
            "expected InvalidEnvVar(ZCLICK_GSC_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_redacts_access_token() {
        let mut map = HashMap::new();
        map.insert("GSC_ACCESS_TOKEN", "ya29.secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("ya29.secret"), "token leaked: {debug}");
        assert!(debug.contains("[redacted]"));
    }
}
