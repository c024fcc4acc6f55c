#[derive(Clone)]
pub struct AppConfig {
    /// OAuth access token for the Search Console API. Optional at load time
    /// so that offline subcommands still work; required before any fetch.
    pub gsc_access_token: Option<String>,
    pub log_level: String,
    pub gsc_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "gsc_access_token",
                &self.gsc_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("gsc_timeout_secs", &self.gsc_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
