use std::env;

pub const DEFAULT_APP_NAME: &str = "DEALS-NG";

/// Where sign-in and sign-up requests go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthBackend {
    /// GoTrue-compatible REST endpoint.
    Remote { url: String, anon_key: String },
    /// In-process accounts, seeded with a demo user.
    Local,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_url: Option<String>,
    pub auth_anon_key: Option<String>,
    pub app_name: String,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self {
            auth_url: non_empty(env::var("DEALS_AUTH_URL").ok()),
            auth_anon_key: non_empty(env::var("DEALS_AUTH_ANON_KEY").ok()),
            app_name: env::var("DEALS_APP_NAME").unwrap_or_else(|_| DEFAULT_APP_NAME.to_string()),
        }
    }

    pub fn auth_backend(&self) -> AuthBackend {
        match (&self.auth_url, &self.auth_anon_key) {
            (Some(url), Some(key)) => AuthBackend::Remote {
                url: url.trim_end_matches('/').to_string(),
                anon_key: key.clone(),
            },
            _ => AuthBackend::Local,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { auth_url: None, auth_anon_key: None, app_name: DEFAULT_APP_NAME.to_string() }
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env() {
        env::remove_var("DEALS_AUTH_URL");
        env::remove_var("DEALS_AUTH_ANON_KEY");
        env::remove_var("DEALS_APP_NAME");

        let config = Config::from_env();
        assert_eq!(config.app_name, "DEALS-NG");
        assert_eq!(config.auth_backend(), AuthBackend::Local);

        // A URL alone is not enough to go remote
        env::set_var("DEALS_AUTH_URL", "https://auth.example.com/");
        assert_eq!(Config::from_env().auth_backend(), AuthBackend::Local);

        env::set_var("DEALS_AUTH_ANON_KEY", "anon");
        env::set_var("DEALS_APP_NAME", "Deals Test");
        let config = Config::from_env();
        assert_eq!(config.app_name, "Deals Test");
        assert_eq!(
            config.auth_backend(),
            AuthBackend::Remote { url: "https://auth.example.com".into(), anon_key: "anon".into() }
        );

        env::set_var("DEALS_AUTH_ANON_KEY", "  ");
        assert_eq!(Config::from_env().auth_backend(), AuthBackend::Local);

        env::remove_var("DEALS_AUTH_URL");
        env::remove_var("DEALS_AUTH_ANON_KEY");
        env::remove_var("DEALS_APP_NAME");
    }
}
