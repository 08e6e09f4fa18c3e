//! Connection settings from the environment or the configuration file of the `ocm` command line tool.
//!
//! # Usage
//! The [`Config`] has several constructors plus logic to infer it from the environment.
//!
//! Unless you have issues, prefer using [`Config::infer`], and pass it to a [`Client`][crate::Client].
mod file_config;

use std::{path::Path, time::Duration};

use secrecy::SecretString;

use crate::error::ConfigError;
pub use file_config::{ConfigFile, CONFIG_ENV};

/// URL of the production API server
pub const DEFAULT_URL: &str = "https://api.openshift.com";

/// Environment variable holding the URL of the API server
pub const URL_ENV: &str = "OCM_URL";
/// Environment variable holding the access token
pub const TOKEN_ENV: &str = "OCM_TOKEN";
/// Environment variable holding a user to impersonate
pub const IMPERSONATE_ENV: &str = "OCM_IMPERSONATE";

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration object detailing the API server, the access token and timeouts.
///
/// # Usage
/// Construct a [`Config`] instance by using one of the constructors, and adjust
/// the public fields if needed:
///
/// ```rust
/// use ocm_client::Config;
///
/// let mut config = Config::new("https://api.stage.openshift.com".parse()?);
/// config.token = Some("eyJhbGciOiJSUzI1NiJ9".to_string().into());
/// config.impersonate = Some("alice@example.com".into());
/// # Ok::<(), http::uri::InvalidUri>(())
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
#[derive(Debug, Clone)]
pub struct Config {
    /// The API server url
    pub url: http::Uri,
    /// Bearer token sent with every request
    pub token: Option<SecretString>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// User every request is made on behalf of
    ///
    /// Only honored by the server for callers allowed to impersonate.
    pub impersonate: Option<String>,
    /// Timeout for establishing a connection to the server.
    ///
    /// A value of `None` means no timeout
    pub connect_timeout: Option<Duration>,
    /// Timeout for receiving data from the server.
    ///
    /// A value of `None` means no timeout
    pub read_timeout: Option<Duration>,
    /// Timeout for sending data to the server.
    ///
    /// A value of `None` means no timeout
    pub write_timeout: Option<Duration>,
}

impl Config {
    /// Construct a new config where only the `url` is set by the user,
    /// and everything else receives a default value.
    ///
    /// Most likely you want to use [`Config::infer`] to infer the config from
    /// the environment.
    pub fn new(url: http::Uri) -> Self {
        Self {
            url,
            token: None,
            user_agent: default_user_agent(),
            impersonate: None,
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            write_timeout: None,
        }
    }

    /// Infer the configuration from the environment
    ///
    /// Done by reading the environment variables first, and then if no token
    /// is found there, the configuration file of `ocm login`. `OCM_URL` and
    /// `OCM_IMPERSONATE` still apply on top of the file.
    ///
    /// Fails if inference from both sources fails
    pub fn infer() -> Result<Self, ConfigError> {
        Self::infer_with(|key| std::env::var(key).ok())
    }

    fn infer_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match Self::from_lookup(&lookup) {
            Err(env_err) => {
                tracing::trace!("No config in the environment: {}", env_err);
                tracing::trace!("Falling back to the ocm configuration file");
                let mut config = file_config::default_path(&lookup)
                    .ok_or(ConfigError::NoConfigPath)
                    .and_then(Self::from_file)
                    .map_err(|file_err| ConfigError::ConfigInferenceExhausted {
                        env: Box::new(env_err),
                        file: Box::new(file_err),
                    })?;
                config.apply_env_overrides(&lookup)?;
                Ok(config)
            }
            success => success,
        }
    }

    fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        if let Some(url) = get(URL_ENV) {
            self.url = parse_url(&url)?;
        }
        if let Some(user) = get(IMPERSONATE_ENV) {
            self.impersonate = Some(user);
        }
        Ok(())
    }

    /// Create configuration from the `OCM_TOKEN`, `OCM_URL` and `OCM_IMPERSONATE` environment variables
    ///
    /// Only `OCM_TOKEN` is required; the url defaults to [`DEFAULT_URL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let token = get(TOKEN_ENV).ok_or(ConfigError::MissingEnv(TOKEN_ENV))?;
        let url = parse_url(get(URL_ENV).as_deref().unwrap_or(DEFAULT_URL))?;

        let mut config = Self::new(url);
        config.token = Some(SecretString::from(token));
        config.impersonate = get(IMPERSONATE_ENV);
        Ok(config)
    }

    /// Create configuration from the default configuration file
    ///
    /// This will respect the `$OCM_CONFIG` evar, but otherwise default to
    /// `~/.config/ocm/ocm.json` or `~/.ocm.json`, as `ocm login` does.
    pub fn from_default_file() -> Result<Self, ConfigError> {
        let path = file_config::default_path(|key| std::env::var(key).ok()).ok_or(ConfigError::NoConfigPath)?;
        Self::from_file(path)
    }

    /// Create configuration from a configuration file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_config_file(ConfigFile::read_from(path)?)
    }

    /// Create configuration from an already parsed [`ConfigFile`]
    pub fn from_config_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let token = file.access_token.ok_or(ConfigError::MissingToken)?;
        let url = parse_url(file.url.as_deref().unwrap_or(DEFAULT_URL))?;

        let mut config = Self::new(url);
        config.token = Some(token);
        Ok(config)
    }
}

// The command line tool accepts the names of the public environments as urls.
fn parse_url(url: &str) -> Result<http::Uri, ConfigError> {
    let resolved = match url {
        "production" | "prod" => DEFAULT_URL,
        "staging" | "stage" => "https://api.stage.openshift.com",
        "integration" | "int" => "https://api.integration.openshift.com",
        other => other,
    };
    resolved.parse().map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

fn default_user_agent() -> String {
    format!("ocm-sdk-rs/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::new(DEFAULT_URL.parse().unwrap());
        assert!(config.token.is_none());
        assert!(config.impersonate.is_none());
        assert_eq!(config.connect_timeout, Some(DEFAULT_CONNECT_TIMEOUT));
        assert!(config.user_agent.starts_with("ocm-sdk-rs/"));
    }

    #[test]
    fn env_requires_a_token() {
        let err = Config::from_lookup(env(&[(URL_ENV, "https://api.stage.openshift.com")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(TOKEN_ENV)));

        let err = Config::from_lookup(env(&[(TOKEN_ENV, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingEnv(TOKEN_ENV)));
    }

    #[test]
    fn env_config() {
        let config = Config::from_lookup(env(&[
            (TOKEN_ENV, "token"),
            (URL_ENV, "staging"),
            (IMPERSONATE_ENV, "alice@example.com"),
        ]))
        .unwrap();
        assert_eq!(config.token.unwrap().expose_secret(), "token");
        assert_eq!(config.url.host(), Some("api.stage.openshift.com"));
        assert_eq!(config.impersonate.as_deref(), Some("alice@example.com"));

        let config = Config::from_lookup(env(&[(TOKEN_ENV, "token")])).unwrap();
        assert_eq!(config.url.host(), Some("api.openshift.com"));
        assert!(config.impersonate.is_none());
    }

    #[test]
    fn invalid_url() {
        let err = Config::from_lookup(env(&[(TOKEN_ENV, "token"), (URL_ENV, "http://bad host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocm.json");
        std::fs::write(&path, r#"{"access_token":"abc","url":"http://localhost:8000"}"#).unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.token.unwrap().expose_secret(), "abc");
        assert_eq!(config.url.port_u16(), Some(8000));
        assert_eq!(config.url.scheme_str(), Some("http"));

        std::fs::write(&path, r#"{"url":"http://localhost:8000"}"#).unwrap();
        assert!(matches!(Config::from_file(&path), Err(ConfigError::MissingToken)));
    }

    #[test]
    fn inferred_file_config_honors_env_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ocm.json");
        std::fs::write(&path, r#"{"access_token":"abc","url":"http://localhost:8000"}"#).unwrap();
        let path = path.to_str().unwrap();

        let config = Config::infer_with(env(&[
            (CONFIG_ENV, path),
            (URL_ENV, "staging"),
            (IMPERSONATE_ENV, "alice@example.com"),
        ]))
        .unwrap();
        assert_eq!(config.token.unwrap().expose_secret(), "abc");
        assert_eq!(config.url.host(), Some("api.stage.openshift.com"));
        assert_eq!(config.impersonate.as_deref(), Some("alice@example.com"));

        let config = Config::infer_with(env(&[(CONFIG_ENV, path)])).unwrap();
        assert_eq!(config.url.port_u16(), Some(8000));

        let err = Config::infer_with(env(&[(CONFIG_ENV, path), (URL_ENV, "http://bad host")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn infer_reports_both_failures() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = Config::infer_with(env(&[(CONFIG_ENV, missing.to_str().unwrap())])).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigInferenceExhausted { .. }));
    }
}
