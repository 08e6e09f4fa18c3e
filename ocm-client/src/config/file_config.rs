use std::{
    fs,
    path::{Path, PathBuf},
};

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;

/// Environment variable overriding the location of the configuration file
pub const CONFIG_ENV: &str = "OCM_CONFIG";

/// Configuration file written by `ocm login`
///
/// Stored in `~/.config/ocm/ocm.json` by default, or `~/.ocm.json` for older
/// versions of the command line tool. Only the attributes needed to reach the API
/// are read, everything else in the file is ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// The access token obtained at login
    #[serde(default, deserialize_with = "deserialize_secretstring")]
    pub access_token: Option<SecretString>,
    /// URL of the API server, or one of the `production`, `staging`, `integration` aliases
    #[serde(default)]
    pub url: Option<String>,
}

impl ConfigFile {
    /// Read a configuration file from `path`.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.into(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::ParseFile {
            path: path.into(),
            source,
        })
    }
}

fn deserialize_secretstring<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|token| !token.is_empty())
        .map(SecretString::from))
}

/// Location of the configuration file.
///
/// `$OCM_CONFIG` when set; otherwise `~/.config/ocm/ocm.json` when it exists, falling
/// back to `~/.ocm.json`.
pub(crate) fn default_path(lookup: impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    if let Some(path) = lookup(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    let home = home::home_dir()?;
    let xdg = home.join(".config").join("ocm").join("ocm.json");
    if xdg.exists() {
        Some(xdg)
    } else {
        Some(home.join(".ocm.json"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn reads_login_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
              "access_token": "eyJhbGciOiJSUzI1NiJ9.access",
              "client_id": "cloud-services",
              "refresh_token": "eyJhbGciOiJIUzI1NiJ9.refresh",
              "scopes": ["openid"],
              "token_url": "https://sso.redhat.com/auth/realms/redhat-external/protocol/openid-connect/token",
              "url": "https://api.stage.openshift.com"
            }}"#
        )
        .unwrap();

        let cfg = ConfigFile::read_from(file.path()).unwrap();
        assert_eq!(
            cfg.access_token.unwrap().expose_secret(),
            "eyJhbGciOiJSUzI1NiJ9.access"
        );
        assert_eq!(cfg.url.as_deref(), Some("https://api.stage.openshift.com"));
    }

    #[test]
    fn empty_token_is_absent() {
        let cfg: ConfigFile = serde_json::from_str(r#"{"access_token":""}"#).unwrap();
        assert!(cfg.access_token.is_none());
        assert!(cfg.url.is_none());
    }

    #[test]
    fn missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ocm.json");
        assert!(matches!(
            ConfigFile::read_from(&missing),
            Err(ConfigError::ReadFile { .. })
        ));

        fs::write(&missing, "not json").unwrap();
        assert!(matches!(
            ConfigFile::read_from(&missing),
            Err(ConfigError::ParseFile { .. })
        ));
    }

    #[test]
    fn environment_overrides_the_path() {
        let path = default_path(|key| (key == CONFIG_ENV).then(|| "/tmp/ocm.json".to_string()));
        assert_eq!(path, Some(PathBuf::from("/tmp/ocm.json")));
    }
}
