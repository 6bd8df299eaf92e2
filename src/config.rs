use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use reqwest::Url;
use serde::Deserialize;

pub const WEBHOOK_URL_ENV: &str = "PLANILHA_WEBHOOK_URL";
pub const TIMEOUT_SECS_ENV: &str = "PLANILHA_TIMEOUT_SECS";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Raw contents of `settings.json`; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub webhook_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub webhook_url: Url,
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error(
        "webhook url is not configured (set `webhook_url` in {} or {})",
        SETTINGS_FILE_NAME,
        WEBHOOK_URL_ENV
    )]
    MissingUrl,
    #[error("webhook url `{value}` is invalid: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("webhook url scheme `{0}` is not supported, expected http or https")]
    UnsupportedScheme(String),
    #[error("request timeout `{0}` is not a whole number of seconds")]
    InvalidTimeout(String),
}

impl Settings {
    /// Merges file values with overrides; `env` wins over the file.
    pub fn resolve<F>(file: SettingsFile, env: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = env(WEBHOOK_URL_ENV)
            .or(file.webhook_url)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::MissingUrl)?;

        let webhook_url = Url::parse(&raw_url).map_err(|err| SettingsError::InvalidUrl {
            value: raw_url.clone(),
            reason: err.to_string(),
        })?;
        if !matches!(webhook_url.scheme(), "http" | "https") {
            return Err(SettingsError::UnsupportedScheme(
                webhook_url.scheme().to_string(),
            ));
        }

        let timeout_secs = match env(TIMEOUT_SECS_ENV) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| SettingsError::InvalidTimeout(raw))?,
            ),
            None => file.request_timeout_secs,
        };

        Ok(Self {
            webhook_url,
            request_timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
        })
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "planilha")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(SETTINGS_FILE_NAME))
}

pub fn read_settings_file(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse settings: {}", path.display()))
}

pub fn load_settings() -> Result<Settings> {
    let path = default_settings_path()?;
    let file = read_settings_file(&path)?;
    Settings::resolve(file, |key| std::env::var(key).ok())
        .with_context(|| format!("invalid settings: {}", path.display()))
}

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("planilha-{prefix}-{nanos}"))
    }

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn file_with(url: &str) -> SettingsFile {
        SettingsFile {
            webhook_url: Some(url.to_string()),
            request_timeout_secs: None,
        }
    }

    #[test]
    fn file_url_is_used_without_override() {
        let settings = Settings::resolve(file_with("https://hooks.example.com/exec"), env_of(&[]))
            .expect("settings should resolve");

        assert_eq!(settings.webhook_url.as_str(), "https://hooks.example.com/exec");
        assert_eq!(settings.request_timeout, None);
    }

    #[test]
    fn env_overrides_file_values() {
        let mut file = file_with("https://file.example.com/");
        file.request_timeout_secs = Some(5);

        let settings = Settings::resolve(
            file,
            env_of(&[
                (WEBHOOK_URL_ENV, "http://127.0.0.1:9000/hook"),
                (TIMEOUT_SECS_ENV, "30"),
            ]),
        )
        .expect("settings should resolve");

        assert_eq!(settings.webhook_url.as_str(), "http://127.0.0.1:9000/hook");
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn zero_timeout_means_no_timeout() {
        let mut file = file_with("https://hooks.example.com/");
        file.request_timeout_secs = Some(0);

        let settings = Settings::resolve(file, env_of(&[])).expect("settings should resolve");
        assert_eq!(settings.request_timeout, None);
    }

    #[test]
    fn missing_or_blank_url_is_rejected() {
        assert_eq!(
            Settings::resolve(SettingsFile::default(), env_of(&[])),
            Err(SettingsError::MissingUrl)
        );
        assert_eq!(
            Settings::resolve(file_with("   "), env_of(&[])),
            Err(SettingsError::MissingUrl)
        );
    }

    #[test]
    fn malformed_url_and_scheme_are_rejected() {
        assert!(matches!(
            Settings::resolve(file_with("not a url"), env_of(&[])),
            Err(SettingsError::InvalidUrl { .. })
        ));
        assert_eq!(
            Settings::resolve(file_with("ftp://example.com/"), env_of(&[])),
            Err(SettingsError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn bad_timeout_override_is_rejected() {
        assert_eq!(
            Settings::resolve(
                file_with("https://hooks.example.com/"),
                env_of(&[(TIMEOUT_SECS_ENV, "soon")])
            ),
            Err(SettingsError::InvalidTimeout("soon".to_string()))
        );
    }

    #[test]
    fn settings_file_is_optional_and_parsed_when_present() {
        let temp_dir = unique_test_dir("settings");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(SETTINGS_FILE_NAME);

        let missing = read_settings_file(&path).expect("missing file should be allowed");
        assert!(missing.webhook_url.is_none());

        fs::write(
            &path,
            r#"{ "webhook_url": "https://hooks.example.com/x", "request_timeout_secs": 10 }"#,
        )
        .expect("should write settings fixture");
        let parsed = read_settings_file(&path).expect("settings should parse");
        assert_eq!(parsed.webhook_url.as_deref(), Some("https://hooks.example.com/x"));
        assert_eq!(parsed.request_timeout_secs, Some(10));

        fs::write(&path, r#"{ "webhook": "typo" }"#).expect("should overwrite fixture");
        assert!(read_settings_file(&path).is_err());

        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn webview_dir_is_created_under_base() {
        let temp_dir = unique_test_dir("webview");

        let dir = ensure_webview_data_dir(&temp_dir).expect("should create webview dir");

        assert!(dir.is_dir());
        assert_eq!(dir, temp_dir.join("webview2"));
        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
