use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "tm.toml";

#[derive(Debug, Deserialize, Default)]
pub struct TmConfig {
    pub shell: Option<ShellConfig>,
    pub audit: Option<AuditConfig>,
    pub reboot: Option<RebootConfig>,
}

#[derive(Debug, Deserialize, Default)]
pub struct ShellConfig {
    pub base_dir: Option<PathBuf>,
    pub language: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AuditConfig {
    pub enabled: Option<bool>,
    pub dir: Option<PathBuf>,
    pub plain: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RebootConfig {
    pub enabled: Option<bool>,
    /// Seconds to wait on a reboot helper process.
    pub timeout: Option<u64>,
}

impl TmConfig {
    pub fn base_dir(&self) -> Option<&PathBuf> {
        self.shell.as_ref().and_then(|s| s.base_dir.as_ref())
    }

    pub fn language(&self) -> Option<&str> {
        self.shell.as_ref().and_then(|s| s.language.as_deref())
    }

    pub fn audit_enabled(&self) -> bool {
        self.audit.as_ref().and_then(|a| a.enabled).unwrap_or(true)
    }

    pub fn audit_plain(&self) -> bool {
        self.audit.as_ref().and_then(|a| a.plain).unwrap_or(true)
    }

    pub fn audit_dir(&self) -> Option<&PathBuf> {
        self.audit.as_ref().and_then(|a| a.dir.as_ref())
    }

    pub fn reboot_enabled(&self) -> bool {
        self.reboot.as_ref().and_then(|r| r.enabled).unwrap_or(false)
    }

    pub fn reboot_timeout(&self) -> u64 {
        self.reboot.as_ref().and_then(|r| r.timeout).unwrap_or(5)
    }
}

/// Loads `tm.toml` from `dir` (optional), then applies `.env` overrides.
pub fn load_config(dir: &Path) -> Result<TmConfig> {
    let config_path = dir.join(CONFIG_FILE);

    // 1. Parse tm.toml (Base Layer)
    let mut config: TmConfig = if config_path.exists() {
        let content = fs::read_to_string(&config_path).context("Failed to read tm.toml")?;
        parse_config(&content)?
    } else {
        log::debug!("No {} in {}, using defaults", CONFIG_FILE, dir.display());
        TmConfig::default()
    };

    // 2. Load .env using dotenvy (Override Layer)
    // Determines filename: .env or .env.prod based on TM_ENV
    let env_filename = env::var("TM_ENV")
        .map(|v| format!(".env.{}", v))
        .unwrap_or_else(|_| ".env".to_string());

    let env_path = dir.join(&env_filename);
    if env_path.exists() {
        log::info!("Loading environment from: {}", env_filename);
        let pairs = dotenvy::from_path_iter(&env_path)?
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("Failed to parse {}", env_filename))?;
        apply_env_overrides(&mut config, pairs);
    }

    resolve_relative_paths(&mut config, dir);
    Ok(config)
}

pub fn parse_config(content: &str) -> Result<TmConfig> {
    toml::from_str(content).context("Failed to parse tm.toml")
}

fn apply_env_overrides(config: &mut TmConfig, pairs: impl IntoIterator<Item = (String, String)>) {
    for (key, val) in pairs {
        match key.as_str() {
            "TM_BASE_DIR" => {
                config.shell.get_or_insert_with(Default::default).base_dir = Some(PathBuf::from(val));
            }
            "TM_LANG" => {
                config.shell.get_or_insert_with(Default::default).language = Some(val);
            }
            "TM_AUDIT_DIR" => {
                config.audit.get_or_insert_with(Default::default).dir = Some(PathBuf::from(val));
            }
            _ => log::debug!("Ignoring unknown .env key: {}", key),
        }
    }
}

// Relative paths in the config are relative to the directory holding it.
fn resolve_relative_paths(config: &mut TmConfig, dir: &Path) {
    let resolve = |p: &mut PathBuf| {
        if !p.is_absolute() {
            *p = dir.join(&*p);
        }
    };
    if let Some(base) = config.shell.as_mut().and_then(|s| s.base_dir.as_mut()) {
        resolve(base);
    }
    if let Some(audit_dir) = config.audit.as_mut().and_then(|a| a.dir.as_mut()) {
        resolve(audit_dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!(config.base_dir().is_none());
        assert!(config.audit_enabled());
        assert!(config.audit_plain());
        assert!(!config.reboot_enabled());
        assert_eq!(config.reboot_timeout(), 5);
    }

    #[test]
    fn test_parse_sections() {
        let config = parse_config(
            r#"
            [shell]
            base_dir = "/srv/files"
            language = "ru"

            [audit]
            enabled = false

            [reboot]
            enabled = true
            timeout = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.base_dir(), Some(&PathBuf::from("/srv/files")));
        assert_eq!(config.language(), Some("ru"));
        assert!(!config.audit_enabled());
        assert!(config.reboot_enabled());
        assert_eq!(config.reboot_timeout(), 2);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("[shell\nbase_dir = 1").is_err());
    }

    #[test]
    fn test_env_file_overrides_and_relative_paths() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE),
            "[shell]\nbase_dir = \"data\"\nlanguage = \"en\"\n",
        )
        .unwrap();
        fs::write(tmp.path().join(".env"), "TM_LANG=ru\nTM_AUDIT_DIR=logs\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.language(), Some("ru"));
        assert_eq!(config.base_dir(), Some(&tmp.path().join("data")));
        assert_eq!(config.audit_dir(), Some(&tmp.path().join("logs")));
    }
}
