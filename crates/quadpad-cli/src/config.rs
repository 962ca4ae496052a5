// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use quadpad_app::Locale;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "quadpad";
const CONFIG_VERSION: i64 = 1;
const DEFAULT_SOLVER_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SOLVER_TIMEOUT: &str = "5s";
const DEFAULT_LISTEN: &str = "127.0.0.1:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub solver: Solver,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            solver: Solver::default(),
            server: Server::default(),
            ui: Ui::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Solver {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            base_url: Some(DEFAULT_SOLVER_BASE_URL.to_owned()),
            timeout: Some(DEFAULT_SOLVER_TIMEOUT.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub listen: Option<String>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            listen: Some(DEFAULT_LISTEN.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub locale: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            locale: Some(Locale::En.as_str().to_owned()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub file: Option<String>,
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os("QUADPAD_CONFIG_PATH") {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set QUADPAD_CONFIG_PATH to the config file")
        })?;

        let app_dir = config_root.join(APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} is not versioned. Add `version = 1` and put values under [solver], [server], [ui], and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Regenerate it with `quadpad --print-example-config`",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(base_url) = &self.solver.base_url
            && base_url.trim().is_empty()
        {
            bail!("solver.base_url in {} must not be empty", path.display());
        }

        if let Some(timeout) = &self.solver.timeout {
            let parsed = parse_duration(timeout)?;
            if parsed <= Duration::ZERO {
                bail!(
                    "solver.timeout in {} must be positive, got {}",
                    path.display(),
                    timeout
                );
            }
        }

        if let Some(listen) = &self.server.listen
            && listen.trim().is_empty()
        {
            bail!("server.listen in {} must not be empty", path.display());
        }

        if let Some(locale) = &self.ui.locale
            && Locale::parse(locale).is_none()
        {
            bail!(
                "ui.locale in {} must be \"en\" or \"ru\", got {:?}",
                path.display(),
                locale
            );
        }

        if let Some(level) = &self.log.level {
            EnvFilter::try_new(level).with_context(|| {
                format!(
                    "log.level in {} is not a valid filter (for example \"info\" or \"quadpad_client=debug\")",
                    path.display()
                )
            })?;
        }

        Ok(())
    }

    pub fn solver_base_url(&self) -> &str {
        self.solver
            .base_url
            .as_deref()
            .unwrap_or(DEFAULT_SOLVER_BASE_URL)
            .trim_end_matches('/')
    }

    pub fn solver_timeout(&self) -> Result<Duration> {
        parse_duration(
            self.solver
                .timeout
                .as_deref()
                .unwrap_or(DEFAULT_SOLVER_TIMEOUT),
        )
    }

    pub fn listen_addr(&self) -> &str {
        self.server.listen.as_deref().unwrap_or(DEFAULT_LISTEN)
    }

    pub fn locale(&self) -> Locale {
        self.ui
            .locale
            .as_deref()
            .and_then(Locale::parse)
            .unwrap_or_default()
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_deref().map(PathBuf::from)
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# quadpad config\n# Place this file at: {}\n\nversion = 1\n\n[solver]\nbase_url = \"{}\"\ntimeout = \"{}\"\n\n[server]\nlisten = \"{}\"\n\n[ui]\n# en or ru\nlocale = \"en\"\n\n[log]\nlevel = \"{}\"\n# The TUI only logs when a file is set; RUST_LOG overrides level.\n# file = \"/tmp/quadpad.log\"\n",
            path.display(),
            DEFAULT_SOLVER_BASE_URL,
            DEFAULT_SOLVER_TIMEOUT,
            DEFAULT_LISTEN,
            DEFAULT_LOG_LEVEL,
        )
    }
}

fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid timeout duration {raw:?}"))?;
        let secs = mins
            .checked_mul(60)
            .ok_or_else(|| anyhow!("timeout duration {raw:?} is too large"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 500ms or 5s)")
}

#[cfg(test)]
mod tests {
    use super::{Config, parse_duration};
    use anyhow::Result;
    use quadpad_app::Locale;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

    fn write_config(content: &str) -> Result<(tempfile::TempDir, PathBuf)> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, content)?;
        Ok((temp, path))
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        match ENV_LOCK.get_or_init(|| Mutex::new(())).lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn missing_config_uses_defaults() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let config = Config::load(&temp.path().join("missing.toml"))?;
        assert_eq!(config.version, 1);
        assert_eq!(config.solver_base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.solver_timeout()?, Duration::from_secs(5));
        assert_eq!(config.listen_addr(), "127.0.0.1:8000");
        assert_eq!(config.locale(), Locale::En);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_file(), None);
        Ok(())
    }

    #[test]
    fn unversioned_config_is_rejected_with_actionable_message() -> Result<()> {
        let (_temp, path) = write_config("[solver]\nbase_url=\"http://localhost:9000\"\n")?;
        let error = Config::load(&path).expect_err("unversioned config should fail");
        let message = error.to_string();
        assert!(message.contains("version = 1"));
        assert!(message.contains("[solver], [server], [ui], and [log]"));
        Ok(())
    }

    #[test]
    fn v1_config_parses() -> Result<()> {
        let (_temp, path) = write_config(
            "version = 1\n[solver]\nbase_url = \"http://solver.local:9000/\"\ntimeout = \"750ms\"\n[server]\nlisten = \"0.0.0.0:9000\"\n[ui]\nlocale = \"ru\"\n[log]\nlevel = \"debug\"\nfile = \"/tmp/quadpad.log\"\n",
        )?;

        let config = Config::load(&path)?;
        assert_eq!(config.solver_base_url(), "http://solver.local:9000");
        assert_eq!(config.solver_timeout()?, Duration::from_millis(750));
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.locale(), Locale::Ru);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.log_file(), Some(PathBuf::from("/tmp/quadpad.log")));
        Ok(())
    }

    #[test]
    fn malformed_config_returns_parse_error() -> Result<()> {
        let (_temp, path) = write_config("{{not toml")?;
        let error = Config::load(&path).expect_err("malformed config should fail");
        assert!(error.to_string().contains("parse TOML config"));
        Ok(())
    }

    #[test]
    fn unsupported_config_version_is_rejected() -> Result<()> {
        let (_temp, path) = write_config("version = 2\n")?;
        let error = Config::load(&path).expect_err("v2 config should fail");
        assert!(error.to_string().contains("unsupported config version 2"));
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() -> Result<()> {
        let cases = [
            ("[solver]\ntimeout = \"0s\"\n", "must be positive"),
            ("[solver]\ntimeout = \"soon\"\n", "invalid duration"),
            ("[solver]\nbase_url = \" \"\n", "must not be empty"),
            ("[server]\nlisten = \"\"\n", "must not be empty"),
            ("[ui]\nlocale = \"de\"\n", "\"en\" or \"ru\""),
            ("[log]\nlevel = \"quadpad=loud\"\n", "not a valid filter"),
        ];
        for (body, expected) in cases {
            let (_temp, path) = write_config(&format!("version = 1\n{body}"))?;
            let error = Config::load(&path).expect_err("invalid value should fail");
            let message = format!("{error:#}");
            assert!(
                message.contains(expected),
                "config {body:?}: expected {expected:?} in {message:?}"
            );
        }
        Ok(())
    }

    #[test]
    fn example_config_round_trips_through_load() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("config.toml");
        std::fs::write(&path, Config::example_config(&path))?;

        let config = Config::load(&path)?;
        assert_eq!(config.solver_base_url(), "http://127.0.0.1:8000");
        assert_eq!(config.locale(), Locale::En);
        Ok(())
    }

    #[test]
    fn default_path_honors_env_override() -> Result<()> {
        let _guard = env_lock();
        let temp = tempfile::tempdir()?;
        let override_path = temp.path().join("custom-config.toml");
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::set_var("QUADPAD_CONFIG_PATH", &override_path);
        }
        let resolved = Config::default_path()?;
        // SAFETY: test cleanup for process-local env mutation.
        unsafe {
            std::env::remove_var("QUADPAD_CONFIG_PATH");
        }
        assert_eq!(resolved, override_path);
        Ok(())
    }

    #[test]
    fn default_path_uses_config_toml_suffix_when_no_env_override() -> Result<()> {
        let _guard = env_lock();
        // SAFETY: test-only process-local env mutation.
        unsafe {
            std::env::remove_var("QUADPAD_CONFIG_PATH");
        }
        let path = Config::default_path()?;
        assert!(path.ends_with("quadpad/config.toml"));
        Ok(())
    }

    #[test]
    fn parse_duration_accepts_supported_units() -> Result<()> {
        assert_eq!(parse_duration("250ms")?, Duration::from_millis(250));
        assert_eq!(parse_duration("3s")?, Duration::from_secs(3));
        assert_eq!(parse_duration("2m")?, Duration::from_secs(120));
        assert!(parse_duration("5h").is_err());
        let error = parse_duration(&format!("{}m", u64::MAX)).expect_err("overflow should fail");
        assert!(error.to_string().contains("too large"));
        Ok(())
    }
}
