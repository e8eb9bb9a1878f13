//! Layered configuration: defaults → lifo.toml → LIFO_* env → CLI flags

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::Args;

/// Resolved settings for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stack behaviour
    pub stack: StackSettings,
    /// Diagnostic logging
    pub log: LogSettings,
}

/// Stack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StackSettings {
    /// Answers the startup capacity prompt when set by any layer
    pub initial_capacity: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Tracing filter (e.g. "warn", "debug,lifo_core=trace")
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

/// Load settings, lowest to highest precedence: built-in defaults, the
/// config file (ignored if absent), `LIFO_*` environment, CLI flags.
pub fn load(args: &Args) -> anyhow::Result<Settings> {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from("lifo.toml"));

    let mut settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
        .merge(Toml::file(path))
        // LIFO_CAPACITY / LIFO_CONFIG / LIFO_LOG belong to the clap flags
        // below; nested keys use LIFO_STACK__INITIAL_CAPACITY form.
        .merge(
            Env::prefixed("LIFO_")
                .ignore(&["capacity", "config", "log"])
                .split("__"),
        )
        .extract()?;

    if let Some(capacity) = args.capacity {
        settings.stack.initial_capacity = Some(capacity);
    }
    if let Some(level) = &args.log_level {
        settings.log.level = level.clone();
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_config(path: Option<PathBuf>) -> Args {
        Args {
            capacity: None,
            config: path,
            log_level: None,
        }
    }

    #[test]
    fn test_defaults_apply_without_any_source() {
        let dir = tempfile::tempdir().unwrap();
        // Point at a file that does not exist so a stray lifo.toml in the
        // working directory cannot leak into the test.
        let args = args_with_config(Some(dir.path().join("absent.toml")));

        let settings = load(&args).unwrap();
        assert_eq!(settings.stack.initial_capacity, None);
        assert_eq!(settings.log.level, "warn");
    }

    #[test]
    fn test_config_file_supplies_capacity_and_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifo.toml");
        std::fs::write(&path, "[stack]\ninitial_capacity = 8\n\n[log]\nlevel = \"debug\"\n")
            .unwrap();

        let settings = load(&args_with_config(Some(path))).unwrap();
        assert_eq!(settings.stack.initial_capacity, Some(8));
        assert_eq!(settings.log.level, "debug");
    }

    #[test]
    fn test_cli_flags_override_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lifo.toml");
        std::fs::write(&path, "[stack]\ninitial_capacity = 8\n").unwrap();

        let args = Args {
            capacity: Some(3),
            config: Some(path),
            log_level: Some("trace".to_owned()),
        };

        let settings = load(&args).unwrap();
        assert_eq!(settings.stack.initial_capacity, Some(3));
        assert_eq!(settings.log.level, "trace");
    }
}
