use crate::game::{SpeedCurve, SpeedCurveError};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// How fast the snake moves
    #[serde(default)]
    pub(crate) speed: SpeedConfig,

    /// Where & what to log
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawSpeedConfig")]
pub(crate) struct SpeedConfig {
    pub(crate) curve: SpeedCurve,
}

/// Tick periods in milliseconds.  Unset values fall back to the built-in
/// defaults.
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawSpeedConfig {
    #[serde(rename = "initial-ms")]
    initial: Option<u64>,
    #[serde(rename = "step-ms")]
    step: Option<u64>,
    #[serde(rename = "minimum-ms")]
    minimum: Option<u64>,
}

impl TryFrom<RawSpeedConfig> for SpeedConfig {
    type Error = SpeedCurveError;

    fn try_from(value: RawSpeedConfig) -> Result<SpeedConfig, SpeedCurveError> {
        let defaults = SpeedCurve::default();
        let curve = SpeedCurve::new(
            value
                .initial
                .map_or_else(|| defaults.initial(), Duration::from_millis),
            value
                .step
                .map_or_else(|| defaults.step(), Duration::from_millis),
            value
                .minimum
                .map_or_else(|| defaults.minimum(), Duration::from_millis),
        )?;
        Ok(SpeedConfig { curve })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct LoggingConfig {
    /// File to append log records to.  If unset, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Most verbose level to log; may be refined by the `RUST_LOG`
    /// environment variable
    pub(crate) level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> LoggingConfig {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MS: Duration = Duration::from_millis(1);

    fn parse(src: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(src)
    }

    #[test]
    fn empty() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn full() {
        let cfg = parse(concat!(
            "[speed]\n",
            "initial-ms = 300\n",
            "step-ms = 20\n",
            "minimum-ms = 100\n",
            "\n",
            "[logging]\n",
            "file = \"/tmp/gridsnake.log\"\n",
            "level = \"debug\"\n",
        ))
        .unwrap();
        assert_eq!(
            cfg,
            Config {
                speed: SpeedConfig {
                    curve: SpeedCurve::new(300 * MS, 20 * MS, 100 * MS).unwrap(),
                },
                logging: LoggingConfig {
                    file: Some(PathBuf::from("/tmp/gridsnake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn partial_speed() {
        let cfg = parse("[speed]\ninitial-ms = 150\n").unwrap();
        assert_eq!(
            cfg.speed.curve,
            SpeedCurve::new(150 * MS, 10 * MS, 70 * MS).unwrap()
        );
        assert_eq!(cfg.logging, LoggingConfig::default());
    }

    #[test]
    fn minimum_above_initial() {
        assert!(parse("[speed]\ninitial-ms = 50\n").is_err());
    }

    #[test]
    fn zero_period() {
        assert!(parse("[speed]\nminimum-ms = 0\n").is_err());
    }

    #[test]
    fn unknown_key() {
        assert!(parse("[speed]\ninitial = 200\n").is_err());
    }

    #[test]
    fn bad_level() {
        assert!(parse("[logging]\nlevel = \"chatty\"\n").is_err());
    }

    #[test]
    fn load_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "[speed]\nstep-ms = 5").unwrap();
        tmp.flush().unwrap();
        let cfg = Config::load(tmp.path(), false).unwrap();
        assert_eq!(
            cfg.speed.curve,
            SpeedCurve::new(200 * MS, 5 * MS, 70 * MS).unwrap()
        );
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert_eq!(Config::load(&path, true).unwrap(), Config::default());
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn load_unparseable() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "[speed").unwrap();
        tmp.flush().unwrap();
        assert!(matches!(
            Config::load(tmp.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }
}
