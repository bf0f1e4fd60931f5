use crate::config::LoggingConfig;
use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Send log records to the file named in `cfg`, if any.  The terminal belongs
/// to the game screen, so nothing is ever logged to stderr.
pub(crate) fn init(cfg: &LoggingConfig) -> anyhow::Result<()> {
    let Some(ref path) = cfg.file else {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    };
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    builder(cfg.level)
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .format_target(true);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_file_logs_nothing() {
        init(&LoggingConfig::default()).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Off);
    }
}
