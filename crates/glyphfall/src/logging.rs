//! Log setup. Output goes to a file so it never lands on the rain.

use std::env;

use color_eyre::{
    Result,
    eyre::{WrapErr, eyre},
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Name of the log file inside the system temp directory.
pub const LOG_FILE: &str = "glyphfall.log";

/// Install the global subscriber, writing to [`LOG_FILE`] at `info` level.
pub fn init() -> Result<()> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(env::temp_dir())
        .wrap_err("failed to open log file")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install log subscriber: {err}"))
}
