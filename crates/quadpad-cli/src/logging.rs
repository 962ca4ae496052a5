// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Headless modes (`--serve`, `--solve`).
    Stderr,
    /// The TUI owns the terminal, so it only logs to `[log] file`.
    FileOnly,
}

fn env_filter(config: &Config) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.log_level())
            .with_context(|| format!("invalid log level {:?}", config.log_level())),
    }
}

pub fn init(config: &Config, target: LogTarget) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match (target, config.log_file()) {
        (_, Some(path)) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| {
                    format!(
                        "open log file {} -- fix [log].file or remove it",
                        path.display()
                    )
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        (LogTarget::Stderr, None) => builder.with_writer(io::stderr).try_init(),
        (LogTarget::FileOnly, None) => return Ok(()),
    };
    installed.map_err(|error| anyhow!("install log subscriber: {error}"))
}
