//! Logger setup for the organizer shell.
//!
//! The shell prompt lives on stdout, so logs go to `./organizer.log` unless
//! `ORGANIZER_LOG` asks for stderr as well (`both`) or instead (`terminal`).
//! `ORGANIZER_LOG_LEVEL` takes any `log` level name and defaults to `info`.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use log::LevelFilter;
use organizer_logging::organizer_warn;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

pub const LOG_FILENAME: &str = "organizer.log";
pub const DESTINATION_VAR: &str = "ORGANIZER_LOG";
pub const LEVEL_VAR: &str = "ORGANIZER_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogDestination {
    #[default]
    File,
    Terminal,
    Both,
}

impl LogDestination {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "file" => Some(LogDestination::File),
            "terminal" | "stderr" => Some(LogDestination::Terminal),
            "both" => Some(LogDestination::Both),
            _ => None,
        }
    }

    fn writes_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }

    fn writes_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LevelFilter,
    /// Names that could not be parsed, reported once the logger is up.
    rejected: Vec<String>,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self::parse(
            env::var(DESTINATION_VAR).ok().as_deref(),
            env::var(LEVEL_VAR).ok().as_deref(),
        )
    }

    fn parse(destination: Option<&str>, level: Option<&str>) -> Self {
        let mut rejected = Vec::new();
        let destination = match destination {
            None => LogDestination::default(),
            Some(name) => LogDestination::from_name(name).unwrap_or_else(|| {
                rejected.push(format!("{DESTINATION_VAR}={name}"));
                LogDestination::default()
            }),
        };
        let level = match level {
            None => LevelFilter::Info,
            Some(name) => name.trim().parse().unwrap_or_else(|_| {
                rejected.push(format!("{LEVEL_VAR}={name}"));
                LevelFilter::Info
            }),
        };
        Self {
            destination,
            level,
            rejected,
        }
    }
}

/// Installs the global logger. A second call is a no-op.
pub fn initialize(settings: &LogSettings) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if settings.destination.writes_terminal() {
        loggers.push(TermLogger::new(
            settings.level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if settings.destination.writes_file() {
        let path = PathBuf::from(".").join(LOG_FILENAME);
        if let Some(file_logger) = file_logger(&path, settings.level, config) {
            loggers.push(file_logger);
        }
    }
    if loggers.is_empty() {
        return;
    }

    if CombinedLogger::init(loggers).is_ok() {
        for entry in &settings.rejected {
            organizer_warn!("Ignoring unrecognized logging setting {}", entry);
        }
    }
}

fn file_logger(path: &Path, level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file {path:?}: {err}");
            None
        }
    }
}
