use crate::dir::SigninDirectory;
use std::{error::Error, fs::File, str::FromStr, sync::Arc};
use tracing_subscriber::{
    filter::{self, LevelFilter},
    fmt::writer::BoxMakeWriter,
    prelude::*,
};

#[derive(Debug)]
pub enum LoggerError {
    Io(std::io::Error),
    Init(tracing_subscriber::util::TryInitError),
}

impl std::fmt::Display for LoggerError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to open log file: {}", e),
            Self::Init(e) => write!(f, "Failed to install logger: {}", e),
        }
    }
}

impl Error for LoggerError {}

impl From<std::io::Error> for LoggerError {
    fn from(e: std::io::Error) -> LoggerError {
        LoggerError::Io(e)
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    fn from(e: tracing_subscriber::util::TryInitError) -> LoggerError {
        LoggerError::Init(e)
    }
}

/// Logs to stdout and to the log file of the data directory.
pub fn setup_logger(log_level: LevelFilter, datadir: &SigninDirectory) -> Result<(), LoggerError> {
    let file = File::create(datadir.log_file())?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(false);

    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .and_then(file_log)
                .with_filter(log_level)
                // Renderer and windowing crates are too verbose to be useful here.
                .with_filter(filter::filter_fn(|metadata| is_app_target(metadata.target()))),
        )
        .try_init()?;

    Ok(())
}

const NOISY_TARGETS: &[&str] = &[
    "iced_wgpu",
    "iced_winit",
    "iced_graphics",
    "iced_runtime",
    "iced_core",
    "iced_tiny_skia",
    "wgpu_core",
    "wgpu_hal",
    "naga",
    "winit",
    "cosmic_text",
    "calloop",
    "polling",
    "mio",
    "tokio",
    "sctk",
];

fn is_app_target(target: &str) -> bool {
    !NOISY_TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

/// Parse LOG_LEVEL environment variable.
pub fn parse_log_level() -> Result<Option<LevelFilter>, Box<dyn Error>> {
    if let Ok(l) = std::env::var("LOG_LEVEL") {
        Ok(Some(LevelFilter::from_str(&l)?))
    } else {
        Ok(None)
    }
}
