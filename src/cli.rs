//! Command-line interface for the par-window demo binary.

use clap::{Parser, ValueEnum};
use crate::platform::PlatformKind;
use std::path::PathBuf;

/// par-window - native window with menu bar and keyboard routing
#[derive(Parser, Debug)]
#[command(name = "par-window")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Window options file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set debug log level (overrides config and RUST_LOG)
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Run a scripted session against an in-memory widget instead of
    /// opening a real window
    #[arg(long)]
    pub headless: bool,

    /// Platform behavior for the headless session
    #[arg(long, value_enum, requires = "headless")]
    pub platform: Option<PlatformArg>,

    /// Write the effective options to the config path and exit
    #[arg(long)]
    pub write_config: bool,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PlatformArg {
    Windows,
    X11,
    Default,
}

impl From<PlatformArg> for PlatformKind {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => PlatformKind::Windows,
            PlatformArg::X11 => PlatformKind::X11,
            PlatformArg::Default => PlatformKind::Default,
        }
    }
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    pub config: Option<PathBuf>,
    pub log_level: Option<log::LevelFilter>,
    pub headless: bool,
    /// `None` picks the build target's platform
    pub platform: Option<PlatformKind>,
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal application startup
    Continue(RuntimeOptions),
    /// Write the options file to this path, then exit
    WriteConfig(Option<PathBuf>),
}

/// Process CLI arguments
pub fn process_cli() -> CliResult {
    from_cli(Cli::parse())
}

fn from_cli(cli: Cli) -> CliResult {
    if cli.write_config {
        return CliResult::WriteConfig(cli.config);
    }
    CliResult::Continue(RuntimeOptions {
        config: cli.config,
        log_level: cli.log_level.map(|l| l.to_level_filter()),
        headless: cli.headless,
        platform: cli.platform.map(PlatformKind::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliResult {
        from_cli(Cli::try_parse_from(args).expect("valid arguments"))
    }

    #[test]
    fn test_defaults() {
        let CliResult::Continue(options) = parse(&["par-window"]) else {
            panic!("expected Continue");
        };
        assert!(options.config.is_none());
        assert!(options.log_level.is_none());
        assert!(!options.headless);
        assert!(options.platform.is_none());
    }

    #[test]
    fn test_headless_with_platform() {
        let CliResult::Continue(options) = parse(&[
            "par-window",
            "--headless",
            "--platform",
            "x11",
            "--log-level",
            "debug",
        ]) else {
            panic!("expected Continue");
        };
        assert!(options.headless);
        assert_eq!(options.platform, Some(PlatformKind::X11));
        assert_eq!(options.log_level, Some(log::LevelFilter::Debug));
    }

    #[test]
    fn test_platform_requires_headless() {
        assert!(Cli::try_parse_from(["par-window", "--platform", "windows"]).is_err());
    }

    #[test]
    fn test_write_config() {
        let result = parse(&["par-window", "--write-config", "--config", "/tmp/w.yaml"]);
        assert!(matches!(result, CliResult::WriteConfig(Some(_))));
    }
}
