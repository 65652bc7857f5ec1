//! Logging for par-window.
//!
//! Every `log::` record goes to `par_window_debug.log` in the temp directory,
//! so a window embedded in a terminal UI never writes over the screen. When
//! `RUST_LOG` is set, records are mirrored to stderr as well.
//!
//! Level precedence: the `--log-level` flag, then `RUST_LOG`, then the
//! `log_level` config option (applied with [`set_level`] once the config has
//! been read).

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

const LOG_FILE_NAME: &str = "par_window_debug.log";

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{}", line);
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();
static LEVEL_PINNED: AtomicBool = AtomicBool::new(false);

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Install the bridge as the global logger. Safe to call more than once;
/// only the first call installs anything.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = std::env::var("RUST_LOG").ok().and_then(|v| parse_level(&v));
    let (level, pinned) = resolve_level(cli_level, env_level);

    let bridge = BRIDGE.get_or_init(|| {
        let file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            // A missing log file must not stop the window from opening
            .ok();
        LogBridge {
            file: Mutex::new(file),
            mirror_stderr: env_level.is_some(),
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(level);
        LEVEL_PINNED.store(pinned, Ordering::Relaxed);
        log::info!(
            "par-window {} logging at {} to {}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_path().display()
        );
    }
}

/// Apply the level from the config file, unless the CLI or `RUST_LOG`
/// already chose one.
pub fn set_level(level: LevelFilter) {
    if LEVEL_PINNED.load(Ordering::Relaxed) {
        log::debug!("Config log level {} ignored; overridden", level);
        return;
    }
    log::set_max_level(level);
}

fn resolve_level(cli: Option<LevelFilter>, env: Option<LevelFilter>) -> (LevelFilter, bool) {
    match cli.or(env) {
        Some(level) => (level, true),
        None => (LevelFilter::Info, false),
    }
}

/// Parse a `RUST_LOG` value. Only a bare level is understood; per-target
/// directives fall back to the most verbose level they name.
fn parse_level(value: &str) -> Option<LevelFilter> {
    value
        .split(',')
        .filter_map(|directive| {
            let level = directive.rsplit('=').next()?.trim();
            level.parse::<LevelFilter>().ok()
        })
        .max()
}

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
    }

    #[test]
    fn test_parse_directives_picks_most_verbose() {
        assert_eq!(
            parse_level("winit=warn,par_window=trace"),
            Some(LevelFilter::Trace)
        );
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_cli_beats_env() {
        let (level, pinned) = resolve_level(Some(LevelFilter::Error), Some(LevelFilter::Trace));
        assert_eq!(level, LevelFilter::Error);
        assert!(pinned);
    }

    #[test]
    fn test_default_is_unpinned_info() {
        assert_eq!(resolve_level(None, None), (LevelFilter::Info, false));
    }

    #[test]
    fn test_log_path_in_temp_dir() {
        assert!(log_path().starts_with(std::env::temp_dir()));
        assert!(log_path().ends_with(LOG_FILE_NAME));
    }
}
