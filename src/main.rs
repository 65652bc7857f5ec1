// Hide console window on Windows release builds
#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use par_window::app::App;
use par_window::cli::{self, CliResult};
use par_window::{PlatformKind, WindowOptions, debug, demo};

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        CliResult::WriteConfig(path) => {
            let path = path.unwrap_or_else(WindowOptions::config_path);
            WindowOptions::default()
                .save_to(&path)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote default window options to {}", path.display());
            return Ok(());
        }
        CliResult::Continue(options) => options,
    };
    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config (applied below).
    debug::init_log_bridge(runtime_options.log_level);

    log::info!("Starting par-window {}", par_window::VERSION);

    let options = match &runtime_options.config {
        Some(path) => WindowOptions::load_from(path)?,
        None => WindowOptions::load()?,
    };
    debug::set_level(options.log_level.to_level_filter());

    if runtime_options.headless {
        let platform = runtime_options.platform.unwrap_or_else(PlatformKind::current);
        let events = demo::run_headless(options, platform)?;
        println!("Headless session on {} raised {} events:", platform, events.len());
        for event in events {
            println!("  {:?}", event);
        }
        return Ok(());
    }

    let result = App::new(options).run();
    log::info!("Event loop exited");

    if let Err(ref e) = result {
        eprintln!("par-window: error: {e:#}");
        // On Linux, provide a hint when the error looks like a missing display server
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "par-window: hint: no display server found; set DISPLAY (X11) or \
                     WAYLAND_DISPLAY (Wayland), or run with --headless"
                );
            }
        }
    }
    result
}
