//! Window construction options.

use crate::error::ConfigError;
use crate::menu::MenuModel;
use serde::{Deserialize, Serialize};

/// Height reserved for an in-window menu bar, in pixels.
pub const DEFAULT_MENU_BAR_HEIGHT: u32 = 25;

/// A width/height pair where `0` on an axis means "unconstrained".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimit {
    pub width: u32,
    pub height: u32,
}

impl SizeLimit {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_unconstrained(&self) -> bool {
        self.width == 0 && self.height == 0
    }
}

/// Log verbosity requested by the options file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Options a native window is constructed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Initial position; centered on the work area when absent and `center` is set
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub min_size: SizeLimit,
    pub max_size: SizeLimit,
    pub resizable: bool,
    pub always_on_top: bool,
    pub fullscreen: bool,
    pub kiosk: bool,
    pub show: bool,
    pub center: bool,
    /// Interpret `width`/`height` as content size (menu bar excluded)
    pub use_content_size: bool,
    pub auto_hide_menu_bar: bool,
    pub menu_bar_height: u32,
    pub skip_taskbar: bool,
    pub visible_on_all_workspaces: bool,
    pub log_level: LogLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuModel>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "par-window".to_string(),
            width: 800,
            height: 600,
            x: None,
            y: None,
            min_size: SizeLimit::default(),
            max_size: SizeLimit::default(),
            resizable: true,
            always_on_top: false,
            fullscreen: false,
            kiosk: false,
            show: true,
            center: false,
            use_content_size: false,
            auto_hide_menu_bar: false,
            menu_bar_height: DEFAULT_MENU_BAR_HEIGHT,
            skip_taskbar: false,
            visible_on_all_workspaces: false,
            log_level: LogLevel::default(),
            menu: None,
        }
    }
}

impl WindowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_menu(mut self, menu: MenuModel) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn with_auto_hide_menu_bar(mut self, auto_hide: bool) -> Self {
        self.auto_hide_menu_bar = auto_hide;
        self
    }

    pub fn with_use_content_size(mut self, use_content_size: bool) -> Self {
        self.use_content_size = use_content_size;
        self
    }

    /// Check the options for contradictions that the window would reject anyway.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !limits_compatible(self.min_size, self.max_size) {
            return Err(ConfigError::Validation(format!(
                "max_size {}x{} is smaller than min_size {}x{}",
                self.max_size.width,
                self.max_size.height,
                self.min_size.width,
                self.min_size.height
            )));
        }
        Ok(())
    }
}

/// True when `max` does not undercut `min` on any axis where both are constrained.
pub fn limits_compatible(min: SizeLimit, max: SizeLimit) -> bool {
    let axis_ok = |lo: u32, hi: u32| lo == 0 || hi == 0 || hi >= lo;
    axis_ok(min.width, max.width) && axis_ok(min.height, max.height)
}
