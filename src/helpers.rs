//! Platform helpers attached to a native window.
//!
//! A global menu helper exports the window menu to a desktop-wide menu bar
//! (the D-Bus menu of Unity/KDE style desktops). A thumbar helper manages the
//! Windows taskbar button: its thumbnail toolbar and progress indicator. Both only make sense on some platforms;
//! the window attaches them when its platform adapter supports them.

use crate::toolkit::NativeHandle;
use par_window_config::{CommandId, MenuModel};

pub trait GlobalMenuHelper {
    fn attach(&mut self, handle: NativeHandle);
    fn detach(&mut self);
    /// Publish a menu, or withdraw it with `None`.
    fn set_menu(&mut self, menu: Option<&MenuModel>);
}

/// One button of a taskbar thumbnail toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbarButton {
    /// Command reported when the button is clicked
    pub command: CommandId,
    pub tooltip: String,
    pub enabled: bool,
    /// Dismiss the thumbnail preview after a click
    pub dismiss_on_click: bool,
}

impl ThumbarButton {
    pub fn new(command: impl Into<CommandId>, tooltip: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            tooltip: tooltip.into(),
            enabled: true,
            dismiss_on_click: false,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Progress shown on the taskbar button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskbarProgress {
    Hidden,
    /// Busy with no known fraction
    Indeterminate,
    /// Fraction done, within `0.0..=1.0`
    Fraction(f64),
}

impl TaskbarProgress {
    /// Negative values hide the indicator, values above 1 make it
    /// indeterminate. `None` for NaN.
    pub fn from_value(value: f64) -> Option<Self> {
        if value.is_nan() {
            return None;
        }
        Some(if value < 0.0 {
            Self::Hidden
        } else if value > 1.0 {
            Self::Indeterminate
        } else {
            Self::Fraction(value)
        })
    }
}

pub trait ThumbarHelper {
    fn attach(&mut self, handle: NativeHandle);
    fn detach(&mut self);
    /// Replace the toolbar buttons. Returns `false` if the shell refused them.
    fn set_buttons(&mut self, buttons: &[ThumbarButton]) -> bool;
    /// Update the taskbar progress indicator. Returns `false` if the shell
    /// refused it.
    fn set_progress(&mut self, progress: TaskbarProgress) -> bool;
}
