//! Reconciled window state.

use std::fmt;

/// The mutually exclusive shape a window is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowShape {
    #[default]
    Normal,
    Maximized,
    Minimized,
    Fullscreen,
}

impl WindowShape {
    /// Shapes a window can return to after leaving fullscreen or minimize.
    pub fn is_restorable(self) -> bool {
        matches!(self, Self::Normal | Self::Maximized)
    }
}

impl fmt::Display for WindowShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Normal => "normal",
            Self::Maximized => "maximized",
            Self::Minimized => "minimized",
            Self::Fullscreen => "fullscreen",
        };
        f.write_str(name)
    }
}

/// Window state as last confirmed by the platform.
///
/// `kiosk` is an overlay on top of the shape: a kiosk window is normally
/// fullscreen, and the shape it had before kiosk is restored when kiosk is
/// cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub shape: WindowShape,
    pub kiosk: bool,
    pub resizable: bool,
    pub always_on_top: bool,
    pub visible: bool,
    pub visible_on_all_workspaces: bool,
    pub focused: bool,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            shape: WindowShape::Normal,
            kiosk: false,
            resizable: true,
            always_on_top: false,
            visible: false,
            visible_on_all_workspaces: false,
            focused: false,
        }
    }
}

impl WindowState {
    pub fn is_maximized(&self) -> bool {
        self.shape == WindowShape::Maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.shape == WindowShape::Minimized
    }

    pub fn is_fullscreen(&self) -> bool {
        self.shape == WindowShape::Fullscreen
    }
}
