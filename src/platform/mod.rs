//! Platform adapters.
//!
//! Platforms report window state differently: Windows sends size messages,
//! X11 window managers publish a set of state atoms and conflate fullscreen
//! with maximize. An adapter wraps the toolkit widget, translates raw
//! notifications into the canonical vocabulary and implements the commands
//! whose sequencing differs per platform.
//!
//! | Adapter | Platform |
//! |---|---|
//! | [`WindowsAdapter`] | Windows: size messages, thumbar, Alt+F4 / Alt+Space |
//! | [`X11Adapter`] | X11 desktops: state snapshots, global menu |
//! | [`DefaultAdapter`] | Everything else |

mod default;
mod windows;
mod x11;

pub use default::DefaultAdapter;
pub use windows::WindowsAdapter;
pub use x11::X11Adapter;

use crate::error::PlatformError;
use crate::notification::{PlatformNotification, RawWindowEvent};
use crate::state::{WindowShape, WindowState};
use crate::toolkit::NativeWidget;
use par_window_accelerators::KeyboardEvent;
use std::fmt;

/// Which adapter a window uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    Windows,
    X11,
    Default,
}

impl PlatformKind {
    /// Adapter matching the platform this binary was built for.
    pub fn current() -> Self {
        #[cfg(target_os = "windows")]
        {
            PlatformKind::Windows
        }
        #[cfg(all(
            unix,
            not(target_os = "macos"),
            not(target_os = "ios"),
            not(target_os = "android")
        ))]
        {
            PlatformKind::X11
        }
        #[cfg(not(any(
            target_os = "windows",
            all(
                unix,
                not(target_os = "macos"),
                not(target_os = "ios"),
                not(target_os = "android")
            )
        )))]
        {
            PlatformKind::Default
        }
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::X11 => "x11",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}

/// Window command a platform performs for an unhandled key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCommand {
    Close,
    ShowSystemMenu,
}

pub trait PlatformWindowAdapter {
    fn kind(&self) -> PlatformKind;

    fn widget(&self) -> &dyn NativeWidget;
    fn widget_mut(&mut self) -> &mut dyn NativeWidget;

    /// Translate a raw toolkit notification given the current reconciled state.
    fn translate(&mut self, raw: RawWindowEvent, state: &WindowState) -> Vec<PlatformNotification>;

    fn supports_global_menu(&self) -> bool {
        false
    }

    fn supports_thumbar(&self) -> bool {
        false
    }

    /// Leave fullscreen and go back to `restore_to`.
    fn leave_fullscreen(&mut self, restore_to: WindowShape) -> Result<(), PlatformError> {
        let widget = self.widget_mut();
        widget.set_fullscreen(false)?;
        if restore_to == WindowShape::Maximized && !widget.is_maximized() {
            widget.maximize()?;
        }
        Ok(())
    }

    /// Un-minimize into `restore_to`. Toolkits remember the shape by default.
    fn restore_from_minimized(&mut self, restore_to: WindowShape) -> Result<(), PlatformError> {
        let _ = restore_to;
        self.widget_mut().restore()
    }

    /// Switch the chrome that kiosk mode hides. `skip_taskbar` is the
    /// caller's own setting, to fall back to when kiosk ends.
    fn set_kiosk_chrome(&mut self, kiosk: bool, skip_taskbar: bool) -> Result<(), PlatformError> {
        self.widget_mut().set_skip_taskbar(kiosk || skip_taskbar)
    }

    /// Command the platform performs for a key nobody else handled.
    fn default_key_command(&self, event: &KeyboardEvent) -> Option<PlatformCommand> {
        let _ = event;
        None
    }
}

/// Build the adapter for `kind` around a widget.
pub fn adapter_for(kind: PlatformKind, widget: Box<dyn NativeWidget>) -> Box<dyn PlatformWindowAdapter> {
    match kind {
        PlatformKind::Windows => Box::new(WindowsAdapter::new(widget)),
        PlatformKind::X11 => Box::new(X11Adapter::new(widget)),
        PlatformKind::Default => Box::new(DefaultAdapter::new(widget)),
    }
}

/// Canonical notifications for a full state snapshot.
///
/// Emits the transitions from `current` to the reported flags. Notifications
/// that turn out redundant are dropped by the watcher.
pub(crate) fn diff_snapshot(
    current: WindowShape,
    minimized: bool,
    maximized: bool,
    fullscreen: bool,
) -> Vec<PlatformNotification> {
    let mut out = Vec::new();
    if minimized {
        if current != WindowShape::Minimized {
            out.push(PlatformNotification::Minimized);
        }
        return out;
    }
    if current == WindowShape::Minimized {
        out.push(PlatformNotification::Restored);
    }
    if fullscreen {
        out.push(PlatformNotification::EnteredFullScreen);
        return out;
    }
    if current == WindowShape::Fullscreen {
        out.push(PlatformNotification::LeftFullScreen);
    }
    out.push(if maximized {
        PlatformNotification::Maximized
    } else {
        PlatformNotification::Unmaximized
    });
    out
}
