//! Windows adapter.
//!
//! Windows reports shape changes as `WM_SIZE` requests that only say
//! "restored", "minimized" or "maximized". Leaving minimized is a restore
//! request like any other, so the adapter tracks whether the last request
//! was a minimize to tell the two apart. A window minimized from fullscreen
//! comes back through a plain restore request and re-enters fullscreen.

use super::{PlatformCommand, PlatformKind, PlatformWindowAdapter, diff_snapshot};
use crate::notification::{PlatformNotification, RawWindowEvent, SizeKind};
use crate::state::{WindowShape, WindowState};
use crate::toolkit::NativeWidget;
use par_window_accelerators::{Key, KeyboardEvent, ModifiersState, NamedKey};

pub struct WindowsAdapter {
    widget: Box<dyn NativeWidget>,
    /// Last size request was a minimize
    was_minimized: bool,
}

impl WindowsAdapter {
    pub fn new(widget: Box<dyn NativeWidget>) -> Self {
        Self {
            widget,
            was_minimized: false,
        }
    }

    fn translate_size(&mut self, kind: SizeKind, state: &WindowState) -> Vec<PlatformNotification> {
        use PlatformNotification as N;

        match kind {
            SizeKind::Minimized => {
                self.was_minimized = true;
                vec![N::Minimized]
            }
            SizeKind::Maximized => {
                let mut out = Vec::new();
                if std::mem::take(&mut self.was_minimized) {
                    out.push(N::Restored);
                }
                out.push(N::Maximized);
                out
            }
            SizeKind::Restored => {
                if std::mem::take(&mut self.was_minimized) {
                    if self.widget.is_fullscreen() {
                        vec![N::Restored, N::EnteredFullScreen]
                    } else {
                        vec![N::Restored, N::Unmaximized]
                    }
                } else if state.shape == WindowShape::Maximized {
                    vec![N::Unmaximized]
                } else if state.shape == WindowShape::Fullscreen && !self.widget.is_fullscreen() {
                    vec![N::LeftFullScreen]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

impl PlatformWindowAdapter for WindowsAdapter {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Windows
    }

    fn widget(&self) -> &dyn NativeWidget {
        self.widget.as_ref()
    }

    fn widget_mut(&mut self) -> &mut dyn NativeWidget {
        self.widget.as_mut()
    }

    fn translate(&mut self, raw: RawWindowEvent, state: &WindowState) -> Vec<PlatformNotification> {
        match raw {
            RawWindowEvent::SizeMessage(kind) => self.translate_size(kind, state),
            RawWindowEvent::StateSnapshot {
                minimized,
                maximized,
                fullscreen,
            } => {
                self.was_minimized = minimized;
                diff_snapshot(state.shape, minimized, maximized, fullscreen)
            }
            RawWindowEvent::Notification(notification) => {
                match notification {
                    PlatformNotification::Minimized => self.was_minimized = true,
                    PlatformNotification::Restored => self.was_minimized = false,
                    _ => {}
                }
                vec![notification]
            }
        }
    }

    fn supports_thumbar(&self) -> bool {
        true
    }

    fn default_key_command(&self, event: &KeyboardEvent) -> Option<PlatformCommand> {
        if !event.is_pressed() || event.modifiers != ModifiersState::ALT {
            return None;
        }
        match &event.logical_key {
            Key::Named(NamedKey::F4) => Some(PlatformCommand::Close),
            Key::Named(NamedKey::Space) => Some(PlatformCommand::ShowSystemMenu),
            Key::Character(c) if c.as_str() == " " => Some(PlatformCommand::ShowSystemMenu),
            _ => None,
        }
    }
}
