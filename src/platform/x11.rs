//! X11 adapter.
//!
//! X11 window managers publish the full `_NET_WM_STATE` set on every change.
//! Several of them keep `_NET_WM_STATE_MAXIMIZED_*` set while a window is
//! fullscreen, and drop or re-add it while leaving fullscreen, so the
//! maximize bit is ignored whenever fullscreen is involved. Leaving
//! fullscreen does not bring maximize back on its own either.

use super::{PlatformKind, PlatformWindowAdapter, diff_snapshot};
use crate::error::PlatformError;
use crate::notification::{PlatformNotification, RawWindowEvent};
use crate::state::{WindowShape, WindowState};
use crate::toolkit::NativeWidget;

pub struct X11Adapter {
    widget: Box<dyn NativeWidget>,
}

impl X11Adapter {
    pub fn new(widget: Box<dyn NativeWidget>) -> Self {
        Self { widget }
    }

    fn translate_snapshot(
        current: WindowShape,
        minimized: bool,
        maximized: bool,
        fullscreen: bool,
    ) -> Vec<PlatformNotification> {
        if fullscreen {
            if maximized {
                log::debug!("Window manager reports fullscreen and maximized; treating as fullscreen");
            }
            return diff_snapshot(current, minimized, false, true);
        }
        if current == WindowShape::Fullscreen && !minimized {
            // Maximize bit is unreliable mid-transition
            return vec![PlatformNotification::LeftFullScreen];
        }
        diff_snapshot(current, minimized, maximized, fullscreen)
    }
}

impl PlatformWindowAdapter for X11Adapter {
    fn kind(&self) -> PlatformKind {
        PlatformKind::X11
    }

    fn widget(&self) -> &dyn NativeWidget {
        self.widget.as_ref()
    }

    fn widget_mut(&mut self) -> &mut dyn NativeWidget {
        self.widget.as_mut()
    }

    fn translate(&mut self, raw: RawWindowEvent, state: &WindowState) -> Vec<PlatformNotification> {
        match raw {
            RawWindowEvent::StateSnapshot {
                minimized,
                maximized,
                fullscreen,
            } => Self::translate_snapshot(state.shape, minimized, maximized, fullscreen),
            RawWindowEvent::SizeMessage(kind) => {
                log::warn!("Unexpected size message {:?} on X11; ignoring", kind);
                Vec::new()
            }
            RawWindowEvent::Notification(notification) => vec![notification],
        }
    }

    fn supports_global_menu(&self) -> bool {
        true
    }

    fn leave_fullscreen(&mut self, restore_to: WindowShape) -> Result<(), PlatformError> {
        self.widget.set_fullscreen(false)?;
        if restore_to == WindowShape::Maximized {
            self.widget.maximize()?;
        }
        Ok(())
    }

    fn restore_from_minimized(&mut self, restore_to: WindowShape) -> Result<(), PlatformError> {
        self.widget.restore()?;
        match restore_to {
            WindowShape::Maximized if !self.widget.is_maximized() => self.widget.maximize(),
            WindowShape::Fullscreen if !self.widget.is_fullscreen() => {
                self.widget.set_fullscreen(true)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolkit::HeadlessWidget;
    use PlatformNotification as N;

    fn snapshot(minimized: bool, maximized: bool, fullscreen: bool) -> RawWindowEvent {
        RawWindowEvent::StateSnapshot {
            minimized,
            maximized,
            fullscreen,
        }
    }

    fn state(shape: WindowShape) -> WindowState {
        WindowState {
            shape,
            ..WindowState::default()
        }
    }

    #[test]
    fn test_fullscreen_and_maximized_is_fullscreen() {
        let mut a = X11Adapter::new(Box::new(HeadlessWidget::new()));
        let out = a.translate(snapshot(false, true, true), &state(WindowShape::Maximized));
        assert_eq!(out, vec![N::EnteredFullScreen]);
    }

    #[test]
    fn test_leaving_fullscreen_ignores_maximize_bit() {
        let mut a = X11Adapter::new(Box::new(HeadlessWidget::new()));
        let out = a.translate(snapshot(false, false, false), &state(WindowShape::Fullscreen));
        assert_eq!(out, vec![N::LeftFullScreen]);
        let out = a.translate(snapshot(false, true, false), &state(WindowShape::Fullscreen));
        assert_eq!(out, vec![N::LeftFullScreen]);
    }

    #[test]
    fn test_plain_maximize() {
        let mut a = X11Adapter::new(Box::new(HeadlessWidget::new()));
        let out = a.translate(snapshot(false, true, false), &state(WindowShape::Normal));
        assert_eq!(out, vec![N::Maximized]);
    }

    #[test]
    fn test_size_messages_are_ignored() {
        let mut a = X11Adapter::new(Box::new(HeadlessWidget::new()));
        let out = a.translate(
            RawWindowEvent::SizeMessage(crate::notification::SizeKind::Minimized),
            &state(WindowShape::Normal),
        );
        assert!(out.is_empty());
    }
}
