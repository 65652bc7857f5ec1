//! Adapter for platforms without special handling.

use super::{PlatformKind, PlatformWindowAdapter, diff_snapshot};
use crate::notification::{PlatformNotification, RawWindowEvent, SizeKind};
use crate::state::{WindowShape, WindowState};
use crate::toolkit::NativeWidget;

pub struct DefaultAdapter {
    widget: Box<dyn NativeWidget>,
}

impl DefaultAdapter {
    pub fn new(widget: Box<dyn NativeWidget>) -> Self {
        Self { widget }
    }
}

impl PlatformWindowAdapter for DefaultAdapter {
    fn kind(&self) -> PlatformKind {
        PlatformKind::Default
    }

    fn widget(&self) -> &dyn NativeWidget {
        self.widget.as_ref()
    }

    fn widget_mut(&mut self) -> &mut dyn NativeWidget {
        self.widget.as_mut()
    }

    fn translate(&mut self, raw: RawWindowEvent, state: &WindowState) -> Vec<PlatformNotification> {
        match raw {
            RawWindowEvent::Notification(notification) => vec![notification],
            RawWindowEvent::StateSnapshot {
                minimized,
                maximized,
                fullscreen,
            } => diff_snapshot(state.shape, minimized, maximized, fullscreen),
            RawWindowEvent::SizeMessage(SizeKind::Minimized) => {
                vec![PlatformNotification::Minimized]
            }
            RawWindowEvent::SizeMessage(SizeKind::Maximized) => {
                vec![PlatformNotification::Maximized]
            }
            RawWindowEvent::SizeMessage(SizeKind::Restored) => match state.shape {
                WindowShape::Minimized => vec![PlatformNotification::Restored],
                WindowShape::Maximized => vec![PlatformNotification::Unmaximized],
                _ => Vec::new(),
            },
        }
    }
}
