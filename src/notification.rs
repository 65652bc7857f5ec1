//! Inbound platform notifications and the subscription toolkits post into.
//!
//! Toolkits report what happened to the native window in whatever form they
//! have ([`RawWindowEvent`]). The platform adapter translates that into the
//! canonical [`PlatformNotification`] vocabulary the state watcher consumes.

use crate::geometry::Rect;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Canonical state-change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformNotification {
    Minimized,
    /// Left minimized, or (on some toolkits) left maximized
    Restored,
    Maximized,
    Unmaximized,
    EnteredFullScreen,
    LeftFullScreen,
    Shown,
    Hidden,
    /// Outer window bounds changed
    BoundsChanged(Rect),
    /// Gained (`true`) or lost keyboard focus
    ActivationChanged(bool),
    /// The native window is gone
    Destroyed,
}

/// Windows `WM_SIZE` request type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Restored,
    Minimized,
    Maximized,
}

/// Notification as delivered by a toolkit, before platform translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawWindowEvent {
    /// Already canonical
    Notification(PlatformNotification),
    /// Full state flags, as `_NET_WM_STATE` style toolkits report them
    StateSnapshot {
        minimized: bool,
        maximized: bool,
        fullscreen: bool,
    },
    /// Windows size message
    SizeMessage(SizeKind),
}

impl From<PlatformNotification> for RawWindowEvent {
    fn from(notification: PlatformNotification) -> Self {
        Self::Notification(notification)
    }
}

pub(crate) type NotificationQueue = Rc<RefCell<VecDeque<RawWindowEvent>>>;

/// Handle a toolkit keeps to post notifications to its window.
///
/// The window owns the queue; this only holds a weak reference, so posting
/// after the window has been torn down is rejected instead of reaching a
/// dead window.
#[derive(Debug, Clone)]
pub struct NotificationSender {
    queue: Weak<RefCell<VecDeque<RawWindowEvent>>>,
}

impl NotificationSender {
    pub(crate) fn new(queue: &NotificationQueue) -> Self {
        Self {
            queue: Rc::downgrade(queue),
        }
    }

    /// A sender that is not attached to any window.
    pub fn detached() -> Self {
        Self { queue: Weak::new() }
    }

    /// Whether the receiving window is still alive.
    pub fn is_alive(&self) -> bool {
        self.queue.strong_count() > 0
    }

    /// Queue a notification. Returns `false` if the window is gone.
    pub fn send(&self, event: impl Into<RawWindowEvent>) -> bool {
        let event = event.into();
        match self.queue.upgrade() {
            Some(queue) => {
                queue.borrow_mut().push_back(event);
                true
            }
            None => {
                log::debug!("Dropping {:?}: window subscription is gone", event);
                false
            }
        }
    }
}
