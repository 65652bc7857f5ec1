//! Window state reconciliation.
//!
//! Commands sent to the toolkit complete asynchronously and platforms
//! disagree on what they report along the way. The watcher keeps the state
//! the platform last confirmed, remembers which shape to go back to after
//! fullscreen, minimize and kiosk, and filters notifications that contradict
//! a command issued in the same call.

use crate::event::WindowEvent;
use crate::notification::{NotificationQueue, NotificationSender, PlatformNotification, RawWindowEvent};
use crate::state::{WindowShape, WindowState};
use std::rc::Rc;

/// A commanded shape change the platform has not confirmed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: WindowShape,
    pub to: WindowShape,
}

#[derive(Debug)]
pub struct WindowStateWatcher {
    state: WindowState,
    /// `None` once deactivated
    queue: Option<NotificationQueue>,
    in_flight: Option<Transition>,
    /// Last commanded shape the platform has not reached yet. Unlike
    /// `in_flight` it outlives the turn, so later commands see it.
    pending: Option<WindowShape>,
    pre_fullscreen: WindowShape,
    pre_minimize: WindowShape,
    pre_kiosk: Option<WindowShape>,
    /// Origins captured when the command was issued, used when the
    /// confirmation arrives after the turn ended.
    pending_fullscreen_origin: Option<WindowShape>,
    pending_minimize_origin: Option<WindowShape>,
}

impl WindowStateWatcher {
    pub fn new(initial: WindowState) -> Self {
        Self {
            state: initial,
            queue: Some(Rc::default()),
            in_flight: None,
            pending: None,
            pre_fullscreen: WindowShape::Normal,
            pre_minimize: WindowShape::Normal,
            pre_kiosk: None,
            pending_fullscreen_origin: None,
            pending_minimize_origin: None,
        }
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut WindowState {
        &mut self.state
    }

    pub fn shape(&self) -> WindowShape {
        self.state.shape
    }

    /// Shape a fullscreen window returns to.
    pub fn pre_fullscreen_shape(&self) -> WindowShape {
        self.pre_fullscreen
    }

    /// Shape a minimized window returns to.
    pub fn pre_minimize_shape(&self) -> WindowShape {
        self.pre_minimize
    }

    pub fn pre_kiosk_shape(&self) -> Option<WindowShape> {
        self.pre_kiosk
    }

    pub fn in_flight(&self) -> Option<Transition> {
        self.in_flight
    }

    /// Commanded shape still waiting for confirmation.
    pub fn pending(&self) -> Option<WindowShape> {
        self.pending
    }

    /// Shape the window is heading to: the pending command if any,
    /// otherwise the confirmed shape.
    pub fn target_shape(&self) -> WindowShape {
        self.pending.unwrap_or(self.state.shape)
    }

    /// Confirmed in `shape` with nothing else commanded.
    pub fn is_settled_in(&self, shape: WindowShape) -> bool {
        self.pending.is_none() && self.state.shape == shape
    }

    /// In `shape` or commanded into it.
    pub fn is_in_or_entering(&self, shape: WindowShape) -> bool {
        self.state.shape == shape || self.pending == Some(shape)
    }

    /// Shape leaving fullscreen goes back to, including a fullscreen
    /// request the platform has not confirmed yet.
    pub fn fullscreen_return_shape(&self) -> WindowShape {
        if self.state.shape != WindowShape::Fullscreen
            && self.pending == Some(WindowShape::Fullscreen)
            && let Some(origin) = self.pending_fullscreen_origin
            && origin.is_restorable()
        {
            return origin;
        }
        self.pre_fullscreen
    }

    /// Shape restoring from minimized goes back to, including a minimize
    /// request the platform has not confirmed yet.
    pub fn minimize_return_shape(&self) -> WindowShape {
        if self.state.shape != WindowShape::Minimized
            && self.pending == Some(WindowShape::Minimized)
            && let Some(origin) = self.pending_minimize_origin
        {
            return origin;
        }
        self.pre_minimize
    }

    /// Sender for the toolkit, or a detached one after deactivation.
    pub fn sender(&self) -> NotificationSender {
        match &self.queue {
            Some(queue) => NotificationSender::new(queue),
            None => NotificationSender::detached(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.queue.is_some()
    }

    /// Pop the oldest queued notification.
    pub fn next_raw(&self) -> Option<RawWindowEvent> {
        self.queue.as_ref()?.borrow_mut().pop_front()
    }

    /// Drop the subscription. Queued and later notifications are discarded.
    pub fn deactivate(&mut self) {
        if let Some(queue) = self.queue.take() {
            let pending = queue.borrow().len();
            if pending > 0 {
                log::debug!("Discarding {} queued notifications on teardown", pending);
            }
        }
        self.in_flight = None;
        self.pending = None;
    }

    /// Record a shape change that was just commanded.
    pub fn expect(&mut self, to: WindowShape) {
        let from = self.state.shape;
        let target = self.target_shape();
        match to {
            WindowShape::Fullscreen => {
                let origin = match target {
                    WindowShape::Normal | WindowShape::Maximized => target,
                    _ => self.restorable_origin(),
                };
                self.pending_fullscreen_origin = Some(origin);
            }
            WindowShape::Minimized if target != WindowShape::Minimized => {
                self.pending_minimize_origin = Some(target);
            }
            _ => {}
        }
        log::debug!("Expecting transition {} -> {}", from, to);
        self.in_flight = Some(Transition { from, to });
        self.pending = (to != from).then_some(to);
    }

    /// The toolkit rejected the last shape command; nothing is on its way.
    pub fn cancel_expected(&mut self) {
        if let Some(to) = self.pending.take() {
            log::debug!("Dropping expected transition to {}", to);
        }
        self.in_flight = None;
    }

    /// The call that issued commands has finished; later notifications are
    /// authoritative again.
    pub fn end_turn(&mut self) {
        if let Some(t) = self.in_flight.take() {
            log::debug!(
                "Transition {} -> {} not confirmed within the call",
                t.from,
                t.to
            );
        }
    }

    /// Enter kiosk. Returns `false` if already in kiosk; the recorded
    /// pre-kiosk shape is kept in that case.
    pub fn enter_kiosk(&mut self) -> bool {
        if self.state.kiosk {
            return false;
        }
        self.pre_kiosk = Some(self.kiosk_origin());
        self.state.kiosk = true;
        true
    }

    /// Leave kiosk, handing out the pre-kiosk shape exactly once.
    pub fn leave_kiosk(&mut self) -> Option<WindowShape> {
        if !self.state.kiosk {
            return None;
        }
        self.state.kiosk = false;
        self.pre_kiosk.take()
    }

    /// Apply one canonical notification and report what changed.
    pub fn apply(&mut self, notification: PlatformNotification) -> Option<WindowEvent> {
        use PlatformNotification as N;

        match notification {
            N::Shown => (!self.state.visible).then(|| {
                self.state.visible = true;
                WindowEvent::Shown
            }),
            N::Hidden => self.state.visible.then(|| {
                self.state.visible = false;
                WindowEvent::Hidden
            }),
            N::ActivationChanged(focused) => (self.state.focused != focused).then(|| {
                self.state.focused = focused;
                if focused {
                    WindowEvent::Focused
                } else {
                    WindowEvent::Blurred
                }
            }),
            N::BoundsChanged(bounds) => Some(WindowEvent::BoundsChanged(bounds)),
            N::Destroyed => Some(WindowEvent::Closed),
            N::Minimized
            | N::Restored
            | N::Maximized
            | N::Unmaximized
            | N::EnteredFullScreen
            | N::LeftFullScreen => self.apply_shape(notification),
        }
    }

    fn apply_shape(&mut self, notification: PlatformNotification) -> Option<WindowEvent> {
        let (next, event) = self.shape_transition(notification)?;

        if let Some(t) = self.in_flight {
            if next != t.to {
                log::debug!(
                    "Ignoring stale {:?} ({} -> {} in flight)",
                    notification,
                    t.from,
                    t.to
                );
                return None;
            }
            self.in_flight = None;
        }

        self.commit(notification, next);
        Some(event)
    }

    /// Shape and event a notification leads to, or `None` if it changes nothing.
    fn shape_transition(
        &self,
        notification: PlatformNotification,
    ) -> Option<(WindowShape, WindowEvent)> {
        use PlatformNotification as N;
        use WindowShape as S;

        let current = self.state.shape;
        match (notification, current) {
            (N::Minimized, S::Minimized) => None,
            (N::Minimized, _) => Some((S::Minimized, WindowEvent::Minimized)),

            (N::Restored, S::Minimized) => Some((self.pre_minimize, WindowEvent::Restored)),
            (N::Restored, S::Maximized) => Some((S::Normal, WindowEvent::Unmaximized)),
            (N::Restored, S::Fullscreen) => {
                Some((self.pre_fullscreen, WindowEvent::LeftFullScreen))
            }
            (N::Restored, S::Normal) => {
                log::warn!("Platform reported restore of a window that was not minimized");
                None
            }

            (N::Maximized, S::Maximized) => None,
            (N::Maximized, S::Minimized) if self.pre_minimize == S::Maximized => {
                Some((S::Maximized, WindowEvent::Restored))
            }
            (N::Maximized, S::Fullscreen) => {
                log::warn!("Platform reported maximize while fullscreen; leaving fullscreen");
                Some((S::Maximized, WindowEvent::LeftFullScreen))
            }
            (N::Maximized, _) => Some((S::Maximized, WindowEvent::Maximized)),

            (N::Unmaximized, S::Maximized) => Some((S::Normal, WindowEvent::Unmaximized)),
            (N::Unmaximized, _) => None,

            (N::EnteredFullScreen, S::Fullscreen) => None,
            (N::EnteredFullScreen, _) => Some((S::Fullscreen, WindowEvent::EnteredFullScreen)),

            (N::LeftFullScreen, S::Fullscreen) => {
                Some((self.pre_fullscreen, WindowEvent::LeftFullScreen))
            }
            (N::LeftFullScreen, S::Minimized) if self.pre_minimize == S::Fullscreen => {
                Some((S::Minimized, WindowEvent::LeftFullScreen))
            }
            (N::LeftFullScreen, _) => {
                log::warn!(
                    "Platform reported leaving fullscreen while {}; ignoring",
                    current
                );
                None
            }

            _ => None,
        }
    }

    fn commit(&mut self, notification: PlatformNotification, next: WindowShape) {
        let current = self.state.shape;
        match next {
            WindowShape::Fullscreen if current != WindowShape::Fullscreen => {
                let origin = self
                    .pending_fullscreen_origin
                    .take()
                    .unwrap_or_else(|| self.restorable_origin());
                self.pre_fullscreen = if origin.is_restorable() {
                    origin
                } else {
                    WindowShape::Normal
                };
            }
            WindowShape::Minimized if current != WindowShape::Minimized => {
                self.pre_minimize = self.pending_minimize_origin.take().unwrap_or(current);
            }
            WindowShape::Minimized if notification == PlatformNotification::LeftFullScreen => {
                self.pre_minimize = self.pre_fullscreen;
            }
            _ => {}
        }

        log::debug!("Window shape {} -> {} ({:?})", current, next, notification);
        self.state.shape = next;
        if self.pending == Some(next) {
            self.pending = None;
        }
    }

    /// Non-minimized, non-fullscreen shape the window would return to.
    fn restorable_origin(&self) -> WindowShape {
        match self.state.shape {
            WindowShape::Normal | WindowShape::Maximized => self.state.shape,
            WindowShape::Minimized if self.pre_minimize.is_restorable() => self.pre_minimize,
            WindowShape::Minimized | WindowShape::Fullscreen => self.pre_fullscreen,
        }
    }

    fn kiosk_origin(&self) -> WindowShape {
        match self.target_shape() {
            WindowShape::Minimized => self.minimize_return_shape(),
            shape => shape,
        }
    }
}
