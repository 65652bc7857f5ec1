//! In-memory widget.
//!
//! Behaves like a simple window manager: every command updates the stored
//! window and, while auto-acknowledge is on, posts the notifications a real
//! toolkit would send. A [`HeadlessHandle`] shares the state so callers can
//! inspect it, make commands fail, or inject platform-initiated changes.

use super::{NativeHandle, NativeWidget, WidgetResult};
use crate::error::PlatformError;
use crate::geometry::{Rect, Size};
use crate::notification::{NotificationSender, PlatformNotification, RawWindowEvent};
use par_window_accelerators::KeyboardEvent;
use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Screen area used unless configured otherwise.
const DEFAULT_WORK_AREA: Rect = Rect::new(0, 0, 1920, 1080);

/// Everything the headless window manager knows about its window.
#[derive(Debug, Clone)]
pub struct HeadlessState {
    pub bounds: Rect,
    pub visible: bool,
    pub active: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub fullscreen: bool,
    pub resizable: bool,
    pub always_on_top: bool,
    pub skip_taskbar: bool,
    pub visible_on_all_workspaces: bool,
    pub flashing: bool,
    pub title: String,
    pub min_size: Size,
    pub max_size: Size,
    /// Menu bar height of the last relayout
    pub menu_bar_height: u32,
    pub relayouts: usize,
    pub system_menu_requests: usize,
    pub unhandled_keys: Vec<KeyboardEvent>,
    pub closed: bool,
    pub destroyed: bool,
    pub work_area: Rect,
    /// Post notifications for every command
    pub auto_ack: bool,
    /// Commands executed, in order
    pub commands: Vec<&'static str>,
    failing: HashSet<&'static str>,
    restore_bounds: Rect,
    fullscreen_restore_bounds: Rect,
    sender: Option<NotificationSender>,
}

impl Default for HeadlessState {
    fn default() -> Self {
        let bounds = Rect::new(0, 0, 800, 600);
        Self {
            bounds,
            visible: false,
            active: false,
            minimized: false,
            maximized: false,
            fullscreen: false,
            resizable: true,
            always_on_top: false,
            skip_taskbar: false,
            visible_on_all_workspaces: false,
            flashing: false,
            title: String::new(),
            min_size: Size::default(),
            max_size: Size::default(),
            menu_bar_height: 0,
            relayouts: 0,
            system_menu_requests: 0,
            unhandled_keys: Vec::new(),
            closed: false,
            destroyed: false,
            work_area: DEFAULT_WORK_AREA,
            auto_ack: true,
            commands: Vec::new(),
            failing: HashSet::new(),
            restore_bounds: bounds,
            fullscreen_restore_bounds: bounds,
            sender: None,
        }
    }
}

/// Shared view of a [`HeadlessWidget`] that outlives its window.
#[derive(Debug, Clone)]
pub struct HeadlessHandle {
    inner: Rc<RefCell<HeadlessState>>,
}

impl HeadlessHandle {
    pub fn state(&self) -> Ref<'_, HeadlessState> {
        self.inner.borrow()
    }

    /// Same handle the widget reports to the window.
    pub fn native_handle(&self) -> NativeHandle {
        Rc::as_ptr(&self.inner) as usize as NativeHandle
    }

    /// Make a command fail (or succeed again) from now on.
    pub fn set_failing(&self, operation: &'static str, failing: bool) {
        let mut state = self.inner.borrow_mut();
        if failing {
            state.failing.insert(operation);
        } else {
            state.failing.remove(operation);
        }
    }

    /// Stop or resume acknowledging commands.
    pub fn set_auto_ack(&self, auto_ack: bool) {
        self.inner.borrow_mut().auto_ack = auto_ack;
    }

    pub fn set_work_area(&self, area: Rect) {
        self.inner.borrow_mut().work_area = area;
    }

    /// Post a notification as if the platform initiated the change.
    /// Returns `false` once the window is gone.
    pub fn post(&self, event: impl Into<RawWindowEvent>) -> bool {
        let sender = self.inner.borrow().sender.clone();
        sender.is_some_and(|s| s.send(event))
    }

    pub fn sender(&self) -> Option<NotificationSender> {
        self.inner.borrow().sender.clone()
    }
}

#[derive(Debug)]
pub struct HeadlessWidget {
    inner: Rc<RefCell<HeadlessState>>,
}

impl Default for HeadlessWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessWidget {
    pub fn new() -> Self {
        Self::with_state(HeadlessState::default())
    }

    pub fn with_state(state: HeadlessState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Run a command and post the notifications it produced.
    fn run(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut HeadlessState) -> Vec<PlatformNotification>,
    ) -> WidgetResult {
        let (notifications, sender) = {
            let mut state = self.inner.borrow_mut();
            if state.destroyed || state.closed {
                return Err(PlatformError::Destroyed(operation.to_string()));
            }
            if state.failing.contains(operation) {
                return Err(PlatformError::Other(format!("{} rejected by toolkit", operation)));
            }
            state.commands.push(operation);
            let notifications = f(&mut *state);
            let sender = state.auto_ack.then(|| state.sender.clone()).flatten();
            (notifications, sender)
        };

        if let Some(sender) = sender {
            for notification in notifications {
                sender.send(notification);
            }
        }
        Ok(())
    }
}

impl NativeWidget for HeadlessWidget {
    fn subscribe(&mut self, sender: NotificationSender) {
        self.inner.borrow_mut().sender = Some(sender);
    }

    fn show(&mut self) -> WidgetResult {
        self.run("show", |s| {
            let mut out = Vec::new();
            if !s.visible {
                s.visible = true;
                out.push(PlatformNotification::Shown);
            }
            if !s.active {
                s.active = true;
                out.push(PlatformNotification::ActivationChanged(true));
            }
            out
        })
    }

    fn show_inactive(&mut self) -> WidgetResult {
        self.run("show_inactive", |s| {
            if s.visible {
                return Vec::new();
            }
            s.visible = true;
            vec![PlatformNotification::Shown]
        })
    }

    fn hide(&mut self) -> WidgetResult {
        self.run("hide", |s| {
            let mut out = Vec::new();
            if s.active {
                s.active = false;
                out.push(PlatformNotification::ActivationChanged(false));
            }
            if s.visible {
                s.visible = false;
                out.push(PlatformNotification::Hidden);
            }
            out
        })
    }

    fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    fn activate(&mut self) -> WidgetResult {
        self.run("activate", |s| {
            if s.active {
                return Vec::new();
            }
            s.active = true;
            vec![PlatformNotification::ActivationChanged(true)]
        })
    }

    fn deactivate(&mut self) -> WidgetResult {
        self.run("deactivate", |s| {
            if !s.active {
                return Vec::new();
            }
            s.active = false;
            vec![PlatformNotification::ActivationChanged(false)]
        })
    }

    fn is_active(&self) -> bool {
        self.inner.borrow().active
    }

    fn set_bounds(&mut self, bounds: Rect) -> WidgetResult {
        self.run("set_bounds", |s| {
            if s.bounds == bounds {
                return Vec::new();
            }
            s.bounds = bounds;
            vec![PlatformNotification::BoundsChanged(bounds)]
        })
    }

    fn bounds(&self) -> Rect {
        self.inner.borrow().bounds
    }

    fn maximize(&mut self) -> WidgetResult {
        self.run("maximize", |s| {
            let mut out = Vec::new();
            if s.minimized {
                s.minimized = false;
                out.push(PlatformNotification::Restored);
            }
            if !s.maximized {
                s.maximized = true;
                out.push(PlatformNotification::Maximized);
                if !s.fullscreen {
                    s.restore_bounds = s.bounds;
                    s.bounds = s.work_area;
                    out.push(PlatformNotification::BoundsChanged(s.bounds));
                }
            }
            out
        })
    }

    fn minimize(&mut self) -> WidgetResult {
        self.run("minimize", |s| {
            if s.minimized {
                return Vec::new();
            }
            s.minimized = true;
            let mut out = vec![PlatformNotification::Minimized];
            if s.active {
                s.active = false;
                out.push(PlatformNotification::ActivationChanged(false));
            }
            out
        })
    }

    fn restore(&mut self) -> WidgetResult {
        self.run("restore", |s| {
            if s.minimized {
                s.minimized = false;
                return vec![PlatformNotification::Restored];
            }
            if s.maximized && !s.fullscreen {
                s.maximized = false;
                s.bounds = s.restore_bounds;
                return vec![
                    PlatformNotification::Restored,
                    PlatformNotification::BoundsChanged(s.bounds),
                ];
            }
            Vec::new()
        })
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> WidgetResult {
        self.run("set_fullscreen", |s| {
            if s.fullscreen == fullscreen {
                return Vec::new();
            }
            s.fullscreen = fullscreen;
            if fullscreen {
                s.fullscreen_restore_bounds = s.bounds;
                s.bounds = s.work_area;
                vec![
                    PlatformNotification::EnteredFullScreen,
                    PlatformNotification::BoundsChanged(s.bounds),
                ]
            } else {
                s.bounds = s.fullscreen_restore_bounds;
                vec![
                    PlatformNotification::LeftFullScreen,
                    PlatformNotification::BoundsChanged(s.bounds),
                ]
            }
        })
    }

    fn is_maximized(&self) -> bool {
        self.inner.borrow().maximized
    }

    fn is_minimized(&self) -> bool {
        self.inner.borrow().minimized
    }

    fn is_fullscreen(&self) -> bool {
        self.inner.borrow().fullscreen
    }

    fn set_resizable(&mut self, resizable: bool) -> WidgetResult {
        self.run("set_resizable", |s| {
            s.resizable = resizable;
            Vec::new()
        })
    }

    fn set_always_on_top(&mut self, always_on_top: bool) -> WidgetResult {
        self.run("set_always_on_top", |s| {
            s.always_on_top = always_on_top;
            Vec::new()
        })
    }

    fn set_size_constraints(&mut self, min: Size, max: Size) -> WidgetResult {
        self.run("set_size_constraints", |s| {
            s.min_size = min;
            s.max_size = max;
            Vec::new()
        })
    }

    fn set_title(&mut self, title: &str) -> WidgetResult {
        self.run("set_title", |s| {
            s.title = title.to_string();
            Vec::new()
        })
    }

    fn flash_frame(&mut self, flash: bool) -> WidgetResult {
        self.run("flash_frame", |s| {
            s.flashing = flash;
            Vec::new()
        })
    }

    fn set_skip_taskbar(&mut self, skip: bool) -> WidgetResult {
        self.run("set_skip_taskbar", |s| {
            s.skip_taskbar = skip;
            Vec::new()
        })
    }

    fn set_visible_on_all_workspaces(&mut self, visible: bool) -> WidgetResult {
        self.run("set_visible_on_all_workspaces", |s| {
            s.visible_on_all_workspaces = visible;
            Vec::new()
        })
    }

    fn relayout(&mut self, menu_bar_height: u32) {
        let mut state = self.inner.borrow_mut();
        state.menu_bar_height = menu_bar_height;
        state.relayouts += 1;
    }

    fn work_area(&self) -> Rect {
        self.inner.borrow().work_area
    }

    fn close(&mut self) -> WidgetResult {
        self.run("close", |s| {
            s.closed = true;
            s.visible = false;
            vec![PlatformNotification::Destroyed]
        })
    }

    fn destroy(&mut self) {
        let mut state = self.inner.borrow_mut();
        state.destroyed = true;
        state.visible = false;
        state.active = false;
        state.sender = None;
    }

    fn native_handle(&self) -> NativeHandle {
        Rc::as_ptr(&self.inner) as usize as NativeHandle
    }

    fn show_system_menu(&mut self) -> WidgetResult {
        self.run("show_system_menu", |s| {
            s.system_menu_requests += 1;
            Vec::new()
        })
    }

    fn handle_unhandled_key(&mut self, event: &KeyboardEvent) {
        self.inner.borrow_mut().unhandled_keys.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn subscribed() -> (HeadlessWidget, Rc<RefCell<VecDeque<RawWindowEvent>>>) {
        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let mut widget = HeadlessWidget::new();
        widget.subscribe(NotificationSender::new(&queue));
        (widget, queue)
    }

    fn drain(queue: &Rc<RefCell<VecDeque<RawWindowEvent>>>) -> Vec<RawWindowEvent> {
        queue.borrow_mut().drain(..).collect()
    }

    #[test]
    fn test_maximize_posts_notifications() {
        let (mut widget, queue) = subscribed();
        widget.maximize().unwrap();
        assert_eq!(
            drain(&queue),
            vec![
                PlatformNotification::Maximized.into(),
                PlatformNotification::BoundsChanged(DEFAULT_WORK_AREA).into(),
            ]
        );
        widget.restore().unwrap();
        assert_eq!(widget.bounds(), Rect::new(0, 0, 800, 600));
    }

    #[test]
    fn test_no_ack_when_disabled() {
        let (mut widget, queue) = subscribed();
        widget.handle().set_auto_ack(false);
        widget.minimize().unwrap();
        assert!(widget.is_minimized());
        assert!(drain(&queue).is_empty());
    }

    #[test]
    fn test_failing_command() {
        let (mut widget, _queue) = subscribed();
        widget.handle().set_failing("set_title", true);
        assert!(widget.set_title("x").is_err());
        assert!(widget.handle().state().title.is_empty());
    }

    #[test]
    fn test_commands_after_destroy_fail() {
        let (mut widget, _queue) = subscribed();
        widget.destroy();
        assert!(matches!(widget.show(), Err(PlatformError::Destroyed(_))));
    }
}
