//! Low-level widget abstraction over a windowing toolkit.
//!
//! A [`NativeWidget`] executes commands on the real window and reports what
//! actually happened through the [`NotificationSender`] it was subscribed
//! with, or through the application feeding toolkit events into
//! [`NativeWindow::handle_raw_event`](crate::NativeWindow::handle_raw_event).
//!
//! | Widget | Description |
//! |---|---|
//! | [`HeadlessWidget`] | In-memory window that acknowledges commands like a window manager |
//! | [`WinitWidget`] | A winit 0.30 window |

mod headless;
mod winit_widget;

pub use headless::{HeadlessHandle, HeadlessState, HeadlessWidget};
pub use winit_widget::WinitWidget;

use crate::error::PlatformError;
use crate::geometry::{Rect, Size};
use crate::notification::NotificationSender;
use par_window_accelerators::KeyboardEvent;

/// Opaque platform window handle passed to helpers.
pub type NativeHandle = u64;

/// Result of a widget command
pub type WidgetResult = Result<(), PlatformError>;

/// Commands and queries a toolkit window supports.
///
/// Mutators may complete asynchronously. Queries return what the toolkit
/// knows right now, which can lag behind a command that was just issued.
pub trait NativeWidget {
    /// Hand the widget the sender it should post state changes to.
    fn subscribe(&mut self, sender: NotificationSender) {
        let _ = sender;
    }

    fn show(&mut self) -> WidgetResult;
    /// Show without taking focus
    fn show_inactive(&mut self) -> WidgetResult;
    fn hide(&mut self) -> WidgetResult;
    fn is_visible(&self) -> bool;

    fn activate(&mut self) -> WidgetResult;
    fn deactivate(&mut self) -> WidgetResult;
    fn is_active(&self) -> bool;

    /// Outer window bounds
    fn set_bounds(&mut self, bounds: Rect) -> WidgetResult;
    fn bounds(&self) -> Rect;

    fn maximize(&mut self) -> WidgetResult;
    fn minimize(&mut self) -> WidgetResult;
    /// Leave minimized or maximized
    fn restore(&mut self) -> WidgetResult;
    fn set_fullscreen(&mut self, fullscreen: bool) -> WidgetResult;
    fn is_maximized(&self) -> bool;
    fn is_minimized(&self) -> bool;
    fn is_fullscreen(&self) -> bool;

    fn set_resizable(&mut self, resizable: bool) -> WidgetResult;
    fn set_always_on_top(&mut self, always_on_top: bool) -> WidgetResult;
    /// Zero on an axis means unconstrained
    fn set_size_constraints(&mut self, min: Size, max: Size) -> WidgetResult;
    fn set_title(&mut self, title: &str) -> WidgetResult;
    fn flash_frame(&mut self, flash: bool) -> WidgetResult;
    fn set_skip_taskbar(&mut self, skip: bool) -> WidgetResult;
    fn set_visible_on_all_workspaces(&mut self, visible: bool) -> WidgetResult;

    /// Lay the content out below a menu bar of the given height.
    fn relayout(&mut self, menu_bar_height: u32);
    /// Usable area of the screen the window is on
    fn work_area(&self) -> Rect;

    /// Ask the window to close; completion is reported as `Destroyed`.
    fn close(&mut self) -> WidgetResult;
    /// Tear the native window down synchronously, without notifications.
    fn destroy(&mut self);

    fn native_handle(&self) -> NativeHandle;
    fn show_system_menu(&mut self) -> WidgetResult;

    /// Key event nobody in the window handled.
    fn handle_unhandled_key(&mut self, event: &KeyboardEvent) {
        let _ = event;
    }
}
