//! Widget backed by a winit window.
//!
//! winit has no notification callbacks of its own; state changes arrive as
//! events on the application's event loop. [`WinitWidget::raw_events`]
//! converts those into raw window events the application feeds back into
//! [`NativeWindow::handle_raw_event`](crate::NativeWindow::handle_raw_event).

use super::{NativeHandle, NativeWidget, WidgetResult};
use crate::error::PlatformError;
use crate::geometry::{Rect, Size};
use crate::notification::{NotificationSender, PlatformNotification, RawWindowEvent};
use par_window_config::WindowOptions;
use std::sync::Arc;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent as WinitEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, UserAttentionType, Window, WindowAttributes, WindowLevel};

/// Largest extent handed to winit for an unconstrained maximum.
const UNCONSTRAINED_MAX: u32 = i32::MAX as u32;

pub struct WinitWidget {
    window: Arc<Window>,
    menu_bar_height: u32,
    sender: Option<NotificationSender>,
}

impl WinitWidget {
    /// Create a hidden window; the facade shows it once it is set up.
    pub fn new(event_loop: &ActiveEventLoop, options: &WindowOptions) -> Result<Self, PlatformError> {
        let mut attrs = WindowAttributes::default()
            .with_title(&options.title)
            .with_inner_size(PhysicalSize::new(options.width, options.height))
            .with_resizable(options.resizable)
            .with_visible(false);

        if let (Some(x), Some(y)) = (options.x, options.y) {
            attrs = attrs.with_position(PhysicalPosition::new(x, y));
        }

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| PlatformError::WindowCreation(e.to_string()))?;

        log::info!("Created winit window {:?}", window.id());
        Ok(Self {
            window: Arc::new(window),
            menu_bar_height: 0,
            sender: None,
        })
    }

    /// Get the underlying winit window
    pub fn winit_window(&self) -> Arc<Window> {
        Arc::clone(&self.window)
    }

    /// Current `_NET_WM_STATE` style flags of a winit window.
    pub fn snapshot(window: &Window) -> RawWindowEvent {
        RawWindowEvent::StateSnapshot {
            minimized: window.is_minimized().unwrap_or(false),
            maximized: window.is_maximized(),
            fullscreen: window.fullscreen().is_some(),
        }
    }

    /// Raw window events a winit event translates to.
    pub fn raw_events(window: &Window, event: &WinitEvent) -> Vec<RawWindowEvent> {
        translate_event(event, || Self::snapshot(window), || outer_bounds(window))
    }

    pub fn menu_bar_height(&self) -> u32 {
        self.menu_bar_height
    }
}

/// Occlusion is not visibility: a covered window stays shown. It often
/// comes with a minimize the toolkit reports no other way, so it only
/// refreshes the state snapshot.
fn translate_event(
    event: &WinitEvent,
    snapshot: impl FnOnce() -> RawWindowEvent,
    bounds: impl FnOnce() -> Rect,
) -> Vec<RawWindowEvent> {
    match event {
        WinitEvent::Focused(focused) => {
            vec![PlatformNotification::ActivationChanged(*focused).into()]
        }
        WinitEvent::Resized(_) => vec![
            snapshot(),
            PlatformNotification::BoundsChanged(bounds()).into(),
        ],
        WinitEvent::Moved(_) => vec![PlatformNotification::BoundsChanged(bounds()).into()],
        WinitEvent::Occluded(_) => vec![snapshot()],
        WinitEvent::Destroyed => vec![PlatformNotification::Destroyed.into()],
        _ => Vec::new(),
    }
}

fn outer_bounds(window: &Window) -> Rect {
    let position = window.outer_position().unwrap_or_default();
    let size = window.outer_size();
    Rect::new(position.x, position.y, size.width, size.height)
}

fn unsupported(operation: &str) -> WidgetResult {
    log::debug!("{} is not supported by winit on this platform; ignoring", operation);
    Ok(())
}

impl NativeWidget for WinitWidget {
    fn subscribe(&mut self, sender: NotificationSender) {
        self.sender = Some(sender);
    }

    fn show(&mut self) -> WidgetResult {
        self.window.set_visible(true);
        self.window.focus_window();
        Ok(())
    }

    fn show_inactive(&mut self) -> WidgetResult {
        self.window.set_visible(true);
        Ok(())
    }

    fn hide(&mut self) -> WidgetResult {
        self.window.set_visible(false);
        Ok(())
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible().unwrap_or(true)
    }

    fn activate(&mut self) -> WidgetResult {
        self.window.focus_window();
        Ok(())
    }

    fn deactivate(&mut self) -> WidgetResult {
        unsupported("deactivate")
    }

    fn is_active(&self) -> bool {
        self.window.has_focus()
    }

    fn set_bounds(&mut self, bounds: Rect) -> WidgetResult {
        self.window
            .set_outer_position(PhysicalPosition::new(bounds.x, bounds.y));
        // winit sizes the client area; decorations come on top
        let _ = self
            .window
            .request_inner_size(PhysicalSize::new(bounds.width, bounds.height));
        Ok(())
    }

    fn bounds(&self) -> Rect {
        outer_bounds(&self.window)
    }

    fn maximize(&mut self) -> WidgetResult {
        self.window.set_maximized(true);
        Ok(())
    }

    fn minimize(&mut self) -> WidgetResult {
        self.window.set_minimized(true);
        Ok(())
    }

    fn restore(&mut self) -> WidgetResult {
        if self.window.is_minimized().unwrap_or(false) {
            self.window.set_minimized(false);
        } else {
            self.window.set_maximized(false);
        }
        Ok(())
    }

    fn set_fullscreen(&mut self, fullscreen: bool) -> WidgetResult {
        self.window
            .set_fullscreen(fullscreen.then_some(Fullscreen::Borderless(None)));
        Ok(())
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn is_minimized(&self) -> bool {
        self.window.is_minimized().unwrap_or(false)
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_resizable(&mut self, resizable: bool) -> WidgetResult {
        self.window.set_resizable(resizable);
        Ok(())
    }

    fn set_always_on_top(&mut self, always_on_top: bool) -> WidgetResult {
        let level = if always_on_top {
            WindowLevel::AlwaysOnTop
        } else {
            WindowLevel::Normal
        };
        self.window.set_window_level(level);
        Ok(())
    }

    fn set_size_constraints(&mut self, min: Size, max: Size) -> WidgetResult {
        let min = (min != Size::default()).then(|| PhysicalSize::new(min.width, min.height));
        let max = (max != Size::default()).then(|| {
            let axis = |v: u32| if v == 0 { UNCONSTRAINED_MAX } else { v };
            PhysicalSize::new(axis(max.width), axis(max.height))
        });
        self.window.set_min_inner_size(min);
        self.window.set_max_inner_size(max);
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> WidgetResult {
        self.window.set_title(title);
        Ok(())
    }

    fn flash_frame(&mut self, flash: bool) -> WidgetResult {
        self.window
            .request_user_attention(flash.then_some(UserAttentionType::Informational));
        Ok(())
    }

    fn set_skip_taskbar(&mut self, skip: bool) -> WidgetResult {
        #[cfg(target_os = "windows")]
        {
            use winit::platform::windows::WindowExtWindows;
            self.window.set_skip_taskbar(skip);
            Ok(())
        }
        #[cfg(not(target_os = "windows"))]
        {
            let _ = skip;
            unsupported("set_skip_taskbar")
        }
    }

    fn set_visible_on_all_workspaces(&mut self, visible: bool) -> WidgetResult {
        let _ = visible;
        unsupported("set_visible_on_all_workspaces")
    }

    fn relayout(&mut self, menu_bar_height: u32) {
        self.menu_bar_height = menu_bar_height;
        self.window.request_redraw();
    }

    fn work_area(&self) -> Rect {
        match self.window.current_monitor() {
            Some(monitor) => {
                let position = monitor.position();
                let size = monitor.size();
                Rect::new(position.x, position.y, size.width, size.height)
            }
            None => outer_bounds(&self.window),
        }
    }

    fn close(&mut self) -> WidgetResult {
        // The winit window is released when the widget is dropped at teardown
        self.window.set_visible(false);
        if let Some(sender) = &self.sender {
            sender.send(PlatformNotification::Destroyed);
        }
        Ok(())
    }

    fn destroy(&mut self) {
        self.window.set_visible(false);
        log::info!("Destroying winit window {:?}", self.window.id());
    }

    fn native_handle(&self) -> NativeHandle {
        u64::from(self.window.id())
    }

    fn show_system_menu(&mut self) -> WidgetResult {
        self.window.show_window_menu(PhysicalPosition::new(0, 0));
        Ok(())
    }
}
