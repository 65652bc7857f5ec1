//! Shared integration test helpers for par-window.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` keeps files that only use some helpers quiet.

#![allow(dead_code)]

use par_window::{
    CloseDecision, ContentView, HeadlessHandle, HeadlessWidget, KeyDisposition, KeyboardEvent,
    NativeWindow, PlatformKind, WindowEvent, WindowOptions,
};

/// Build a window around a fresh headless widget and drop the events raised
/// while it was being set up.
pub fn headless_window(options: WindowOptions, platform: PlatformKind) -> (NativeWindow, HeadlessHandle) {
    let widget = HeadlessWidget::new();
    let handle = widget.handle();
    let mut window = NativeWindow::builder(options)
        .platform(platform)
        .build(widget)
        .expect("headless window");
    window.poll_events().for_each(drop);
    (window, handle)
}

pub fn default_window(platform: PlatformKind) -> (NativeWindow, HeadlessHandle) {
    headless_window(WindowOptions::default(), platform)
}

pub fn events(window: &mut NativeWindow) -> Vec<WindowEvent> {
    window.poll_events().collect()
}

/// Shape events only, without bounds, focus or visibility noise.
pub fn shape_events(window: &mut NativeWindow) -> Vec<WindowEvent> {
    window
        .poll_events()
        .filter(|e| {
            matches!(
                e,
                WindowEvent::Minimized
                    | WindowEvent::Restored
                    | WindowEvent::Maximized
                    | WindowEvent::Unmaximized
                    | WindowEvent::EnteredFullScreen
                    | WindowEvent::LeftFullScreen
                    | WindowEvent::EnteredKiosk
                    | WindowEvent::LeftKiosk
            )
        })
        .collect()
}

/// Content view with a fixed answer for keys and close requests.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedContent {
    pub handles: fn(&KeyboardEvent) -> bool,
    pub close: CloseDecision,
}

impl ScriptedContent {
    pub fn passthrough() -> Self {
        Self {
            handles: |_| false,
            close: CloseDecision::Allow,
        }
    }

    pub fn vetoing_close() -> Self {
        Self {
            close: CloseDecision::Veto,
            ..Self::passthrough()
        }
    }
}

impl ContentView for ScriptedContent {
    fn handle_key_event(&mut self, event: &KeyboardEvent) -> KeyDisposition {
        if (self.handles)(event) {
            KeyDisposition::Handled
        } else {
            KeyDisposition::Unhandled
        }
    }

    fn request_close(&mut self) -> CloseDecision {
        self.close
    }
}
