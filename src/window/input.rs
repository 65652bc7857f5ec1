//! Keyboard and mouse input.

use super::{NativeWindow, WindowInner};
use crate::content::ContentView;
use crate::error::Result;
use crate::keyboard::{KeyRoute, KeyRouteContext};
use crate::platform::PlatformCommand;
use par_window_accelerators::KeyboardEvent;

/// Mouse activity relevant to the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Pressed,
    Released,
    Moved,
}

impl WindowInner {
    fn handle_key_event(&mut self, event: &KeyboardEvent) -> KeyRoute {
        let outcome = self.router.route(
            event,
            KeyRouteContext {
                content: self.content.as_mut().map(|c| &mut **c as &mut dyn ContentView),
                accelerators: &self.accelerators,
                menu_bar: &mut self.menu_bar,
                adapter: self.adapter.as_ref(),
            },
        );
        self.on_menu_bar_change(outcome.menu_bar);

        match outcome.route {
            KeyRoute::Accelerator(id) => self.dispatch_command(id),
            KeyRoute::Platform(PlatformCommand::Close) => self.close(),
            KeyRoute::Platform(PlatformCommand::ShowSystemMenu) => {
                let r = self.widget_mut().show_system_menu();
                self.report("show_system_menu", r);
            }
            KeyRoute::Unhandled => self.widget_mut().handle_unhandled_key(event),
            KeyRoute::Content | KeyRoute::MenuBar => {}
        }
        outcome.route
    }

    fn handle_mouse_event(&mut self, event: MouseEvent) {
        if event == MouseEvent::Moved {
            return;
        }
        let change = self.menu_bar.disarm();
        self.on_menu_bar_change(change);
    }
}

impl NativeWindow {
    /// Route a key event: content view, accelerators, menu bar, platform.
    pub fn handle_key_event(&mut self, event: &KeyboardEvent) -> Result<KeyRoute> {
        self.command("handle_key_event", |inner| Ok(inner.handle_key_event(event)))
    }

    /// Clicks hide a menu bar revealed with Alt.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Result<()> {
        self.command("handle_mouse_event", |inner| {
            inner.handle_mouse_event(event);
            Ok(())
        })
    }
}
