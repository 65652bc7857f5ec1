//! Keyboard routing.
//!
//! A key event goes, in order, to:
//!
//! 1. the content view, which may consume it;
//! 2. the accelerator table (key-down only);
//! 3. the menu bar, for a bare Alt press or release;
//! 4. the platform's default handling.
//!
//! Every key other than Alt disarms an armed menu bar before routing.

use crate::content::{ContentView, KeyDisposition};
use crate::menu_bar::{MenuBarChange, MenuBarController};
use crate::platform::{PlatformCommand, PlatformWindowAdapter};
use par_window_accelerators::{AcceleratorTable, KeyboardEvent};
use par_window_config::CommandId;

/// Where a key event ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRoute {
    Content,
    Accelerator(CommandId),
    MenuBar,
    Platform(PlatformCommand),
    Unhandled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteOutcome {
    pub route: KeyRoute,
    pub menu_bar: MenuBarChange,
}

/// The parts of a window a key event can reach.
pub struct KeyRouteContext<'a> {
    pub content: Option<&'a mut dyn ContentView>,
    pub accelerators: &'a AcceleratorTable,
    pub menu_bar: &'a mut MenuBarController,
    pub adapter: &'a dyn PlatformWindowAdapter,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct KeyboardRouter;

impl KeyboardRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, event: &KeyboardEvent, ctx: KeyRouteContext<'_>) -> RouteOutcome {
        let KeyRouteContext {
            content,
            accelerators,
            menu_bar,
            adapter,
        } = ctx;

        let was_visible = menu_bar.effective_visible();
        if !event.is_alt_key() {
            menu_bar.disarm();
        }

        let route = Self::dispatch(event, content, accelerators, menu_bar, adapter);
        log::debug!("Key {:?} ({:?}) routed to {:?}", event.logical_key, event.state, route);

        RouteOutcome {
            route,
            menu_bar: MenuBarChange {
                effective_visible_changed: was_visible != menu_bar.effective_visible(),
            },
        }
    }

    fn dispatch(
        event: &KeyboardEvent,
        content: Option<&mut dyn ContentView>,
        accelerators: &AcceleratorTable,
        menu_bar: &mut MenuBarController,
        adapter: &dyn PlatformWindowAdapter,
    ) -> KeyRoute {
        if let Some(content) = content
            && content.handle_key_event(event) == KeyDisposition::Handled
        {
            return KeyRoute::Content;
        }

        if let Some(id) = accelerators.lookup_event(event) {
            return KeyRoute::Accelerator(id);
        }

        if event.is_bare_alt() {
            if event.is_pressed() {
                menu_bar.on_alt_pressed(event.has_non_alt_modifiers());
            } else {
                menu_bar.on_alt_released();
            }
            if menu_bar.is_auto_hide() {
                return KeyRoute::MenuBar;
            }
        }

        match adapter.default_key_command(event) {
            Some(command) => KeyRoute::Platform(command),
            None => KeyRoute::Unhandled,
        }
    }
}
