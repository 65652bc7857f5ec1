//! The native window facade.
//!
//! [`NativeWindow`] is the one surface callers use. Every call is one "turn":
//! the command goes to the platform adapter, then everything the toolkit
//! posted in the meantime is translated, reconciled by the state watcher and
//! turned into [`WindowEvent`]s for [`NativeWindow::poll_events`].
//!
//! Sub-modules group the commands:
//!
//! - `shape` - maximize, minimize, restore, fullscreen, kiosk
//! - `bounds` - window/content bounds and size constraints
//! - `menu` - menu model, accelerators, menu bar, platform helpers
//! - `input` - keyboard and mouse routing

mod bounds;
mod input;
mod menu;
mod shape;

pub use input::MouseEvent;

use crate::content::{CloseDecision, ContentView};
use crate::error::{PlatformError, Result, WindowError};
use crate::event::WindowEvent;
use crate::geometry::Size;
use crate::helpers::{GlobalMenuHelper, ThumbarHelper};
use crate::keyboard::KeyboardRouter;
use crate::menu_bar::MenuBarController;
use crate::notification::{NotificationSender, RawWindowEvent};
use crate::platform::{PlatformKind, PlatformWindowAdapter, adapter_for};
use crate::state::WindowState;
use crate::toolkit::{NativeHandle, NativeWidget};
use crate::watcher::WindowStateWatcher;
use bounds::BoundsAnchor;
use par_window_accelerators::AcceleratorTable;
use par_window_config::{MenuModel, WindowOptions};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

/// Builds a [`NativeWindow`] from options and optional collaborators.
pub struct NativeWindowBuilder {
    options: WindowOptions,
    platform: PlatformKind,
    content: Option<Box<dyn ContentView>>,
    global_menu: Option<Box<dyn GlobalMenuHelper>>,
    thumbar: Option<Box<dyn ThumbarHelper>>,
}

impl NativeWindowBuilder {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            options,
            platform: PlatformKind::current(),
            content: None,
            global_menu: None,
            thumbar: None,
        }
    }

    /// Override the platform adapter (defaults to the build target's).
    pub fn platform(mut self, platform: PlatformKind) -> Self {
        self.platform = platform;
        self
    }

    pub fn content_view(mut self, view: impl ContentView + 'static) -> Self {
        self.content = Some(Box::new(view));
        self
    }

    /// Attached only on platforms with a global menu bar.
    pub fn global_menu_helper(mut self, helper: impl GlobalMenuHelper + 'static) -> Self {
        self.global_menu = Some(Box::new(helper));
        self
    }

    /// Attached only on platforms with a taskbar thumbnail toolbar.
    pub fn thumbar_helper(mut self, helper: impl ThumbarHelper + 'static) -> Self {
        self.thumbar = Some(Box::new(helper));
        self
    }

    /// Create the window around a toolkit widget and apply the options.
    pub fn build(self, widget: impl NativeWidget + 'static) -> Result<NativeWindow> {
        let NativeWindowBuilder {
            options,
            platform,
            content,
            global_menu,
            thumbar,
        } = self;

        options
            .validate()
            .map_err(|e| WindowError::InvalidArgument(e.to_string()))?;

        let watcher = WindowStateWatcher::new(WindowState {
            resizable: options.resizable,
            always_on_top: options.always_on_top,
            visible_on_all_workspaces: options.visible_on_all_workspaces,
            ..WindowState::default()
        });

        let mut widget: Box<dyn NativeWidget> = Box::new(widget);
        widget.subscribe(watcher.sender());
        let adapter = adapter_for(platform, widget);

        let inner = WindowInner {
            watcher,
            adapter,
            menu_bar: MenuBarController::new(options.auto_hide_menu_bar, options.menu_bar_height),
            accelerators: AcceleratorTable::new(),
            router: KeyboardRouter::new(),
            menu: None,
            owned_menu: None,
            content,
            global_menu: None,
            thumbar: None,
            title: options.title.clone(),
            min_size: options.min_size.into(),
            max_size: options.max_size.into(),
            anchor: BoundsAnchor::Content,
            skip_taskbar: options.skip_taskbar,
            events: VecDeque::new(),
        };

        let mut window = NativeWindow {
            inner: Some(inner),
            orphaned_events: VecDeque::new(),
            platform,
        };

        window.command("create", |inner| {
            inner.attach_helpers(global_menu, thumbar);
            inner.apply_options(&options)
        })?;
        if options.fullscreen {
            window.set_full_screen(true)?;
        }
        if options.kiosk {
            window.set_kiosk(true)?;
        }
        if options.show {
            window.show()?;
        }

        log::info!("Created {} window '{}'", platform, options.title);
        Ok(window)
    }
}

/// Live parts of a window; dropped as a whole at teardown.
pub(crate) struct WindowInner {
    watcher: WindowStateWatcher,
    adapter: Box<dyn PlatformWindowAdapter>,
    menu_bar: MenuBarController,
    accelerators: AcceleratorTable,
    router: KeyboardRouter,
    /// Caller-owned menu
    menu: Option<Weak<MenuModel>>,
    /// Menu created from the options, kept alive by the window itself
    owned_menu: Option<Rc<MenuModel>>,
    content: Option<Box<dyn ContentView>>,
    global_menu: Option<Box<dyn GlobalMenuHelper>>,
    thumbar: Option<Box<dyn ThumbarHelper>>,
    title: String,
    min_size: Size,
    max_size: Size,
    anchor: BoundsAnchor,
    skip_taskbar: bool,
    events: VecDeque<WindowEvent>,
}

impl WindowInner {
    fn widget(&self) -> &dyn NativeWidget {
        self.adapter.widget()
    }

    fn widget_mut(&mut self) -> &mut dyn NativeWidget {
        self.adapter.widget_mut()
    }

    /// Turn a toolkit failure into an event; the caller is never blocked on it.
    fn report(&mut self, operation: &'static str, result: std::result::Result<(), PlatformError>) {
        if let Err(e) = result {
            log::warn!("Window operation '{}' failed: {}", operation, e);
            self.events.push_back(WindowEvent::OperationFailed {
                operation,
                message: e.to_string(),
            });
        }
    }

    fn apply_options(&mut self, options: &WindowOptions) -> Result<()> {
        let r = self.widget_mut().set_title(&options.title);
        self.report("set_title", r);
        let (min, max) = (self.min_size, self.max_size);
        let r = self.widget_mut().set_size_constraints(min, max);
        self.report("set_size_constraints", r);
        let r = self.widget_mut().set_resizable(options.resizable);
        self.report("set_resizable", r);
        let r = self.widget_mut().set_always_on_top(options.always_on_top);
        self.report("set_always_on_top", r);
        if options.skip_taskbar {
            let r = self.widget_mut().set_skip_taskbar(true);
            self.report("set_skip_taskbar", r);
        }
        if options.visible_on_all_workspaces {
            let r = self.widget_mut().set_visible_on_all_workspaces(true);
            self.report("set_visible_on_all_workspaces", r);
        }

        // The menu first, so the initial bounds see the final bar height
        if let Some(menu) = &options.menu {
            let menu = Rc::new(menu.clone());
            self.set_menu(Some(&menu))?;
            self.owned_menu = Some(menu);
        }

        self.apply_initial_bounds(options);
        if options.center {
            self.center();
        }
        let height = self.menu_bar.height();
        self.widget_mut().relayout(height);
        Ok(())
    }

    /// Drain every queued notification. Returns `true` if the native
    /// window reported its destruction.
    fn pump(&mut self) -> bool {
        while let Some(raw) = self.watcher.next_raw() {
            let notifications = self.adapter.translate(raw, self.watcher.state());
            for notification in notifications {
                let Some(event) = self.watcher.apply(notification) else {
                    continue;
                };
                let closed = event == WindowEvent::Closed;
                if event == WindowEvent::Blurred {
                    let change = self.menu_bar.disarm();
                    self.on_menu_bar_change(change);
                }
                self.events.push_back(event);
                if closed {
                    return true;
                }
            }
        }
        false
    }

    fn close(&mut self) {
        if let Some(content) = self.content.as_mut()
            && content.request_close() == CloseDecision::Veto
        {
            log::info!("Close vetoed by content view");
            self.events.push_back(WindowEvent::CloseVetoed);
            return;
        }
        log::info!("Closing window '{}'", self.title);
        let r = self.widget_mut().close();
        self.report("close", r);
    }
}

/// A platform window with reconciled state, a menu bar and keyboard routing.
///
/// All calls fail with [`WindowError::StaleReference`] once the window has
/// been torn down, either by [`close_immediately`](Self::close_immediately)
/// or because the platform destroyed it.
pub struct NativeWindow {
    inner: Option<WindowInner>,
    /// Events raised by the final turn, kept for the last poll
    orphaned_events: VecDeque<WindowEvent>,
    platform: PlatformKind,
}

impl NativeWindow {
    pub fn builder(options: WindowOptions) -> NativeWindowBuilder {
        NativeWindowBuilder::new(options)
    }

    /// Run one command turn: execute, drain notifications, settle.
    fn command<R>(
        &mut self,
        operation: &'static str,
        f: impl FnOnce(&mut WindowInner) -> Result<R>,
    ) -> Result<R> {
        let inner = self.live_mut(operation)?;
        let result = f(inner);
        self.finish_turn();
        result
    }

    fn query<R>(&self, operation: &'static str, f: impl FnOnce(&WindowInner) -> R) -> Result<R> {
        match self.inner.as_ref() {
            Some(inner) => Ok(f(inner)),
            None => Err(Self::stale(operation)),
        }
    }

    fn live_mut(&mut self, operation: &'static str) -> Result<&mut WindowInner> {
        self.inner.as_mut().ok_or_else(|| Self::stale(operation))
    }

    fn stale(operation: &'static str) -> WindowError {
        log::warn!("'{}' called on a closed window", operation);
        WindowError::StaleReference
    }

    fn finish_turn(&mut self) {
        let Some(inner) = self.inner.as_mut() else {
            return;
        };
        let destroyed = inner.pump();
        inner.watcher.end_turn();
        if destroyed {
            log::info!("Native window destroyed by the platform");
            self.teardown(false);
        }
    }

    /// Tear down in a fixed order: notification subscription, helpers,
    /// accelerators and menu bar, then the widget.
    fn teardown(&mut self, destroy_widget: bool) {
        let Some(mut inner) = self.inner.take() else {
            return;
        };

        inner.watcher.deactivate();
        if let Some(mut helper) = inner.global_menu.take() {
            helper.detach();
        }
        if let Some(mut helper) = inner.thumbar.take() {
            helper.detach();
        }
        inner.accelerators.clear();
        inner.menu_bar.reset();
        inner.menu = None;
        inner.owned_menu = None;
        if destroy_widget {
            inner.widget_mut().destroy();
        }

        self.orphaned_events = std::mem::take(&mut inner.events);
        log::info!("Window '{}' torn down", inner.title);
    }

    /// Ask the window to close. The content view may veto; otherwise the
    /// window is torn down once the platform confirms.
    pub fn close(&mut self) -> Result<()> {
        self.command("close", |inner| {
            inner.close();
            Ok(())
        })
    }

    /// Tear the window down now, without asking the content view.
    pub fn close_immediately(&mut self) -> Result<()> {
        self.live_mut("close_immediately")?;
        self.teardown(true);
        self.orphaned_events.push_back(WindowEvent::Closed);
        Ok(())
    }

    /// Whether the window is still usable.
    pub fn is_alive(&self) -> bool {
        self.inner.is_some()
    }

    pub fn focus(&mut self) -> Result<()> {
        self.command("focus", |inner| {
            let r = inner.widget_mut().activate();
            inner.report("focus", r);
            Ok(())
        })
    }

    pub fn is_focused(&self) -> Result<bool> {
        self.query("is_focused", |inner| inner.watcher.state().focused)
    }

    pub fn show(&mut self) -> Result<()> {
        self.command("show", |inner| {
            let r = inner.widget_mut().show();
            inner.report("show", r);
            Ok(())
        })
    }

    /// Show without taking focus.
    pub fn show_inactive(&mut self) -> Result<()> {
        self.command("show_inactive", |inner| {
            let r = inner.widget_mut().show_inactive();
            inner.report("show_inactive", r);
            Ok(())
        })
    }

    pub fn hide(&mut self) -> Result<()> {
        self.command("hide", |inner| {
            let r = inner.widget_mut().hide();
            inner.report("hide", r);
            Ok(())
        })
    }

    pub fn is_visible(&self) -> Result<bool> {
        self.query("is_visible", |inner| inner.watcher.state().visible)
    }

    pub fn set_resizable(&mut self, resizable: bool) -> Result<()> {
        self.command("set_resizable", |inner| {
            inner.watcher.state_mut().resizable = resizable;
            let r = inner.widget_mut().set_resizable(resizable);
            inner.report("set_resizable", r);
            Ok(())
        })
    }

    pub fn is_resizable(&self) -> Result<bool> {
        self.query("is_resizable", |inner| inner.watcher.state().resizable)
    }

    pub fn set_always_on_top(&mut self, always_on_top: bool) -> Result<()> {
        self.command("set_always_on_top", |inner| {
            inner.watcher.state_mut().always_on_top = always_on_top;
            let r = inner.widget_mut().set_always_on_top(always_on_top);
            inner.report("set_always_on_top", r);
            Ok(())
        })
    }

    pub fn is_always_on_top(&self) -> Result<bool> {
        self.query("is_always_on_top", |inner| inner.watcher.state().always_on_top)
    }

    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.command("set_title", |inner| {
            inner.title = title.to_string();
            let r = inner.widget_mut().set_title(title);
            inner.report("set_title", r);
            Ok(())
        })
    }

    pub fn title(&self) -> Result<String> {
        self.query("title", |inner| inner.title.clone())
    }

    /// Start or stop drawing the user's attention to the window.
    pub fn flash_frame(&mut self, flash: bool) -> Result<()> {
        self.command("flash_frame", |inner| {
            let r = inner.widget_mut().flash_frame(flash);
            inner.report("flash_frame", r);
            Ok(())
        })
    }

    /// Kiosk mode keeps the window off the taskbar regardless; the setting
    /// applies again once kiosk ends.
    pub fn set_skip_taskbar(&mut self, skip: bool) -> Result<()> {
        self.command("set_skip_taskbar", |inner| {
            inner.skip_taskbar = skip;
            if !inner.watcher.state().kiosk {
                let r = inner.widget_mut().set_skip_taskbar(skip);
                inner.report("set_skip_taskbar", r);
            }
            Ok(())
        })
    }

    pub fn set_visible_on_all_workspaces(&mut self, visible: bool) -> Result<()> {
        self.command("set_visible_on_all_workspaces", |inner| {
            inner.watcher.state_mut().visible_on_all_workspaces = visible;
            let r = inner.widget_mut().set_visible_on_all_workspaces(visible);
            inner.report("set_visible_on_all_workspaces", r);
            Ok(())
        })
    }

    pub fn is_visible_on_all_workspaces(&self) -> Result<bool> {
        self.query("is_visible_on_all_workspaces", |inner| {
            inner.watcher.state().visible_on_all_workspaces
        })
    }

    /// Feed a toolkit notification the widget could not post itself.
    pub fn handle_raw_event(&mut self, event: RawWindowEvent) -> Result<()> {
        self.command("handle_raw_event", |inner| {
            inner.watcher.sender().send(event);
            Ok(())
        })
    }

    /// Process notifications posted since the last call.
    pub fn pump_notifications(&mut self) -> Result<()> {
        self.command("pump_notifications", |_| Ok(()))
    }

    pub fn notification_sender(&self) -> Result<NotificationSender> {
        self.query("notification_sender", |inner| inner.watcher.sender())
    }

    /// Take the events raised since the last poll. Still returns the final
    /// events after the window was torn down.
    pub fn poll_events(&mut self) -> impl Iterator<Item = WindowEvent> + use<> {
        let events = match self.inner.as_mut() {
            Some(inner) => std::mem::take(&mut inner.events),
            None => std::mem::take(&mut self.orphaned_events),
        };
        events.into_iter()
    }

    /// Reconciled state snapshot.
    pub fn state(&self) -> Result<WindowState> {
        self.query("state", |inner| *inner.watcher.state())
    }

    /// Toolkit handle of the underlying window.
    pub fn native_handle(&self) -> Result<NativeHandle> {
        self.query("native_handle", |inner| inner.widget().native_handle())
    }

    pub fn platform(&self) -> Result<PlatformKind> {
        self.query("platform", |_| self.platform)
    }
}

impl Drop for NativeWindow {
    fn drop(&mut self) {
        self.teardown(true);
    }
}

impl std::fmt::Debug for NativeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeWindow")
            .field("platform", &self.platform)
            .field("alive", &self.inner.is_some())
            .field("state", &self.inner.as_ref().map(|inner| *inner.watcher.state()))
            .finish()
    }
}
