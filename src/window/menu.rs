//! Menu model, accelerators, menu bar and the platform menu helpers.

use super::{NativeWindow, WindowInner};
use crate::error::{Result, WindowError};
use crate::event::WindowEvent;
use crate::helpers::{GlobalMenuHelper, TaskbarProgress, ThumbarButton, ThumbarHelper};
use crate::menu_bar::MenuBarState;
use par_window_accelerators::AcceleratorTable;
use par_window_config::{CommandId, MenuModel};
use std::rc::{Rc, Weak};

impl WindowInner {
    pub(super) fn attach_helpers(
        &mut self,
        global_menu: Option<Box<dyn GlobalMenuHelper>>,
        thumbar: Option<Box<dyn ThumbarHelper>>,
    ) {
        let kind = self.adapter.kind();
        let handle = self.widget().native_handle();

        if let Some(mut helper) = global_menu {
            if self.adapter.supports_global_menu() {
                helper.attach(handle);
                self.global_menu = Some(helper);
                log::debug!("Global menu helper attached");
            } else {
                log::debug!("Global menu not supported on {}; helper ignored", kind);
            }
        }

        if let Some(mut helper) = thumbar {
            if self.adapter.supports_thumbar() {
                helper.attach(handle);
                self.thumbar = Some(helper);
                log::debug!("Thumbar helper attached");
            } else {
                log::debug!("Thumbnail toolbar not supported on {}; helper ignored", kind);
            }
        }
    }

    /// Replace the menu. The accelerator table is built first so a bad
    /// accelerator leaves the previous menu fully in place.
    pub(super) fn set_menu(&mut self, menu: Option<&Rc<MenuModel>>) -> Result<()> {
        let Some(menu) = menu else {
            self.clear_menu();
            return Ok(());
        };

        let table = AcceleratorTable::build(menu).map_err(|e| {
            log::warn!("Rejecting menu: {}", e);
            WindowError::InvalidArgument(e.to_string())
        })?;
        log::info!("Menu set with {} accelerators", table.len());

        self.accelerators = table;
        self.menu = Some(Rc::downgrade(menu));
        self.owned_menu = None;
        let change = self.menu_bar.set_has_menu(true);
        self.on_menu_bar_change(change);
        if let Some(helper) = self.global_menu.as_mut() {
            helper.set_menu(Some(&**menu));
        }
        Ok(())
    }

    fn clear_menu(&mut self) {
        self.accelerators.clear();
        self.menu = None;
        self.owned_menu = None;
        let change = self.menu_bar.set_has_menu(false);
        self.on_menu_bar_change(change);
        if let Some(helper) = self.global_menu.as_mut() {
            helper.set_menu(None);
        }
        log::debug!("Menu cleared");
    }

    fn current_menu(&self) -> Option<Rc<MenuModel>> {
        self.menu.as_ref().and_then(Weak::upgrade)
    }

    /// Report an accelerator hit. A menu the caller already dropped is
    /// treated as if the menu had been removed.
    pub(super) fn dispatch_command(&mut self, id: CommandId) {
        if self.current_menu().is_none() {
            log::warn!("Menu model was dropped; clearing menu instead of dispatching {}", id);
            self.clear_menu();
            return;
        }
        log::debug!("Dispatching menu command {}", id);
        self.events.push_back(WindowEvent::MenuCommand(id));
    }
}

impl NativeWindow {
    /// Set the window menu, or remove it with `None`.
    ///
    /// The window keeps only a weak reference; the caller owns the model.
    /// Fails with [`WindowError::InvalidArgument`] if an accelerator string
    /// is malformed, leaving the previous menu in place.
    pub fn set_menu(&mut self, menu: Option<&Rc<MenuModel>>) -> Result<()> {
        self.command("set_menu", |inner| inner.set_menu(menu))
    }

    /// The menu currently in effect, if its owner still holds it.
    pub fn menu(&self) -> Result<Option<Rc<MenuModel>>> {
        self.query("menu", |inner| inner.current_menu())
    }

    pub fn accelerator_count(&self) -> Result<usize> {
        self.query("accelerator_count", |inner| inner.accelerators.len())
    }

    pub fn set_auto_hide_menu_bar(&mut self, auto_hide: bool) -> Result<()> {
        self.command("set_auto_hide_menu_bar", |inner| {
            let change = inner.menu_bar.set_auto_hide(auto_hide);
            inner.on_menu_bar_change(change);
            Ok(())
        })
    }

    pub fn is_menu_bar_auto_hide(&self) -> Result<bool> {
        self.query("is_menu_bar_auto_hide", |inner| inner.menu_bar.is_auto_hide())
    }

    /// Showing the bar without a menu set is accepted and ignored.
    pub fn set_menu_bar_visibility(&mut self, visible: bool) -> Result<()> {
        self.command("set_menu_bar_visibility", |inner| {
            let change = inner.menu_bar.set_visible(visible);
            inner.on_menu_bar_change(change);
            Ok(())
        })
    }

    /// Requested visibility; with autohide on the bar may still be hidden.
    pub fn is_menu_bar_visible(&self) -> Result<bool> {
        self.query("is_menu_bar_visible", |inner| inner.menu_bar.is_visible())
    }

    /// Whether the bar is on screen right now.
    pub fn is_menu_bar_shown(&self) -> Result<bool> {
        self.query("is_menu_bar_shown", |inner| inner.menu_bar.effective_visible())
    }

    pub fn menu_bar_state(&self) -> Result<MenuBarState> {
        self.query("menu_bar_state", |inner| inner.menu_bar.state())
    }

    /// Set the taskbar thumbnail buttons. Returns `false` where the
    /// platform has no thumbnail toolbar or the shell refused the buttons.
    pub fn set_thumbar_buttons(&mut self, buttons: &[ThumbarButton]) -> Result<bool> {
        self.command("set_thumbar_buttons", |inner| {
            Ok(match inner.thumbar.as_mut() {
                Some(helper) => helper.set_buttons(buttons),
                None => {
                    log::debug!("No thumbnail toolbar on {}", inner.adapter.kind());
                    false
                }
            })
        })
    }

    /// Show progress on the taskbar button: a fraction in `0.0..=1.0`,
    /// negative to hide, above 1 for indeterminate. Returns `false` where
    /// the platform has no taskbar progress.
    pub fn set_progress_bar(&mut self, progress: f64) -> Result<bool> {
        self.command("set_progress_bar", |inner| {
            let progress = TaskbarProgress::from_value(progress).ok_or_else(|| {
                WindowError::InvalidArgument("progress must be a number".to_string())
            })?;
            Ok(match inner.thumbar.as_mut() {
                Some(helper) => helper.set_progress(progress),
                None => {
                    log::debug!("No taskbar progress on {}", inner.adapter.kind());
                    false
                }
            })
        })
    }
}
