//! Shape commands: maximize, minimize, restore, fullscreen and kiosk.
//!
//! Commands only record what they expect and ask the toolkit; the shape
//! changes when the platform confirms it.

use super::{NativeWindow, WindowInner};
use crate::error::{PlatformError, Result};
use crate::event::WindowEvent;
use crate::state::WindowShape;

impl WindowInner {
    /// Report a shape command's outcome. A rejected command will never be
    /// confirmed, so the watcher stops waiting for it.
    fn report_shape(
        &mut self,
        operation: &'static str,
        result: std::result::Result<(), PlatformError>,
    ) {
        if result.is_err() {
            self.watcher.cancel_expected();
        }
        self.report(operation, result);
    }

    fn maximize(&mut self) {
        if self.watcher.is_settled_in(WindowShape::Maximized) {
            return;
        }
        self.watcher.expect(WindowShape::Maximized);
        let r = self.widget_mut().maximize();
        self.report_shape("maximize", r);
    }

    fn unmaximize(&mut self) {
        if !self.watcher.is_in_or_entering(WindowShape::Maximized) {
            log::debug!("Unmaximize ignored: window is {}", self.watcher.target_shape());
            return;
        }
        self.watcher.expect(WindowShape::Normal);
        let r = self.widget_mut().restore();
        self.report_shape("unmaximize", r);
    }

    fn minimize(&mut self) {
        if self.watcher.is_settled_in(WindowShape::Minimized) {
            return;
        }
        self.watcher.expect(WindowShape::Minimized);
        let r = self.widget_mut().minimize();
        self.report_shape("minimize", r);
    }

    /// Minimized: back to the last shape. Fullscreen: leave fullscreen.
    /// Maximized: unmaximize. Normal: nothing to do.
    fn restore(&mut self) {
        match self.watcher.target_shape() {
            WindowShape::Minimized => {
                let target = self.watcher.minimize_return_shape();
                self.watcher.expect(target);
                let r = self.adapter.restore_from_minimized(target);
                self.report_shape("restore", r);
            }
            WindowShape::Fullscreen => self.set_full_screen(false),
            WindowShape::Maximized => self.unmaximize(),
            WindowShape::Normal => log::debug!("Restore ignored: window is already normal"),
        }
    }

    fn set_full_screen(&mut self, fullscreen: bool) {
        if self.watcher.state().kiosk {
            log::debug!("Fullscreen change ignored while in kiosk mode");
            return;
        }
        self.apply_fullscreen(fullscreen);
    }

    /// Requests are compared with the commanded shape, not only the
    /// confirmed one: leaving a fullscreen that is still on its way must
    /// reach the toolkit too.
    fn apply_fullscreen(&mut self, fullscreen: bool) {
        if fullscreen {
            if self.watcher.is_settled_in(WindowShape::Fullscreen) {
                return;
            }
            self.watcher.expect(WindowShape::Fullscreen);
            let r = self.widget_mut().set_fullscreen(true);
            self.report_shape("set_full_screen", r);
        } else {
            if !self.watcher.is_in_or_entering(WindowShape::Fullscreen) {
                return;
            }
            let target = self.watcher.fullscreen_return_shape();
            self.watcher.expect(target);
            let r = self.adapter.leave_fullscreen(target);
            self.report_shape("set_full_screen", r);
        }
    }

    fn set_kiosk(&mut self, kiosk: bool) {
        if kiosk {
            if !self.watcher.enter_kiosk() {
                log::debug!("Already in kiosk mode");
                return;
            }
            log::info!("Entering kiosk mode");
            let skip_taskbar = self.skip_taskbar;
            let r = self.adapter.set_kiosk_chrome(true, skip_taskbar);
            self.report("set_kiosk", r);
            self.apply_fullscreen(true);
            self.events.push_back(WindowEvent::EnteredKiosk);
        } else {
            let Some(pre_kiosk) = self.watcher.leave_kiosk() else {
                log::debug!("Not in kiosk mode");
                return;
            };
            log::info!("Leaving kiosk mode, back to {}", pre_kiosk);
            let skip_taskbar = self.skip_taskbar;
            let r = self.adapter.set_kiosk_chrome(false, skip_taskbar);
            self.report("set_kiosk", r);
            if pre_kiosk != WindowShape::Fullscreen {
                self.apply_fullscreen(false);
            }
            self.events.push_back(WindowEvent::LeftKiosk);
        }
    }
}

impl NativeWindow {
    pub fn maximize(&mut self) -> Result<()> {
        self.command("maximize", |inner| {
            inner.maximize();
            Ok(())
        })
    }

    pub fn unmaximize(&mut self) -> Result<()> {
        self.command("unmaximize", |inner| {
            inner.unmaximize();
            Ok(())
        })
    }

    pub fn is_maximized(&self) -> Result<bool> {
        self.query("is_maximized", |inner| inner.watcher.state().is_maximized())
    }

    pub fn minimize(&mut self) -> Result<()> {
        self.command("minimize", |inner| {
            inner.minimize();
            Ok(())
        })
    }

    pub fn restore(&mut self) -> Result<()> {
        self.command("restore", |inner| {
            inner.restore();
            Ok(())
        })
    }

    pub fn is_minimized(&self) -> Result<bool> {
        self.query("is_minimized", |inner| inner.watcher.state().is_minimized())
    }

    /// Enter fullscreen, or go back to the shape the window had before.
    /// Ignored while kiosk mode holds the window fullscreen.
    pub fn set_full_screen(&mut self, fullscreen: bool) -> Result<()> {
        self.command("set_full_screen", |inner| {
            inner.set_full_screen(fullscreen);
            Ok(())
        })
    }

    pub fn is_full_screen(&self) -> Result<bool> {
        self.query("is_full_screen", |inner| inner.watcher.state().is_fullscreen())
    }

    /// Kiosk is idempotent: repeated enters keep the first recorded shape,
    /// and leaving restores it once.
    pub fn set_kiosk(&mut self, kiosk: bool) -> Result<()> {
        self.command("set_kiosk", |inner| {
            inner.set_kiosk(kiosk);
            Ok(())
        })
    }

    pub fn is_kiosk(&self) -> Result<bool> {
        self.query("is_kiosk", |inner| inner.watcher.state().kiosk)
    }
}
