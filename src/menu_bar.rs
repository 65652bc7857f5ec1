//! In-window menu bar visibility.
//!
//! The bar is shown when a menu is set, the caller wants it visible, and
//! either autohide is off or the user armed it by pressing Alt on its own.
//! Every operation reports whether the effective visibility flipped, since
//! the window has to recompute its bounds when it does.

use par_window_config::DEFAULT_MENU_BAR_HEIGHT;

/// Derived presentation state of the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBarState {
    Hidden,
    VisibleFixed,
    VisibleAutohideArmed,
    VisibleAutohideDisarmed,
}

/// Outcome of a menu bar operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuBarChange {
    pub effective_visible_changed: bool,
}

impl MenuBarChange {
    pub const NONE: Self = Self {
        effective_visible_changed: false,
    };

    fn between(before: bool, after: bool) -> Self {
        Self {
            effective_visible_changed: before != after,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuBarController {
    autohide: bool,
    visible: bool,
    alt_armed: bool,
    has_menu: bool,
    height: u32,
}

impl Default for MenuBarController {
    fn default() -> Self {
        Self::new(false, DEFAULT_MENU_BAR_HEIGHT)
    }
}

impl MenuBarController {
    pub fn new(autohide: bool, height: u32) -> Self {
        Self {
            autohide,
            visible: true,
            alt_armed: false,
            has_menu: false,
            height,
        }
    }

    pub fn is_auto_hide(&self) -> bool {
        self.autohide
    }

    /// The caller's visibility request, independent of autohide.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_armed(&self) -> bool {
        self.alt_armed
    }

    pub fn has_menu(&self) -> bool {
        self.has_menu
    }

    pub fn effective_visible(&self) -> bool {
        self.has_menu && self.visible && (!self.autohide || self.alt_armed)
    }

    pub fn state(&self) -> MenuBarState {
        if !self.has_menu || !self.visible {
            MenuBarState::Hidden
        } else if !self.autohide {
            MenuBarState::VisibleFixed
        } else if self.alt_armed {
            MenuBarState::VisibleAutohideArmed
        } else {
            MenuBarState::VisibleAutohideDisarmed
        }
    }

    /// Height the bar takes from the window right now.
    pub fn height(&self) -> u32 {
        if self.effective_visible() {
            self.height
        } else {
            0
        }
    }

    /// Height the bar takes while shown.
    pub fn configured_height(&self) -> u32 {
        self.height
    }

    pub fn set_auto_hide(&mut self, autohide: bool) -> MenuBarChange {
        self.update(|bar| {
            bar.autohide = autohide;
            if !autohide {
                bar.alt_armed = false;
            }
        })
    }

    pub fn set_visible(&mut self, visible: bool) -> MenuBarChange {
        if visible && !self.has_menu {
            log::debug!("Ignoring menu bar show request: no menu is set");
            return MenuBarChange::NONE;
        }
        self.update(|bar| {
            bar.visible = visible;
            if !visible {
                bar.alt_armed = false;
            }
        })
    }

    pub fn set_has_menu(&mut self, has_menu: bool) -> MenuBarChange {
        self.update(|bar| {
            bar.has_menu = has_menu;
            if !has_menu {
                bar.alt_armed = false;
            }
        })
    }

    /// A bare Alt key went down. Arms the bar only while autohide is on,
    /// the bar is wanted and no other modifier is held.
    pub fn on_alt_pressed(&mut self, other_modifiers_held: bool) -> MenuBarChange {
        if other_modifiers_held {
            return self.disarm();
        }
        self.update(|bar| {
            if bar.autohide && bar.visible && bar.has_menu {
                bar.alt_armed = true;
            }
        })
    }

    pub fn on_alt_released(&mut self) -> MenuBarChange {
        self.disarm()
    }

    /// Another key, a mouse press or focus loss hides an armed bar again.
    pub fn disarm(&mut self) -> MenuBarChange {
        self.update(|bar| bar.alt_armed = false)
    }

    /// Drop the menu and everything armed; used at teardown.
    pub fn reset(&mut self) {
        self.has_menu = false;
        self.alt_armed = false;
    }

    fn update(&mut self, f: impl FnOnce(&mut Self)) -> MenuBarChange {
        let before = self.effective_visible();
        f(self);
        let change = MenuBarChange::between(before, self.effective_visible());
        if change.effective_visible_changed {
            log::debug!(
                "Menu bar {} ({:?})",
                if self.effective_visible() {
                    "shown"
                } else {
                    "hidden"
                },
                self.state()
            );
        }
        change
    }
}
