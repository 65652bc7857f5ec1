//! Window and content bounds, size constraints.
//!
//! The widget only knows outer window bounds. Content bounds are derived
//! through a [`BoundsConverter`] for the current menu bar height, and when
//! the bar appears or disappears one of the two rectangles is held fixed.

use super::{NativeWindow, WindowInner};
use crate::error::{Result, WindowError};
use crate::event::WindowEvent;
use crate::geometry::{BoundsConverter, Rect, Size};
use crate::menu_bar::MenuBarChange;
use crate::state::WindowShape;
use par_window_config::{WindowOptions, limits_compatible};

/// Which rectangle survives a menu bar visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BoundsAnchor {
    /// Keep the content rect; the window grows or shrinks
    Content,
    /// Keep the window rect; the content absorbs the change
    Window,
}

impl WindowInner {
    fn converter(&self) -> BoundsConverter {
        BoundsConverter::new(self.menu_bar.height())
    }

    pub(super) fn apply_initial_bounds(&mut self, options: &WindowOptions) {
        let current = self.widget().bounds();
        let origin_x = options.x.unwrap_or(current.x);
        let origin_y = options.y.unwrap_or(current.y);
        let requested = Rect::new(origin_x, origin_y, options.width, options.height);

        let window = if options.use_content_size {
            // Position stays the window's; only the size is content-relative
            let size = self.converter().content_size_to_window(requested.size());
            requested.with_size(size)
        } else {
            requested
        };
        let r = self.widget_mut().set_bounds(window);
        self.report("set_bounds", r);
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.anchor = BoundsAnchor::Window;
        let r = self.widget_mut().set_bounds(bounds);
        self.report("set_bounds", r);
    }

    fn content_bounds(&self) -> Rect {
        self.converter().window_to_content(self.widget().bounds())
    }

    fn set_content_size(&mut self, size: Size) {
        self.anchor = BoundsAnchor::Content;
        let content = self.content_bounds().with_size(size);
        let window = self.converter().content_to_window(content);
        let r = self.widget_mut().set_bounds(window);
        self.report("set_content_size", r);
    }

    fn set_size_constraints(&mut self, min: Size, max: Size) -> Result<()> {
        if !limits_compatible(min.into(), max.into()) {
            return Err(WindowError::InvalidArgument(format!(
                "maximum size {} is smaller than minimum size {}",
                max, min
            )));
        }
        self.min_size = min;
        self.max_size = max;
        let r = self.widget_mut().set_size_constraints(min, max);
        self.report("set_size_constraints", r);
        Ok(())
    }

    pub(super) fn center(&mut self) {
        let centered = self.widget().bounds().centered_in(self.widget().work_area());
        let r = self.widget_mut().set_bounds(centered);
        self.report("center", r);
    }

    /// Keep the anchored rectangle and lay out again after the menu bar
    /// appeared or disappeared.
    pub(super) fn on_menu_bar_change(&mut self, change: MenuBarChange) {
        if !change.effective_visible_changed {
            return;
        }

        let visible = self.menu_bar.effective_visible();
        let new_height = self.menu_bar.height();
        let old_height = if visible {
            0
        } else {
            self.menu_bar.configured_height()
        };

        // Maximized, minimized and fullscreen windows keep their frame
        if self.anchor == BoundsAnchor::Content && self.watcher.shape() == WindowShape::Normal {
            let content = BoundsConverter::new(old_height).window_to_content(self.widget().bounds());
            let window = BoundsConverter::new(new_height).content_to_window(content);
            log::debug!("Menu bar {}: window bounds -> {}", if visible { "shown" } else { "hidden" }, window);
            let r = self.widget_mut().set_bounds(window);
            self.report("set_bounds", r);
        }

        self.widget_mut().relayout(new_height);
        self.events
            .push_back(WindowEvent::MenuBarVisibilityChanged(visible));
    }
}

impl NativeWindow {
    /// Set the outer window bounds. The window rect is kept from now on
    /// when the menu bar appears or disappears.
    pub fn set_bounds(&mut self, bounds: Rect) -> Result<()> {
        self.command("set_bounds", |inner| {
            inner.set_bounds(bounds);
            Ok(())
        })
    }

    /// Outer window bounds.
    pub fn bounds(&self) -> Result<Rect> {
        self.query("bounds", |inner| inner.widget().bounds())
    }

    /// Resize so the content area gets `size`. The content rect is kept
    /// from now on when the menu bar appears or disappears.
    pub fn set_content_size(&mut self, size: Size) -> Result<()> {
        self.command("set_content_size", |inner| {
            inner.set_content_size(size);
            Ok(())
        })
    }

    pub fn content_size(&self) -> Result<Size> {
        self.query("content_size", |inner| inner.content_bounds().size())
    }

    /// Bounds of the area below the menu bar.
    pub fn content_bounds(&self) -> Result<Rect> {
        self.query("content_bounds", |inner| inner.content_bounds())
    }

    /// Zero on an axis removes the constraint. Fails with
    /// [`WindowError::InvalidArgument`] if it would exceed the maximum size;
    /// nothing changes in that case.
    pub fn set_minimum_size(&mut self, size: Size) -> Result<()> {
        self.command("set_minimum_size", |inner| {
            let max = inner.max_size;
            inner.set_size_constraints(size, max)
        })
    }

    pub fn minimum_size(&self) -> Result<Size> {
        self.query("minimum_size", |inner| inner.min_size)
    }

    /// Zero on an axis removes the constraint. Fails with
    /// [`WindowError::InvalidArgument`] if it would undercut the minimum
    /// size; nothing changes in that case.
    pub fn set_maximum_size(&mut self, size: Size) -> Result<()> {
        self.command("set_maximum_size", |inner| {
            let min = inner.min_size;
            inner.set_size_constraints(min, size)
        })
    }

    pub fn maximum_size(&self) -> Result<Size> {
        self.query("maximum_size", |inner| inner.max_size)
    }

    /// Center the window in the work area of its screen.
    pub fn center(&mut self) -> Result<()> {
        self.command("center", |inner| {
            inner.center();
            Ok(())
        })
    }
}
