//! Screen geometry and window/content bounds conversion.
//!
//! A window has two rectangles: the outer window bounds handed to the
//! toolkit and the content bounds below the menu bar. They differ only in
//! `y` and `height`, by the height of the menu bar while it is shown.

use par_window_config::SizeLimit;
use std::fmt;

/// Position in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels. Zero on an axis means "unconstrained" when
/// used as a size limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<SizeLimit> for Size {
    fn from(limit: SizeLimit) -> Self {
        Self::new(limit.width, limit.height)
    }
}

impl From<Size> for SizeLimit {
    fn from(size: Size) -> Self {
        SizeLimit::new(size.width, size.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis-aligned rectangle in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same origin, new size
    pub const fn with_size(self, size: Size) -> Self {
        Self::new(self.x, self.y, size.width, size.height)
    }

    /// Same size, centered inside `area`. A rect larger than `area` is
    /// aligned to the area's top-left corner.
    pub fn centered_in(self, area: Rect) -> Self {
        let dx = area.width.saturating_sub(self.width) / 2;
        let dy = area.height.saturating_sub(self.height) / 2;
        Self::new(
            area.x.saturating_add(dx as i32),
            area.y.saturating_add(dy as i32),
            self.width,
            self.height,
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {}x{}",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Converts between window bounds and content bounds for a given menu bar
/// height. A height of zero makes both conversions the identity.
///
/// Arithmetic saturates at the coordinate limits, so the round trip is exact
/// only while `y - height` and `rect.height + height` stay in range. Rects
/// within a menu bar height of `i32::MIN` or `u32::MAX` come back clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoundsConverter {
    menu_bar_height: u32,
}

impl BoundsConverter {
    pub const fn new(menu_bar_height: u32) -> Self {
        Self { menu_bar_height }
    }

    pub const fn menu_bar_height(&self) -> u32 {
        self.menu_bar_height
    }

    /// Content rect -> window rect: the window starts above the content.
    pub fn content_to_window(&self, content: Rect) -> Rect {
        let h = self.menu_bar_height;
        Rect::new(
            content.x,
            content.y.saturating_sub_unsigned(h),
            content.width,
            content.height.saturating_add(h),
        )
    }

    /// Window rect -> content rect, the exact inverse of
    /// [`content_to_window`](Self::content_to_window).
    pub fn window_to_content(&self, window: Rect) -> Rect {
        let h = self.menu_bar_height;
        Rect::new(
            window.x,
            window.y.saturating_add_unsigned(h),
            window.width,
            window.height.saturating_sub(h),
        )
    }

    pub fn content_size_to_window(&self, content: Size) -> Size {
        Size::new(content.width, content.height.saturating_add(self.menu_bar_height))
    }

    pub fn window_size_to_content(&self, window: Size) -> Size {
        Size::new(window.width, window.height.saturating_sub(self.menu_bar_height))
    }
}
