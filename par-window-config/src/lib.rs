//! Configuration types for par-window.
//!
//! This crate holds the plain data that a window is built from:
//!
//! - [`WindowOptions`] - construction options (size, constraints, menu bar mode)
//! - [`MenuModel`] - the caller-owned menu tree that accelerators are read from
//! - YAML persistence helpers for both

pub mod error;
pub mod menu;
mod persistence;
pub mod window;

pub use error::ConfigError;
pub use menu::{CommandId, MenuItem, MenuItemKind, MenuModel};
pub use window::{DEFAULT_MENU_BAR_HEIGHT, LogLevel, SizeLimit, WindowOptions, limits_compatible};
