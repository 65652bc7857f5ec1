//! Accelerator system for par-window.
//!
//! Menu items carry accelerator strings ("CmdOrCtrl+S", "Alt+F4"). This crate
//! parses them, normalizes raw key events into the same form and keeps the
//! per-window table that maps a keystroke to a menu command.
//!
//! Features:
//! - Case-insensitive parsing with modifier aliases (Ctrl/Control, Cmd/Super, ...)
//! - `CmdOrCtrl` resolved per platform at parse time
//! - Exact-match lookup; no prefix or fuzzy matching

mod event;
mod matcher;
pub mod parser;
pub mod platform;
mod table;

pub use event::KeyboardEvent;
pub use parser::{Accelerator, AcceleratorKey, Modifiers, ParseError, parse_accelerator};
pub use table::AcceleratorTable;

// Re-exported so dependents can build events without naming winit directly.
pub use winit::event::ElementState;
pub use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey, SmolStr};
