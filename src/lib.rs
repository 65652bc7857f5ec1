//! Cross-platform native window with reconciled state, a menu bar and
//! keyboard routing.
//!
//! A [`NativeWindow`] wraps a toolkit widget ([`NativeWidget`]) behind a
//! per-platform adapter. Platform notifications are reconciled by the
//! [`WindowStateWatcher`] into a single [`WindowState`] and reported as
//! [`WindowEvent`]s. Key events are routed to the content view first, then
//! the menu accelerators, the autohide menu bar and finally the platform's
//! own shortcuts.
//!
//! ```no_run
//! use par_window::{HeadlessWidget, NativeWindow, WindowOptions};
//!
//! let mut window = NativeWindow::builder(WindowOptions::default())
//!     .build(HeadlessWidget::new())
//!     .expect("window");
//! window.maximize().expect("maximize");
//! for event in window.poll_events() {
//!     println!("{:?}", event);
//! }
//! ```

/// Library version, for sub-crates and the demo binary.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod content;
pub mod debug;
pub mod demo;
pub mod error;
pub mod event;
pub mod geometry;
pub mod helpers;
pub mod keyboard;
pub mod menu_bar;
pub mod notification;
pub mod platform;
pub mod state;
pub mod toolkit;
pub mod watcher;
pub mod window;

pub use content::{CloseDecision, ContentView, KeyDisposition};
pub use error::{PlatformError, Result, WindowError};
pub use event::WindowEvent;
pub use geometry::{BoundsConverter, Point, Rect, Size};
pub use helpers::{GlobalMenuHelper, TaskbarProgress, ThumbarButton, ThumbarHelper};
pub use keyboard::{KeyRoute, KeyboardRouter};
pub use menu_bar::{MenuBarController, MenuBarState};
pub use notification::{NotificationSender, PlatformNotification, RawWindowEvent, SizeKind};
pub use platform::{PlatformCommand, PlatformKind, PlatformWindowAdapter};
pub use state::{WindowShape, WindowState};
pub use toolkit::{HeadlessHandle, HeadlessState, HeadlessWidget, NativeHandle, NativeWidget, WinitWidget};
pub use watcher::WindowStateWatcher;
pub use window::{MouseEvent, NativeWindow, NativeWindowBuilder};

pub use par_window_accelerators::{AcceleratorTable, KeyboardEvent};
pub use par_window_config::{CommandId, MenuItem, MenuModel, WindowOptions};
