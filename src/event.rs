//! Events a window reports to the application.

use crate::geometry::Rect;
use par_window_config::CommandId;

/// Something the application may want to react to.
///
/// Drained with [`NativeWindow::poll_events`](crate::NativeWindow::poll_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowEvent {
    Minimized,
    Restored,
    Maximized,
    Unmaximized,
    EnteredFullScreen,
    LeftFullScreen,
    EnteredKiosk,
    LeftKiosk,
    Shown,
    Hidden,
    Focused,
    Blurred,
    /// Outer window bounds changed
    BoundsChanged(Rect),
    /// The menu bar appeared (`true`) or disappeared
    MenuBarVisibilityChanged(bool),
    /// A menu command was invoked through its accelerator
    MenuCommand(CommandId),
    /// A toolkit command failed; the window state is left as the platform reports it
    OperationFailed {
        operation: &'static str,
        message: String,
    },
    /// The content view refused to close
    CloseVetoed,
    Closed,
}
