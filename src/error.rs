//! Error types for the window layer.

use thiserror::Error;

/// Failure reported by a windowing toolkit.
///
/// Widget mutators return this; the window facade turns it into a
/// [`WindowEvent::OperationFailed`](crate::WindowEvent::OperationFailed)
/// instead of handing it back to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Failed to initialize the toolkit
    #[error("Platform initialization failed: {0}")]
    InitFailed(String),

    /// Failed to create the native window
    #[error("Failed to create window: {0}")]
    WindowCreation(String),

    /// The native window no longer exists
    #[error("Native window is gone: {0}")]
    Destroyed(String),

    /// Operation not supported by this toolkit
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Errors returned by [`NativeWindow`](crate::NativeWindow) calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// A caller-supplied value was rejected; nothing was changed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The window was closed and its handle is no longer usable
    #[error("Window has been closed")]
    StaleReference,

    /// The toolkit failed while building the window
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Result type for window operations
pub type Result<T> = std::result::Result<T, WindowError>;
