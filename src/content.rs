//! The content surface hosted inside a window.

use par_window_accelerators::KeyboardEvent;

/// Whether the content consumed a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    Unhandled,
}

/// Answer to a close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDecision {
    Allow,
    Veto,
}

/// Content surface embedded in a [`NativeWindow`](crate::NativeWindow).
///
/// Gets the first look at every key event and may refuse a close request.
pub trait ContentView {
    fn handle_key_event(&mut self, event: &KeyboardEvent) -> KeyDisposition;

    fn request_close(&mut self) -> CloseDecision {
        CloseDecision::Allow
    }
}
