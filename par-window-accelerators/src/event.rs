//! Toolkit-neutral keyboard event.
//!
//! winit's `KeyEvent` carries private platform fields and cannot be built
//! outside winit, so windows translate it into this plain struct before
//! routing. The key and modifier vocabulary stays winit's.

use winit::event::ElementState;
use winit::keyboard::{Key, KeyCode, ModifiersState, NamedKey, SmolStr};

/// A raw key press or release delivered to a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    pub logical_key: Key,
    /// Key position, for layouts where the logical key differs from the
    /// accelerator (shifted digits and symbols)
    pub physical_key: Option<KeyCode>,
    pub state: ElementState,
    pub modifiers: ModifiersState,
    /// Text produced by the key, if any
    pub text: Option<SmolStr>,
    pub repeat: bool,
}

impl KeyboardEvent {
    pub fn new(logical_key: Key, state: ElementState, modifiers: ModifiersState) -> Self {
        Self {
            logical_key,
            physical_key: None,
            state,
            modifiers,
            text: None,
            repeat: false,
        }
    }

    /// Key-down of a character key. Text is attached unless Ctrl/Alt/Super is held.
    pub fn character(c: char, modifiers: ModifiersState) -> Self {
        let s = SmolStr::new(c.to_string());
        let produces_text = !(modifiers.control_key() || modifiers.alt_key() || modifiers.super_key());
        Self {
            logical_key: Key::Character(s.clone()),
            physical_key: None,
            state: ElementState::Pressed,
            modifiers,
            text: produces_text.then_some(s),
            repeat: false,
        }
    }

    /// Key-down of a named key.
    pub fn named(key: NamedKey, modifiers: ModifiersState) -> Self {
        Self::new(Key::Named(key), ElementState::Pressed, modifiers)
    }

    /// Alt key-down, as reported while only Alt is held.
    pub fn alt_pressed() -> Self {
        Self::new(Key::Named(NamedKey::Alt), ElementState::Pressed, ModifiersState::ALT)
    }

    /// Alt key-up with no modifiers left held.
    pub fn alt_released() -> Self {
        Self::new(
            Key::Named(NamedKey::Alt),
            ElementState::Released,
            ModifiersState::empty(),
        )
    }

    pub fn with_physical_key(mut self, code: KeyCode) -> Self {
        self.physical_key = Some(code);
        self
    }

    pub fn released(mut self) -> Self {
        self.state = ElementState::Released;
        self.text = None;
        self
    }

    pub fn is_pressed(&self) -> bool {
        self.state == ElementState::Pressed
    }

    /// True for the Alt key itself (either side).
    pub fn is_alt_key(&self) -> bool {
        matches!(self.logical_key, Key::Named(NamedKey::Alt))
    }

    /// Alt press/release that did not produce text.
    pub fn is_bare_alt(&self) -> bool {
        self.is_alt_key() && self.text.is_none()
    }

    /// Modifiers other than Alt are held.
    pub fn has_non_alt_modifiers(&self) -> bool {
        self.modifiers.control_key() || self.modifiers.shift_key() || self.modifiers.super_key()
    }
}
