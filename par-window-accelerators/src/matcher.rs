//! Key event normalization.
//!
//! Turns a [`KeyboardEvent`] into the same normalized [`Accelerator`] form the
//! parser produces, so table lookups are a plain hash match.

use crate::event::KeyboardEvent;
use crate::parser::{Accelerator, AcceleratorKey, Modifiers};
use crate::platform::{is_modifier_key, qwerty_char};
use winit::keyboard::Key;

impl Accelerator {
    /// Normalize a key-down event.
    ///
    /// Returns `None` for releases, lone modifier keys, dead keys and
    /// unidentified keys: none of those can complete an accelerator.
    pub fn from_event(event: &KeyboardEvent) -> Option<Self> {
        if !event.is_pressed() {
            return None;
        }

        let key = match &event.logical_key {
            Key::Character(c) => c
                .chars()
                .next()
                .map(|ch| AcceleratorKey::Character(ch.to_ascii_uppercase()))?,
            Key::Named(named) if is_modifier_key(*named) => return None,
            Key::Named(named) => AcceleratorKey::Named(*named),
            _ => return None,
        };

        Some(Self {
            modifiers: Self::event_modifiers(event),
            key,
        })
    }

    /// Normalize a key-down by key position instead of the logical key.
    ///
    /// Shift changes the logical key of digits and symbols (`1` becomes
    /// `!`), so `Ctrl+Shift+1` only matches through the physical key.
    /// Returns `None` when the event has no mappable physical key.
    pub fn from_physical_key(event: &KeyboardEvent) -> Option<Self> {
        if !event.is_pressed() {
            return None;
        }
        let ch = event.physical_key.and_then(qwerty_char)?;
        Some(Self {
            modifiers: Self::event_modifiers(event),
            key: AcceleratorKey::Character(ch),
        })
    }

    fn event_modifiers(event: &KeyboardEvent) -> Modifiers {
        Modifiers {
            ctrl: event.modifiers.control_key(),
            alt: event.modifiers.alt_key(),
            shift: event.modifiers.shift_key(),
            super_key: event.modifiers.super_key(),
        }
    }

    /// Whether this accelerator matches a key event, by logical key first
    /// and then by physical key.
    pub fn matches(&self, event: &KeyboardEvent) -> bool {
        Self::from_event(event).is_some_and(|normalized| normalized == *self)
            || Self::from_physical_key(event).is_some_and(|normalized| normalized == *self)
    }
}
