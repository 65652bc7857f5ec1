//! Platform-specific accelerator resolution.
//!
//! Contains:
//! - `CmdOrCtrl` modifier expansion (Cmd on macOS, Ctrl elsewhere)
//! - Named key alias table (string -> `NamedKey`)
//! - Modifier key detection for raw key events
//! - US QWERTY physical key to character mapping

use winit::keyboard::{KeyCode, NamedKey};

/// Resolve the `CmdOrCtrl` modifier for the current platform.
///
/// Returns `(ctrl, super_key)` after folding `cmd_or_ctrl` into the
/// platform's primary modifier.
///
/// - macOS: `CmdOrCtrl` maps to Super (Cmd key).
/// - All other platforms: `CmdOrCtrl` maps to Ctrl.
#[inline]
pub fn resolve_cmd_or_ctrl(cmd_or_ctrl: bool, ctrl: bool, super_key: bool) -> (bool, bool) {
    if cmd_or_ctrl {
        #[cfg(target_os = "macos")]
        {
            (ctrl, true)
        }
        #[cfg(not(target_os = "macos"))]
        {
            (true, super_key)
        }
    } else {
        (ctrl, super_key)
    }
}

/// Character a physical key produces on an unshifted US QWERTY layout.
///
/// Lets `Ctrl+Shift+1` match a key event whose logical key is `!`.
pub fn qwerty_char(code: KeyCode) -> Option<char> {
    let ch = match code {
        KeyCode::KeyA => 'A',
        KeyCode::KeyB => 'B',
        KeyCode::KeyC => 'C',
        KeyCode::KeyD => 'D',
        KeyCode::KeyE => 'E',
        KeyCode::KeyF => 'F',
        KeyCode::KeyG => 'G',
        KeyCode::KeyH => 'H',
        KeyCode::KeyI => 'I',
        KeyCode::KeyJ => 'J',
        KeyCode::KeyK => 'K',
        KeyCode::KeyL => 'L',
        KeyCode::KeyM => 'M',
        KeyCode::KeyN => 'N',
        KeyCode::KeyO => 'O',
        KeyCode::KeyP => 'P',
        KeyCode::KeyQ => 'Q',
        KeyCode::KeyR => 'R',
        KeyCode::KeyS => 'S',
        KeyCode::KeyT => 'T',
        KeyCode::KeyU => 'U',
        KeyCode::KeyV => 'V',
        KeyCode::KeyW => 'W',
        KeyCode::KeyX => 'X',
        KeyCode::KeyY => 'Y',
        KeyCode::KeyZ => 'Z',
        KeyCode::Digit0 => '0',
        KeyCode::Digit1 => '1',
        KeyCode::Digit2 => '2',
        KeyCode::Digit3 => '3',
        KeyCode::Digit4 => '4',
        KeyCode::Digit5 => '5',
        KeyCode::Digit6 => '6',
        KeyCode::Digit7 => '7',
        KeyCode::Digit8 => '8',
        KeyCode::Digit9 => '9',
        KeyCode::Minus => '-',
        KeyCode::Equal => '=',
        KeyCode::BracketLeft => '[',
        KeyCode::BracketRight => ']',
        KeyCode::Backslash => '\\',
        KeyCode::Semicolon => ';',
        KeyCode::Quote => '\'',
        KeyCode::Backquote => '`',
        KeyCode::Comma => ',',
        KeyCode::Period => '.',
        KeyCode::Slash => '/',
        _ => return None,
    };
    Some(ch)
}

/// Parse a named key string into a [`NamedKey`].
///
/// Accepts human-readable aliases such as `"Enter"`, `"Return"`, `"Esc"`,
/// `"PgUp"`, arrow keys, and function keys F1-F24. Matching is
/// case-insensitive. Returns `None` for unrecognised strings.
pub fn parse_named_key(s: &str) -> Option<NamedKey> {
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),
        "f13" => Some(NamedKey::F13),
        "f14" => Some(NamedKey::F14),
        "f15" => Some(NamedKey::F15),
        "f16" => Some(NamedKey::F16),
        "f17" => Some(NamedKey::F17),
        "f18" => Some(NamedKey::F18),
        "f19" => Some(NamedKey::F19),
        "f20" => Some(NamedKey::F20),
        "f21" => Some(NamedKey::F21),
        "f22" => Some(NamedKey::F22),
        "f23" => Some(NamedKey::F23),
        "f24" => Some(NamedKey::F24),

        // Common named keys
        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "space" => Some(NamedKey::Space),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),
        "printscreen" => Some(NamedKey::PrintScreen),

        // Arrow keys
        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        _ => None,
    }
}

/// Parse a character alias that cannot be written literally in an
/// accelerator string (the `+` separator itself).
pub fn parse_character_alias(s: &str) -> Option<char> {
    match s.to_lowercase().as_str() {
        "plus" => Some('+'),
        _ => None,
    }
}

/// Whether a named key is a modifier on its own (never an accelerator key).
pub fn is_modifier_key(key: NamedKey) -> bool {
    matches!(
        key,
        NamedKey::Alt
            | NamedKey::AltGraph
            | NamedKey::Control
            | NamedKey::Shift
            | NamedKey::Super
            | NamedKey::Meta
            | NamedKey::Hyper
            | NamedKey::Fn
            | NamedKey::FnLock
            | NamedKey::CapsLock
            | NamedKey::NumLock
            | NamedKey::ScrollLock
            | NamedKey::Symbol
            | NamedKey::SymbolLock
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_key_aliases_case_insensitive() {
        assert_eq!(parse_named_key("RETURN"), Some(NamedKey::Enter));
        assert_eq!(parse_named_key("pgdn"), Some(NamedKey::PageDown));
        assert_eq!(parse_named_key("F24"), Some(NamedKey::F24));
        assert_eq!(parse_named_key("bogus"), None);
    }

    #[test]
    fn test_cmd_or_ctrl_resolution() {
        let (ctrl, super_key) = resolve_cmd_or_ctrl(true, false, false);
        #[cfg(target_os = "macos")]
        assert!(!ctrl && super_key);
        #[cfg(not(target_os = "macos"))]
        assert!(ctrl && !super_key);

        assert_eq!(resolve_cmd_or_ctrl(false, true, false), (true, false));
    }

    #[test]
    fn test_qwerty_char() {
        assert_eq!(qwerty_char(KeyCode::Digit1), Some('1'));
        assert_eq!(qwerty_char(KeyCode::Equal), Some('='));
        assert_eq!(qwerty_char(KeyCode::KeyS), Some('S'));
        assert_eq!(qwerty_char(KeyCode::F1), None);
    }

    #[test]
    fn test_modifier_keys() {
        assert!(is_modifier_key(NamedKey::Alt));
        assert!(is_modifier_key(NamedKey::Control));
        assert!(!is_modifier_key(NamedKey::F4));
    }
}
