//! Accelerator string parser.
//!
//! Parses human-readable accelerator strings like "CmdOrCtrl+Shift+S" into
//! normalized [`Accelerator`] values. Normalization folds aliases, uppercases
//! character keys and resolves `CmdOrCtrl` for the current platform, so two
//! spellings of the same keystroke hash to the same table entry.

use crate::platform::{parse_character_alias, parse_named_key, resolve_cmd_or_ctrl};
use std::fmt;
use thiserror::Error;
use winit::keyboard::NamedKey;

/// Error type for accelerator parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ParseError(pub(crate) String);

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Set of active modifiers for an accelerator, after platform resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift && !self.super_key
    }
}

/// The non-modifier part of an accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AcceleratorKey {
    /// A single character key, stored uppercased (e.g., 'S', '1', '+')
    Character(char),
    /// A named key (e.g., F1, Enter, Escape)
    Named(NamedKey),
}

/// A normalized keyboard accelerator (modifier set + key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Accelerator {
    pub modifiers: Modifiers,
    pub key: AcceleratorKey,
}

impl Accelerator {
    pub fn new(modifiers: Modifiers, key: AcceleratorKey) -> Self {
        Self { modifiers, key }
    }
}

impl std::str::FromStr for Accelerator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_accelerator(s)
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        // Canonical ordering
        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }
        if self.modifiers.super_key {
            parts.push("Super".to_string());
        }

        match &self.key {
            AcceleratorKey::Character('+') => parts.push("Plus".to_string()),
            AcceleratorKey::Character(c) => parts.push(c.to_string()),
            AcceleratorKey::Named(n) => parts.push(format!("{:?}", n)),
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// Parse an accelerator string into a normalized [`Accelerator`].
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
/// - `Super`, `Cmd`, `Command`, `Meta`, `Win` - Super/Cmd key
/// - `CmdOrCtrl`, `CommandOrControl` - Cmd on macOS, Ctrl on other platforms
///
/// Keys:
/// - Single characters: `A`, `b`, `1`, `=`
/// - `Plus` for the `+` character
/// - Named keys: `F1`-`F24`, `Enter`, `Escape`, `Space`, `Tab`, arrows, etc.
pub fn parse_accelerator(s: &str) -> Result<Accelerator, ParseError> {
    if s.trim().is_empty() {
        return Err(ParseError::new("Empty accelerator"));
    }

    let parts: Vec<&str> = s.split('+').map(str::trim).collect();

    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;
    let mut super_key = false;
    let mut cmd_or_ctrl = false;
    let mut key_part = None;

    for (i, part) in parts.iter().enumerate() {
        let is_last = i == parts.len() - 1;

        let is_modifier = match part.to_lowercase().as_str() {
            "ctrl" | "control" => {
                ctrl = true;
                true
            }
            "alt" | "option" => {
                alt = true;
                true
            }
            "shift" => {
                shift = true;
                true
            }
            "super" | "cmd" | "command" | "meta" | "win" => {
                super_key = true;
                true
            }
            "cmdorctrl" | "commandorcontrol" => {
                cmd_or_ctrl = true;
                true
            }
            _ => false,
        };

        if !is_modifier {
            if key_part.is_some() {
                return Err(ParseError(format!(
                    "Multiple keys specified: already have key, found '{}'",
                    part
                )));
            }
            key_part = Some(*part);
        } else if is_last {
            return Err(ParseError::new(
                "Accelerator ends with modifier, no key specified",
            ));
        }
    }

    let key_str = key_part.ok_or_else(|| ParseError::new("No key specified"))?;
    let key = parse_key(key_str)?;
    let (ctrl, super_key) = resolve_cmd_or_ctrl(cmd_or_ctrl, ctrl, super_key);

    Ok(Accelerator {
        modifiers: Modifiers {
            ctrl,
            alt,
            shift,
            super_key,
        },
        key,
    })
}

/// Parse the key portion of an accelerator.
fn parse_key(s: &str) -> Result<AcceleratorKey, ParseError> {
    if s.is_empty() {
        return Err(ParseError::new("Empty key segment"));
    }

    if let Some(named) = parse_named_key(s) {
        return Ok(AcceleratorKey::Named(named));
    }

    if let Some(c) = parse_character_alias(s) {
        return Ok(AcceleratorKey::Character(c));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(AcceleratorKey::Character(c.to_ascii_uppercase())),
        _ => Err(ParseError(format!("Unknown key: '{}'", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_key() {
        let accel = parse_accelerator("A").unwrap();
        assert!(accel.modifiers.is_empty());
        assert_eq!(accel.key, AcceleratorKey::Character('A'));
    }

    #[test]
    fn test_ctrl_shift_key() {
        let accel = parse_accelerator("Ctrl+Shift+B").unwrap();
        assert!(accel.modifiers.ctrl);
        assert!(accel.modifiers.shift);
        assert!(!accel.modifiers.alt);
        assert_eq!(accel.key, AcceleratorKey::Character('B'));
    }

    #[test]
    fn test_case_insensitive_and_order_independent() {
        let a = parse_accelerator("ctrl+shift+s").unwrap();
        let b = parse_accelerator("Shift+Control+S").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cmd_or_ctrl_resolved_at_parse_time() {
        let accel = parse_accelerator("CommandOrControl+S").unwrap();
        #[cfg(target_os = "macos")]
        assert_eq!(accel, parse_accelerator("Cmd+S").unwrap());
        #[cfg(not(target_os = "macos"))]
        assert_eq!(accel, parse_accelerator("Ctrl+S").unwrap());
    }

    #[test]
    fn test_modifier_aliases() {
        assert!(parse_accelerator("Control+A").unwrap().modifiers.ctrl);
        assert!(parse_accelerator("Option+A").unwrap().modifiers.alt);
        assert!(parse_accelerator("Cmd+A").unwrap().modifiers.super_key);
        assert!(parse_accelerator("Win+A").unwrap().modifiers.super_key);
    }

    #[test]
    fn test_named_and_alias_keys() {
        assert_eq!(
            parse_accelerator("Alt+F4").unwrap().key,
            AcceleratorKey::Named(NamedKey::F4)
        );
        assert_eq!(
            parse_accelerator("Ctrl+Plus").unwrap().key,
            AcceleratorKey::Character('+')
        );
        assert_eq!(
            parse_accelerator("Esc").unwrap().key,
            AcceleratorKey::Named(NamedKey::Escape)
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(parse_accelerator("").is_err());
        assert!(parse_accelerator("   ").is_err());
        assert!(parse_accelerator("Ctrl").is_err());
        assert!(parse_accelerator("Ctrl+Shift").is_err());
        assert!(parse_accelerator("Ctrl+UnknownKey").is_err());
        assert!(parse_accelerator("Ctrl+A+B").is_err());
        assert!(parse_accelerator("Ctrl++").is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        let accel = parse_accelerator("shift+alt+ctrl+k").unwrap();
        assert_eq!(accel.to_string(), "Ctrl+Alt+Shift+K");
        assert_eq!(parse_accelerator("Ctrl+Plus").unwrap().to_string(), "Ctrl+Plus");
    }

    #[test]
    fn test_from_str() {
        let accel: Accelerator = "Ctrl+S".parse().unwrap();
        assert_eq!(accel.key, AcceleratorKey::Character('S'));
    }
}
