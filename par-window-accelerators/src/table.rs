//! Accelerator table: normalized accelerator -> menu command.

use crate::event::KeyboardEvent;
use crate::parser::{Accelerator, ParseError, parse_accelerator};
use par_window_config::{CommandId, MenuModel};
use std::collections::HashMap;

/// Map of accelerators registered by a window's menu.
///
/// Collision policy: when two menu items claim the same keystroke the item
/// visited last in depth-first order wins.
#[derive(Debug, Default, Clone)]
pub struct AcceleratorTable {
    entries: HashMap<Accelerator, CommandId>,
}

impl AcceleratorTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from every command item of a menu, submenus included.
    ///
    /// Disabled and hidden items are registered too. A malformed accelerator
    /// string fails the whole build so the caller can keep its previous table.
    pub fn build(menu: &MenuModel) -> Result<Self, ParseError> {
        let mut table = Self::new();
        let commands = menu.commands();

        log::debug!(
            "Building accelerator table from {} menu commands",
            commands.len()
        );
        for (id, item) in commands {
            let Some(accelerator) = item.accelerator.as_deref() else {
                continue;
            };
            let parsed = parse_accelerator(accelerator).map_err(|e| {
                ParseError(format!(
                    "Invalid accelerator '{}' on menu item '{}': {}",
                    accelerator, item.label, e
                ))
            })?;
            if let Some(previous) = table.insert(parsed, id) {
                log::debug!(
                    "Accelerator {} reassigned from command {} to {}",
                    parsed,
                    previous,
                    id
                );
            }
        }

        log::info!("Accelerator table built with {} entries", table.len());
        Ok(table)
    }

    /// Register an accelerator, returning the command it displaced.
    pub fn insert(&mut self, accelerator: Accelerator, id: CommandId) -> Option<CommandId> {
        self.entries.insert(accelerator, id)
    }

    /// Exact lookup of a normalized accelerator.
    pub fn lookup(&self, accelerator: &Accelerator) -> Option<CommandId> {
        self.entries.get(accelerator).copied()
    }

    /// Normalize a key event and look it up, falling back to the key's
    /// physical position when the logical key has no entry.
    pub fn lookup_event(&self, event: &KeyboardEvent) -> Option<CommandId> {
        Accelerator::from_event(event)
            .and_then(|accel| self.lookup(&accel))
            .or_else(|| Accelerator::from_physical_key(event).and_then(|accel| self.lookup(&accel)))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Accelerator, &CommandId)> {
        self.entries.iter()
    }
}
