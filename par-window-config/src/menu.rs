//! Menu model types.
//!
//! A [`MenuModel`] is a tree of items owned by the caller. Windows only read
//! it: the accelerator table and the menu bar are both derived from it and
//! must be re-announced through `set_menu` after the caller mutates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a menu command, dispatched when its item or accelerator fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(pub u32);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for CommandId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// What a menu item does when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MenuItemKind {
    /// Dispatches a command
    Command { id: CommandId },
    /// Opens a nested menu
    Submenu { submenu: MenuModel },
    /// Visual separator; never carries a command
    Separator,
}

/// A single entry of a [`MenuModel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(flatten)]
    pub kind: MenuItemKind,
    #[serde(default)]
    pub label: String,
    /// Accelerator string, e.g. `"CmdOrCtrl+S"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub visible: bool,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    pub fn command(id: impl Into<CommandId>, label: impl Into<String>) -> Self {
        Self {
            kind: MenuItemKind::Command { id: id.into() },
            label: label.into(),
            accelerator: None,
            enabled: true,
            visible: true,
        }
    }

    pub fn submenu(label: impl Into<String>, submenu: MenuModel) -> Self {
        Self {
            kind: MenuItemKind::Submenu { submenu },
            label: label.into(),
            accelerator: None,
            enabled: true,
            visible: true,
        }
    }

    pub fn separator() -> Self {
        Self {
            kind: MenuItemKind::Separator,
            label: String::new(),
            accelerator: None,
            enabled: true,
            visible: true,
        }
    }

    /// Attach an accelerator string. It is parsed when the menu is set on a window.
    pub fn with_accelerator(mut self, accelerator: impl Into<String>) -> Self {
        self.accelerator = Some(accelerator.into());
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Command id for command items, `None` for submenus and separators.
    pub fn command_id(&self) -> Option<CommandId> {
        match self.kind {
            MenuItemKind::Command { id } => Some(id),
            _ => None,
        }
    }
}

/// Tree of menu items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuModel {
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl MenuModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with_item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All command items in depth-first order, including disabled and hidden ones.
    pub fn commands(&self) -> Vec<(CommandId, &MenuItem)> {
        let mut out = Vec::new();
        self.collect_commands(&mut out);
        out
    }

    fn collect_commands<'a>(&'a self, out: &mut Vec<(CommandId, &'a MenuItem)>) {
        for item in &self.items {
            match &item.kind {
                MenuItemKind::Command { id } => out.push((*id, item)),
                MenuItemKind::Submenu { submenu } => submenu.collect_commands(out),
                MenuItemKind::Separator => {}
            }
        }
    }

    /// Find a command item anywhere in the tree.
    pub fn find(&self, id: CommandId) -> Option<&MenuItem> {
        self.commands()
            .into_iter()
            .find_map(|(cmd, item)| (cmd == id).then_some(item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MenuModel {
        MenuModel::new()
            .with_item(MenuItem::submenu(
                "File",
                MenuModel::new()
                    .with_item(MenuItem::command(CommandId(1), "Open").with_accelerator("Ctrl+O"))
                    .with_item(MenuItem::separator())
                    .with_item(
                        MenuItem::submenu(
                            "Recent",
                            MenuModel::new().with_item(MenuItem::command(CommandId(2), "Clear")),
                        )
                        .with_visible(false),
                    ),
            ))
            .with_item(MenuItem::command(CommandId(3), "Help").with_enabled(false))
    }

    #[test]
    fn test_commands_walks_nested_submenus() {
        let menu = sample();
        let ids: Vec<u32> = menu.commands().iter().map(|(id, _)| id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find_returns_disabled_items() {
        let menu = sample();
        let help = menu.find(CommandId(3)).unwrap();
        assert_eq!(help.label, "Help");
        assert!(!help.enabled);
        assert!(menu.find(CommandId(99)).is_none());
    }

    #[test]
    fn test_separator_has_no_command() {
        assert_eq!(MenuItem::separator().command_id(), None);
        assert_eq!(MenuItem::command(CommandId(7), "x").command_id(), Some(CommandId(7)));
    }

    #[test]
    fn test_menu_yaml_roundtrip() {
        let menu = sample();
        let yaml = serde_yaml_ng::to_string(&menu).unwrap();
        let parsed: MenuModel = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, menu);
    }

    #[test]
    fn test_menu_yaml_defaults() {
        let yaml = r#"
items:
  - type: command
    id: 42
    label: Save
    accelerator: CmdOrCtrl+S
  - type: separator
"#;
        let menu: MenuModel = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(menu.items.len(), 2);
        assert_eq!(menu.items[0].command_id(), Some(CommandId(42)));
        assert!(menu.items[0].enabled);
        assert!(menu.items[0].visible);
        assert_eq!(menu.items[1].kind, MenuItemKind::Separator);
    }
}
