//! Demo menu and the scripted headless session used by `--headless`.

use crate::content::{ContentView, KeyDisposition};
use crate::event::WindowEvent;
use crate::platform::PlatformKind;
use crate::toolkit::HeadlessWidget;
use crate::window::{MouseEvent, NativeWindow};
use anyhow::Result;
use par_window_accelerators::{Key, KeyboardEvent, ModifiersState, NamedKey};
use par_window_config::{CommandId, MenuItem, MenuModel, WindowOptions};
use std::rc::Rc;

pub const CMD_QUIT: CommandId = CommandId(1);
pub const CMD_TOGGLE_FULLSCREEN: CommandId = CommandId(2);
pub const CMD_TOGGLE_MENU_BAR: CommandId = CommandId(3);
pub const CMD_TOGGLE_KIOSK: CommandId = CommandId(4);

/// Menu installed when the options file does not define one.
pub fn demo_menu() -> MenuModel {
    MenuModel::new()
        .with_item(MenuItem::submenu(
            "File",
            MenuModel::new().with_item(MenuItem::command(CMD_QUIT, "Quit").with_accelerator("CmdOrCtrl+Q")),
        ))
        .with_item(MenuItem::submenu(
            "View",
            MenuModel::new()
                .with_item(
                    MenuItem::command(CMD_TOGGLE_FULLSCREEN, "Toggle Full Screen").with_accelerator("F11"),
                )
                .with_item(
                    MenuItem::command(CMD_TOGGLE_MENU_BAR, "Auto-hide Menu Bar")
                        .with_accelerator("CmdOrCtrl+Shift+M"),
                )
                .with_item(MenuItem::separator())
                .with_item(MenuItem::command(CMD_TOGGLE_KIOSK, "Kiosk Mode").with_accelerator("CmdOrCtrl+K")),
        ))
}

/// Run a demo command against the window.
pub fn apply_command(window: &mut NativeWindow, id: CommandId) -> crate::Result<()> {
    match id {
        CMD_QUIT => window.close(),
        CMD_TOGGLE_FULLSCREEN => {
            let fullscreen = window.is_full_screen()?;
            window.set_full_screen(!fullscreen)
        }
        CMD_TOGGLE_MENU_BAR => {
            let auto_hide = window.is_menu_bar_auto_hide()?;
            window.set_auto_hide_menu_bar(!auto_hide)
        }
        CMD_TOGGLE_KIOSK => {
            let kiosk = window.is_kiosk()?;
            window.set_kiosk(!kiosk)
        }
        other => {
            log::debug!("No demo action for command {}", other);
            Ok(())
        }
    }
}

/// Content view that swallows Escape and lets everything else through.
#[derive(Debug, Default)]
struct EscapeSink;

impl ContentView for EscapeSink {
    fn handle_key_event(&mut self, event: &KeyboardEvent) -> KeyDisposition {
        if event.logical_key == Key::Named(NamedKey::Escape) {
            KeyDisposition::Handled
        } else {
            KeyDisposition::Unhandled
        }
    }
}

fn drain(window: &mut NativeWindow, step: &str) -> Vec<WindowEvent> {
    let raised: Vec<WindowEvent> = window.poll_events().collect();
    for event in &raised {
        log::info!("[{}] {:?}", step, event);
    }
    raised
}

/// Drive an in-memory window through a fixed script and return every
/// event it raised.
pub fn run_headless(mut options: WindowOptions, platform: PlatformKind) -> Result<Vec<WindowEvent>> {
    let menu = Rc::new(options.menu.take().unwrap_or_else(demo_menu));
    let widget = HeadlessWidget::new();
    let handle = widget.handle();

    let mut window = NativeWindow::builder(options)
        .platform(platform)
        .content_view(EscapeSink)
        .build(widget)?;
    window.set_menu(Some(&menu))?;

    let mut events = Vec::new();

    window.show()?;
    events.extend(drain(&mut window, "show"));

    window.maximize()?;
    events.extend(drain(&mut window, "maximize"));

    // F11 fires the fullscreen accelerator
    let route = window.handle_key_event(&KeyboardEvent::named(NamedKey::F11, ModifiersState::empty()))?;
    log::info!("F11 routed to {:?}", route);
    let raised = drain(&mut window, "F11");
    for event in &raised {
        if let WindowEvent::MenuCommand(id) = event {
            apply_command(&mut window, *id)?;
        }
    }
    events.extend(raised);
    events.extend(drain(&mut window, "fullscreen"));

    window.restore()?;
    events.extend(drain(&mut window, "restore"));

    window.set_auto_hide_menu_bar(true)?;
    window.handle_key_event(&KeyboardEvent::alt_pressed())?;
    window.handle_mouse_event(MouseEvent::Pressed)?;
    events.extend(drain(&mut window, "autohide"));

    window.set_kiosk(true)?;
    window.set_kiosk(false)?;
    events.extend(drain(&mut window, "kiosk"));

    log::info!("Headless widget ran {} commands", handle.state().commands.len());
    window.close()?;
    events.extend(drain(&mut window, "close"));
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use par_window_accelerators::AcceleratorTable;

    #[test]
    fn test_demo_menu_accelerators_parse() {
        let table = AcceleratorTable::build(&demo_menu()).expect("demo accelerators");
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_headless_session_closes() {
        let events = run_headless(WindowOptions::default(), PlatformKind::X11).expect("session");
        assert!(events.contains(&WindowEvent::Maximized));
        assert!(events.contains(&WindowEvent::MenuCommand(CMD_TOGGLE_FULLSCREEN)));
        assert!(events.contains(&WindowEvent::EnteredFullScreen));
        assert!(events.contains(&WindowEvent::EnteredKiosk));
        assert!(events.contains(&WindowEvent::LeftKiosk));
        assert_eq!(events.last(), Some(&WindowEvent::Closed));
    }
}
