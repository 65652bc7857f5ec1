//! Key routing order: content view, accelerators, menu bar, platform.

mod common;

use common::{ScriptedContent, default_window, events};
use par_window::{
    CommandId, HeadlessWidget, KeyRoute, KeyboardEvent, MenuItem, MenuModel, NativeWindow,
    PlatformCommand, PlatformKind, WindowError, WindowEvent, WindowOptions,
};
use par_window_accelerators::{KeyCode, ModifiersState, NamedKey};
use std::rc::Rc;

const SAVE: CommandId = CommandId(42);

fn save_menu() -> Rc<MenuModel> {
    Rc::new(MenuModel::new().with_item(MenuItem::submenu(
        "File",
        MenuModel::new().with_item(MenuItem::command(SAVE, "Save").with_accelerator("Ctrl+S")),
    )))
}

fn ctrl_s() -> KeyboardEvent {
    KeyboardEvent::character('s', ModifiersState::CONTROL)
}

fn window_with_content(content: ScriptedContent, platform: PlatformKind) -> NativeWindow {
    NativeWindow::builder(WindowOptions::default())
        .platform(platform)
        .content_view(content)
        .build(HeadlessWidget::new())
        .unwrap()
}

#[test]
fn test_content_handled_key_does_not_fire_accelerator() {
    let content = ScriptedContent {
        handles: |e| e.modifiers.control_key(),
        ..ScriptedContent::passthrough()
    };
    let mut window = window_with_content(content, PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();
    window.poll_events().for_each(drop);

    assert_eq!(window.handle_key_event(&ctrl_s()).unwrap(), KeyRoute::Content);
    assert!(events(&mut window).is_empty());
}

#[test]
fn test_unhandled_key_fires_accelerator() {
    let mut window = window_with_content(ScriptedContent::passthrough(), PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();
    window.poll_events().for_each(drop);

    assert_eq!(
        window.handle_key_event(&ctrl_s()).unwrap(),
        KeyRoute::Accelerator(SAVE)
    );
    assert_eq!(events(&mut window), vec![WindowEvent::MenuCommand(SAVE)]);
}

#[test]
fn test_key_release_never_fires_accelerator() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();
    window.poll_events().for_each(drop);

    let route = window.handle_key_event(&ctrl_s().released()).unwrap();
    assert_eq!(route, KeyRoute::Unhandled);
    assert!(events(&mut window).is_empty());
}

#[test]
fn test_dropped_menu_clears_instead_of_dispatching() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();
    assert_eq!(window.accelerator_count().unwrap(), 1);
    drop(menu);
    window.poll_events().for_each(drop);

    window.handle_key_event(&ctrl_s()).unwrap();
    assert!(
        !events(&mut window)
            .iter()
            .any(|e| matches!(e, WindowEvent::MenuCommand(_)))
    );
    assert_eq!(window.accelerator_count().unwrap(), 0);
    assert!(window.menu().unwrap().is_none());

    // Nothing left to match
    assert_eq!(window.handle_key_event(&ctrl_s()).unwrap(), KeyRoute::Unhandled);
}

#[test]
fn test_malformed_accelerator_keeps_previous_menu() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();

    let broken = Rc::new(MenuModel::new().with_item(
        MenuItem::command(CommandId(7), "Broken").with_accelerator("Ctrl+Shift"),
    ));
    let result = window.set_menu(Some(&broken));
    assert!(matches!(result, Err(WindowError::InvalidArgument(_))));

    assert_eq!(window.accelerator_count().unwrap(), 1);
    assert!(Rc::ptr_eq(&window.menu().unwrap().unwrap(), &menu));
    window.poll_events().for_each(drop);
    assert_eq!(
        window.handle_key_event(&ctrl_s()).unwrap(),
        KeyRoute::Accelerator(SAVE)
    );
}

#[test]
fn test_last_registration_wins() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = Rc::new(
        MenuModel::new()
            .with_item(MenuItem::command(CommandId(1), "First").with_accelerator("Ctrl+S"))
            .with_item(MenuItem::command(CommandId(2), "Second").with_accelerator("ctrl+s")),
    );
    window.set_menu(Some(&menu)).unwrap();
    assert_eq!(
        window.handle_key_event(&ctrl_s()).unwrap(),
        KeyRoute::Accelerator(CommandId(2))
    );
}

#[test]
fn test_alt_f4_closes_on_windows() {
    let (mut window, handle) = default_window(PlatformKind::Windows);
    let alt_f4 = KeyboardEvent::named(NamedKey::F4, ModifiersState::ALT);

    let route = window.handle_key_event(&alt_f4).unwrap();
    assert_eq!(route, KeyRoute::Platform(PlatformCommand::Close));
    assert!(!window.is_alive());
    assert!(handle.state().closed);
    assert_eq!(events(&mut window).last(), Some(&WindowEvent::Closed));
}

#[test]
fn test_alt_f4_respects_close_veto() {
    let mut window = window_with_content(ScriptedContent::vetoing_close(), PlatformKind::Windows);
    let alt_f4 = KeyboardEvent::named(NamedKey::F4, ModifiersState::ALT);

    window.handle_key_event(&alt_f4).unwrap();
    assert!(window.is_alive());
    assert_eq!(events(&mut window), vec![WindowEvent::CloseVetoed]);
}

#[test]
fn test_alt_space_opens_system_menu_on_windows() {
    let (mut window, handle) = default_window(PlatformKind::Windows);
    let alt_space = KeyboardEvent::named(NamedKey::Space, ModifiersState::ALT);

    let route = window.handle_key_event(&alt_space).unwrap();
    assert_eq!(route, KeyRoute::Platform(PlatformCommand::ShowSystemMenu));
    assert_eq!(handle.state().system_menu_requests, 1);
}

#[test]
fn test_alt_f4_unhandled_elsewhere() {
    let (mut window, handle) = default_window(PlatformKind::X11);
    let alt_f4 = KeyboardEvent::named(NamedKey::F4, ModifiersState::ALT);

    assert_eq!(window.handle_key_event(&alt_f4).unwrap(), KeyRoute::Unhandled);
    assert!(window.is_alive());
    assert_eq!(handle.state().unhandled_keys, vec![alt_f4]);
}

#[test]
fn test_bare_alt_consumed_only_with_autohide() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = save_menu();
    window.set_menu(Some(&menu)).unwrap();

    assert_eq!(
        window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap(),
        KeyRoute::Unhandled
    );

    window.set_auto_hide_menu_bar(true).unwrap();
    assert_eq!(
        window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap(),
        KeyRoute::MenuBar
    );
}

#[test]
fn test_shifted_digit_accelerator_fires() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = Rc::new(MenuModel::new().with_item(
        MenuItem::command(CommandId(7), "First Tab").with_accelerator("Ctrl+Shift+1"),
    ));
    window.set_menu(Some(&menu)).unwrap();
    window.poll_events().for_each(drop);

    let event = KeyboardEvent::character('!', ModifiersState::CONTROL | ModifiersState::SHIFT)
        .with_physical_key(KeyCode::Digit1);
    assert_eq!(
        window.handle_key_event(&event).unwrap(),
        KeyRoute::Accelerator(CommandId(7))
    );
    assert_eq!(events(&mut window), vec![WindowEvent::MenuCommand(CommandId(7))]);
}
