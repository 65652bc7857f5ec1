//! Menu bar visibility, bounds anchoring, size constraints and helpers.

mod common;

use common::{default_window, events, headless_window};
use par_window::{
    CommandId, GlobalMenuHelper, HeadlessWidget, KeyboardEvent, MenuBarState, MenuItem, MenuModel,
    MouseEvent, NativeHandle, NativeWindow, PlatformKind, PlatformNotification, Rect, Size,
    TaskbarProgress, ThumbarButton, ThumbarHelper, WindowError, WindowEvent, WindowOptions,
};
use par_window_config::DEFAULT_MENU_BAR_HEIGHT;
use std::cell::RefCell;
use std::rc::Rc;

const BAR: u32 = DEFAULT_MENU_BAR_HEIGHT;

fn menu() -> Rc<MenuModel> {
    Rc::new(MenuModel::new().with_item(MenuItem::submenu(
        "File",
        MenuModel::new().with_item(MenuItem::command(CommandId(1), "Quit").with_accelerator("Ctrl+Q")),
    )))
}

#[test]
fn test_bar_hidden_without_menu() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    assert_eq!(window.menu_bar_state().unwrap(), MenuBarState::Hidden);

    // Showing without a menu is accepted and changes nothing
    window.set_menu_bar_visibility(true).unwrap();
    assert_eq!(window.menu_bar_state().unwrap(), MenuBarState::Hidden);
    assert!(events(&mut window).is_empty());
    assert_eq!(handle.state().menu_bar_height, 0);
}

#[test]
fn test_setting_menu_shows_fixed_bar() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();

    assert_eq!(window.menu_bar_state().unwrap(), MenuBarState::VisibleFixed);
    assert!(window.is_menu_bar_shown().unwrap());
    assert_eq!(handle.state().menu_bar_height, BAR);
    assert!(events(&mut window).contains(&WindowEvent::MenuBarVisibilityChanged(true)));

    window.set_menu(None).unwrap();
    assert_eq!(window.menu_bar_state().unwrap(), MenuBarState::Hidden);
    assert_eq!(handle.state().menu_bar_height, 0);
}

#[test]
fn test_autohide_alt_arms_and_release_disarms() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    window.set_auto_hide_menu_bar(true).unwrap();
    assert_eq!(
        window.menu_bar_state().unwrap(),
        MenuBarState::VisibleAutohideDisarmed
    );
    assert!(!window.is_menu_bar_shown().unwrap());
    assert!(window.is_menu_bar_visible().unwrap());
    window.poll_events().for_each(drop);

    window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap();
    assert_eq!(
        window.menu_bar_state().unwrap(),
        MenuBarState::VisibleAutohideArmed
    );
    assert_eq!(handle.state().menu_bar_height, BAR);

    window.handle_key_event(&KeyboardEvent::alt_released()).unwrap();
    assert_eq!(
        window.menu_bar_state().unwrap(),
        MenuBarState::VisibleAutohideDisarmed
    );
    let toggles: Vec<WindowEvent> = events(&mut window)
        .into_iter()
        .filter(|e| matches!(e, WindowEvent::MenuBarVisibilityChanged(_)))
        .collect();
    assert_eq!(
        toggles,
        vec![
            WindowEvent::MenuBarVisibilityChanged(true),
            WindowEvent::MenuBarVisibilityChanged(false)
        ]
    );
}

#[test]
fn test_other_key_and_click_disarm() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    window.set_auto_hide_menu_bar(true).unwrap();

    window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap();
    window.handle_key_event(&KeyboardEvent::character('x', Default::default())).unwrap();
    assert!(!window.is_menu_bar_shown().unwrap());

    window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap();
    window.handle_mouse_event(MouseEvent::Moved).unwrap();
    assert!(window.is_menu_bar_shown().unwrap(), "moves keep the bar");
    window.handle_mouse_event(MouseEvent::Pressed).unwrap();
    assert!(!window.is_menu_bar_shown().unwrap());
}

#[test]
fn test_focus_loss_disarms() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    window.set_auto_hide_menu_bar(true).unwrap();
    window.show().unwrap();

    window.handle_key_event(&KeyboardEvent::alt_pressed()).unwrap();
    assert!(window.is_menu_bar_shown().unwrap());

    handle.post(PlatformNotification::ActivationChanged(false));
    window.pump_notifications().unwrap();
    assert!(!window.is_menu_bar_shown().unwrap());
}

#[test]
fn test_content_anchor_keeps_content_rect() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    window.set_content_size(Size::new(800, 600)).unwrap();
    let content = window.content_bounds().unwrap();

    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    assert_eq!(window.content_bounds().unwrap(), content);
    let bounds = window.bounds().unwrap();
    assert_eq!(bounds.height, 600 + BAR);
    assert_eq!(bounds.y, content.y - BAR as i32);

    window.set_menu_bar_visibility(false).unwrap();
    assert_eq!(window.content_bounds().unwrap(), content);
    assert_eq!(window.bounds().unwrap(), content);
}

#[test]
fn test_window_anchor_keeps_window_rect() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    let frame = Rect::new(100, 100, 800, 600);
    window.set_bounds(frame).unwrap();

    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    assert_eq!(window.bounds().unwrap(), frame);
    assert_eq!(window.content_size().unwrap(), Size::new(800, 600 - BAR));
    assert_eq!(
        window.content_bounds().unwrap(),
        Rect::new(100, 100 + BAR as i32, 800, 600 - BAR)
    );
}

#[test]
fn test_maximized_window_keeps_frame_when_bar_toggles() {
    let (mut window, _handle) = default_window(PlatformKind::Default);
    window.maximize().unwrap();
    let frame = window.bounds().unwrap();

    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    assert_eq!(window.bounds().unwrap(), frame);
}

#[test]
fn test_use_content_size_option() {
    let menu = menu();
    let options = WindowOptions {
        use_content_size: true,
        menu: Some((*menu).clone()),
        ..WindowOptions::default()
    };
    let (window, _handle) = headless_window(options, PlatformKind::Default);
    assert_eq!(window.content_size().unwrap(), Size::new(800, 600));
    assert_eq!(window.bounds().unwrap().size(), Size::new(800, 600 + BAR));
    // The window owns a menu handed over in its options
    assert!(window.menu().unwrap().is_some());
}

#[test]
fn test_max_below_min_is_rejected() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    window.set_minimum_size(Size::new(200, 200)).unwrap();

    let result = window.set_maximum_size(Size::new(100, 100));
    assert!(matches!(result, Err(WindowError::InvalidArgument(_))));
    assert_eq!(window.minimum_size().unwrap(), Size::new(200, 200));
    assert_eq!(window.maximum_size().unwrap(), Size::new(0, 0));
    assert_eq!(handle.state().max_size, Size::new(0, 0));

    window.set_maximum_size(Size::new(1000, 0)).unwrap();
    assert_eq!(handle.state().max_size, Size::new(1000, 0));
    assert!(window.set_minimum_size(Size::new(1200, 10)).is_err());
    assert_eq!(window.minimum_size().unwrap(), Size::new(200, 200));
}

#[test]
fn test_center_in_work_area() {
    let (mut window, handle) = default_window(PlatformKind::Default);
    handle.set_work_area(Rect::new(0, 0, 1000, 800));
    window.set_bounds(Rect::new(0, 0, 400, 200)).unwrap();
    window.center().unwrap();
    assert_eq!(window.bounds().unwrap(), Rect::new(300, 300, 400, 200));
}

#[test]
fn test_options_loaded_from_yaml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("window.yaml");
    std::fs::write(
        &path,
        r#"
title: From File
width: 640
height: 480
auto_hide_menu_bar: true
menu:
  items:
    - type: submenu
      label: Edit
      submenu:
        items:
          - type: command
            id: 9
            label: Undo
            accelerator: Ctrl+Z
"#,
    )
    .unwrap();

    let options = WindowOptions::load_from(&path).unwrap();
    let (mut window, _handle) = headless_window(options, PlatformKind::Default);
    assert_eq!(window.title().unwrap(), "From File");
    assert_eq!(window.bounds().unwrap().size(), Size::new(640, 480));
    assert!(window.is_menu_bar_auto_hide().unwrap());
    assert_eq!(window.accelerator_count().unwrap(), 1);

    window
        .handle_key_event(&KeyboardEvent::character('z', par_window_accelerators::ModifiersState::CONTROL))
        .unwrap();
    assert_eq!(events(&mut window), vec![WindowEvent::MenuCommand(CommandId(9))]);
}

#[derive(Default)]
struct HelperLog(Rc<RefCell<Vec<String>>>);

impl HelperLog {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

struct RecordingGlobalMenu(Rc<RefCell<Vec<String>>>);

impl GlobalMenuHelper for RecordingGlobalMenu {
    fn attach(&mut self, _handle: NativeHandle) {
        self.0.borrow_mut().push("attach".into());
    }

    fn detach(&mut self) {
        self.0.borrow_mut().push("detach".into());
    }

    fn set_menu(&mut self, menu: Option<&MenuModel>) {
        let entry = if menu.is_some() { "menu" } else { "no menu" };
        self.0.borrow_mut().push(entry.into());
    }
}

struct RecordingThumbar(Rc<RefCell<Vec<String>>>);

impl ThumbarHelper for RecordingThumbar {
    fn attach(&mut self, _handle: NativeHandle) {
        self.0.borrow_mut().push("attach".into());
    }

    fn detach(&mut self) {
        self.0.borrow_mut().push("detach".into());
    }

    fn set_buttons(&mut self, buttons: &[ThumbarButton]) -> bool {
        self.0.borrow_mut().push(format!("{} buttons", buttons.len()));
        true
    }

    fn set_progress(&mut self, progress: TaskbarProgress) -> bool {
        self.0.borrow_mut().push(format!("{:?}", progress));
        true
    }
}

fn window_with_helpers(platform: PlatformKind, log: &HelperLog) -> NativeWindow {
    NativeWindow::builder(WindowOptions::default())
        .platform(platform)
        .global_menu_helper(RecordingGlobalMenu(Rc::clone(&log.0)))
        .thumbar_helper(RecordingThumbar(Rc::clone(&log.0)))
        .build(HeadlessWidget::new())
        .unwrap()
}

#[test]
fn test_global_menu_helper_on_x11() {
    let log = HelperLog::default();
    let mut window = window_with_helpers(PlatformKind::X11, &log);
    let menu = menu();
    window.set_menu(Some(&menu)).unwrap();
    window.set_menu(None).unwrap();
    assert!(!window.set_thumbar_buttons(&[ThumbarButton::new(CommandId(1), "Play")]).unwrap());

    window.close_immediately().unwrap();
    assert_eq!(log.entries(), vec!["attach", "menu", "no menu", "detach"]);
}

#[test]
fn test_thumbar_helper_on_windows() {
    let log = HelperLog::default();
    let mut window = window_with_helpers(PlatformKind::Windows, &log);
    let buttons = [
        ThumbarButton::new(CommandId(1), "Play"),
        ThumbarButton::new(CommandId(2), "Stop").with_enabled(false),
    ];
    assert!(window.set_thumbar_buttons(&buttons).unwrap());

    drop(window);
    assert_eq!(log.entries(), vec!["attach", "2 buttons", "detach"]);
}

#[test]
fn test_progress_bar_on_windows() {
    let log = HelperLog::default();
    let mut window = window_with_helpers(PlatformKind::Windows, &log);
    assert!(window.set_progress_bar(0.5).unwrap());
    assert!(window.set_progress_bar(2.0).unwrap());
    assert!(window.set_progress_bar(-1.0).unwrap());
    assert!(matches!(
        window.set_progress_bar(f64::NAN),
        Err(WindowError::InvalidArgument(_))
    ));

    drop(window);
    assert_eq!(
        log.entries(),
        vec!["attach", "Fraction(0.5)", "Indeterminate", "Hidden", "detach"]
    );
}

#[test]
fn test_progress_bar_elsewhere_is_noop() {
    let log = HelperLog::default();
    let mut window = window_with_helpers(PlatformKind::X11, &log);
    assert!(!window.set_progress_bar(0.5).unwrap());
    assert!(!log.entries().iter().any(|e| e.starts_with("Fraction")));
}

#[test]
fn test_native_handle_is_the_widgets() {
    let (window, handle) = default_window(PlatformKind::Default);
    assert_eq!(window.native_handle().unwrap(), handle.native_handle());

    let mut window = window;
    window.close_immediately().unwrap();
    assert_eq!(window.native_handle(), Err(WindowError::StaleReference));
}
