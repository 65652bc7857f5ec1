//! winit application hosting one [`NativeWindow`].
//!
//! winit reports window changes as events on the loop; they are turned into
//! raw window events and fed to the window, together with keyboard and mouse
//! input for routing.

use crate::demo;
use crate::event::WindowEvent as NativeEvent;
use crate::toolkit::WinitWidget;
use crate::window::{MouseEvent, NativeWindow};
use anyhow::Result;
use par_window_accelerators::{KeyboardEvent, ModifiersState};
use par_window_config::{MenuModel, WindowOptions};
use std::rc::Rc;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

/// Main application state
pub struct App {
    options: WindowOptions,
}

impl App {
    pub fn new(options: WindowOptions) -> Self {
        Self { options }
    }

    /// Run the event loop until the window closes
    pub fn run(self) -> Result<()> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState::new(self.options);
        event_loop.run_app(&mut state)?;

        Ok(())
    }
}

struct AppState {
    options: WindowOptions,
    /// The window only holds a weak reference to its menu
    menu: Rc<MenuModel>,
    window: Option<NativeWindow>,
    winit_window: Option<Arc<Window>>,
    modifiers: ModifiersState,
}

impl AppState {
    fn new(mut options: WindowOptions) -> Self {
        let menu = Rc::new(options.menu.take().unwrap_or_else(demo::demo_menu));
        Self {
            options,
            menu,
            window: None,
            winit_window: None,
            modifiers: ModifiersState::empty(),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let widget = WinitWidget::new(event_loop, &self.options)?;
        let winit_window = widget.winit_window();

        let mut window = NativeWindow::builder(self.options.clone()).build(widget)?;
        window.set_menu(Some(&self.menu))?;
        window.show()?;

        log::info!("Window ready (id {:?})", winit_window.id());
        self.winit_window = Some(winit_window);
        self.window = Some(window);
        Ok(())
    }

    /// Forward one winit event. Returns `Err` only for a stale window.
    fn forward(&mut self, event: &WindowEvent) -> crate::Result<()> {
        let Some(window) = self.window.as_mut() else {
            return Ok(());
        };

        match event {
            WindowEvent::CloseRequested => window.close(),
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                Ok(())
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let key = keyboard_event(event, self.modifiers);
                let route = window.handle_key_event(&key)?;
                log::trace!("{:?} routed to {:?}", key.logical_key, route);
                Ok(())
            }
            WindowEvent::MouseInput { state, .. } => window.handle_mouse_event(match state {
                ElementState::Pressed => MouseEvent::Pressed,
                ElementState::Released => MouseEvent::Released,
            }),
            WindowEvent::CursorMoved { .. } => window.handle_mouse_event(MouseEvent::Moved),
            other => {
                let Some(winit_window) = self.winit_window.as_ref() else {
                    return Ok(());
                };
                for raw in WinitWidget::raw_events(winit_window, other) {
                    window.handle_raw_event(raw)?;
                }
                Ok(())
            }
        }
    }

    /// Act on the events the window raised; returns how many there were.
    fn drain_events(&mut self) -> usize {
        let Some(window) = self.window.as_mut() else {
            return 0;
        };

        let events: Vec<NativeEvent> = window.poll_events().collect();
        let count = events.len();
        for event in events {
            log::debug!("Window event: {:?}", event);
            match event {
                NativeEvent::MenuCommand(id) => {
                    if let Err(e) = demo::apply_command(window, id) {
                        log::warn!("Command {} failed: {}", id, e);
                    }
                }
                NativeEvent::OperationFailed { operation, message } => {
                    log::warn!("{} failed: {}", operation, message);
                }
                _ => {}
            }
        }
        count
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            log::error!("Failed to create window: {:#}", e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.winit_window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        if let Err(e) = self.forward(&event) {
            log::debug!("Event {:?} after close: {}", event, e);
        }

        // Menu commands raise events of their own
        while self.drain_events() > 0 {}

        if !self.window.as_ref().is_some_and(NativeWindow::is_alive) {
            log::info!("Window closed, exiting");
            self.window = None;
            self.winit_window = None;
            event_loop.exit();
        }
    }
}

fn keyboard_event(event: &KeyEvent, modifiers: ModifiersState) -> KeyboardEvent {
    let mut key = KeyboardEvent::new(event.logical_key.clone(), event.state, modifiers);
    if let PhysicalKey::Code(code) = event.physical_key {
        key.physical_key = Some(code);
    }
    key.text = event.text.clone();
    key.repeat = event.repeat;
    key
}
