//! Window registry, stacking, focus and maximize/minimize state.
//!
//! [`WindowManager`] exclusively owns every [`WindowState`]. Lifecycle changes are broadcast as
//! [`WindowEvent`]s to subscribed observers so the shell can mirror them on the taskbar without
//! the manager knowing about taskbar rendering.

use leptos::logging;

use crate::{
    config::DesktopConfig,
    model::{PresentationEffect, Viewport, WindowId, WindowRect, WindowState, WindowSurface},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Window lifecycle notifications delivered to observers.
pub enum WindowEvent {
    /// A new window was created.
    Opened {
        /// New window.
        id: WindowId,
        /// Title bar text.
        title: String,
        /// Icon identifier.
        icon: String,
    },
    /// The window became the single active window.
    Focused(WindowId),
    /// The window was removed.
    Closed(WindowId),
    /// The window was hidden.
    Minimized(WindowId),
}

/// Observer callback registered with [`WindowManager::subscribe`].
pub type WindowObserver = Box<dyn FnMut(&WindowEvent)>;

/// Owner of all open windows.
pub struct WindowManager {
    config: DesktopConfig,
    viewport: Viewport,
    windows: Vec<WindowState>,
    z_counter: u32,
    focused: Option<WindowId>,
    observers: Vec<WindowObserver>,
}

impl WindowManager {
    /// Creates an empty manager for `viewport`.
    pub fn new(config: DesktopConfig, viewport: Viewport) -> Self {
        Self {
            z_counter: config.initial_z_index,
            config,
            viewport,
            windows: Vec::new(),
            focused: None,
            observers: Vec::new(),
        }
    }

    /// Registers an observer for every subsequent [`WindowEvent`].
    pub fn subscribe(&mut self, observer: impl FnMut(&WindowEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: WindowEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Open windows in open order.
    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    /// Looks up a window.
    pub fn window(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    fn window_mut(&mut self, id: &WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    /// Window currently holding focus, if any.
    pub fn focused(&self) -> Option<&WindowId> {
        self.focused.as_ref()
    }

    /// Highest stacking value handed out so far.
    pub fn top_z_index(&self) -> u32 {
        self.z_counter
    }

    /// Visible windows ordered from the top of the stack down.
    pub fn stacking_order(&self) -> Vec<&WindowState> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| !w.surface.hidden).collect();
        visible.sort_by(|a, b| b.surface.z_index.cmp(&a.surface.z_index));
        visible
    }

    fn next_z(&mut self) -> u32 {
        self.z_counter = self.z_counter.saturating_add(1);
        self.z_counter
    }

    /// Opens the window for `app_name`, or focuses it if already open.
    ///
    /// New windows are placed on the cascade grid, stacked on top and focused.
    pub fn open(&mut self, app_name: &str, icon: &str, content_src: &str) -> WindowId {
        let id = WindowId::from_app_name(app_name);
        if self.window(&id).is_some() {
            self.focus(&id);
            return id;
        }

        let rect = self.config.cascade_rect(self.windows.len());
        let z_index = self.next_z();
        self.windows.push(WindowState {
            id: id.clone(),
            title: app_name.to_string(),
            icon: icon.to_string(),
            surface: WindowSurface {
                rect,
                z_index,
                hidden: false,
                active: false,
                transition: false,
                transition_generation: 0,
                content_src: content_src.to_string(),
            },
            maximized: false,
            last_normal: rect,
        });
        logging::log!("window `{id}` opened at ({}, {})", rect.x, rect.y);
        self.emit(WindowEvent::Opened {
            id: id.clone(),
            title: app_name.to_string(),
            icon: icon.to_string(),
        });
        self.focus(&id);
        id
    }

    /// Raises `id` above every other window and makes it the single active window.
    ///
    /// Shows the window if it was minimized. Returns `false` for unknown ids.
    pub fn focus(&mut self, id: &WindowId) -> bool {
        if self.window(id).is_none() {
            return false;
        }
        let z_index = self.next_z();
        for window in &mut self.windows {
            window.surface.active = &window.id == id;
            if &window.id == id {
                window.surface.z_index = z_index;
                window.surface.hidden = false;
            }
        }
        self.focused = Some(id.clone());
        self.emit(WindowEvent::Focused(id.clone()));
        true
    }

    /// Removes a window.
    ///
    /// If it held focus, focus moves to the most recently opened window that is still visible.
    pub fn close(&mut self, id: &WindowId) -> bool {
        let Some(index) = self.windows.iter().position(|w| &w.id == id) else {
            return false;
        };
        self.windows.remove(index);
        logging::log!("window `{id}` closed");
        self.emit(WindowEvent::Closed(id.clone()));

        if self.focused.as_ref() == Some(id) {
            self.focused = None;
            let successor = self
                .windows
                .iter()
                .rev()
                .find(|w| !w.surface.hidden)
                .map(|w| w.id.clone());
            if let Some(successor) = successor {
                self.focus(&successor);
            }
        }
        true
    }

    /// Hides a window and drops its active mark.
    pub fn minimize(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        window.surface.hidden = true;
        window.surface.active = false;
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
        self.emit(WindowEvent::Minimized(id.clone()));
        true
    }

    /// Taskbar toggle: shows and focuses a hidden or inactive window, minimizes the active one.
    pub fn toggle(&mut self, id: &WindowId) -> bool {
        let Some(window) = self.window(id) else {
            return false;
        };
        if window.is_active() {
            self.minimize(id)
        } else {
            self.focus(id)
        }
    }

    /// Toggles between the maximized and normal state and focuses the window.
    ///
    /// Maximizing saves the current geometry and fills the work area; restoring writes the saved
    /// geometry back. Either direction starts a transition the host must clear with
    /// [`WindowManager::clear_transition`].
    pub fn toggle_maximize(&mut self, id: &WindowId) -> Vec<PresentationEffect> {
        let work_area = self.config.work_area(self.viewport);
        let duration_ms = self.config.transition_ms;
        let Some(window) = self.window_mut(id) else {
            return Vec::new();
        };
        if window.maximized {
            window.surface.rect = window.last_normal;
        } else {
            window.last_normal = window.surface.rect;
            window.surface.rect = work_area;
        }
        window.maximized = !window.maximized;
        window.surface.transition = true;
        let surface = &mut window.surface;
        surface.transition_generation = surface.transition_generation.wrapping_add(1);
        let generation = window.surface.transition_generation;
        self.focus(id);
        vec![PresentationEffect::StartTransition {
            window_id: id.clone(),
            duration_ms,
            generation,
        }]
    }

    /// Ends the transition started as `generation` by [`WindowManager::toggle_maximize`].
    ///
    /// Returns `false` for unknown windows and for a `generation` a newer toggle has superseded;
    /// the newer transition keeps running until its own end arrives.
    pub fn clear_transition(&mut self, id: &WindowId, generation: u32) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };
        if window.surface.transition_generation != generation {
            return false;
        }
        window.surface.transition = false;
        true
    }

    /// Writes new geometry for a window in the normal state.
    ///
    /// Returns `false` for unknown or maximized windows.
    pub fn set_rect(&mut self, id: &WindowId, rect: WindowRect) -> bool {
        match self.window_mut(id) {
            Some(window) if !window.maximized => {
                window.surface.rect = rect;
                true
            }
            _ => false,
        }
    }

    /// Records a new viewport size and re-fills the work area of maximized windows.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let work_area = self.config.work_area(viewport);
        for window in self.windows.iter_mut().filter(|w| w.maximized) {
            window.surface.rect = work_area;
        }
    }
}
