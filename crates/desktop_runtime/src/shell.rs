//! Desktop shell chrome: taskbar icons, start menu and desktop icons.
//!
//! [`ShellChrome`] renders nothing itself. It keeps the view model the UI draws from and updates
//! it from [`WindowEvent`]s, so taskbar state always mirrors the window manager.

use crate::{
    manifest::{AppEntry, AppManifest},
    model::WindowId,
    window_manager::WindowEvent,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// One taskbar icon.
pub struct TaskbarItem {
    /// Window the icon controls.
    pub id: WindowId,
    /// Tooltip (app display name).
    pub title: String,
    /// Icon identifier.
    pub icon: String,
    /// Listed by the manifest as pinned; survives window close.
    pub pinned: bool,
    /// A window is open for this icon.
    pub running: bool,
    /// The window holds focus.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What a taskbar click should do.
pub enum TaskbarAction {
    /// Toggle the running window.
    Toggle(WindowId),
    /// Launch the pinned app.
    Launch(AppEntry),
}

#[derive(Debug, Clone)]
/// Taskbar, start menu and desktop icon view model.
pub struct ShellChrome {
    manifest: AppManifest,
    taskbar: Vec<TaskbarItem>,
    start_menu_open: bool,
}

impl ShellChrome {
    /// Builds the chrome with one taskbar icon per pinned app.
    pub fn new(manifest: AppManifest) -> Self {
        let taskbar = manifest
            .pinned_apps()
            .map(|app| TaskbarItem {
                id: app.window_id(),
                title: app.name.clone(),
                icon: app.icon.clone(),
                pinned: true,
                running: false,
                active: false,
            })
            .collect();
        Self {
            manifest,
            taskbar,
            start_menu_open: false,
        }
    }

    /// App catalog backing the chrome.
    pub fn manifest(&self) -> &AppManifest {
        &self.manifest
    }

    /// Taskbar icons: pinned apps first in manifest order, then other running windows in open
    /// order.
    pub fn taskbar(&self) -> &[TaskbarItem] {
        &self.taskbar
    }

    /// Looks up the taskbar icon for a window.
    pub fn taskbar_item(&self, id: &WindowId) -> Option<&TaskbarItem> {
        self.taskbar.iter().find(|item| &item.id == id)
    }

    /// Apps drawn as desktop icons.
    pub fn desktop_icons(&self) -> Vec<&AppEntry> {
        self.manifest.desktop_apps().collect()
    }

    /// Apps listed in the start menu.
    pub fn start_menu_entries(&self) -> &[AppEntry] {
        &self.manifest.apps
    }

    /// Whether the start menu is shown.
    pub fn start_menu_open(&self) -> bool {
        self.start_menu_open
    }

    /// Opens or closes the start menu.
    pub fn toggle_start_menu(&mut self) {
        self.start_menu_open = !self.start_menu_open;
    }

    /// Closes the start menu.
    pub fn close_start_menu(&mut self) {
        self.start_menu_open = false;
    }

    /// Resolves a taskbar click.
    pub fn taskbar_action(&self, id: &WindowId) -> Option<TaskbarAction> {
        let item = self.taskbar_item(id)?;
        if item.running {
            return Some(TaskbarAction::Toggle(item.id.clone()));
        }
        self.manifest
            .by_window_id(id)
            .cloned()
            .map(TaskbarAction::Launch)
    }

    /// Mirrors a window lifecycle event onto the taskbar.
    pub fn on_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::Opened { id, title, icon } => {
                if let Some(item) = self.taskbar.iter_mut().find(|item| &item.id == id) {
                    item.running = true;
                } else {
                    self.taskbar.push(TaskbarItem {
                        id: id.clone(),
                        title: title.clone(),
                        icon: icon.clone(),
                        pinned: false,
                        running: true,
                        active: false,
                    });
                }
            }
            WindowEvent::Focused(id) => {
                for item in &mut self.taskbar {
                    item.active = &item.id == id;
                }
            }
            WindowEvent::Minimized(id) => {
                if let Some(item) = self.taskbar.iter_mut().find(|item| &item.id == id) {
                    item.active = false;
                }
            }
            WindowEvent::Closed(id) => {
                self.taskbar.retain(|item| &item.id != id || item.pinned);
                if let Some(item) = self.taskbar.iter_mut().find(|item| &item.id == id) {
                    item.running = false;
                    item.active = false;
                }
            }
        }
    }
}
