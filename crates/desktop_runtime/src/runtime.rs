//! Explicitly constructed desktop runtime bundling the window manager, the interaction
//! controller and the shell chrome, with pointer routing between them.

use std::{
    cell::{Ref, RefCell},
    rc::Rc,
};

use crate::{
    config::DesktopConfig,
    interaction::InteractionController,
    manifest::AppManifest,
    model::{PointerPosition, PresentationEffect, Viewport, WindowId},
    shell::{ShellChrome, TaskbarAction},
    surface::{hit_test, ControlButton, SurfaceMetrics, SurfaceRegion},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a pointer-down landed on.
pub enum PointerTarget<'a> {
    /// A region of a window surface.
    Window(&'a WindowId, SurfaceRegion),
    /// Empty desktop background.
    Desktop,
}

/// Desktop state owner. Construct one per page and route all input through it.
pub struct DesktopRuntime {
    windows: WindowManager,
    interaction: InteractionController,
    shell: Rc<RefCell<ShellChrome>>,
    metrics: SurfaceMetrics,
}

impl DesktopRuntime {
    /// Builds a runtime whose shell chrome observes the window manager.
    pub fn new(config: DesktopConfig, manifest: AppManifest, viewport: Viewport) -> Self {
        let shell = Rc::new(RefCell::new(ShellChrome::new(manifest)));
        let mut windows = WindowManager::new(config, viewport);
        let observer = shell.clone();
        windows.subscribe(move |event| observer.borrow_mut().on_window_event(event));
        Self {
            windows,
            interaction: InteractionController::new(),
            shell,
            metrics: SurfaceMetrics::default(),
        }
    }

    /// Window manager.
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Mutable window manager access for direct control calls.
    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    /// Interaction controller.
    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Shell view model.
    pub fn shell(&self) -> Ref<'_, ShellChrome> {
        self.shell.borrow()
    }

    /// Opens (or focuses) the manifest app `name`. Unknown names are ignored.
    pub fn launch(&mut self, name: &str) -> Option<WindowId> {
        let app = self.shell.borrow().manifest().get(name).cloned()?;
        Some(self.windows.open(&app.name, &app.icon, &app.launch_reference))
    }

    /// Opens an arbitrary content reference under `name`, using the manifest icon if listed.
    pub fn open(&mut self, name: &str, content_src: &str) -> WindowId {
        let icon = self.shell.borrow().manifest().icon_for(name).to_string();
        self.windows.open(name, &icon, content_src)
    }

    /// Launches from the start menu and closes it.
    pub fn launch_from_start_menu(&mut self, name: &str) -> Option<WindowId> {
        self.shell.borrow_mut().close_start_menu();
        self.launch(name)
    }

    /// Opens or closes the start menu.
    pub fn toggle_start_menu(&mut self) {
        self.shell.borrow_mut().toggle_start_menu();
    }

    /// Handles a taskbar icon click: toggles a running window or launches a pinned app.
    pub fn click_taskbar(&mut self, id: &WindowId) -> bool {
        let action = self.shell.borrow().taskbar_action(id);
        match action {
            Some(TaskbarAction::Toggle(id)) => self.windows.toggle(&id),
            Some(TaskbarAction::Launch(app)) => {
                self.windows.open(&app.name, &app.icon, &app.launch_reference);
                true
            }
            None => false,
        }
    }

    /// Finds the topmost visible window region under `pointer`.
    pub fn hit_test(&self, pointer: PointerPosition) -> Option<(WindowId, SurfaceRegion)> {
        self.windows.stacking_order().into_iter().find_map(|window| {
            hit_test(window.surface.rect, pointer, self.metrics)
                .map(|region| (window.id.clone(), region))
        })
    }

    /// Routes a pointer-down.
    ///
    /// Any press on a window focuses it. Title bars start a drag, handles start a resize and
    /// control buttons invoke their window operation. Desktop presses close the start menu.
    pub fn pointer_down(
        &mut self,
        target: PointerTarget<'_>,
        pointer: PointerPosition,
    ) -> Vec<PresentationEffect> {
        let (id, region) = match target {
            PointerTarget::Desktop => {
                self.shell.borrow_mut().close_start_menu();
                return Vec::new();
            }
            PointerTarget::Window(id, region) => (id, region),
        };
        if !self.windows.focus(id) {
            return Vec::new();
        }
        match region {
            SurfaceRegion::TitleBar => self.interaction.begin_drag(&mut self.windows, id, pointer),
            SurfaceRegion::ResizeHandle(edge) => {
                self.interaction.begin_resize(&mut self.windows, id, edge, pointer)
            }
            SurfaceRegion::Control(ControlButton::Minimize) => {
                self.windows.minimize(id);
                Vec::new()
            }
            SurfaceRegion::Control(ControlButton::Maximize) => self.windows.toggle_maximize(id),
            SurfaceRegion::Control(ControlButton::Close) => {
                self.windows.close(id);
                Vec::new()
            }
            SurfaceRegion::Content => Vec::new(),
        }
    }

    /// Hit-tests `pointer` against the window stack and routes the press.
    pub fn pointer_down_at(&mut self, pointer: PointerPosition) -> Vec<PresentationEffect> {
        match self.hit_test(pointer) {
            Some((id, region)) => self.pointer_down(PointerTarget::Window(&id, region), pointer),
            None => self.pointer_down(PointerTarget::Desktop, pointer),
        }
    }

    /// Routes a pointer-move to the active drag or resize session.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        self.interaction.pointer_move(&mut self.windows, pointer)
    }

    /// Ends the active drag or resize session.
    pub fn pointer_up(&mut self) -> Vec<PresentationEffect> {
        self.interaction.pointer_up()
    }

    /// Forwards a viewport resize to the window manager.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.windows.set_viewport(viewport);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{CursorStyle, ResizeEdge};

    fn runtime() -> DesktopRuntime {
        DesktopRuntime::new(
            DesktopConfig::default(),
            AppManifest::builtin().expect("builtin manifest"),
            Viewport {
                width: 1280,
                height: 720,
            },
        )
    }

    #[test]
    fn launch_uses_manifest_entries() {
        let mut rt = runtime();
        let id = rt.launch("Edge Browser").expect("known app");
        let window = rt.windows().window(&id).expect("window");
        assert_eq!(window.icon, "fab fa-edge");
        assert_eq!(window.surface.content_src, "apps/browser.html");
        assert_eq!(rt.launch("Paint"), None);

        let custom = rt.open("Paint", "apps/paint.html");
        assert_eq!(
            rt.windows().window(&custom).expect("window").icon,
            "fas fa-cogs"
        );
    }

    #[test]
    fn taskbar_clicks_launch_then_toggle() {
        let mut rt = runtime();
        let telegram = WindowId::from_app_name("Telegram");
        assert!(rt.click_taskbar(&telegram));
        assert!(rt.shell().taskbar_item(&telegram).expect("icon").active);

        assert!(rt.click_taskbar(&telegram));
        assert!(rt.windows().window(&telegram).expect("window").surface.hidden);
        assert!(!rt.shell().taskbar_item(&telegram).expect("icon").active);

        assert!(!rt.click_taskbar(&WindowId::from_app_name("Settings")));
    }

    #[test]
    fn start_menu_launch_closes_the_menu() {
        let mut rt = runtime();
        rt.toggle_start_menu();
        assert!(rt.shell().start_menu_open());
        rt.launch_from_start_menu("VS Code").expect("launch");
        assert!(!rt.shell().start_menu_open());

        rt.toggle_start_menu();
        rt.pointer_down_at(PointerPosition::new(5, 5));
        assert!(!rt.shell().start_menu_open());
    }

    #[test]
    fn title_bar_press_focuses_and_drags() {
        let mut rt = runtime();
        let a = rt.launch("File Explorer").expect("a");
        rt.launch("Telegram").expect("b");

        let effects = rt.pointer_down_at(PointerPosition::new(110, 60));
        assert_eq!(effects, vec![PresentationEffect::SetCursor(CursorStyle::Grabbing)]);
        assert_eq!(rt.windows().focused(), Some(&a));

        assert!(rt.pointer_move(PointerPosition::new(130, 80)));
        let rect = rt.windows().window(&a).expect("a").surface.rect;
        assert_eq!((rect.x, rect.y), (120, 70));
        assert_eq!(
            rt.pointer_up(),
            vec![PresentationEffect::SetCursor(CursorStyle::Default)]
        );
    }

    #[test]
    fn handle_press_starts_a_resize() {
        let mut rt = runtime();
        let id = rt.launch("Settings").expect("settings");
        let effects = rt.pointer_down(
            PointerTarget::Window(&id, SurfaceRegion::ResizeHandle(ResizeEdge::East)),
            PointerPosition::new(899, 300),
        );
        assert_eq!(effects, vec![PresentationEffect::SetCursor(CursorStyle::EwResize)]);
        rt.pointer_move(PointerPosition::new(949, 300));
        assert_eq!(rt.windows().window(&id).expect("window").surface.rect.w, 850);
    }

    #[test]
    fn control_buttons_drive_window_operations() {
        let mut rt = runtime();
        let id = rt.launch("Microsoft Store").expect("store");

        let effects = rt.pointer_down(
            PointerTarget::Window(&id, SurfaceRegion::Control(ControlButton::Maximize)),
            PointerPosition::default(),
        );
        assert!(matches!(
            effects.as_slice(),
            [PresentationEffect::StartTransition { duration_ms: 200, .. }]
        ));
        assert!(rt.windows().window(&id).expect("window").maximized);

        rt.pointer_down(
            PointerTarget::Window(&id, SurfaceRegion::Control(ControlButton::Minimize)),
            PointerPosition::default(),
        );
        assert!(rt.windows().window(&id).expect("window").surface.hidden);

        rt.pointer_down(
            PointerTarget::Window(&id, SurfaceRegion::Control(ControlButton::Close)),
            PointerPosition::default(),
        );
        assert!(rt.windows().window(&id).is_none());
        assert!(!rt.shell().taskbar_item(&id).expect("pinned").running);
    }
}
