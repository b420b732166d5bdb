//! Browser-side host hooks: viewport queries, presentation effect execution and virtual
//! filesystem boot.
//!
//! On non-wasm targets the DOM hooks fall back to fixed values and immediate effect completion so
//! the same call sequence works in native tests.

use std::{cell::RefCell, rc::Rc};

use leptos::{logging, spawn_local};
use platform_host::{FileSystemService, StoreError};
use platform_host_web::{host_strategy_name, open_virtual_store};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    config::DesktopConfig,
    manifest::AppManifest,
    model::{CursorStyle, PointerPosition, PresentationEffect, Viewport, WindowId},
    runtime::DesktopRuntime,
};

#[derive(Clone)]
/// Shared handle to the page's [`DesktopRuntime`] plus effect execution.
pub struct DesktopHost {
    runtime: Rc<RefCell<DesktopRuntime>>,
}

impl DesktopHost {
    /// Creates a runtime sized to the current browser viewport.
    pub fn new(config: DesktopConfig, manifest: AppManifest) -> Self {
        Self {
            runtime: Rc::new(RefCell::new(DesktopRuntime::new(
                config,
                manifest,
                current_viewport(),
            ))),
        }
    }

    /// Shared runtime handle.
    pub fn runtime(&self) -> Rc<RefCell<DesktopRuntime>> {
        self.runtime.clone()
    }

    /// Stable name of the storage strategy the filesystem boots with.
    pub fn host_strategy_name(&self) -> &'static str {
        host_strategy_name()
    }

    /// Routes a document pointer-down and executes resulting effects.
    pub fn pointer_down_at(&self, pointer: PointerPosition) {
        let effects = self.runtime.borrow_mut().pointer_down_at(pointer);
        self.run_effects(effects);
    }

    /// Routes a document pointer-move.
    pub fn pointer_move(&self, pointer: PointerPosition) {
        self.runtime.borrow_mut().pointer_move(pointer);
    }

    /// Routes a document pointer-up and executes resulting effects.
    pub fn pointer_up(&self) {
        let effects = self.runtime.borrow_mut().pointer_up();
        self.run_effects(effects);
    }

    /// Re-reads the browser viewport and forwards it to the window manager.
    pub fn sync_viewport(&self) {
        self.runtime.borrow_mut().set_viewport(current_viewport());
    }

    /// Executes presentation effects in order.
    pub fn run_effects(&self, effects: Vec<PresentationEffect>) {
        for effect in effects {
            match effect {
                PresentationEffect::SetCursor(cursor) => set_document_cursor(cursor),
                PresentationEffect::StartTransition {
                    window_id,
                    duration_ms,
                    generation,
                } => self.schedule_transition_end(window_id, duration_ms, generation),
            }
        }
    }

    fn schedule_transition_end(&self, window_id: WindowId, duration_ms: u32, generation: u32) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let runtime = self.runtime.clone();
            let callback =
                Closure::once_into_js(move || end_transition(&runtime, &window_id, generation));
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                duration_ms as i32,
            );
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = duration_ms;
            end_transition(&self.runtime, &window_id, generation);
        }
    }

    /// Opens the virtual filesystem in the background and hands the seeded service to `on_ready`.
    ///
    /// Storage failures are logged; the desktop keeps running without a filesystem.
    pub fn spawn_filesystem_boot(&self, on_ready: impl FnOnce(FileSystemService) + 'static) {
        spawn_local(async move {
            match boot_filesystem().await {
                Ok(service) => on_ready(service),
                Err(err) => logging::warn!("virtual filesystem boot failed: {err}"),
            }
        });
    }
}

// Timers from superseded toggles fire too; `clear_transition` ignores their generation.
fn end_transition(runtime: &Rc<RefCell<DesktopRuntime>>, window_id: &WindowId, generation: u32) {
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => {
            runtime.windows_mut().clear_transition(window_id, generation);
        }
        Err(_) => logging::warn!("transition end for `{window_id}` skipped: runtime busy"),
    }
}

/// Opens the host's virtual store (degrading to memory when IndexedDB is unavailable) and seeds
/// it on first run.
///
/// # Errors
///
/// Returns the store error when neither the persistent nor the fallback store can be used.
pub async fn boot_filesystem() -> Result<FileSystemService, StoreError> {
    let store = open_virtual_store().await?;
    let service = FileSystemService::new(Rc::new(store));
    service.initialize().await?;
    Ok(service)
}

/// Reads the browser viewport size, or 1024x768 outside the browser.
pub fn current_viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);
            return Viewport { width, height };
        }
    }

    Viewport::default()
}

fn set_document_cursor(cursor: CursorStyle) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        if let Err(err) = body.style().set_property("cursor", cursor.css_value()) {
            logging::warn!("set cursor failed: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = cursor;
}
