//! Desktop runtime: window management, pointer interaction and shell chrome state for the
//! browser desktop.
//!
//! [`DesktopRuntime`] is the explicitly constructed owner of a [`WindowManager`], an
//! [`InteractionController`] and a [`ShellChrome`]. State transitions are pure with respect to the
//! DOM; cursor and animation side effects come back as [`PresentationEffect`]s that
//! [`DesktopHost`] executes in the browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod host;
pub mod interaction;
pub mod manifest;
pub mod model;
pub mod runtime;
pub mod shell;
pub mod surface;
pub mod window_manager;

pub use config::{ConfigError, DesktopConfig};
pub use host::{boot_filesystem, current_viewport, DesktopHost};
pub use interaction::{
    drag_position, resize_geometry, DragSession, InteractionController, InteractionState,
    ResizeSession,
};
pub use manifest::{AppEntry, AppManifest, FALLBACK_APP_ICON};
pub use model::*;
pub use runtime::{DesktopRuntime, PointerTarget};
pub use shell::{ShellChrome, TaskbarAction, TaskbarItem};
pub use surface::{hit_test, ControlButton, SurfaceMetrics, SurfaceRegion};
pub use window_manager::{WindowEvent, WindowManager, WindowObserver};
