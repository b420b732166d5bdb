//! Pointer-driven drag and resize state machine.
//!
//! At most one session exists at a time. Geometry math lives in the free functions
//! [`drag_position`] and [`resize_geometry`]; the controller only sequences sessions and writes
//! results through the [`WindowManager`].

use crate::{
    config::DesktopConfig,
    model::{
        CursorStyle, PointerPosition, PresentationEffect, ResizeEdge, Viewport, WindowId,
        WindowRect,
    },
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active drag: pointer offset from the window's top-left corner.
pub struct DragSession {
    /// Window being moved.
    pub window_id: WindowId,
    /// Pointer position minus window origin at pointer-down.
    pub offset: PointerPosition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Active resize: pointer origin plus starting geometry.
pub struct ResizeSession {
    /// Window being resized.
    pub window_id: WindowId,
    /// Handle that started the resize.
    pub edge: ResizeEdge,
    /// Pointer position at pointer-down.
    pub origin: PointerPosition,
    /// Geometry at pointer-down.
    pub start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Controller state.
pub enum InteractionState {
    /// No pointer session.
    #[default]
    Idle,
    /// Moving a window.
    Dragging(DragSession),
    /// Resizing a window.
    Resizing(ResizeSession),
}

/// Computes the clamped top-left corner of a dragged window.
///
/// The window stays within `[0, viewport.width - w] x [0, viewport.height - h - taskbar_height]`;
/// when the window is larger than the available room the lower bound `0` wins.
pub fn drag_position(
    pointer: PointerPosition,
    offset: PointerPosition,
    rect: WindowRect,
    viewport: Viewport,
    taskbar_height: i32,
) -> (i32, i32) {
    let x = (pointer.x - offset.x).min(viewport.width - rect.w).max(0);
    let y = (pointer.y - offset.y)
        .min(viewport.height - rect.h - taskbar_height)
        .max(0);
    (x, y)
}

/// Computes resize geometry for a pointer delta `(dx, dy)` from the session origin.
///
/// Width and height never drop below the configured floors. West and north handles move the
/// left/top edge only while the resulting size is strictly above the floor; at the floor the
/// edge stays where `current` has it.
pub fn resize_geometry(
    start: WindowRect,
    current: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    config: &DesktopConfig,
) -> WindowRect {
    let (min_w, min_h) = (config.min_window_width, config.min_window_height);
    let mut next = WindowRect {
        x: current.x,
        y: current.y,
        w: start.w,
        h: start.h,
    };

    if edge.east() {
        next.w = (start.w + dx).max(min_w);
    }
    if edge.south() {
        next.h = (start.h + dy).max(min_h);
    }
    if edge.west() {
        next.w = (start.w - dx).max(min_w);
        if next.w > min_w {
            next.x = start.x + dx;
        }
    }
    if edge.north() {
        next.h = (start.h - dy).max(min_h);
        if next.h > min_h {
            next.y = start.y + dy;
        }
    }
    next
}

/// Drag/resize session owner.
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    /// Creates an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Whether no session is active.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, InteractionState::Idle)
    }

    /// Starts dragging `id` from a title bar pointer-down.
    ///
    /// Refused (no effects) when a session is already active, the window is unknown, or it is
    /// maximized. Otherwise focuses the window and requests the grabbing cursor.
    pub fn begin_drag(
        &mut self,
        windows: &mut WindowManager,
        id: &WindowId,
        pointer: PointerPosition,
    ) -> Vec<PresentationEffect> {
        if !self.is_idle() {
            return Vec::new();
        }
        let Some(window) = windows.window(id).filter(|w| !w.maximized) else {
            return Vec::new();
        };
        let rect = window.surface.rect;
        self.state = InteractionState::Dragging(DragSession {
            window_id: id.clone(),
            offset: PointerPosition::new(pointer.x - rect.x, pointer.y - rect.y),
        });
        windows.focus(id);
        vec![PresentationEffect::SetCursor(CursorStyle::Grabbing)]
    }

    /// Starts resizing `id` from an edge or corner handle.
    ///
    /// Refused under the same conditions as [`InteractionController::begin_drag`].
    pub fn begin_resize(
        &mut self,
        windows: &mut WindowManager,
        id: &WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Vec<PresentationEffect> {
        if !self.is_idle() {
            return Vec::new();
        }
        let Some(window) = windows.window(id).filter(|w| !w.maximized) else {
            return Vec::new();
        };
        self.state = InteractionState::Resizing(ResizeSession {
            window_id: id.clone(),
            edge,
            origin: pointer,
            start: window.surface.rect,
        });
        windows.focus(id);
        vec![PresentationEffect::SetCursor(edge.cursor())]
    }

    /// Applies a pointer move to the active session. Returns whether geometry was written.
    pub fn pointer_move(&mut self, windows: &mut WindowManager, pointer: PointerPosition) -> bool {
        match &self.state {
            InteractionState::Idle => false,
            InteractionState::Dragging(session) => {
                let Some(rect) = windows.window(&session.window_id).map(|w| w.surface.rect) else {
                    return false;
                };
                let (x, y) = drag_position(
                    pointer,
                    session.offset,
                    rect,
                    windows.viewport(),
                    windows.config().taskbar_height,
                );
                windows.set_rect(&session.window_id, rect.at(x, y))
            }
            InteractionState::Resizing(session) => {
                let Some(current) = windows.window(&session.window_id).map(|w| w.surface.rect)
                else {
                    return false;
                };
                let next = resize_geometry(
                    session.start,
                    current,
                    session.edge,
                    pointer.x - session.origin.x,
                    pointer.y - session.origin.y,
                    windows.config(),
                );
                windows.set_rect(&session.window_id, next)
            }
        }
    }

    /// Ends any session and restores the default cursor. No geometry is written.
    pub fn pointer_up(&mut self) -> Vec<PresentationEffect> {
        match std::mem::take(&mut self.state) {
            InteractionState::Idle => Vec::new(),
            InteractionState::Dragging(_) | InteractionState::Resizing(_) => {
                vec![PresentationEffect::SetCursor(CursorStyle::Default)]
            }
        }
    }
}
