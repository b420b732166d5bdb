//! Window surface contract: the regions a window element exposes to pointer input.
//!
//! Every surface has a title bar (the drag handle), three control buttons, eight resize handles
//! and one embedded content frame. [`hit_test`] maps a pointer position to the region under it
//! using [`SurfaceMetrics`], so hosts without DOM targets can still dispatch pointer-downs.

use crate::model::{PointerPosition, ResizeEdge, WindowRect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Title bar buttons, left to right.
pub enum ControlButton {
    /// Hide the window.
    Minimize,
    /// Toggle maximize/restore.
    Maximize,
    /// Close the window.
    Close,
}

impl ControlButton {
    /// Buttons in display order.
    pub const ALL: [ControlButton; 3] = [Self::Minimize, Self::Maximize, Self::Close];

    /// Icon identifier rendered inside the button.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Minimize => "fas fa-minus",
            Self::Maximize => "far fa-square",
            Self::Close => "fas fa-times",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pointer-addressable part of a window surface.
pub enum SurfaceRegion {
    /// Title bar outside the control buttons; starts a drag.
    TitleBar,
    /// A control button.
    Control(ControlButton),
    /// An edge or corner handle; starts a resize.
    ResizeHandle(ResizeEdge),
    /// The embedded content frame.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pixel sizes of the surface chrome.
pub struct SurfaceMetrics {
    /// Thickness of edge handles.
    pub handle_thickness: i32,
    /// Side length of square corner handles.
    pub corner_size: i32,
    /// Title bar height.
    pub title_bar_height: i32,
    /// Width of one control button.
    pub control_width: i32,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            handle_thickness: 5,
            corner_size: 10,
            title_bar_height: 36,
            control_width: 46,
        }
    }
}

/// Returns the region of a surface at `rect` under `pointer`, or `None` outside the surface.
///
/// Handles take precedence over the title bar, and corners over edges.
pub fn hit_test(
    rect: WindowRect,
    pointer: PointerPosition,
    metrics: SurfaceMetrics,
) -> Option<SurfaceRegion> {
    if !rect.contains(pointer) {
        return None;
    }
    let left = pointer.x - rect.x;
    let top = pointer.y - rect.y;
    let right = rect.x + rect.w - 1 - pointer.x;
    let bottom = rect.y + rect.h - 1 - pointer.y;

    let corner = |a: i32, b: i32| a < metrics.corner_size && b < metrics.corner_size;
    let edge = if corner(top, left) {
        Some(ResizeEdge::NorthWest)
    } else if corner(top, right) {
        Some(ResizeEdge::NorthEast)
    } else if corner(bottom, left) {
        Some(ResizeEdge::SouthWest)
    } else if corner(bottom, right) {
        Some(ResizeEdge::SouthEast)
    } else if top < metrics.handle_thickness {
        Some(ResizeEdge::North)
    } else if bottom < metrics.handle_thickness {
        Some(ResizeEdge::South)
    } else if left < metrics.handle_thickness {
        Some(ResizeEdge::West)
    } else if right < metrics.handle_thickness {
        Some(ResizeEdge::East)
    } else {
        None
    };
    if let Some(edge) = edge {
        return Some(SurfaceRegion::ResizeHandle(edge));
    }

    if top >= metrics.title_bar_height {
        return Some(SurfaceRegion::Content);
    }
    let slot = right / metrics.control_width.max(1);
    let control = match slot {
        0 => Some(ControlButton::Close),
        1 => Some(ControlButton::Maximize),
        2 => Some(ControlButton::Minimize),
        _ => None,
    };
    Some(control.map_or(SurfaceRegion::TitleBar, SurfaceRegion::Control))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RECT: WindowRect = WindowRect {
        x: 100,
        y: 50,
        w: 800,
        h: 500,
    };

    fn at(x: i32, y: i32) -> Option<SurfaceRegion> {
        hit_test(RECT, PointerPosition::new(x, y), SurfaceMetrics::default())
    }

    #[test]
    fn every_handle_is_reachable() {
        assert_eq!(at(101, 51), Some(SurfaceRegion::ResizeHandle(ResizeEdge::NorthWest)));
        assert_eq!(at(898, 51), Some(SurfaceRegion::ResizeHandle(ResizeEdge::NorthEast)));
        assert_eq!(at(101, 548), Some(SurfaceRegion::ResizeHandle(ResizeEdge::SouthWest)));
        assert_eq!(at(898, 548), Some(SurfaceRegion::ResizeHandle(ResizeEdge::SouthEast)));
        assert_eq!(at(400, 51), Some(SurfaceRegion::ResizeHandle(ResizeEdge::North)));
        assert_eq!(at(400, 548), Some(SurfaceRegion::ResizeHandle(ResizeEdge::South)));
        assert_eq!(at(101, 300), Some(SurfaceRegion::ResizeHandle(ResizeEdge::West)));
        assert_eq!(at(898, 300), Some(SurfaceRegion::ResizeHandle(ResizeEdge::East)));
    }

    #[test]
    fn title_bar_controls_and_content() {
        assert_eq!(at(300, 70), Some(SurfaceRegion::TitleBar));
        assert_eq!(at(880, 70), Some(SurfaceRegion::Control(ControlButton::Close)));
        assert_eq!(at(830, 70), Some(SurfaceRegion::Control(ControlButton::Maximize)));
        assert_eq!(at(790, 70), Some(SurfaceRegion::Control(ControlButton::Minimize)));
        assert_eq!(at(300, 300), Some(SurfaceRegion::Content));
        assert_eq!(at(99, 300), None);
        assert_eq!(at(900, 300), None);
    }
}
