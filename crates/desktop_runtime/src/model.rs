//! Window-manager value types shared by the manager, the interaction controller and the shell.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identity of a managed window, derived from an app display name.
pub struct WindowId(String);

impl WindowId {
    /// Derives the window id for `app_name` by removing every whitespace character.
    ///
    /// Names that differ only in whitespace (`"VS Code"`, `"VSCode"`) map to the same id.
    pub fn from_app_name(app_name: &str) -> Self {
        Self(app_name.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window geometry in viewport pixels.
pub struct WindowRect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl WindowRect {
    /// Returns the rect moved to `(x, y)` with its size unchanged.
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Returns whether `pointer` lies inside the rect (right/bottom edges exclusive).
    pub fn contains(self, pointer: PointerPosition) -> bool {
        pointer.x >= self.x
            && pointer.x < self.x + self.w
            && pointer.y >= self.y
            && pointer.y < self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Pointer coordinates in viewport pixels.
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl PointerPosition {
    /// Convenience constructor.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Size of the browser viewport hosting the desktop.
pub struct Viewport {
    /// Viewport width.
    pub width: i32,
    /// Viewport height, taskbar included.
    pub height: i32,
}

impl Viewport {
    /// Returns the region windows may occupy: the viewport minus the bottom taskbar reservation.
    pub fn work_area(self, taskbar_height: i32) -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: self.width.max(0),
            h: (self.height - taskbar_height).max(0),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Edge or corner handle a resize starts from.
pub enum ResizeEdge {
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

impl ResizeEdge {
    /// Every handle a window surface carries, edges first.
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::East,
        Self::South,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Whether the handle moves the top edge.
    pub fn north(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    /// Whether the handle moves the bottom edge.
    pub fn south(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    /// Whether the handle moves the right edge.
    pub fn east(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    /// Whether the handle moves the left edge.
    pub fn west(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    /// Compass token used for handle class names (`n`, `se`, ...).
    pub fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    /// Parses a compass token produced by [`ResizeEdge::token`].
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|edge| edge.token() == token)
    }

    /// Cursor shown while this handle is being dragged.
    pub fn cursor(self) -> CursorStyle {
        match self {
            Self::North | Self::South => CursorStyle::NsResize,
            Self::East | Self::West => CursorStyle::EwResize,
            Self::NorthWest | Self::SouthEast => CursorStyle::NwseResize,
            Self::NorthEast | Self::SouthWest => CursorStyle::NeswResize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Document cursor requested by pointer interactions.
pub enum CursorStyle {
    /// Platform default cursor.
    #[default]
    Default,
    /// Window being dragged.
    Grabbing,
    /// Vertical resize.
    NsResize,
    /// Horizontal resize.
    EwResize,
    /// Diagonal resize, top-left/bottom-right.
    NwseResize,
    /// Diagonal resize, top-right/bottom-left.
    NeswResize,
}

impl CursorStyle {
    /// CSS `cursor` property value.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grabbing => "grabbing",
            Self::NsResize => "ns-resize",
            Self::EwResize => "ew-resize",
            Self::NwseResize => "nwse-resize",
            Self::NeswResize => "nesw-resize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Visual state of a window element, owned by its [`WindowState`].
pub struct WindowSurface {
    /// Current geometry.
    pub rect: WindowRect,
    /// Stacking order; larger is closer to the viewer.
    pub z_index: u32,
    /// Hidden by minimize.
    pub hidden: bool,
    /// Carries the active (focused) mark.
    pub active: bool,
    /// A geometry transition is running.
    pub transition: bool,
    /// Bumped by every transition start so a stale end can be told apart from the current one.
    pub transition_generation: u32,
    /// Launch reference loaded by the embedded content frame.
    pub content_src: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Manager-owned record of one open window.
pub struct WindowState {
    /// Window identity.
    pub id: WindowId,
    /// Title bar text (the app display name).
    pub title: String,
    /// Symbolic icon identifier.
    pub icon: String,
    /// Visual element state.
    pub surface: WindowSurface,
    /// Filling the work area.
    pub maximized: bool,
    /// Geometry to restore when leaving the maximized state.
    pub last_normal: WindowRect,
}

impl WindowState {
    /// Whether the window is shown and carries focus.
    pub fn is_active(&self) -> bool {
        self.surface.active && !self.surface.hidden
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects on the rendering surface returned by state transitions.
pub enum PresentationEffect {
    /// Change the document cursor.
    SetCursor(CursorStyle),
    /// A geometry transition started on `window_id`; the host clears it after `duration_ms`
    /// through [`crate::WindowManager::clear_transition`], passing `generation` back.
    StartTransition {
        /// Animated window.
        window_id: WindowId,
        /// Transition length.
        duration_ms: u32,
        /// Value of the surface's transition generation when this transition started.
        generation: u32,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_id_strips_all_whitespace() {
        assert_eq!(WindowId::from_app_name("File Explorer").as_str(), "FileExplorer");
        assert_eq!(WindowId::from_app_name(" VS\tCode ").as_str(), "VSCode");
        assert_eq!(
            WindowId::from_app_name("VS Code"),
            WindowId::from_app_name("VSCode")
        );
    }

    #[test]
    fn work_area_reserves_the_taskbar() {
        let viewport = Viewport {
            width: 1280,
            height: 720,
        };
        assert_eq!(
            viewport.work_area(48),
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 672
            }
        );
    }

    #[test]
    fn edge_tokens_and_cursors_cover_every_handle() {
        for edge in ResizeEdge::ALL {
            assert_eq!(ResizeEdge::from_token(edge.token()), Some(edge));
        }
        assert_eq!(ResizeEdge::from_token("x"), None);
        assert_eq!(ResizeEdge::North.cursor(), CursorStyle::NsResize);
        assert_eq!(ResizeEdge::West.cursor(), CursorStyle::EwResize);
        assert_eq!(ResizeEdge::SouthEast.cursor(), CursorStyle::NwseResize);
        assert_eq!(ResizeEdge::NorthEast.cursor(), CursorStyle::NeswResize);
        assert!(ResizeEdge::SouthWest.south() && ResizeEdge::SouthWest.west());
        assert!(!ResizeEdge::East.north() && !ResizeEdge::East.west());
    }
}
