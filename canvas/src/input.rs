//! Input model: pointer samples, surface bounds, and click translation.
//!
//! The host reads `clientX`/`clientY` from the DOM event and the surface's
//! bounding rectangle, and hands both to [`translate`]. No bounds check is
//! applied; the listener is scoped to the surface element itself.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::SurfacePoint;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// A pointer event reduced to what the translator needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Viewport x in CSS pixels.
    pub client_x: f64,
    /// Viewport y in CSS pixels.
    pub client_y: f64,
    pub button: Button,
}

impl PointerSample {
    #[cfg(test)]
    pub(crate) fn primary(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y, button: Button::Primary }
    }
}

/// On-screen placement of the surface element, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Convert a pointer's viewport coordinates to surface-local coordinates.
#[must_use]
pub fn translate(pointer: PointerSample, bounds: SurfaceBounds) -> SurfacePoint {
    SurfacePoint::new(pointer.client_x - bounds.left, pointer.client_y - bounds.top)
}
