//! Surface-to-scene coordinate mapping.
//!
//! The document surface is treated as a flat rectangle of `source_extent`
//! real-world units laid on the `z = 0` plane of the 3D scene, centered on the
//! scene origin and rescaled to `target_extent` scene units. The extents are
//! fixed configuration; they are not derived from the loaded document or model.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SOURCE_EXTENT, DEFAULT_TARGET_EXTENT};
use crate::geom::{Extent, ModelPoint, SurfacePoint};

/// Fixed extents used to rescale between the 2D surface and the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Real-world extent the document surface represents.
    #[serde(default = "default_source_extent")]
    pub source_extent: Extent,
    /// Extent of the 3D scene, in scene units.
    #[serde(default = "default_target_extent")]
    pub target_extent: Extent,
}

fn default_source_extent() -> Extent {
    Extent::new(DEFAULT_SOURCE_EXTENT.0, DEFAULT_SOURCE_EXTENT.1)
}

fn default_target_extent() -> Extent {
    Extent::new(DEFAULT_TARGET_EXTENT.0, DEFAULT_TARGET_EXTENT.1)
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { source_extent: default_source_extent(), target_extent: default_target_extent() }
    }
}

/// Map a surface point to scene coordinates.
///
/// `surface_pixels` is the surface's current pixel size. Screen `y` grows
/// downward while scene `y` grows upward, so the vertical axis is inverted.
/// The result always lies on `z = 0`.
#[must_use]
pub fn map_to_scene(point: SurfacePoint, surface_pixels: Extent, cfg: &ViewConfig) -> ModelPoint {
    let src = cfg.source_extent;
    let tgt = cfg.target_extent;

    let nx = (point.x / surface_pixels.width) * src.width - src.width / 2.0;
    let ny = -(point.y / surface_pixels.height) * src.height + src.height / 2.0;

    let mx = (nx / src.width) * tgt.width;
    let my = (ny / src.height) * tgt.height;

    ModelPoint::new(mx, my, 0.0)
}
