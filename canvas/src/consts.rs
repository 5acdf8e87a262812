//! Shared constants for the canvas crate.

// ── Rendering ───────────────────────────────────────────────────

/// Scale factor applied to the page viewport. Surface pixels equal PDF points.
pub const RENDER_SCALE: f64 = 1.0;

/// Radius of the click marker in surface pixels.
pub const MARKER_RADIUS_PX: f64 = 5.0;

/// Default marker fill color.
pub const DEFAULT_MARKER_FILL: &str = "red";

// ── Scene mapping ───────────────────────────────────────────────

/// Default real-world extent the document surface represents.
pub const DEFAULT_SOURCE_EXTENT: (f64, f64) = (100.0, 100.0);

/// Default extent of the 3D scene the surface is projected onto.
pub const DEFAULT_TARGET_EXTENT: (f64, f64) = (10.0, 10.0);

// ── 3D viewer ───────────────────────────────────────────────────

/// Camera orbit applied whenever the viewer is re-targeted.
pub const DEFAULT_CAMERA_ORBIT: &str = "0deg 75deg 105%";

/// Hotspot slot name for the selected-point marker.
pub const SELECTED_HOTSPOT_SLOT: &str = "hotspot-selected";

/// Normal of the `z = 0` document plane; hotspots face the +z side.
pub const HOTSPOT_NORMAL: (f64, f64, f64) = (0.0, 0.0, 1.0);

// ── Assets ──────────────────────────────────────────────────────

/// Default document URL, relative to the site root.
pub const DEFAULT_DOCUMENT_URL: &str = "/Grundriss Kellergeschoss_3.pdf";

/// Default PDF.js worker script URL.
pub const DEFAULT_WORKER_SRC: &str = "/pdf.worker.min.js";

/// Default GLB model URL.
pub const DEFAULT_MODEL_URL: &str = "/model.glb";
