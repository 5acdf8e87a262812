//! 3D view synchronization.
//!
//! [`SceneViewer`] is the seam between the engine and the external 3D viewer.
//! [`ModelViewer`] implements it over a `<model-viewer>` element owned by the
//! caller; the element handle is passed in explicitly, never looked up by a
//! global DOM query. Every operation accepts `Option<&V>` so a viewer that is
//! not attached yet is a no-op rather than an error.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::ViewerConfig;
use crate::consts::{HOTSPOT_NORMAL, SELECTED_HOTSPOT_SLOT};
use crate::geom::ModelPoint;
use crate::js;

/// A call on the external viewer failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("viewer call `{call}` failed: {reason}")]
pub struct ViewerError {
    pub call: &'static str,
    pub reason: String,
}

impl ViewerError {
    fn js(call: &'static str, value: &JsValue) -> Self {
        Self { call, reason: js::error_message(value) }
    }
}

/// Camera and hotspot directives understood by the external 3D viewer.
pub trait SceneViewer {
    fn set_camera_target(&self, target: ModelPoint) -> Result<(), ViewerError>;
    fn set_camera_orbit(&self, orbit: &str) -> Result<(), ViewerError>;
    /// Ask the viewer to recompute framing after a target change.
    fn reframe(&self) -> Result<(), ViewerError>;
    fn place_hotspot(&self, position: ModelPoint, normal: ModelPoint) -> Result<(), ViewerError>;
    fn hide_hotspot(&self) -> Result<(), ViewerError>;
    /// Enable or disable drag/orbit input.
    fn set_camera_controls(&self, enabled: bool) -> Result<(), ViewerError>;
}

/// Normal of the document plane (`z = 0`) in scene space.
#[must_use]
pub fn hotspot_normal() -> ModelPoint {
    ModelPoint::new(HOTSPOT_NORMAL.0, HOTSPOT_NORMAL.1, HOTSPOT_NORMAL.2)
}

/// Point the camera at `point`, apply the orbit preset, reframe, and move the
/// selected-point hotspot there. Returns `Ok(false)` without a viewer.
///
/// # Errors
///
/// Propagates the first failing viewer call.
pub fn sync<V: SceneViewer>(point: ModelPoint, viewer: Option<&V>, orbit: &str) -> Result<bool, ViewerError> {
    let Some(viewer) = viewer else {
        return Ok(false);
    };
    viewer.set_camera_target(point)?;
    viewer.set_camera_orbit(orbit)?;
    viewer.reframe()?;
    viewer.place_hotspot(point, hotspot_normal())?;
    Ok(true)
}

/// Hide the selected-point hotspot. Returns `Ok(false)` without a viewer.
///
/// # Errors
///
/// Propagates the viewer failure.
pub fn clear<V: SceneViewer>(viewer: Option<&V>) -> Result<bool, ViewerError> {
    let Some(viewer) = viewer else {
        return Ok(false);
    };
    viewer.hide_hotspot()?;
    Ok(true)
}

/// Toggle drag/orbit input. Returns `Ok(false)` without a viewer.
///
/// # Errors
///
/// Propagates the viewer failure.
pub fn set_camera_controls<V: SceneViewer>(viewer: Option<&V>, enabled: bool) -> Result<bool, ViewerError> {
    let Some(viewer) = viewer else {
        return Ok(false);
    };
    viewer.set_camera_controls(enabled)?;
    Ok(true)
}

/// `camera-target` / `data-position` value, in meters.
#[must_use]
pub fn format_position(p: ModelPoint) -> String {
    format!("{}m {}m {}m", p.x, p.y, p.z)
}

/// `data-normal` value (unitless direction).
#[must_use]
pub fn format_direction(p: ModelPoint) -> String {
    format!("{} {} {}", p.x, p.y, p.z)
}

/// A `<model-viewer>` element plus its selected-point hotspot child.
#[derive(Debug, Clone)]
pub struct ModelViewer {
    element: Element,
    hotspot: Element,
}

impl ModelViewer {
    /// Create a detached `<model-viewer>` configured from `cfg`.
    ///
    /// The caller mounts [`ModelViewer::element`] wherever the 3D pane lives.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if element creation or attribute writes fail.
    pub fn create(document: &Document, cfg: &ViewerConfig) -> Result<Self, ViewerError> {
        let element = document.create_element("model-viewer").map_err(|e| ViewerError::js("createElement", &e))?;
        set_attr(&element, "src", &cfg.model_url)?;
        set_attr(&element, "alt", "Building model")?;
        set_attr(&element, "camera-orbit", &cfg.camera_orbit)?;
        set_attr(&element, "ar", "")?;
        set_attr(&element, "shadow-intensity", "1")?;
        if cfg.camera_interaction {
            set_attr(&element, "camera-controls", "")?;
        }

        let hotspot = document.create_element("div").map_err(|e| ViewerError::js("createElement", &e))?;
        set_attr(&hotspot, "slot", SELECTED_HOTSPOT_SLOT)?;
        set_attr(&hotspot, "class", "hotspot hotspot-selected")?;
        set_attr(&hotspot, "data-position", &format_position(ModelPoint::new(0.0, 0.0, 0.0)))?;
        set_attr(&hotspot, "data-normal", &format_direction(hotspot_normal()))?;
        set_attr(&hotspot, "hidden", "")?;
        element.append_child(&hotspot).map_err(|e| ViewerError::js("appendChild", &e))?;

        Ok(Self { element, hotspot })
    }

    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }
}

fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), ViewerError> {
    el.set_attribute(name, value).map_err(|e| ViewerError::js("setAttribute", &e))
}

impl SceneViewer for ModelViewer {
    fn set_camera_target(&self, target: ModelPoint) -> Result<(), ViewerError> {
        set_attr(&self.element, "camera-target", &format_position(target))
    }

    fn set_camera_orbit(&self, orbit: &str) -> Result<(), ViewerError> {
        set_attr(&self.element, "camera-orbit", orbit)
    }

    fn reframe(&self) -> Result<(), ViewerError> {
        js::call_method(self.element.as_ref(), "updateFraming", &Array::new())
            .map_err(|e| ViewerError::js("updateFraming", &e))?;
        Ok(())
    }

    fn place_hotspot(&self, position: ModelPoint, normal: ModelPoint) -> Result<(), ViewerError> {
        let position_attr = format_position(position);
        let normal_attr = format_direction(normal);
        set_attr(&self.hotspot, "data-position", &position_attr)?;
        set_attr(&self.hotspot, "data-normal", &normal_attr)?;
        self.hotspot
            .remove_attribute("hidden")
            .map_err(|e| ViewerError::js("removeAttribute", &e))?;

        // Upgraded viewers cache hotspot placement; push the update explicitly.
        let update = js::object(&[
            ("name", &JsValue::from_str(SELECTED_HOTSPOT_SLOT)),
            ("position", &JsValue::from_str(&position_attr)),
            ("normal", &JsValue::from_str(&normal_attr)),
        ])
        .map_err(|e| ViewerError::js("updateHotspot", &e))?;
        js::call_method(self.element.as_ref(), "updateHotspot", &Array::of1(&update))
            .map_err(|e| ViewerError::js("updateHotspot", &e))?;
        Ok(())
    }

    fn hide_hotspot(&self) -> Result<(), ViewerError> {
        set_attr(&self.hotspot, "hidden", "")
    }

    fn set_camera_controls(&self, enabled: bool) -> Result<(), ViewerError> {
        if enabled {
            set_attr(&self.element, "camera-controls", "")
        } else {
            self.element
                .remove_attribute("camera-controls")
                .map_err(|e| ViewerError::js("removeAttribute", &e))
        }
    }
}
