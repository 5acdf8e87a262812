//! Rendering: rasterizes document pages and presents them on the visible surface.
//!
//! Rendering is split in two phases. [`rasterize`] is asynchronous and paints a
//! page into a private offscreen canvas; it never touches the visible surface.
//! [`present`] is synchronous and copies a finished raster plus the click
//! marker onto the visible surface. The engine only calls `present` for the
//! newest render request, so an older render that finishes late can never
//! overwrite a newer one.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::MarkerStyle;
use crate::consts::RENDER_SCALE;
use crate::doc::PageRangeError;
use crate::geom::{Extent, SurfacePoint};
use crate::js;
use crate::pdf::PdfDocument;
use crate::schedule::CancelToken;

/// Failure while rendering a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    PageRange(#[from] PageRangeError),
    #[error("render superseded by a newer request")]
    Superseded,
    #[error("no document attached")]
    NoDocument,
    #[error("2d canvas context unavailable")]
    NoContext,
    #[error("render failed: {0}")]
    Js(String),
}

impl RenderError {
    pub(crate) fn from_js(value: &JsValue) -> Self {
        Self::Js(js::error_message(value))
    }

    /// Superseded renders are expected under rapid input and are not reported.
    #[must_use]
    pub fn is_superseded(&self) -> bool {
        matches!(self, Self::Superseded)
    }
}

/// A fully painted page held in an offscreen canvas.
#[derive(Debug, Clone)]
pub struct PageRaster {
    page: u32,
    size: Extent,
    canvas: HtmlCanvasElement,
}

impl PageRaster {
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Pixel size of the raster, which becomes the surface size on present.
    #[must_use]
    pub fn size(&self) -> Extent {
        self.size
    }
}

/// Round a pixel dimension to a canvas size.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn canvas_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 { value.round().min(f64::from(u32::MAX)) as u32 } else { 0 }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
    let Some(ctx) = canvas.get_context("2d").map_err(|e| RenderError::from_js(&e))? else {
        return Err(RenderError::NoContext);
    };
    ctx.dyn_into::<CanvasRenderingContext2d>().map_err(|_| RenderError::NoContext)
}

fn offscreen_canvas(size: Extent) -> Result<HtmlCanvasElement, RenderError> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Err(RenderError::NoContext);
    };
    let canvas = document
        .create_element("canvas")
        .map_err(|e| RenderError::from_js(&e))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::NoContext)?;
    canvas.set_width(canvas_px(size.width));
    canvas.set_height(canvas_px(size.height));
    Ok(canvas)
}

/// Paint `page` of `document` into a new offscreen raster at scale 1.0.
///
/// Checks `token` after each suspension point and bails out with
/// [`RenderError::Superseded`] once a newer request has been issued.
///
/// # Errors
///
/// See [`RenderError`].
pub async fn rasterize(document: &PdfDocument, page: u32, token: &CancelToken) -> Result<PageRaster, RenderError> {
    let pdf_page = document.page(page).await?;
    if token.is_cancelled() {
        return Err(RenderError::Superseded);
    }
    let size = pdf_page.size(RENDER_SCALE)?;
    let canvas = offscreen_canvas(size)?;
    let ctx = context_2d(&canvas)?;
    pdf_page.paint(&ctx, RENDER_SCALE, token).await?;
    Ok(PageRaster { page, size, canvas })
}

/// Resize `surface` to the raster, clear it, copy the page, then draw the marker.
///
/// # Errors
///
/// Returns [`RenderError`] if any `Canvas2D` call fails.
pub fn present(
    surface: &HtmlCanvasElement,
    raster: &PageRaster,
    marker: Option<SurfacePoint>,
    style: &MarkerStyle,
) -> Result<(), RenderError> {
    surface.set_width(canvas_px(raster.size.width));
    surface.set_height(canvas_px(raster.size.height));
    let ctx = context_2d(surface)?;
    ctx.clear_rect(0.0, 0.0, raster.size.width, raster.size.height);
    ctx.draw_image_with_html_canvas_element(&raster.canvas, 0.0, 0.0)
        .map_err(|e| RenderError::from_js(&e))?;
    if let Some(at) = marker {
        draw_marker(&ctx, at, style).map_err(|e| RenderError::from_js(&e))?;
    }
    Ok(())
}

fn draw_marker(ctx: &CanvasRenderingContext2d, at: SurfacePoint, style: &MarkerStyle) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(at.x, at.y, style.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&style.fill);
    ctx.fill();
    Ok(())
}
