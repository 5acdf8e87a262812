//! PDF.js bindings and the document loader.
//!
//! PDF.js is expected as the global `pdfjsLib` (the `pdfjs-dist` browser
//! build). The namespace is looked up at call time so a missing library
//! surfaces as [`LoadError::LibraryMissing`] instead of a thrown
//! `ReferenceError`.

#[cfg(test)]
#[path = "pdf_test.rs"]
mod pdf_test;

use std::sync::OnceLock;

use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::CanvasRenderingContext2d;

use crate::doc::PageState;
use crate::geom::Extent;
use crate::js;
use crate::render::RenderError;
use crate::schedule::CancelToken;

#[wasm_bindgen]
extern "C" {
    type PdfJsLib;

    #[wasm_bindgen(method, catch, js_name = getDocument)]
    fn get_document(this: &PdfJsLib, src: &JsValue) -> Result<PdfLoadingTask, JsValue>;

    #[wasm_bindgen(method, getter = GlobalWorkerOptions)]
    fn global_worker_options(this: &PdfJsLib) -> JsValue;

    type PdfLoadingTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &PdfLoadingTask) -> Promise;

    #[wasm_bindgen(method)]
    fn destroy(this: &PdfLoadingTask) -> Promise;

    #[derive(Debug, Clone)]
    type PdfDocumentProxy;

    #[wasm_bindgen(method, getter = numPages)]
    fn num_pages(this: &PdfDocumentProxy) -> u32;

    #[wasm_bindgen(method, js_name = getPage)]
    fn get_page(this: &PdfDocumentProxy, page: u32) -> Promise;

    #[derive(Debug, Clone)]
    type PdfPageProxy;

    #[wasm_bindgen(method, catch, js_name = getViewport)]
    fn get_viewport(this: &PdfPageProxy, params: &JsValue) -> Result<PageViewport, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn render(this: &PdfPageProxy, params: &JsValue) -> Result<RenderTask, JsValue>;

    type PageViewport;

    #[wasm_bindgen(method, getter)]
    fn width(this: &PageViewport) -> f64;

    #[wasm_bindgen(method, getter)]
    fn height(this: &PageViewport) -> f64;

    type RenderTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &RenderTask) -> Promise;
}

/// Failure to open a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("PDF.js is not loaded (global `pdfjsLib` missing)")]
    LibraryMissing,
    #[error("failed to open {url}: {reason}")]
    Open { url: String, reason: String },
    #[error("{url} has no pages")]
    Empty { url: String },
    #[error("load superseded by a newer request")]
    Cancelled,
}

static WORKER_SRC: OnceLock<String> = OnceLock::new();

/// Claim the process-wide worker slot. `true` only for the first caller.
fn claim_worker_src(slot: &OnceLock<String>, src: &str) -> bool {
    if let Some(existing) = slot.get() {
        if existing != src {
            log::debug!("pdf worker already set to {existing}; ignoring {src}");
        }
        return false;
    }
    slot.set(src.to_owned()).is_ok()
}

/// Point PDF.js at its worker script.
///
/// Runs once per process. Later calls are a no-op and return `Ok(false)`,
/// whatever `src` they pass; the first value wins.
///
/// # Errors
///
/// Returns [`LoadError::LibraryMissing`] if PDF.js is not on the page.
pub fn init_worker(src: &str) -> Result<bool, LoadError> {
    if WORKER_SRC.get().is_some() {
        return Ok(claim_worker_src(&WORKER_SRC, src));
    }
    let lib = pdfjs_lib()?;
    let options = lib.global_worker_options();
    if options.is_undefined() {
        return Err(LoadError::LibraryMissing);
    }
    Reflect::set(&options, &JsValue::from_str("workerSrc"), &JsValue::from_str(src))
        .map_err(|e| LoadError::Open { url: src.to_owned(), reason: js::error_message(&e) })?;
    Ok(claim_worker_src(&WORKER_SRC, src))
}

fn pdfjs_lib() -> Result<PdfJsLib, LoadError> {
    let lib = Reflect::get(&js_sys::global(), &JsValue::from_str("pdfjsLib")).map_err(|_| LoadError::LibraryMissing)?;
    if lib.is_undefined() || lib.is_null() {
        return Err(LoadError::LibraryMissing);
    }
    Ok(lib.unchecked_into())
}

/// Open the document at `url`.
///
/// If `token` is cancelled while the fetch is in flight, the PDF.js loading
/// task is destroyed and [`LoadError::Cancelled`] is returned.
///
/// # Errors
///
/// See [`LoadError`].
pub async fn load_document(url: &str, token: &CancelToken) -> Result<PdfDocument, LoadError> {
    let lib = pdfjs_lib()?;
    let open_err = |e: &JsValue| LoadError::Open { url: url.to_owned(), reason: js::error_message(e) };

    let task = lib.get_document(&JsValue::from_str(url)).map_err(|e| open_err(&e))?;
    let result = JsFuture::from(task.promise()).await;
    if token.is_cancelled() {
        task.destroy();
        return Err(LoadError::Cancelled);
    }
    let proxy: PdfDocumentProxy = result.map_err(|e| open_err(&e))?.unchecked_into();

    let page_count = proxy.num_pages();
    if page_count == 0 {
        return Err(LoadError::Empty { url: url.to_owned() });
    }
    let mut pages = PageState::new();
    pages.reset(page_count);
    Ok(PdfDocument { proxy, pages })
}

/// An opened PDF document.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    proxy: PdfDocumentProxy,
    pages: PageState,
}

impl PdfDocument {
    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.pages.page_count()
    }

    /// Fetch page `n` (1-based).
    ///
    /// # Errors
    ///
    /// [`RenderError::PageRange`] outside `1..=page_count`, or
    /// [`RenderError::Js`] if PDF.js rejects.
    pub async fn page(&self, n: u32) -> Result<PdfPage, RenderError> {
        self.pages.check(n)?;
        let value = JsFuture::from(self.proxy.get_page(n)).await.map_err(|e| RenderError::from_js(&e))?;
        Ok(PdfPage { proxy: value.unchecked_into() })
    }
}

/// One page of an opened document.
#[derive(Debug, Clone)]
pub struct PdfPage {
    proxy: PdfPageProxy,
}

impl PdfPage {
    fn viewport(&self, scale: f64) -> Result<PageViewport, RenderError> {
        let params = js::object(&[("scale", &JsValue::from_f64(scale))]).map_err(|e| RenderError::from_js(&e))?;
        self.proxy.get_viewport(&params).map_err(|e| RenderError::from_js(&e))
    }

    /// Natural page size in pixels at `scale`.
    ///
    /// # Errors
    ///
    /// [`RenderError::Js`] if PDF.js rejects the viewport request.
    pub fn size(&self, scale: f64) -> Result<Extent, RenderError> {
        let viewport = self.viewport(scale)?;
        Ok(Extent::new(viewport.width(), viewport.height()))
    }

    /// Paint the page into `ctx` at `scale`.
    ///
    /// # Errors
    ///
    /// [`RenderError::Superseded`] if `token` was cancelled while painting;
    /// [`RenderError::Js`] if PDF.js fails.
    pub async fn paint(&self, ctx: &CanvasRenderingContext2d, scale: f64, token: &CancelToken) -> Result<(), RenderError> {
        let viewport = self.viewport(scale)?;
        let ctx_value: &JsValue = ctx.as_ref();
        let viewport_value: &JsValue = viewport.as_ref();
        let params = js::object(&[("canvasContext", ctx_value), ("viewport", viewport_value)])
            .map_err(|e| RenderError::from_js(&e))?;
        let task = self.proxy.render(&params).map_err(|e| RenderError::from_js(&e))?;
        let done = JsFuture::from(task.promise()).await;
        if token.is_cancelled() {
            return Err(RenderError::Superseded);
        }
        done.map_err(|e| RenderError::from_js(&e))?;
        Ok(())
    }
}
