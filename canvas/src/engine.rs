//! View engine: page state, click selection, render ordering and viewer sync.
//!
//! [`EngineCore`] holds every state transition and is free of browser calls so
//! it can be tested natively. It never performs I/O; each transition returns
//! the [`Action`]s the host must carry out and notifies registered observers
//! with a fresh [`ViewSnapshot`]. [`Engine`] wraps the core together with the
//! visible canvas, the opened document and the 3D viewer handle, and provides
//! the asynchronous load/render jobs the host drives.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use web_sys::HtmlCanvasElement;

use crate::config::{MarkerPolicy, ViewerConfig};
use crate::doc::{PageRangeError, PageState};
use crate::geom::{Extent, ModelPoint, SurfacePoint};
use crate::input::{Button, PointerSample, SurfaceBounds, translate};
use crate::mapping::map_to_scene;
use crate::pdf::{LoadError, PdfDocument, load_document};
use crate::render::{PageRaster, RenderError, present, rasterize};
use crate::schedule::{Scheduler, Ticket};
use crate::viewer::{self, ModelViewer, ViewerError};

/// A click on the surface and its position in the 3D scene, always stored together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub surface: SurfacePoint,
    pub model: ModelPoint,
}

/// Progress of the document load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// A request to paint `page` (with an optional marker) onto the surface.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub ticket: Ticket,
    pub page: u32,
    pub marker: Option<SurfacePoint>,
}

/// Side effects returned from state transitions for the host to perform.
#[derive(Debug, Clone)]
pub enum Action {
    Render(RenderRequest),
    SyncViewer(ModelPoint),
    ClearViewerSelection,
    SetCameraControls(bool),
}

/// Read-only copy of the engine state, published to observers.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub page: u32,
    pub page_count: u32,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub selection: Option<Selection>,
    pub camera_interaction: bool,
    pub load_status: LoadStatus,
    /// Pixel size of the last presented page; `None` until the first render lands.
    pub surface_size: Option<Extent>,
    pub rendering: bool,
}

/// Callback invoked after every state transition.
pub type Observer = Box<dyn FnMut(&ViewSnapshot)>;

/// Engine state and transitions that don't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    config: ViewerConfig,
    pages: PageState,
    selection: Option<Selection>,
    surface_size: Option<Extent>,
    camera_interaction: bool,
    load_status: LoadStatus,
    loads: Scheduler,
    renders: Scheduler,
    observers: Vec<Observer>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            camera_interaction: config.camera_interaction,
            config,
            pages: PageState::new(),
            selection: None,
            surface_size: None,
            load_status: LoadStatus::Idle,
            loads: Scheduler::new(),
            renders: Scheduler::new(),
            observers: Vec::new(),
        }
    }

    // --- Observers ---

    /// Register an observer. It is called once immediately with the current
    /// snapshot, then after every state transition.
    pub fn subscribe(&mut self, mut observer: Observer) {
        observer(&self.snapshot());
        self.observers.push(observer);
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }
    }

    // --- Document loading ---

    /// Start (or restart) loading the document.
    ///
    /// Supersedes any in-flight load and render, and forgets the previous
    /// document and selection.
    pub fn begin_load(&mut self) -> Ticket {
        let ticket = self.loads.begin();
        self.renders.cancel_all();
        self.pages.clear();
        self.selection = None;
        self.surface_size = None;
        self.load_status = LoadStatus::Loading;
        self.notify();
        ticket
    }

    /// Whether `ticket` is the newest load request.
    #[must_use]
    pub fn is_load_current(&self, ticket: &Ticket) -> bool {
        self.loads.is_current(ticket)
    }

    /// Complete a load with the document's page count or the failure.
    ///
    /// Results for superseded loads are dropped. Failures are logged and
    /// recorded in [`LoadStatus::Failed`]; they are never returned to the caller.
    pub fn finish_load(&mut self, ticket: &Ticket, result: Result<u32, LoadError>) -> Vec<Action> {
        if !self.loads.commit(ticket) {
            log::debug!("dropping result of superseded document load #{}", ticket.generation());
            return Vec::new();
        }
        let mut actions = Vec::new();
        match result {
            Ok(0) => {
                log::error!("document loaded with no pages: {}", self.config.document_url);
                self.load_status = LoadStatus::Failed(
                    LoadError::Empty { url: self.config.document_url.clone() }.to_string(),
                );
            }
            Ok(page_count) => {
                log::info!("document loaded: {} ({page_count} pages)", self.config.document_url);
                self.pages.reset(page_count);
                self.load_status = LoadStatus::Ready;
                actions.push(Action::Render(self.render_current()));
            }
            Err(LoadError::Cancelled) => {
                log::debug!("document load #{} cancelled", ticket.generation());
                self.load_status = LoadStatus::Idle;
            }
            Err(err) => {
                log::error!("error loading document: {err}");
                self.load_status = LoadStatus::Failed(err.to_string());
            }
        }
        self.notify();
        actions
    }

    // --- Navigation ---

    /// Advance one page; no-op at the last page.
    pub fn next_page(&mut self) -> Vec<Action> {
        let changed = self.pages.next();
        self.after_navigation(changed)
    }

    /// Go back one page; no-op at the first page.
    pub fn prev_page(&mut self) -> Vec<Action> {
        let changed = self.pages.prev();
        self.after_navigation(changed)
    }

    /// Jump to `page`.
    ///
    /// # Errors
    ///
    /// Returns [`PageRangeError`] for a page outside the document; the state is unchanged.
    pub fn go_to_page(&mut self, page: u32) -> Result<Vec<Action>, PageRangeError> {
        let changed = self.pages.go_to(page)?;
        Ok(self.after_navigation(changed))
    }

    fn after_navigation(&mut self, changed: bool) -> Vec<Action> {
        if !changed {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if self.config.marker_policy == MarkerPolicy::ClearOnNavigate && self.selection.take().is_some() {
            actions.push(Action::ClearViewerSelection);
        }
        actions.push(Action::Render(self.render_current()));
        self.notify();
        actions
    }

    // --- Pointer input ---

    /// Handle a click on the surface.
    ///
    /// Translates the pointer into surface coordinates, stores the new
    /// selection, and returns a marker render followed by a viewer sync.
    /// Ignored for non-primary buttons and until a page has been presented.
    pub fn click(&mut self, pointer: PointerSample, bounds: SurfaceBounds) -> Vec<Action> {
        if pointer.button != Button::Primary || !self.pages.has_document() {
            return Vec::new();
        }
        let Some(surface_pixels) = self.surface_size.filter(Extent::is_usable) else {
            log::debug!("click ignored: no page presented yet");
            return Vec::new();
        };

        let surface = translate(pointer, bounds);
        let model = map_to_scene(surface, surface_pixels, &self.config.view);
        log::debug!("click at surface ({}, {}) -> scene ({}, {}, {})", surface.x, surface.y, model.x, model.y, model.z);
        self.selection = Some(Selection { surface, model });

        let actions = vec![Action::Render(self.render_current()), Action::SyncViewer(model)];
        self.notify();
        actions
    }

    // --- Camera interaction ---

    /// Enable or disable drag/orbit input on the 3D viewer. Does not affect mapping.
    pub fn set_camera_interaction(&mut self, enabled: bool) -> Vec<Action> {
        if self.camera_interaction == enabled {
            return Vec::new();
        }
        self.camera_interaction = enabled;
        self.notify();
        vec![Action::SetCameraControls(enabled)]
    }

    pub fn toggle_camera_interaction(&mut self) -> Vec<Action> {
        self.set_camera_interaction(!self.camera_interaction)
    }

    // --- Rendering ---

    fn render_current(&mut self) -> RenderRequest {
        RenderRequest {
            ticket: self.renders.begin(),
            page: self.pages.current(),
            marker: self.selection.map(|s| s.surface),
        }
    }

    /// Whether `ticket` is still the newest render request.
    #[must_use]
    pub fn is_render_current(&self, ticket: &Ticket) -> bool {
        self.renders.is_current(ticket)
    }

    /// Record that the render for `ticket` reached the surface at `size`.
    ///
    /// Returns `None` for a stale ticket; the caller must not present it.
    /// When the surface size changes under an existing selection, the scene
    /// point is recomputed against the new size and a viewer sync is returned.
    pub fn commit_render(&mut self, ticket: &Ticket, size: Extent) -> Option<Vec<Action>> {
        if !self.renders.commit(ticket) {
            log::debug!("discarding stale render #{}", ticket.generation());
            return None;
        }
        let previous = self.surface_size.replace(size);
        let mut actions = Vec::new();
        if previous != Some(size) && size.is_usable() {
            if let Some(selection) = self.selection.as_mut() {
                selection.model = map_to_scene(selection.surface, size, &self.config.view);
                actions.push(Action::SyncViewer(selection.model));
            }
        }
        self.notify();
        Some(actions)
    }

    /// Record a failed render. Superseded renders are dropped quietly.
    pub fn fail_render(&mut self, ticket: &Ticket, err: &RenderError) {
        if err.is_superseded() || !self.renders.is_current(ticket) {
            log::debug!("render #{} superseded", ticket.generation());
            return;
        }
        log::warn!("render of page {} failed: {err}", self.pages.current());
        self.renders.cancel_all();
        self.notify();
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    #[must_use]
    pub fn pages(&self) -> PageState {
        self.pages
    }

    #[must_use]
    pub fn camera_interaction(&self) -> bool {
        self.camera_interaction
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            page: self.pages.current(),
            page_count: self.pages.page_count(),
            can_go_back: self.pages.can_go_back(),
            can_go_forward: self.pages.can_go_forward(),
            selection: self.selection,
            camera_interaction: self.camera_interaction,
            load_status: self.load_status.clone(),
            surface_size: self.surface_size,
            rendering: self.renders.in_flight(),
        }
    }
}

/// A pending document load. Owns everything it needs so no engine borrow is
/// held across the await.
pub struct LoadJob {
    ticket: Ticket,
    url: String,
}

impl LoadJob {
    pub async fn run(self) -> (Ticket, Result<PdfDocument, LoadError>) {
        let result = load_document(&self.url, self.ticket.token()).await;
        (self.ticket, result)
    }
}

/// A pending page render.
pub struct RenderJob {
    request: RenderRequest,
    document: Option<PdfDocument>,
    cached: Option<PageRaster>,
}

/// The result of a [`RenderJob`], handed back to [`Engine::finish_render`].
pub struct RenderOutcome {
    request: RenderRequest,
    result: Result<PageRaster, RenderError>,
}

impl RenderJob {
    pub async fn run(self) -> RenderOutcome {
        let result = match (self.cached, self.document) {
            (Some(raster), _) => Ok(raster),
            (None, Some(document)) => rasterize(&document, self.request.page, self.request.ticket.token()).await,
            (None, None) => Err(RenderError::NoDocument),
        };
        RenderOutcome { request: self.request, result }
    }
}

/// The full view engine. Wraps `EngineCore` and owns the browser-side handles.
pub struct Engine {
    surface: HtmlCanvasElement,
    viewer: Option<ModelViewer>,
    document: Option<PdfDocument>,
    raster: Option<PageRaster>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(surface: HtmlCanvasElement, config: ViewerConfig) -> Self {
        Self { surface, viewer: None, document: None, raster: None, core: EngineCore::new(config) }
    }

    // --- Viewer ---

    /// Attach the 3D viewer and bring its camera controls in line with the core.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError`] if the controls attribute cannot be written.
    pub fn attach_viewer(&mut self, viewer: ModelViewer) -> Result<(), ViewerError> {
        self.viewer = Some(viewer);
        viewer::set_camera_controls(self.viewer.as_ref(), self.core.camera_interaction())?;
        if let Some(selection) = self.core.selection() {
            self.sync_viewer(selection.model)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn viewer(&self) -> Option<&ModelViewer> {
        self.viewer.as_ref()
    }

    /// # Errors
    ///
    /// Propagates the failing viewer call.
    pub fn sync_viewer(&self, point: ModelPoint) -> Result<bool, ViewerError> {
        viewer::sync(point, self.viewer.as_ref(), &self.core.config().camera_orbit)
    }

    /// # Errors
    ///
    /// Propagates the failing viewer call.
    pub fn clear_viewer_selection(&self) -> Result<bool, ViewerError> {
        viewer::clear(self.viewer.as_ref())
    }

    /// # Errors
    ///
    /// Propagates the failing viewer call.
    pub fn set_camera_controls(&self, enabled: bool) -> Result<bool, ViewerError> {
        viewer::set_camera_controls(self.viewer.as_ref(), enabled)
    }

    // --- Document ---

    /// Start loading the configured document.
    pub fn begin_load(&mut self) -> LoadJob {
        let ticket = self.core.begin_load();
        self.document = None;
        self.raster = None;
        LoadJob { ticket, url: self.core.config().document_url.clone() }
    }

    /// Attach the result of a [`LoadJob`]. Stale results are dropped.
    pub fn attach_document(&mut self, ticket: Ticket, result: Result<PdfDocument, LoadError>) -> Vec<Action> {
        let page_count = match result {
            Ok(document) => {
                let count = document.page_count();
                if self.core.is_load_current(&ticket) {
                    self.document = Some(document);
                }
                Ok(count)
            }
            Err(err) => Err(err),
        };
        self.core.finish_load(&ticket, page_count)
    }

    // --- Render ---

    /// Package a render request with the document and any reusable raster.
    #[must_use]
    pub fn render_job(&self, request: RenderRequest) -> RenderJob {
        let cached = self.raster.clone().filter(|raster| raster.page() == request.page);
        RenderJob { request, document: self.document.clone(), cached }
    }

    /// Present a finished render if it is still the newest request.
    ///
    /// Stale outcomes are dropped. Failures are logged by the core and leave
    /// the surface as it was. Returns the follow-up actions of the commit.
    pub fn finish_render(&mut self, outcome: RenderOutcome) -> Vec<Action> {
        let RenderOutcome { request, result } = outcome;
        let raster = match result {
            Ok(raster) => raster,
            Err(err) => {
                self.core.fail_render(&request.ticket, &err);
                return Vec::new();
            }
        };
        if !self.core.is_render_current(&request.ticket) {
            log::debug!("discarding stale render of page {}", request.page);
            return Vec::new();
        }
        if let Err(err) = present(&self.surface, &raster, request.marker, &self.core.config().marker) {
            self.core.fail_render(&request.ticket, &err);
            return Vec::new();
        }
        let actions = self.core.commit_render(&request.ticket, raster.size()).unwrap_or_default();
        self.raster = Some(raster);
        actions
    }

    // --- Input events ---

    /// Current on-screen bounds of the surface element.
    #[must_use]
    pub fn surface_bounds(&self) -> SurfaceBounds {
        let rect = self.surface.get_bounding_client_rect();
        SurfaceBounds { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
    }

    pub fn on_click(&mut self, client_x: f64, client_y: f64, button: i16) -> Vec<Action> {
        let pointer = PointerSample { client_x, client_y, button: Button::from_dom(button) };
        let bounds = self.surface_bounds();
        self.core.click(pointer, bounds)
    }

    // --- Delegated transitions ---

    pub fn next_page(&mut self) -> Vec<Action> {
        self.core.next_page()
    }

    pub fn prev_page(&mut self) -> Vec<Action> {
        self.core.prev_page()
    }

    /// # Errors
    ///
    /// Returns [`PageRangeError`] for a page outside the document.
    pub fn go_to_page(&mut self, page: u32) -> Result<Vec<Action>, PageRangeError> {
        self.core.go_to_page(page)
    }

    pub fn toggle_camera_interaction(&mut self) -> Vec<Action> {
        self.core.toggle_camera_interaction()
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.core.subscribe(observer);
    }
}
