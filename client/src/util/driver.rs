//! Carries out engine actions in the browser.
//!
//! ARCHITECTURE
//! ============
//! `EngineCore` transitions return `Action`s instead of touching the DOM.
//! This module performs them: page renders are spawned on the local executor
//! and handed back to `Engine::finish_render`, which presents only the newest
//! one; viewer actions run synchronously against the attached
//! `<model-viewer>`. Failures are logged and never propagate to the UI.

use std::cell::RefCell;
use std::rc::Rc;

use canvas::engine::{Action, Engine, RenderRequest};
use canvas::pdf;
use canvas::viewer::ViewerError;
use gloo_timers::callback::Timeout;
use leptos::task::spawn_local;

/// The engine as held by the document host. `None` until the canvas mounts.
pub type SharedEngine = Rc<RefCell<Option<Engine>>>;

/// Run a transition on the engine and perform the actions it returns.
pub fn apply(engine: &SharedEngine, transition: impl FnOnce(&mut Engine) -> Vec<Action>) {
    let actions = engine.borrow_mut().as_mut().map(transition).unwrap_or_default();
    dispatch(engine, actions);
}

pub fn dispatch(engine: &SharedEngine, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::Render(request) => schedule_render(engine, request),
            Action::SyncViewer(point) => {
                if let Some(e) = engine.borrow().as_ref() {
                    report("sync viewer", e.sync_viewer(point));
                }
            }
            Action::ClearViewerSelection => {
                if let Some(e) = engine.borrow().as_ref() {
                    report("clear viewer selection", e.clear_viewer_selection());
                }
            }
            Action::SetCameraControls(enabled) => {
                if let Some(e) = engine.borrow().as_ref() {
                    report("toggle camera controls", e.set_camera_controls(enabled));
                }
            }
        }
    }
}

fn report(what: &str, result: Result<bool, ViewerError>) {
    match result {
        Ok(true) => {}
        Ok(false) => log::debug!("{what}: no viewer attached"),
        Err(err) => log::warn!("{what} failed: {err}"),
    }
}

fn schedule_render(engine: &SharedEngine, request: RenderRequest) {
    let Some(job) = engine.borrow().as_ref().map(|e| e.render_job(request)) else {
        return;
    };
    let engine = Rc::clone(engine);
    spawn_local(async move {
        let outcome = job.run().await;
        apply(&engine, |e| e.finish_render(outcome));
    });
}

/// Configure the PDF.js worker (first call wins) and load the document.
///
/// A newer call supersedes an in-flight load; its result is dropped.
pub fn start_load(engine: &SharedEngine) {
    let job = engine.borrow_mut().as_mut().map(|e| {
        match pdf::init_worker(&e.core.config().worker_src) {
            Ok(true) => log::debug!("pdf.js worker set to {}", e.core.config().worker_src),
            Ok(false) => {}
            Err(err) => log::warn!("{err}"),
        }
        e.begin_load()
    });
    let Some(job) = job else {
        return;
    };
    let engine = Rc::clone(engine);
    spawn_local(async move {
        let (ticket, result) = job.run().await;
        apply(&engine, |e| e.attach_document(ticket, result));
    });
}

/// Move the viewer element into the scene pane's mount point.
///
/// Returns `false` if either side is not in the DOM yet.
pub fn mount_scene(engine: &SharedEngine, mount_id: &str) -> bool {
    let Some(mount) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(mount_id)) else {
        return false;
    };
    let guard = engine.borrow();
    let Some(viewer) = guard.as_ref().and_then(Engine::viewer) else {
        return false;
    };
    let node: &web_sys::Node = viewer.element();
    if mount.contains(Some(node)) {
        return true;
    }
    match mount.append_child(viewer.element()) {
        Ok(_) => true,
        Err(err) => {
            log::warn!("could not mount model viewer: {err:?}");
            false
        }
    }
}

/// [`mount_scene`] now, and once more on the next tick in case the scene pane
/// mounts after the document host.
pub fn mount_scene_soon(engine: &SharedEngine, mount_id: &'static str) {
    if mount_scene(engine, mount_id) {
        return;
    }
    let engine = Rc::clone(engine);
    Timeout::new(0, move || {
        if !mount_scene(&engine, mount_id) {
            log::warn!("scene mount #{mount_id} not found");
        }
    })
    .forget();
}
