//! Two-pane layout: document on the left, 3D model on the right.

use leptos::prelude::*;

use crate::components::document_host::DocumentHost;
use crate::components::page_controls::PageControls;
use crate::components::scene_pane::ScenePane;
use crate::components::status_bar::StatusBar;

#[component]
pub fn ViewShell() -> impl IntoView {
    view! {
        <div class="view-shell">
            <header class="view-shell__header">
                <h1>"BimLinker - PDF Viewer"</h1>
            </header>
            <main class="view-shell__panes">
                <section class="view-shell__pane view-shell__pane--document">
                    <PageControls/>
                    <DocumentHost/>
                </section>
                <section class="view-shell__pane view-shell__pane--scene">
                    <ScenePane/>
                </section>
            </main>
            <StatusBar/>
        </div>
    }
}
