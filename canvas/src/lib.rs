//! PDF page surface and 2D-to-3D selection engine for BimLinker.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It loads a
//! PDF through the page's PDF.js global, rasterizes pages onto a canvas,
//! turns clicks on that canvas into points in a 3D scene, and pushes those
//! points into a `<model-viewer>` element. The UI layer only wires DOM events
//! to the engine and carries out the [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Page bounds and navigation state |
//! | [`geom`] | Surface/scene points and extents |
//! | [`input`] | Pointer samples and click-to-surface translation |
//! | [`mapping`] | Surface-to-scene coordinate mapping |
//! | [`schedule`] | Generation counters and cancel tokens for loads and renders |
//! | [`pdf`] | PDF.js bindings and document loading |
//! | [`render`] | Offscreen page rasterization and marker overlay |
//! | [`viewer`] | `<model-viewer>` handle and camera/hotspot sync |
//! | [`config`] | Viewer configuration and its embedded JSON form |
//! | [`consts`] | Shared defaults (extents, marker size, asset paths) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod input;
mod js;
pub mod mapping;
pub mod pdf;
pub mod render;
pub mod schedule;
pub mod viewer;
