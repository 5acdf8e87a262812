//! Viewer configuration embedded in the host page.
//!
//! The page may carry a `<script type="application/json" id="bimlinker-config">`
//! block overriding any subset of `ViewerConfig`. A missing block means
//! defaults; an invalid one is logged and also falls back to defaults so the
//! view still mounts.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use canvas::config::ViewerConfig;

pub const CONFIG_ELEMENT_ID: &str = "bimlinker-config";

/// Resolve the config from the embedded block's text, if any.
pub fn parse_embedded(raw: Option<&str>) -> ViewerConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return ViewerConfig::default();
    };
    match ViewerConfig::from_json(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            leptos::logging::warn!("{err}; falling back to defaults");
            ViewerConfig::default()
        }
    }
}

/// Read the embedded config from the current document.
pub fn load() -> ViewerConfig {
    #[cfg(feature = "csr")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse_embedded(raw.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        ViewerConfig::default()
    }
}
