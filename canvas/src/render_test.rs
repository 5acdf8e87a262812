use super::*;

#[test]
fn canvas_px_rounds_to_nearest() {
    assert_eq!(canvas_px(612.0), 612);
    assert_eq!(canvas_px(841.89), 842);
    assert_eq!(canvas_px(595.4), 595);
}

#[test]
fn canvas_px_rejects_degenerate_values() {
    assert_eq!(canvas_px(0.0), 0);
    assert_eq!(canvas_px(-10.0), 0);
    assert_eq!(canvas_px(f64::NAN), 0);
    assert_eq!(canvas_px(f64::INFINITY), 0);
}

#[test]
fn only_superseded_is_superseded() {
    assert!(RenderError::Superseded.is_superseded());
    assert!(!RenderError::NoDocument.is_superseded());
    assert!(!RenderError::Js("boom".into()).is_superseded());
}

#[test]
fn page_range_error_is_transparent() {
    let err = RenderError::from(PageRangeError { requested: 5, page_count: 2 });
    assert_eq!(err.to_string(), "page 5 is outside 1..=2");
}
