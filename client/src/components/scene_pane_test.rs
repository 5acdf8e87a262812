use super::*;

#[test]
fn toggle_label_offers_the_opposite_state() {
    assert_eq!(camera_toggle_label(true), "Lock camera");
    assert_eq!(camera_toggle_label(false), "Unlock camera");
}

#[test]
fn toggle_title_differs_by_state() {
    assert_ne!(camera_toggle_title(true), camera_toggle_title(false));
}

#[test]
fn mount_id_is_a_plain_dom_id() {
    assert!(!SCENE_MOUNT_ID.is_empty());
    assert!(SCENE_MOUNT_ID.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
}
