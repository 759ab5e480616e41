//! Integration tests for weft-types.

use weft_types::{LinkId, PointId, ProxyHandle, WeftError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn point_id_index() {
    let id = PointId(42);
    assert_eq!(id.index(), 42);
}

#[test]
fn link_id_index() {
    let id = LinkId::from(7);
    assert_eq!(id.index(), 7);
}

#[test]
fn ids_are_serializable() {
    let id = PointId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PointId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);

    let handle = ProxyHandle(9);
    let json = serde_json::to_string(&handle).unwrap();
    assert_eq!(json, "9");
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WeftError::InvalidConfig("spacing must be positive".into());
    assert!(err.to_string().contains("spacing must be positive"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "scene.toml");
    let err: WeftError = io.into();
    assert!(matches!(err, WeftError::Io(_)));
    assert!(err.to_string().contains("scene.toml"));
}
