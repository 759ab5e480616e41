//! Integration tests for weft-contact.

use approx::assert_relative_eq;
use weft_contact::{CapsuleCollider, Collider, ContactQuery, SphereCollider};
use weft_math::Vec3;

// ─── Sphere Tests ─────────────────────────────────────────────

#[test]
fn sphere_hit_along_x() {
    let sphere = SphereCollider::new(Vec3::ZERO, 2.0);
    let hit = sphere.query(Vec3::new(1.5, 0.0, 0.0), 0.25).unwrap();

    assert_relative_eq!(hit.normal.distance(Vec3::X), 0.0, epsilon = 1e-6);
    assert_relative_eq!(hit.contact_point.x, 2.25, epsilon = 1e-6);
    assert_eq!(hit.contact_point.y, 0.0);
    assert_eq!(hit.reflect_bounce, 0.75);
    assert_eq!(hit.normal_bounce, 0.75);
}

#[test]
fn sphere_miss_outside() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    assert!(sphere.query(Vec3::new(0.0, 2.0, 0.0), 0.5).is_none());
}

#[test]
fn sphere_boundary_is_not_a_hit() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0);
    assert!(sphere.query(Vec3::new(1.5, 0.0, 0.0), 0.5).is_none());
}

#[test]
fn sphere_center_pushes_up() {
    let sphere = SphereCollider::new(Vec3::new(1.0, 1.0, 1.0), 1.0);
    let hit = sphere.query(Vec3::new(1.0, 1.0, 1.0), 0.0).unwrap();
    assert_eq!(hit.normal, Vec3::Y);
    assert_relative_eq!(hit.contact_point.y, 2.0, epsilon = 1e-6);
}

#[test]
fn sphere_custom_bounce() {
    let sphere = SphereCollider::new(Vec3::ZERO, 1.0).with_bounce(0.1, 0.2);
    let hit = sphere.query(Vec3::new(0.0, 0.0, 0.5), 0.0).unwrap();
    assert_eq!(hit.reflect_bounce, 0.1);
    assert_eq!(hit.normal_bounce, 0.2);
}

// ─── Capsule Tests ────────────────────────────────────────────

#[test]
fn capsule_side_hit() {
    let capsule = CapsuleCollider::new(Vec3::ZERO, 2.0, 1.0);
    let hit = capsule.query(Vec3::new(0.5, 1.0, 0.0), 0.0).unwrap();

    assert_relative_eq!(hit.normal.distance(Vec3::X), 0.0, epsilon = 1e-6);
    assert_relative_eq!(hit.contact_point.distance(Vec3::new(1.0, 1.0, 0.0)), 0.0, epsilon = 1e-6);
}

#[test]
fn capsule_cap_hit_clamps_to_segment_end() {
    let capsule = CapsuleCollider::new(Vec3::ZERO, 2.0, 1.0);
    // Above the top end: closest center is (0, 2, 0).
    assert_eq!(capsule.closest_center(Vec3::new(0.0, 5.0, 0.0)), Vec3::new(0.0, 2.0, 0.0));
    assert_eq!(capsule.closest_center(Vec3::new(0.0, -5.0, 0.0)), Vec3::new(0.0, -2.0, 0.0));

    let hit = capsule.query(Vec3::new(0.0, 2.5, 0.0), 0.1).unwrap();
    assert_relative_eq!(hit.normal.distance(Vec3::Y), 0.0, epsilon = 1e-6);
    assert_relative_eq!(hit.contact_point.y, 3.1, epsilon = 1e-5);
}

#[test]
fn capsule_miss_beyond_cap() {
    let capsule = CapsuleCollider::new(Vec3::ZERO, 2.0, 1.0);
    assert!(capsule.query(Vec3::new(0.0, 3.5, 0.0), 0.1).is_none());
}

#[test]
fn capsule_respects_axis() {
    let capsule = CapsuleCollider::new(Vec3::ZERO, 2.0, 0.5).with_axis(Vec3::X);
    // Along X the capsule reaches 2.5; along Y only 0.5.
    assert!(capsule.query(Vec3::new(2.2, 0.0, 0.0), 0.0).is_some());
    assert!(capsule.query(Vec3::new(0.0, 2.2, 0.0), 0.0).is_none());
}

#[test]
fn capsule_surface_contact_counts_as_hit() {
    let capsule = CapsuleCollider::new(Vec3::ZERO, 1.0, 1.0);
    assert!(capsule.query(Vec3::new(1.0, 0.0, 0.0), 0.0).is_some());
}

// ─── Collider Enum Tests ──────────────────────────────────────

#[test]
fn collider_dispatch() {
    let colliders = [
        Collider::sphere(Vec3::ZERO, 1.0),
        Collider::capsule(Vec3::new(5.0, 0.0, 0.0), 1.0, 0.5),
    ];
    assert_eq!(colliders[0].name(), "sphere");
    assert_eq!(colliders[1].name(), "capsule");
    assert!(colliders[0].query(Vec3::new(0.5, 0.0, 0.0), 0.0).is_some());
    assert!(colliders[1].query(Vec3::new(5.0, 1.2, 0.0), 0.0).is_some());
    assert_eq!(colliders[1].radius(), 0.5);
}

#[test]
fn collider_serialization() {
    let collider = Collider::sphere(Vec3::new(0.0, 1.0, 0.0), 2.0);
    let json = serde_json::to_string(&collider).unwrap();
    assert!(json.contains("\"shape\":\"sphere\""));
    let recovered: Collider = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, collider);
}

#[test]
fn collider_from_toml_uses_default_bounce() {
    let src = r#"
        shape = "capsule"
        center = [0.0, 1.0, 0.0]
        height = 2.0
        radius = 0.5
    "#;
    let collider: Collider = toml::from_str(src).unwrap();
    assert_eq!(collider.bounce(), (0.75, 0.75));
    match collider {
        Collider::Capsule(c) => assert_eq!(c.axis, Vec3::Y),
        Collider::Sphere(_) => panic!("expected capsule"),
    }
}
