use glam::Vec3;
use super::*;

#[test]
fn test_from_points() {
    let aabb = AABB::from_points(&[
        Vec3::new(1.0, -2.0, 3.0),
        Vec3::new(-1.0, 4.0, 0.5),
        Vec3::new(0.0, 0.0, 7.0),
    ]);

    assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.5));
    assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 7.0));
}

#[test]
fn test_from_single_point_is_degenerate() {
    let p = Vec3::new(2.0, 3.0, 4.0);
    let aabb = AABB::from_points(&[p]);
    assert_eq!(aabb.min, p);
    assert_eq!(aabb.max, p);
    assert_eq!(aabb.size(), Vec3::ZERO);
    assert!(aabb.contains_point(p));
}

#[test]
fn test_from_no_points_contains_nothing() {
    let aabb = AABB::from_points(&[]);
    assert!(!aabb.contains_point(Vec3::ZERO));
}

#[test]
fn test_center_and_size() {
    let aabb = AABB { min: Vec3::new(-1.0, 0.0, 2.0), max: Vec3::new(3.0, 2.0, 10.0) };
    assert_eq!(aabb.center(), Vec3::new(1.0, 1.0, 6.0));
    assert_eq!(aabb.size(), Vec3::new(4.0, 2.0, 8.0));
}

#[test]
fn test_contains_point() {
    let aabb = AABB { min: Vec3::splat(-1.0), max: Vec3::splat(1.0) };
    assert!(aabb.contains_point(Vec3::ZERO));
    assert!(aabb.contains_point(Vec3::splat(1.0)));
    assert!(!aabb.contains_point(Vec3::new(1.01, 0.0, 0.0)));
    assert!(!aabb.contains_point(Vec3::new(0.0, -2.0, 0.0)));
}
