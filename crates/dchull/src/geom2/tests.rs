use super::*;
use nalgebra::{vector, Vector2};
use std::cmp::Ordering;

#[test]
fn orientation_matches_formula() {
    let a = vector![0.0, 0.0];
    let b = vector![4.0, 1.0];
    let c = vector![1.0, 3.0];
    let expected = (c.x - a.x) * (b.y - a.y) - (b.x - a.x) * (c.y - a.y);
    assert!((orientation(a, b, c) - expected).abs() < 1e-12);
}

#[test]
fn orientation_sign_convention() {
    // y-up: (0,0) → (0,1) → (1,0) is a clockwise turn.
    let a = vector![0.0, 0.0];
    let up = vector![0.0, 1.0];
    let right = vector![1.0, 0.0];
    assert!(orientation(a, up, right) > 0.0);
    assert!(orientation(a, right, up) < 0.0);
    // Swapping the last two arguments flips the sign.
    assert_eq!(orientation(a, up, right), -orientation(a, right, up));
}

#[test]
fn orientation_exact_zero_for_collinear() {
    let a = vector![0.1, 0.1];
    let b = vector![0.2, 0.2];
    let c = vector![0.3, 0.3];
    assert_eq!(orientation(a, b, c), 0.0);
    // Coincident points are collinear with anything.
    assert_eq!(orientation(a, a, vector![5.0, -2.0]), 0.0);
}

#[test]
fn orientation_tiny_offsets_keep_their_sign() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 1.0];
    let above = vector![0.5, 0.5 + 1e-15];
    let below = vector![0.5, 0.5 - 1e-15];
    assert!(orientation(a, b, above) < 0.0);
    assert!(orientation(a, b, below) > 0.0);
}

#[test]
fn extends_beyond_on_a_line() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    assert!(extends_beyond(a, b, vector![2.0, 0.0]));
    assert!(!extends_beyond(a, b, vector![0.5, 0.0]));
    assert!(!extends_beyond(a, b, vector![-1.0, 0.0]));
    assert!(!extends_beyond(a, b, b));
}

#[test]
fn lexicographic_order_breaks_x_ties_by_y() {
    let p = Vector2::new(1.0, 2.0);
    let q = Vector2::new(1.0, 3.0);
    let r = Vector2::new(0.0, 9.0);
    assert_eq!(lexicographic_cmp(&p, &q), Ordering::Less);
    assert_eq!(lexicographic_cmp(&q, &p), Ordering::Greater);
    assert_eq!(lexicographic_cmp(&r, &p), Ordering::Less);
    assert_eq!(lexicographic_cmp(&p, &p), Ordering::Equal);
}

#[test]
fn point_from_tuple_keeps_tag() {
    let p: Point2<&str> = (1.5, -2.0, "a").into();
    assert_eq!(p.x(), 1.5);
    assert_eq!(p.y(), -2.0);
    assert_eq!(p.tag, "a");
    assert!(p.is_finite());
    assert!(!Point2::new(f64::NAN, 0.0, ()).is_finite());
}
