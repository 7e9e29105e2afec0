use approx::assert_relative_eq;
use verlet2d::math::{approx_eq, approx_zero, clamp, lerp, Vector2, EPSILON};

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 5.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 5.0);
    assert_eq!(sum.y, 7.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 3.0);
    assert_eq!(diff.y, 3.0);

    // Scalar multiplication
    let scaled = v1 * 2.0;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);

    // Scalar multiplication from the left
    let scaled = 2.0 * v1;
    assert_eq!(scaled.x, 2.0);
    assert_eq!(scaled.y, 4.0);

    // Scalar division
    let halved = v1 / 2.0;
    assert_eq!(halved.x, 0.5);
    assert_eq!(halved.y, 1.0);

    // Negation
    let negated = -v1;
    assert_eq!(negated.x, -1.0);
    assert_eq!(negated.y, -2.0);

    // Dot product
    let dot = v1.dot(&v2);
    assert_eq!(dot, 1.0 * 4.0 + 2.0 * 5.0);

    // Cross product magnitude
    let cross = v1.cross(&v2);
    assert_eq!(cross, 1.0 * 5.0 - 2.0 * 4.0);

    // Length
    let length = v1.length();
    assert_relative_eq!(length, (1.0f64.powi(2) + 2.0f64.powi(2)).sqrt());

    // Normalize
    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized.x, v1.x / length);
    assert_relative_eq!(normalized.y, v1.y / length);
}

#[test]
fn test_vector2_nary_sum() {
    // Any number of vectors can be summed in one expression
    let vectors = [
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, -1.0),
        Vector2::new(-0.5, 3.0),
        Vector2::new(0.25, 0.5),
    ];

    let total: Vector2 = vectors.iter().sum();
    assert_relative_eq!(total.x, 2.75);
    assert_relative_eq!(total.y, 3.5);

    let total_owned: Vector2 = vectors.into_iter().sum();
    assert_eq!(total, total_owned);

    // Summing nothing gives the zero vector
    let empty: Vector2 = std::iter::empty::<Vector2>().sum();
    assert!(empty.is_zero());
}

#[test]
fn test_vector2_assign_operators() {
    let mut v = Vector2::new(1.0, 2.0);

    v += Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));

    v -= Vector2::new(0.5, 0.5);
    assert_eq!(v, Vector2::new(1.5, 2.5));

    v *= 2.0;
    assert_eq!(v, Vector2::new(3.0, 5.0));

    v /= 2.0;
    assert_eq!(v, Vector2::new(1.5, 2.5));
}

#[test]
fn test_vector2_normalize_zero_vector() {
    // Normalizing a zero vector must not divide by zero
    let zero = Vector2::zero();
    let normalized = zero.normalize();
    assert!(normalized.x.is_finite());
    assert!(normalized.y.is_finite());
    assert_eq!(normalized, zero);
}

#[test]
fn test_vector2_distance() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(3.0, 4.0);

    assert_relative_eq!(a.distance(&b), 5.0);
    assert_relative_eq!(a.distance_squared(&b), 25.0);
    assert_relative_eq!(b.distance(&a), 5.0);
}

#[test]
fn test_vector2_lerp_and_perpendicular() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(2.0, 4.0);

    let mid = a.lerp(&b, 0.5);
    assert_relative_eq!(mid.x, 1.0);
    assert_relative_eq!(mid.y, 2.0);

    let perp = Vector2::new(1.0, 0.0).perpendicular();
    assert_relative_eq!(perp.x, 0.0);
    assert_relative_eq!(perp.y, 1.0);
    assert_relative_eq!(perp.dot(&Vector2::new(1.0, 0.0)), 0.0);
}

#[test]
fn test_vector2_conversions() {
    let v = Vector2::new(1.5, -2.5);

    let array: [f64; 2] = v.into();
    assert_eq!(array, [1.5, -2.5]);
    assert_eq!(Vector2::from(array), v);

    let na = v.to_nalgebra();
    assert_eq!(na.x, 1.5);
    assert_eq!(na.y, -2.5);
    assert_eq!(Vector2::from_nalgebra(&na), v);
}

#[test]
fn test_scalar_helpers() {
    assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_eq(1.0, 1.1));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(0.1));

    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);

    assert_relative_eq!(lerp(0.0, 10.0, 0.25), 2.5);
}
