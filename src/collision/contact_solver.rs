use crate::bodies::VerletBody;
use crate::math::{Vector2, EPSILON};

/// Resolves the overlap between two circular bodies, if any
///
/// Applies a softened position correction along the line between centers:
/// each body moves in proportion to the *other* body's radius, so larger
/// bodies are displaced less, and the total correction is scaled by
/// `response_coefficient` rather than separating the pair outright. Only the
/// current positions are touched.
///
/// Returns true if the bodies were overlapping.
pub fn resolve_contact(
    first: &mut VerletBody,
    second: &mut VerletBody,
    response_coefficient: f64,
) -> bool {
    let offset = first.get_position() - second.get_position();
    let distance_squared = offset.length_squared();
    let min_distance = first.get_radius() + second.get_radius();

    if distance_squared >= min_distance * min_distance {
        return false;
    }

    let distance = distance_squared.sqrt();

    // Coincident centers have no usable normal; fall back to a fixed axis so
    // the pair still separates deterministically instead of producing NaN.
    let normal = if distance > EPSILON {
        offset / distance
    } else {
        Vector2::unit_x()
    };

    let ratio_first = first.get_radius() / min_distance;
    let ratio_second = second.get_radius() / min_distance;
    let delta = 0.5 * response_coefficient * (distance - min_distance);

    first.shift(-(normal * (ratio_second * delta)));
    second.shift(normal * (ratio_first * delta));

    true
}
