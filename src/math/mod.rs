pub mod intersect_2d;
pub mod polygon_2d;

/// 2D point type (projected plane, linear units).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Unitless tolerance for direction and parallelism tests.
pub const TOLERANCE: f64 = 1e-10;

/// Linear tolerance (input units, typically metres) for zero-length and
/// coincident-endpoint tests.
pub const LENGTH_TOLERANCE: f64 = 1e-6;

/// Areal tolerance (square input units) below which a region is empty.
pub const AREA_TOLERANCE: f64 = 1e-6;

/// Band vertices are snapped to a grid of `1 / SNAP_DIVISIONS` units
/// (one micrometre for metre inputs) before boolean composition.
pub const SNAP_DIVISIONS: f64 = 1e6;

/// Snaps a coordinate value to the `1 / SNAP_DIVISIONS` grid.
#[must_use]
pub fn snap(value: f64) -> f64 {
    let snapped = (value * SNAP_DIVISIONS).round() / SNAP_DIVISIONS;
    // Avoid -0.0 leaking into output rings.
    if snapped == 0.0 {
        0.0
    } else {
        snapped
    }
}

/// Snaps a point to the grid and converts it to a `geo` coordinate.
#[must_use]
pub fn to_coord(p: &Point2) -> geo::Coord<f64> {
    geo::Coord {
        x: snap(p.x),
        y: snap(p.y),
    }
}

/// Converts a `geo` coordinate back to a point.
#[must_use]
pub fn from_coord(c: geo::Coord<f64>) -> Point2 {
    Point2::new(c.x, c.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_rounds_to_grid() {
        assert!((snap(1.000_000_4) - 1.0).abs() < 1e-12);
        assert!((snap(2890.000_000_6) - 2890.000_001).abs() < 1e-9);
        assert!((snap(-2890.0) + 2890.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snap_normalizes_negative_zero() {
        assert!(snap(-1e-9).is_sign_positive());
    }
}
