use super::intersect_2d::segments_touch_2d;
use super::{Point2, Vector2, LENGTH_TOLERANCE, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed ring (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < LENGTH_TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing (counter-clockwise) normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns `true` if the closed ring (implicitly closed, last point not
/// repeated) has at least 3 vertices, non-zero area, and no two
/// non-adjacent edges touching.
#[must_use]
pub fn ring_is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    if n < 3 || signed_area_2d(points).abs() < super::AREA_TOLERANCE {
        return false;
    }
    for i in 0..n {
        let i_next = (i + 1) % n;
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue; // adjacent (first-last)
            }
            let j_next = (j + 1) % n;
            if segments_touch_2d(&points[i], &points[i_next], &points[j], &points[j_next]) {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if the open polyline never revisits itself: consecutive
/// segments meet only at their shared vertex and no other segments touch.
#[must_use]
pub fn polyline_is_simple(points: &[Point2]) -> bool {
    let n = points.len();
    for i in 0..n.saturating_sub(2) {
        let (a, b, c) = (&points[i], &points[i + 1], &points[i + 2]);
        // Collinear fold-back overlaps the previous segment.
        let (ab, bc) = (b - a, c - b);
        if ab.perp(&bc).abs() <= TOLERANCE * ab.norm() * bc.norm() && ab.dot(&bc) < 0.0 {
            return false;
        }
    }
    for i in 0..n.saturating_sub(1) {
        for j in (i + 2)..n.saturating_sub(1) {
            if segments_touch_2d(&points[i], &points[i + 1], &points[j], &points[j + 1]) {
                return false;
            }
        }
    }
    true
}
