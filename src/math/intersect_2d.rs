use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dp = p2 - p1;
    let t = dp.perp(d2) / cross;
    let u = dp.perp(d1) / cross;
    Some((t, u))
}

/// Returns `true` if the closed segments `a0-a1` and `b0-b1` share any point,
/// including collinear overlap and endpoint touches.
#[must_use]
pub fn segments_touch_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let o1 = orientation(a0, a1, b0);
    let o2 = orientation(a0, a1, b1);
    let o3 = orientation(b0, b1, a0);
    let o4 = orientation(b0, b1, a1);

    if o1 * o2 < 0 && o3 * o4 < 0 {
        return true;
    }

    (o1 == 0 && on_segment(a0, a1, b0))
        || (o2 == 0 && on_segment(a0, a1, b1))
        || (o3 == 0 && on_segment(b0, b1, a0))
        || (o4 == 0 && on_segment(b0, b1, a1))
}

/// Turn of `a -> b -> c`: `1` CCW, `-1` CW, `0` collinear.
fn orientation(a: &Point2, b: &Point2, c: &Point2) -> i8 {
    let cross = (b - a).perp(&(c - a));
    if cross.abs() < TOLERANCE {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Collinear `p` lies within the bounding box of segment `a-b`.
fn on_segment(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}
