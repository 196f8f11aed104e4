use super::{Point2, Vector2, TOLERANCE};

/// Longest corner shift of [`offset_ring`], as a multiple of the distance.
const MITER_LIMIT: f64 = 4.0;

/// Rotational order of a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero signed area (collinear or empty).
    Degenerate,
}

/// Computes the signed area of a closed polygon (shoelace formula).
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

/// Classifies the winding of a closed polygon from its signed area.
#[must_use]
pub fn orientation(points: &[Point2]) -> Orientation {
    let area = signed_area_2d(points);
    if area > TOLERANCE {
        Orientation::CounterClockwise
    } else if area < -TOLERANCE {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

/// Z component of `(b - a) x (c - a)`.
///
/// Positive when `a -> b -> c` turns left.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Tests whether `p` lies inside the counter-clockwise triangle `(a, b, c)`.
///
/// Points on the boundary count as inside.
#[must_use]
pub fn point_in_triangle(a: &Point2, b: &Point2, c: &Point2, p: &Point2) -> bool {
    let bc = (c.x - b.x) * (p.y - b.y) - (c.y - b.y) * (p.x - b.x);
    let ab = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    let ca = (a.x - c.x) * (p.y - c.y) - (a.y - c.y) * (p.x - c.x);
    bc >= 0.0 && ab >= 0.0 && ca >= 0.0
}

/// Returns `true` if two points coincide within `eps`.
#[must_use]
pub fn approx_eq(a: &Point2, b: &Point2, eps: f64) -> bool {
    (a.x - b.x).abs() <= eps && (a.y - b.y).abs() <= eps
}

/// Drops consecutive duplicate points of a closed polygon, including a
/// trailing point equal to the first.
#[must_use]
pub fn dedup_closed(points: &[Point2], eps: f64) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for &pt in points {
        if out.last().is_some_and(|last| approx_eq(last, &pt, eps)) {
            continue;
        }
        out.push(pt);
    }
    while out.len() > 1 && approx_eq(&out[0], &out[out.len() - 1], eps) {
        out.pop();
    }
    out
}

/// Removes duplicate and collinear vertices of a closed polygon.
///
/// A vertex is collinear when the turn through it, scaled by the length of
/// the chord between its neighbours, is within `eps`.
#[must_use]
pub fn remove_redundant(points: &[Point2], eps: f64) -> Vec<Point2> {
    let mut pts = dedup_closed(points, eps);
    let mut changed = true;
    while changed && pts.len() >= 3 {
        changed = false;
        let n = pts.len();
        for i in 0..n {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let chord = (next - prev).norm();
            if chord < eps || turn(&prev, &pts[i], &next).abs() <= eps * chord {
                pts.remove(i);
                changed = true;
                break;
            }
        }
    }
    pts
}

/// Offsets every edge of a closed polygon by `distance`, joining corners
/// with miters.
///
/// Positive distances move edges to the left of the walking direction, so
/// a counter-clockwise ring shrinks and a clockwise one grows. Corner shifts
/// are clamped to `MITER_LIMIT * |distance|`. Self-intersections created by
/// the offset are not removed.
#[must_use]
pub fn offset_ring(points: &[Point2], distance: f64) -> Vec<Point2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let limit = MITER_LIMIT * distance.abs();
    (0..n)
        .map(|i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            let (Some(d0), Some(d1)) = (
                (cur - prev).try_normalize(TOLERANCE),
                (next - cur).try_normalize(TOLERANCE),
            ) else {
                return cur;
            };
            let n0 = left_normal(d0);
            let n1 = left_normal(d1);
            let denom = 1.0 + n0.dot(&n1);
            let mut shift = if denom < TOLERANCE {
                n1 * distance
            } else {
                (n0 + n1) * (distance / denom)
            };
            let len = shift.norm();
            if len > limit {
                shift *= limit / len;
            }
            cur + shift
        })
        .collect()
}

/// Splits a closed polygon at vertices it visits more than once.
///
/// Each returned loop is free of repeated vertices. Loops with fewer than
/// three points are dropped.
#[must_use]
pub fn split_pinched(points: &[Point2], eps: f64) -> Vec<Vec<Point2>> {
    let mut loops = Vec::new();
    let mut stack: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in dedup_closed(points, eps) {
        if let Some(pos) = stack.iter().position(|q| approx_eq(q, &pt, eps)) {
            loops.push(stack.split_off(pos));
        }
        stack.push(pt);
    }
    loops.push(stack);
    loops.retain(|l| l.len() >= 3);
    loops
}

fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}
