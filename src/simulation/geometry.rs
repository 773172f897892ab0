//! Distance helpers shared by clustering, routing and the link model.
//!
//! Nearest-point searches compare squared distances; the square root is only
//! taken when an actual length in meters is needed (link cost, route length).

use super::types::Point;

/// Euclidean distance in meters.
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance2(a, b).sqrt()
}

/// Squared Euclidean distance (avoids a sqrt in hot paths).
///
/// Ordering by `distance2` is the same as ordering by `distance`, so it is
/// used wherever only the relative order of candidates matters. Node
/// coordinates are integral, which keeps these values exact.
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Index of the candidate closest to `target`.
///
/// Ties resolve to the earliest candidate. Returns `None` for an empty
/// iterator.
pub fn nearest<'a, I>(target: &Point, candidates: I) -> Option<usize>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut best: Option<(usize, f64)> = None;
    for (i, candidate) in candidates.into_iter().enumerate() {
        let d2 = distance2(target, candidate);
        match best {
            Some((_, best_d2)) if d2 >= best_d2 => {}
            _ => best = Some((i, d2)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    #[test]
    fn distance_is_euclidean_and_symmetric() {
        assert_eq!(distance(&p(0.0, 0.0), &p(3.0, 4.0)), 5.0);
        assert_eq!(distance(&p(3.0, 4.0), &p(0.0, 0.0)), 5.0);
        assert_eq!(distance2(&p(1.0, 1.0), &p(4.0, 5.0)), 25.0);
        assert_eq!(distance(&p(7.0, 7.0), &p(7.0, 7.0)), 0.0);
    }

    #[test]
    fn nearest_prefers_first_on_ties() {
        let candidates = [p(10.0, 0.0), p(0.0, 10.0), p(-10.0, 0.0), p(2.0, 2.0)];
        assert_eq!(nearest(&p(0.0, 0.0), &candidates), Some(3));
        assert_eq!(nearest(&p(0.0, 0.0), &candidates[..3]), Some(0));
    }

    #[test]
    fn nearest_of_nothing_is_none() {
        let candidates: [Point; 0] = [];
        assert_eq!(nearest(&p(0.0, 0.0), &candidates), None);
    }
}
