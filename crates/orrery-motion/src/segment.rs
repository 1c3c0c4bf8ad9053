use orrery::{Point2, Scalar};

/// The `p`-th (0-indexed) of `f` equal pieces of the segment `p1 → p2`.
///
/// Out-of-range input (`f == 0` or `p >= f`) is not an error: the whole
/// segment `(p1, p2)` comes back unchanged.
pub fn fractional_line<S: Scalar>(
    p1: Point2<S>,
    p2: Point2<S>,
    f: usize,
    p: usize,
) -> (Point2<S>, Point2<S>) {
    if f == 0 || p >= f {
        return (p1, p2);
    }
    let step = (p2 - p1) / S::from_usize(f);
    (p1 + step * S::from_usize(p), p1 + step * S::from_usize(p + 1))
}

/// All `f` pieces of `p1 → p2` in order. Empty when `f == 0`.
pub fn subdivide<S: Scalar>(
    p1: Point2<S>,
    p2: Point2<S>,
    f: usize,
) -> impl Iterator<Item = (Point2<S>, Point2<S>)> {
    (0..f).map(move |p| fractional_line(p1, p2, f, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_quarter() {
        let (a, b) = (Point2::new(0.0, 0.0), Point2::new(8.0, 0.0));
        assert_eq!(fractional_line(a, b, 4, 0), (Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)));
        assert_eq!(fractional_line(a, b, 4, 3), (Point2::new(6.0, 0.0), Point2::new(8.0, 0.0)));
    }

    #[test]
    fn diagonal_piece() {
        let (a, b) = (Point2::new(1.0, 1.0), Point2::new(4.0, 7.0));
        let (s, e) = fractional_line(a, b, 3, 1);
        assert_eq!(s, Point2::new(2.0, 3.0));
        assert_eq!(e, Point2::new(3.0, 5.0));
    }

    #[test]
    fn invalid_fraction_returns_whole_segment() {
        let (a, b) = (Point2::new(-1.0, 2.0), Point2::new(3.0, 5.0));
        assert_eq!(fractional_line(a, b, 0, 0), (a, b));
        assert_eq!(fractional_line(a, b, 4, 4), (a, b));
        assert_eq!(fractional_line(a, b, 4, 9), (a, b));
    }

    #[test]
    fn pieces_tile_the_segment() {
        let (a, b) = (Point2::new(0.5, -2.0), Point2::new(3.5, 4.0));
        let pieces: std::vec::Vec<_> = subdivide(a, b, 6).collect();
        assert_eq!(pieces.len(), 6);
        assert_eq!(pieces[0].0, a);
        assert!(pieces[5].1.distance(b) < 1e-12);
        for w in pieces.windows(2) {
            assert!(w[0].1.distance(w[1].0) < 1e-12);
        }
        assert_eq!(subdivide(a, b, 0).count(), 0);
    }
}
