use geo::{
    algorithm::line_intersection::{line_intersection, LineIntersection},
    Coord, Line,
};

/// point where two planar segments meet, if they do. when the segments
/// overlap along a shared stretch, the midpoint of that stretch is used.
pub fn segment_intersection(p: Line<f64>, q: Line<f64>) -> Option<Coord<f64>> {
    match line_intersection(p, q)? {
        LineIntersection::SinglePoint { intersection, .. } => Some(intersection),
        LineIntersection::Collinear { intersection } => Some(Coord {
            x: (intersection.start.x + intersection.end.x) / 2.0,
            y: (intersection.start.y + intersection.end.y) / 2.0,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(a: (f64, f64), b: (f64, f64)) -> Line<f64> {
        Line::new(Coord { x: a.0, y: a.1 }, Coord { x: b.0, y: b.1 })
    }

    #[test]
    fn test_crossing_segments() {
        let result = segment_intersection(line((0.0, 0.0), (2.0, 2.0)), line((0.0, 2.0), (2.0, 0.0)))
            .expect("segments cross");
        assert!((result.x - 1.0).abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_segments() {
        let result = segment_intersection(line((0.0, 0.0), (1.0, 0.0)), line((2.0, -1.0), (2.0, 1.0)));
        assert_eq!(result, None);
    }

    #[test]
    fn test_touching_endpoint() {
        let result = segment_intersection(line((0.0, 0.0), (1.0, 0.0)), line((1.0, 0.0), (1.0, 1.0)));
        assert_eq!(result, Some(Coord { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn test_collinear_overlap_uses_midpoint() {
        let result = segment_intersection(line((0.0, 0.0), (4.0, 0.0)), line((2.0, 0.0), (6.0, 0.0)));
        assert_eq!(result, Some(Coord { x: 3.0, y: 0.0 }));
    }
}
