//! Property-based tests for the figure model and line grammar.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use figurework::core::figure::{Circle, Figure, FigureError, Rectangle, Triangle};
use figurework::source::{figure_from_str, ErrorKind};

/// Strategy for generating positive, comfortably finite lengths.
fn length() -> impl Strategy<Value = f64> {
    0.1f64..1000.0
}

/// Strategy for generating sides that satisfy the strict triangle inequality.
///
/// Sides `x+y`, `y+z`, `x+z` with positive `x, y, z` always form a
/// non-degenerate triangle.
fn triangle_sides() -> impl Strategy<Value = (f64, f64, f64)> {
    (length(), length(), length()).prop_map(|(x, y, z)| (x + y, y + z, x + z))
}

/// Strategy for generating any valid figure.
fn figure() -> impl Strategy<Value = Figure> {
    prop_oneof![
        triangle_sides().prop_map(|(a, b, c)| Triangle::new(a, b, c).unwrap().into()),
        length().prop_map(|r| Circle::new(r).unwrap().into()),
        (length(), length()).prop_map(|(w, h)| Rectangle::new(w, h).unwrap().into()),
    ]
}

proptest! {
    /// Valid triangles construct and their perimeter is the sum of the sides.
    #[test]
    fn valid_triangle_perimeter((a, b, c) in triangle_sides()) {
        let t = Triangle::new(a, b, c).unwrap();
        prop_assert_eq!(t.perimeter(), a + b + c);
    }

    /// Integral triangles have exact perimeters.
    #[test]
    fn integral_triangle_perimeter(x in 1u32..1000, y in 1u32..1000, z in 1u32..1000) {
        let (a, b, c) = (f64::from(x + y), f64::from(y + z), f64::from(x + z));
        let t = Triangle::new(a, b, c).unwrap();
        prop_assert_eq!(t.perimeter(), f64::from(2 * (x + y + z)));
    }

    /// A side at least as long as the other two combined is rejected.
    #[test]
    fn degenerate_triangle_rejected(b in 1u32..1000, c in 1u32..1000, extra in 0u32..10) {
        let a = f64::from(b + c + extra);
        let (b, c) = (f64::from(b), f64::from(c));
        for (x, y, z) in [(a, b, c), (b, a, c), (b, c, a)] {
            prop_assert!(matches!(Triangle::new(x, y, z), Err(FigureError::InvalidArgument(_))));
        }
    }

    /// Any non-positive side is an invalid argument, never an overflow.
    #[test]
    fn non_positive_side_rejected(bad in -1000.0f64..=0.0, (a, b, _) in triangle_sides()) {
        prop_assert!(matches!(Triangle::new(bad, a, b), Err(FigureError::InvalidArgument(_))));
        let huge = Triangle::new(f64::MAX, f64::MAX, bad);
        prop_assert!(matches!(huge, Err(FigureError::InvalidArgument(_))));
        prop_assert!(matches!(Circle::new(bad), Err(FigureError::InvalidArgument(_))));
        prop_assert!(matches!(Rectangle::new(a, bad), Err(FigureError::InvalidArgument(_))));
    }

    /// Clones are equal values with equal perimeters.
    #[test]
    fn clone_is_equal(f in figure()) {
        let copy = f.clone();
        prop_assert_eq!(copy.perimeter(), f.perimeter());
        prop_assert_eq!(copy, f);
    }

    /// The canonical text form parses back to an equal figure.
    #[test]
    fn canonical_form_round_trips(f in figure()) {
        let parsed = figure_from_str(&f.to_string()).unwrap().unwrap();
        prop_assert_eq!(parsed, f);
    }

    /// Dropping a parameter from a valid line is always a grammar error.
    #[test]
    fn missing_parameter_is_malformed(f in figure()) {
        let text = f.to_string();
        let truncated = text.rsplit_once(' ').unwrap().0;
        let err = figure_from_str(truncated).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }
}
