//! core::figure
//!
//! Validated geometric figures.
//!
//! # Types
//!
//! - [`Triangle`] - Three sides satisfying the strict triangle inequality
//! - [`Circle`] - A radius
//! - [`Rectangle`] - A width and a height
//! - [`Figure`] - Closed set of the three kinds above
//!
//! # Validation
//!
//! Every constructor checks its fields in a fixed order:
//!
//! 1. Each field must be finite
//! 2. Each field must be strictly positive
//! 3. The perimeter must be representable
//! 4. (Triangle only) each side must be strictly shorter than the sum of the
//!    other two
//!
//! Steps 1, 2 and 4 fail with [`FigureError::InvalidArgument`], step 3 with
//! [`FigureError::Overflow`]. A constructed figure is never invalid, so
//! cloning and formatting cannot fail.
//!
//! # Examples
//!
//! ```
//! use figurework::core::figure::{Figure, FigureError, Triangle};
//!
//! let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
//! assert_eq!(t.perimeter(), 12.0);
//! assert_eq!(Figure::from(t).to_string(), "Triangle 3 4 5");
//!
//! assert!(matches!(
//!     Triangle::new(1.0, 2.0, 3.0),
//!     Err(FigureError::InvalidArgument(_))
//! ));
//! ```

use std::f64::consts::PI;
use std::fmt;

use thiserror::Error;

use super::registry::{Registered, CLONEABLE};

/// Errors from figure construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FigureError {
    /// A field is non-finite or non-positive, or a triangle is degenerate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Fields are individually valid but the perimeter is unrepresentable.
    #[error("overflow: {0}")]
    Overflow(String),
}

/// The three supported figure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Triangle,
    Circle,
    Rectangle,
}

impl FigureKind {
    /// All kinds, in canonical order.
    pub fn all() -> &'static [FigureKind] {
        &[FigureKind::Triangle, FigureKind::Circle, FigureKind::Rectangle]
    }

    /// The kind name as used in figure lines.
    pub fn name(&self) -> &'static str {
        match self {
            FigureKind::Triangle => "Triangle",
            FigureKind::Circle => "Circle",
            FigureKind::Rectangle => "Rectangle",
        }
    }

    /// Number of numeric fields the kind takes.
    pub fn arity(&self) -> usize {
        match self {
            FigureKind::Triangle => 3,
            FigureKind::Circle => 1,
            FigureKind::Rectangle => 2,
        }
    }

    /// Parse a kind name. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// use figurework::core::figure::FigureKind;
    ///
    /// assert_eq!(FigureKind::parse("Circle"), Some(FigureKind::Circle));
    /// assert_eq!(FigureKind::parse("circle"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        FigureKind::all().iter().copied().find(|k| k.name() == s)
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Check a single field for finiteness, then positivity.
fn check_field(kind: FigureKind, field: &str, value: f64) -> Result<(), FigureError> {
    if !value.is_finite() {
        return Err(FigureError::InvalidArgument(format!(
            "{} {} must be finite, got {}",
            kind, field, value
        )));
    }
    if value <= 0.0 {
        return Err(FigureError::InvalidArgument(format!(
            "{} {} must be positive, got {}",
            kind, field, value
        )));
    }
    Ok(())
}

/// Fail if the exact sum of `parts` exceeds `f64::MAX`.
///
/// Float addition saturates silently near the top of the range
/// (`1.0 + 2.0 + f64::MAX == f64::MAX`), so the smaller parts are compared
/// against the headroom the largest one leaves. Parts are already finite
/// and positive.
fn check_sum(kind: FigureKind, parts: &[f64]) -> Result<(), FigureError> {
    let (largest_at, largest) = parts
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (i, x)| if x > best.1 { (i, x) } else { best });
    let rest: f64 = parts
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != largest_at)
        .map(|(_, x)| x)
        .sum();

    if rest.is_finite() && rest <= f64::MAX - largest {
        Ok(())
    } else {
        Err(overflow(kind))
    }
}

/// Fail if a computed perimeter is not finite.
fn check_perimeter(kind: FigureKind, perimeter: f64) -> Result<(), FigureError> {
    if perimeter.is_finite() {
        Ok(())
    } else {
        Err(overflow(kind))
    }
}

fn overflow(kind: FigureKind) -> FigureError {
    FigureError::Overflow(format!("{} perimeter exceeds the representable range", kind))
}

/// A triangle given by its three side lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    /// Create a validated triangle.
    ///
    /// # Errors
    ///
    /// - `FigureError::InvalidArgument` if a side is non-finite or
    ///   non-positive, or the sides violate the strict triangle inequality
    /// - `FigureError::Overflow` if the perimeter is unrepresentable
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, FigureError> {
        let kind = FigureKind::Triangle;
        check_field(kind, "side a", a)?;
        check_field(kind, "side b", b)?;
        check_field(kind, "side c", c)?;
        check_sum(kind, &[a, b, c])?;
        check_perimeter(kind, a + b + c)?;

        if !(a < b + c && b < a + c && c < a + b) {
            return Err(FigureError::InvalidArgument(format!(
                "sides {} {} {} violate the triangle inequality",
                a, b, c
            )));
        }

        Ok(Self { a, b, c })
    }

    /// The three sides, in construction order.
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle {} {} {}", self.a, self.b, self.c)
    }
}

/// A circle given by its radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    r: f64,
}

impl Circle {
    /// Create a validated circle.
    ///
    /// # Errors
    ///
    /// - `FigureError::InvalidArgument` if the radius is non-finite or non-positive
    /// - `FigureError::Overflow` if the circumference is unrepresentable
    pub fn new(r: f64) -> Result<Self, FigureError> {
        let kind = FigureKind::Circle;
        check_field(kind, "radius", r)?;
        check_perimeter(kind, 2.0 * PI * r)?;
        Ok(Self { r })
    }

    pub fn radius(&self) -> f64 {
        self.r
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.r
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle {}", self.r)
    }
}

/// An axis-free rectangle given by its width and height.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    w: f64,
    h: f64,
}

impl Rectangle {
    /// Create a validated rectangle.
    ///
    /// # Errors
    ///
    /// - `FigureError::InvalidArgument` if a side is non-finite or non-positive
    /// - `FigureError::Overflow` if the perimeter is unrepresentable
    pub fn new(w: f64, h: f64) -> Result<Self, FigureError> {
        let kind = FigureKind::Rectangle;
        check_field(kind, "width", w)?;
        check_field(kind, "height", h)?;
        check_sum(kind, &[w, h])?;
        check_perimeter(kind, 2.0 * (w + h))?;
        Ok(Self { w, h })
    }

    pub fn width(&self) -> f64 {
        self.w
    }

    pub fn height(&self) -> f64 {
        self.h
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.w + self.h)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle {} {}", self.w, self.h)
    }
}

/// A validated figure of any supported kind.
///
/// Formatting with `{}` produces the canonical text form, which parses back
/// to an equal figure with [`crate::source::figure_from_str`].
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Triangle(Triangle),
    Circle(Circle),
    Rectangle(Rectangle),
}

impl Figure {
    pub fn kind(&self) -> FigureKind {
        match self {
            Figure::Triangle(_) => FigureKind::Triangle,
            Figure::Circle(_) => FigureKind::Circle,
            Figure::Rectangle(_) => FigureKind::Rectangle,
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Figure::Triangle(t) => t.perimeter(),
            Figure::Circle(c) => c.perimeter(),
            Figure::Rectangle(r) => r.perimeter(),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Triangle(t) => write!(f, "{}", t),
            Figure::Circle(c) => write!(f, "{}", c),
            Figure::Rectangle(r) => write!(f, "{}", r),
        }
    }
}

impl From<Triangle> for Figure {
    fn from(t: Triangle) -> Self {
        Figure::Triangle(t)
    }
}

impl From<Circle> for Figure {
    fn from(c: Circle) -> Self {
        Figure::Circle(c)
    }
}

impl From<Rectangle> for Figure {
    fn from(r: Rectangle) -> Self {
        Figure::Rectangle(r)
    }
}

impl Registered for Figure {
    const TYPE_NAME: &'static str = "Figure";
    const PARENTS: &'static [&'static str] = &[CLONEABLE];
}

impl Registered for Triangle {
    const TYPE_NAME: &'static str = "Triangle";
    const PARENTS: &'static [&'static str] = &[Figure::TYPE_NAME];
}

impl Registered for Circle {
    const TYPE_NAME: &'static str = "Circle";
    const PARENTS: &'static [&'static str] = &[Figure::TYPE_NAME];
}

impl Registered for Rectangle {
    const TYPE_NAME: &'static str = "Rectangle";
    const PARENTS: &'static [&'static str] = &[Figure::TYPE_NAME];
}

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn valid_figures() {
            assert!(Triangle::new(3.0, 4.0, 5.0).is_ok());
            assert!(Circle::new(1.0).is_ok());
            assert!(Rectangle::new(1.0, 2.0).is_ok());
        }

        #[test]
        fn degenerate_triangle_rejected() {
            assert!(matches!(
                Triangle::new(1.0, 2.0, 3.0),
                Err(FigureError::InvalidArgument(_))
            ));
            assert!(matches!(
                Triangle::new(1.0, 2.0, 4.0),
                Err(FigureError::InvalidArgument(_))
            ));
            assert!(matches!(
                Triangle::new(4.0, 1.0, 2.0),
                Err(FigureError::InvalidArgument(_))
            ));
        }

        #[test]
        fn non_positive_fields_rejected() {
            let cases = [(1.0, 2.0, 0.0), (1.0, 0.0, 2.0), (0.0, 2.0, 1.0), (-1.0, 2.0, 1.0)];
            for (a, b, c) in cases {
                assert!(matches!(
                    Triangle::new(a, b, c),
                    Err(FigureError::InvalidArgument(_))
                ));
            }
            assert!(matches!(Circle::new(0.0), Err(FigureError::InvalidArgument(_))));
            assert!(matches!(Circle::new(-1.0), Err(FigureError::InvalidArgument(_))));
            assert!(matches!(
                Rectangle::new(1.0, 0.0),
                Err(FigureError::InvalidArgument(_))
            ));
            assert!(matches!(
                Rectangle::new(-1.0, 1.0),
                Err(FigureError::InvalidArgument(_))
            ));
        }

        #[test]
        fn non_finite_fields_rejected() {
            assert!(matches!(
                Triangle::new(1.0, 2.0, f64::NAN),
                Err(FigureError::InvalidArgument(_))
            ));
            assert!(matches!(
                Circle::new(f64::INFINITY),
                Err(FigureError::InvalidArgument(_))
            ));
            assert!(matches!(
                Rectangle::new(f64::NAN, 1.0),
                Err(FigureError::InvalidArgument(_))
            ));
        }

        #[test]
        fn overflow_at_numeric_maximum() {
            let max = f64::MAX;
            let cases = [(1.0, 2.0, max), (1.0, max, 2.0), (max, 2.0, 1.0), (max, max, max)];
            for (a, b, c) in cases {
                assert!(matches!(Triangle::new(a, b, c), Err(FigureError::Overflow(_))));
            }
            assert!(matches!(Circle::new(max), Err(FigureError::Overflow(_))));
            assert!(matches!(Rectangle::new(max, 1.0), Err(FigureError::Overflow(_))));
            assert!(matches!(Rectangle::new(1.0, max), Err(FigureError::Overflow(_))));
        }

        #[test]
        fn perimeter_of_exactly_max_is_accepted() {
            let quarter = f64::MAX / 4.0;
            let r = Rectangle::new(quarter, quarter).unwrap();
            assert_eq!(r.perimeter(), f64::MAX);

            let half = f64::MAX / 2.0;
            assert!(matches!(Rectangle::new(half, half), Err(FigureError::Overflow(_))));
        }

        #[test]
        fn saturated_sum_is_overflow() {
            // The float sum rounds back to MAX without becoming infinite.
            assert_eq!(1.0 + 2.0 + f64::MAX, f64::MAX);
            assert!(matches!(
                Triangle::new(1.0, 2.0, f64::MAX),
                Err(FigureError::Overflow(_))
            ));
        }

        #[test]
        fn negative_huge_side_is_invalid_not_overflow() {
            assert!(matches!(
                Triangle::new(f64::MAX, f64::MAX, -1.0),
                Err(FigureError::InvalidArgument(_))
            ));
        }
    }

    mod semantics {
        use super::*;

        #[test]
        fn perimeters() {
            assert_eq!(Triangle::new(3.0, 4.0, 5.0).unwrap().perimeter(), 12.0);
            assert_eq!(Rectangle::new(1.0, 2.0).unwrap().perimeter(), 6.0);
            assert!((Circle::new(1.0).unwrap().perimeter() - 2.0 * PI).abs() < 0.01);
        }

        #[test]
        fn clone_preserves_perimeter() {
            let figures: Vec<Figure> = vec![
                Triangle::new(3.0, 4.0, 5.0).unwrap().into(),
                Circle::new(1.0).unwrap().into(),
                Rectangle::new(1.0, 2.0).unwrap().into(),
            ];
            for f in &figures {
                let copy = f.clone();
                assert_eq!(copy.perimeter(), f.perimeter());
                assert_eq!(&copy, f);
            }
        }

        #[test]
        fn canonical_text_form() {
            let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
            assert_eq!(t.to_string(), "Triangle 3 4 5");
            assert_eq!(Circle::new(1.0).unwrap().to_string(), "Circle 1");
            assert_eq!(Rectangle::new(1.0, 2.0).unwrap().to_string(), "Rectangle 1 2");
            assert_eq!(Circle::new(0.5).unwrap().to_string(), "Circle 0.5");
        }

        #[test]
        fn kind_tags() {
            let f: Figure = Circle::new(2.0).unwrap().into();
            assert_eq!(f.kind(), FigureKind::Circle);
            assert_eq!(FigureKind::Triangle.arity(), 3);
            assert_eq!(FigureKind::Circle.arity(), 1);
            assert_eq!(FigureKind::Rectangle.arity(), 2);
        }
    }
}
