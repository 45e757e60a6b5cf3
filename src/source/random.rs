//! source::random
//!
//! In-memory random figure generator.
//!
//! Every field is drawn uniformly from [`FIELD_RANGE`]. With sides in
//! `[5, 10)` the largest side is always shorter than the sum of the other
//! two, and the perimeters land in fixed bands:
//!
//! | Kind      | Perimeter  |
//! |-----------|------------|
//! | Triangle  | `[15, 30]` |
//! | Circle    | `[31, 63]` |
//! | Rectangle | `[20, 40]` |
//!
//! so no draw ever needs to be retried.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{FigureFactory, SourceError};
use crate::core::figure::{Circle, Figure, FigureKind, Rectangle, Triangle};
use crate::core::registry::Registered;

/// Range every generated field is drawn from.
pub const FIELD_RANGE: Range<f64> = 5.0..10.0;

/// Produces uniformly random figures, optionally a fixed number of them.
#[derive(Debug)]
pub struct RandomFigureFactory {
    rng: StdRng,
    /// Figures left to produce; `None` means unbounded.
    remaining: Option<usize>,
}

impl RandomFigureFactory {
    /// Create a generator seeded from the operating system.
    pub fn new(count: Option<usize>) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            remaining: count,
        }
    }

    /// Create a generator whose sequence is determined by `seed`.
    pub fn with_seed(count: Option<usize>, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            remaining: count,
        }
    }

    /// Figures left before the sentinel; `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    /// Produce the next figure, or `None` once the count is used up.
    pub fn create(&mut self) -> Result<Option<Figure>, SourceError> {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return Ok(None);
            }
            *remaining -= 1;
        }

        let kinds = FigureKind::all();
        let kind = kinds[self.rng.random_range(0..kinds.len())];
        let figure: Figure = match kind {
            FigureKind::Triangle => {
                Triangle::new(self.field(), self.field(), self.field())?.into()
            }
            FigureKind::Circle => Circle::new(self.field())?.into(),
            FigureKind::Rectangle => Rectangle::new(self.field(), self.field())?.into(),
        };

        Ok(Some(figure))
    }

    fn field(&mut self) -> f64 {
        self.rng.random_range(FIELD_RANGE)
    }
}

impl Registered for RandomFigureFactory {
    const TYPE_NAME: &'static str = "RandomFigureFactory";
    const PARENTS: &'static [&'static str] = &[FigureFactory::TYPE_NAME];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_band(figure: &Figure) {
        let p = figure.perimeter();
        let (low, high) = match figure.kind() {
            FigureKind::Triangle => (15.0, 30.0),
            FigureKind::Circle => (31.0, 63.0),
            FigureKind::Rectangle => (20.0, 40.0),
        };
        assert!(
            (low..=high).contains(&p),
            "{} has perimeter {} outside [{}, {}]",
            figure,
            p,
            low,
            high
        );
    }

    #[test]
    fn unbounded_keeps_producing() {
        let mut factory = RandomFigureFactory::with_seed(None, 42);
        for _ in 0..1000 {
            let figure = factory.create().unwrap().expect("unbounded factory ran dry");
            assert_in_band(&figure);
        }
        assert_eq!(factory.remaining(), None);
    }

    #[test]
    fn bounded_stops_after_count() {
        let mut factory = RandomFigureFactory::with_seed(Some(100), 42);
        for _ in 0..100 {
            let figure = factory.create().unwrap().expect("ran dry early");
            assert_in_band(&figure);
        }
        assert!(factory.create().unwrap().is_none());
        assert!(factory.create().unwrap().is_none());
        assert_eq!(factory.remaining(), Some(0));
    }

    #[test]
    fn zero_count_is_immediately_exhausted() {
        let mut factory = RandomFigureFactory::new(Some(0));
        assert!(factory.create().unwrap().is_none());
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomFigureFactory::with_seed(Some(20), 7);
        let mut b = RandomFigureFactory::with_seed(Some(20), 7);
        for _ in 0..20 {
            assert_eq!(a.create().unwrap(), b.create().unwrap());
        }
    }

    #[test]
    fn every_kind_is_produced() {
        let mut factory = RandomFigureFactory::with_seed(Some(300), 1);
        let mut seen = std::collections::HashSet::new();
        while let Some(figure) = factory.create().unwrap() {
            seen.insert(figure.kind());
        }
        assert_eq!(seen.len(), FigureKind::all().len());
    }
}
