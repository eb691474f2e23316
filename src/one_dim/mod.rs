//! One-dimensional grids and the bracket search shared by every
//! tabulated quantity. A single abscissa grid is searched once per
//! observation point, and the resulting [`Bracket`] can then be applied
//! to any number of value sequences sampled on that grid.

pub mod linear;

use itertools::Itertools;
use num_traits::Float;

use crate::error::{Result, TableError};

/// Extrapolation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Strategy for locating the segment that contains an observation point.
///
/// Both strategies select the same segment for every input; the choice
/// only affects speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Search {
    /// Bisection, O(log N). Best for anything but tiny tables.
    #[default]
    Bisect,
    /// Walk the segments from the low end, O(N).
    Scan,
}

/// Location of an observation point relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket<T> {
    /// At or below the first abscissa; clamps to the first value.
    Low,
    /// At or above the last abscissa; clamps to the last value.
    High,
    /// Exactly on interior node `k`.
    Node(usize),
    /// Strictly inside segment `[x[i], x[i + 1]]`, with blend weight `t` in (0, 1).
    Segment { i: usize, t: T },
}

/// A rectilinear grid, which may have uneven spacing.
///
/// Construction checks that the grid is nonempty, finite and strictly
/// increasing, so lookups never divide by zero.
#[derive(Debug, Clone, Copy)]
pub struct RectilinearGrid1D<'a, T: Float> {
    grid: &'a [T],
    search: Search,
}

impl<'a, T: Float> RectilinearGrid1D<'a, T> {
    /// Validate and wrap a grid.
    ///
    /// # Errors
    /// * [`TableError::EmptyTable`] if the grid has no entries
    /// * [`TableError::NonFiniteAbscissa`] if any entry is NaN or infinite
    /// * [`TableError::NotStrictlyIncreasing`] if any entry does not exceed its predecessor
    pub fn new(grid: &'a [T]) -> Result<Self> {
        if grid.is_empty() {
            return Err(TableError::EmptyTable);
        }
        if let Some(index) = grid.iter().position(|x| !x.is_finite()) {
            return Err(TableError::NonFiniteAbscissa { index });
        }
        if let Some(index) = grid
            .iter()
            .tuple_windows()
            .position(|(lo, hi)| hi <= lo)
        {
            return Err(TableError::NotStrictlyIncreasing { index: index + 1 });
        }

        Ok(Self::new_unchecked(grid))
    }

    /// Wrap a grid that is already known to be valid.
    pub(crate) fn new_unchecked(grid: &'a [T]) -> Self {
        Self {
            grid,
            search: Search::default(),
        }
    }

    /// Use a different segment search strategy.
    pub fn with_search(self, search: Search) -> Self {
        Self { search, ..self }
    }

    pub fn search(&self) -> Search {
        self.search
    }

    pub fn grid(&self) -> &'a [T] {
        self.grid
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// First and last abscissa.
    pub fn domain(&self) -> (T, T) {
        (self.grid[0], self.grid[self.grid.len() - 1])
    }

    /// Classify an observation point as inside or outside the grid.
    /// Points exactly on either end are inside. NaN is reported as inside,
    /// since it compares false against both ends.
    #[inline]
    pub fn extrap(&self, loc: T) -> Extrap {
        let (lo, hi) = self.domain();
        match loc {
            x if x < lo => Extrap::OutsideLow,
            x if x > hi => Extrap::OutsideHigh,
            _ => Extrap::Inside,
        }
    }

    /// Find where an observation point falls, or `None` if it is NaN.
    ///
    /// Among segments sharing an exact node the lower-indexed one wins,
    /// which is reported as [`Bracket::Node`] so the node value can be
    /// returned without rounding.
    #[inline]
    pub fn bracket(&self, loc: T) -> Option<Bracket<T>> {
        if loc.is_nan() {
            return None;
        }
        let (lo, hi) = self.domain();
        if loc <= lo {
            return Some(Bracket::Low);
        }
        if loc >= hi {
            return Some(Bracket::High);
        }

        // From here lo < loc < hi, so there are at least two entries
        let i = self.index(loc);
        let (x0, x1) = (self.grid[i], self.grid[i + 1]);
        if loc == x1 {
            return Some(Bracket::Node(i + 1));
        }
        if loc == x0 {
            return Some(Bracket::Node(i));
        }

        let t = (loc - x0) / (x1 - x0);
        Some(Bracket::Segment { i, t })
    }

    /// Index of the first segment `[x[i], x[i + 1]]` containing an
    /// interior observation point.
    #[inline]
    fn index(&self, loc: T) -> usize {
        let last = self.grid.len() - 2;
        match self.search {
            Search::Bisect => (self.grid.partition_point(|v| v < &loc).max(1) - 1).min(last),
            Search::Scan => self
                .grid
                .iter()
                .tuple_windows()
                .position(|(&x0, &x1)| x0 <= loc && loc <= x1)
                .unwrap_or(last),
        }
    }
}

/// A one-dimensional interpolator.
pub trait Interp1D<T: Float> {
    /// Result of evaluating at one observation point.
    type Output: Copy;

    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> Self::Output;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// # Errors
    /// * [`TableError::OutputLength`] if `out` is not the same length as `locs`
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [Self::Output]) -> Result<()> {
        if locs.len() != out.len() {
            return Err(TableError::OutputLength {
                expected: locs.len(),
                found: out.len(),
            });
        }

        for (o, &loc) in out.iter_mut().zip(locs) {
            *o = self.eval_one(loc);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<Self::Output> {
        locs.iter().map(|&loc| self.eval_one(loc)).collect()
    }
}
