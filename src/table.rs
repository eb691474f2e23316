//! Tabulated potential `U(phi)` with its first two derivatives.
//!
//! ```rust
//! use potential_table::PotentialTable;
//!
//! let phi = [0.0_f64, 1.0, 2.0];
//! let u = [10.0_f64, 20.0, 30.0];
//! let up = [10.0_f64, 10.0, 10.0];
//! let upp = [0.0_f64; 3];
//!
//! let table = PotentialTable::new(&phi, &u, &up, &upp).unwrap();
//!
//! let p = table.lookup(0.5);
//! assert_eq!((p.u, p.up, p.upp), (15.0, 10.0, 0.0));
//!
//! // Clamped, not extrapolated, outside the table
//! assert_eq!(table.lookup(-5.0).u, 10.0);
//! assert_eq!(table.lookup(100.0).u, 30.0);
//! ```
use itertools::izip;
use log::{debug, trace};
use num_traits::Float;

use crate::error::{Result, TableError};
use crate::one_dim::linear::blend;
use crate::one_dim::{Extrap, Interp1D, RectilinearGrid1D, Search};

#[cfg(feature = "std")]
use itertools::Itertools;

/// Potential and its first two derivatives at one field value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Potential<T> {
    /// `U(phi)`
    pub u: T,
    /// `dU/dphi`
    pub up: T,
    /// `d2U/dphi2`
    pub upp: T,
}

impl<T> From<Potential<T>> for (T, T, T) {
    fn from(p: Potential<T>) -> Self {
        (p.u, p.up, p.upp)
    }
}

/// A validated, borrowed potential table.
///
/// Holds one abscissa grid and three value sequences sampled on it.
/// Each lookup searches the grid once and blends all three sequences
/// from the same segment, clamping to the end values outside the grid.
///
/// Operation Complexity
/// * O(log N) per lookup with [`Search::Bisect`], O(N) with [`Search::Scan`]
///
/// Memory Complexity
/// * No allocation; the table only borrows the caller's data.
#[derive(Debug, Clone, Copy)]
pub struct PotentialTable<'a, T: Float> {
    grid: RectilinearGrid1D<'a, T>,
    u: &'a [T],
    up: &'a [T],
    upp: &'a [T],
}

impl<'a, T: Float> PotentialTable<'a, T> {
    /// Build a table over `phi`, using O(N) checks and no storage.
    ///
    /// # Errors
    /// * [`TableError::EmptyTable`] if `phi` is empty
    /// * [`TableError::NonFiniteAbscissa`] if any entry of `phi` is NaN or infinite
    /// * [`TableError::NotStrictlyIncreasing`] if `phi` is not strictly increasing
    /// * [`TableError::LengthMismatch`] if a value sequence is not the same length as `phi`
    pub fn new(phi: &'a [T], u: &'a [T], up: &'a [T], upp: &'a [T]) -> Result<Self> {
        let grid = RectilinearGrid1D::new(phi)?;
        if let Some(found) = [u, up, upp]
            .iter()
            .map(|vals| vals.len())
            .find(|&n| n != phi.len())
        {
            return Err(TableError::LengthMismatch {
                expected: phi.len(),
                found,
            });
        }

        let (lo, hi) = grid.domain();
        debug!(
            "potential table: {} entries on [{}, {}]",
            phi.len(),
            lo.to_f64().unwrap_or(f64::NAN),
            hi.to_f64().unwrap_or(f64::NAN)
        );

        Ok(Self { grid, u, up, upp })
    }

    /// Use a different segment search strategy. Results are unchanged.
    pub fn with_search(self, search: Search) -> Self {
        trace!("potential table search strategy: {search:?}");
        Self {
            grid: self.grid.with_search(search),
            ..self
        }
    }

    /// Potential and derivatives at `phi`.
    ///
    /// A NaN `phi` gives NaN in all three fields.
    #[inline]
    pub fn lookup(&self, phi: T) -> Potential<T> {
        let bracket = self.grid.bracket(phi);
        Potential {
            u: blend(self.u, bracket),
            up: blend(self.up, bracket),
            upp: blend(self.upp, bracket),
        }
    }

    /// Potential alone at `phi`.
    #[inline]
    pub fn u(&self, phi: T) -> T {
        blend(self.u, self.grid.bracket(phi))
    }

    /// First derivative alone at `phi`.
    #[inline]
    pub fn up(&self, phi: T) -> T {
        blend(self.up, self.grid.bracket(phi))
    }

    /// Second derivative alone at `phi`.
    #[inline]
    pub fn upp(&self, phi: T) -> T {
        blend(self.upp, self.grid.bracket(phi))
    }

    /// Look up a batch of field values into a preallocated buffer.
    ///
    /// # Errors
    /// * [`TableError::OutputLength`] if `out` is not the same length as `phis`
    pub fn lookup_many(&self, phis: &[T], out: &mut [Potential<T>]) -> Result<()> {
        self.eval(phis, out)
    }

    /// Look up a batch of field values, allocating for the output.
    #[cfg(feature = "std")]
    pub fn lookup_alloc(&self, phis: &[T]) -> Vec<Potential<T>> {
        self.eval_alloc(phis)
    }

    /// Whether `phi` is below, inside, or above the table.
    pub fn extrap(&self, phi: T) -> Extrap {
        self.grid.extrap(phi)
    }

    /// Check whether any of a list of field values lies outside the table
    /// by more than the absolute tolerance `atol`, i.e. whether any lookup
    /// would be clamped by more than `atol`. With `atol == 0`, points
    /// exactly on either end are in bounds, matching [`Self::extrap`].
    pub fn check_bounds(&self, phis: &[T], atol: T) -> bool {
        let (lo, hi) = self.grid.domain();
        phis.iter()
            .any(|&x| (x - lo) < -atol || (x - hi) > atol)
    }

    /// First and last abscissa.
    pub fn domain(&self) -> (T, T) {
        self.grid.domain()
    }

    /// Number of entries; never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn search(&self) -> Search {
        self.grid.search()
    }

    pub fn phi(&self) -> &'a [T] {
        self.grid.grid()
    }

    pub fn u_values(&self) -> &'a [T] {
        self.u
    }

    pub fn up_values(&self) -> &'a [T] {
        self.up
    }

    pub fn upp_values(&self) -> &'a [T] {
        self.upp
    }

    /// Table rows as `(phi, u, up, upp)`.
    pub fn records(&self) -> impl Iterator<Item = (T, T, T, T)> + 'a {
        izip!(self.phi(), self.u, self.up, self.upp).map(|(&x, &u, &up, &upp)| (x, u, up, upp))
    }
}

impl<T: Float> Interp1D<T> for PotentialTable<'_, T> {
    type Output = Potential<T>;

    #[inline]
    fn eval_one(&self, loc: T) -> Potential<T> {
        self.lookup(loc)
    }
}

/// An owned potential table.
///
/// Validated on construction and immutable afterwards; lookups go through
/// a borrowed [`PotentialTable`] view.
///
/// ```rust
/// use potential_table::{Potential, PotentialTableBuf};
/// use potential_table::utils::linspace;
///
/// // Sample U = phi^2 / 2 on a grid
/// let grid = linspace(-2.0_f64, 2.0, 41);
/// let table = PotentialTableBuf::from_fn(grid, |phi| Potential {
///     u: 0.5 * phi * phi,
///     up: phi,
///     upp: 1.0,
/// })
/// .unwrap();
///
/// let p = table.lookup(1.0);
/// assert!((p.u - 0.5).abs() < 1e-12);
/// assert!((p.up - 1.0).abs() < 1e-12);
/// ```
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq)]
pub struct PotentialTableBuf<T: Float> {
    phi: Vec<T>,
    u: Vec<T>,
    up: Vec<T>,
    upp: Vec<T>,
    search: Search,
}

#[cfg(feature = "std")]
impl<T: Float> PotentialTableBuf<T> {
    /// Take ownership of the four sequences after validating them.
    ///
    /// # Errors
    /// Same as [`PotentialTable::new`].
    pub fn new(phi: Vec<T>, u: Vec<T>, up: Vec<T>, upp: Vec<T>) -> Result<Self> {
        PotentialTable::new(&phi, &u, &up, &upp)?;
        Ok(Self {
            phi,
            u,
            up,
            upp,
            search: Search::default(),
        })
    }

    /// Build from rows of `(phi, u, up, upp)`.
    ///
    /// # Errors
    /// Same as [`PotentialTable::new`], except lengths always match.
    pub fn from_records(records: &[(T, T, T, T)]) -> Result<Self> {
        let (phi, u, up, upp): (Vec<T>, Vec<T>, Vec<T>, Vec<T>) =
            records.iter().copied().multiunzip();
        Self::new(phi, u, up, upp)
    }

    /// Sample a potential function on `grid`.
    ///
    /// # Errors
    /// Same as [`PotentialTable::new`], except lengths always match.
    pub fn from_fn<F>(grid: Vec<T>, mut f: F) -> Result<Self>
    where
        F: FnMut(T) -> Potential<T>,
    {
        let (u, up, upp): (Vec<T>, Vec<T>, Vec<T>) = grid
            .iter()
            .map(|&phi| <(T, T, T)>::from(f(phi)))
            .multiunzip();
        Self::new(grid, u, up, upp)
    }

    /// Use a different segment search strategy. Results are unchanged.
    pub fn with_search(self, search: Search) -> Self {
        Self { search, ..self }
    }

    /// Borrowed view used for lookups.
    pub fn as_table(&self) -> PotentialTable<'_, T> {
        PotentialTable {
            grid: RectilinearGrid1D::new_unchecked(&self.phi).with_search(self.search),
            u: &self.u,
            up: &self.up,
            upp: &self.upp,
        }
    }

    /// Potential and derivatives at `phi`; see [`PotentialTable::lookup`].
    #[inline]
    pub fn lookup(&self, phi: T) -> Potential<T> {
        self.as_table().lookup(phi)
    }

    /// Give back the `(phi, u, up, upp)` sequences.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>, Vec<T>) {
        (self.phi, self.u, self.up, self.upp)
    }
}

#[cfg(feature = "std")]
impl<T: Float> TryFrom<&[(T, T, T, T)]> for PotentialTableBuf<T> {
    type Error = TableError;

    fn try_from(records: &[(T, T, T, T)]) -> Result<Self> {
        Self::from_records(records)
    }
}
