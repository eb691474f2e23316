//! Tabulated scalar potential lookup.
//!
//! A potential `U(phi)` and its derivatives `U'(phi)`, `U''(phi)` are
//! sampled on a shared, strictly increasing grid of field values. Lookups
//! interpolate linearly between samples and hold the end values outside
//! the grid rather than extrapolating.
//!
//! ```rust
//! use potential_table::{PotentialTable, Search};
//!
//! let phi = [0.0_f64, 1.0, 2.0];
//! let u = [10.0_f64, 20.0, 30.0];
//! let up = [10.0_f64, 10.0, 10.0];
//! let upp = [0.0_f64; 3];
//!
//! let table = PotentialTable::new(&phi, &u, &up, &upp)
//!     .unwrap()
//!     .with_search(Search::Scan);
//!
//! let (u, up, upp): (f64, f64, f64) = table.lookup(1.25).into();
//! assert_eq!((u, up, upp), (22.5, 10.0, 0.0));
//! ```
//!
//! Tables are checked on construction: empty grids, mismatched lengths,
//! and non-finite or non-increasing abscissas are rejected with a
//! [`TableError`], so a lookup can never divide by zero.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod one_dim;
pub mod table;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

pub use error::{Result, TableError};
pub use one_dim::linear::LinearHoldLast1D;
pub use one_dim::{Extrap, Interp1D, RectilinearGrid1D, Search};
pub use table::{Potential, PotentialTable};

#[cfg(feature = "std")]
pub use table::PotentialTableBuf;
