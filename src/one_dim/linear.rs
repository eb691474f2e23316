//! Piecewise-linear interpolation with hold-last extrapolation

use num_traits::Float;

use super::{Bracket, Interp1D, RectilinearGrid1D};
use crate::error::{Result, TableError};

/// Blend one value sequence at a precomputed bracket.
///
/// Holds the first value below the grid and the last value above it.
/// `None` (a NaN observation point) gives NaN.
///
/// `vals` must have one entry per grid abscissa; callers validate this
/// on construction.
#[inline]
pub(crate) fn blend<T: Float>(vals: &[T], bracket: Option<Bracket<T>>) -> T {
    match bracket {
        Some(Bracket::Low) => vals[0],
        Some(Bracket::High) => vals[vals.len() - 1],
        Some(Bracket::Node(k)) => vals[k],
        Some(Bracket::Segment { i, t }) => {
            let (y0, y1) = (vals[i], vals[i + 1]);
            y0 + t * (y1 - y0)
        }
        None => T::nan(),
    }
}

/// Linear interpolation with hold-last extrapolation;
/// holds the leftmost value when extrapolating low, and the rightmost
/// value when extrapolating high.
///
/// ```rust
/// use potential_table::{Interp1D, LinearHoldLast1D, RectilinearGrid1D};
///
/// let x = [0.0_f64, 1.0, 2.0];
/// let y = [10.0_f64, 20.0, 30.0];
/// let grid = RectilinearGrid1D::new(&x).unwrap();
/// let interp = LinearHoldLast1D::new(grid, &y).unwrap();
///
/// assert_eq!(interp.eval_one(0.5), 15.0);
/// assert_eq!(interp.eval_one(-5.0), 10.0);
/// assert_eq!(interp.eval_one(100.0), 30.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearHoldLast1D<'a, T: Float> {
    grid: RectilinearGrid1D<'a, T>,
    vals: &'a [T],
}

impl<'a, T: Float> LinearHoldLast1D<'a, T> {
    /// # Errors
    /// * [`TableError::LengthMismatch`] if `vals` does not have one entry per abscissa
    pub fn new(grid: RectilinearGrid1D<'a, T>, vals: &'a [T]) -> Result<Self> {
        if vals.len() != grid.len() {
            return Err(TableError::LengthMismatch {
                expected: grid.len(),
                found: vals.len(),
            });
        }

        Ok(Self { grid, vals })
    }
}

impl<T: Float> Interp1D<T> for LinearHoldLast1D<'_, T> {
    type Output = T;

    #[inline]
    fn eval_one(&self, loc: T) -> T {
        blend(self.vals, self.grid.bracket(loc))
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::one_dim::Search;
    use crate::testing::{randn, rng_fixed_seed};
    use crate::utils::linspace;

    #[test]
    fn test_linear_hold_last_1d() {
        let x = [0.0_f64, 1.0, 2.0];
        let y = [10.0_f64, 20.0, 30.0];
        let grid = RectilinearGrid1D::new(&x[..]).unwrap();
        let interp = LinearHoldLast1D::new(grid, &y[..]).unwrap();

        assert_eq!(interp.eval_one(0.5), 15.0);
        assert_eq!(interp.eval_one(-5.0), 10.0);
        assert_eq!(interp.eval_one(100.0), 30.0);
        assert_eq!(interp.eval_one(1.0), 20.0);
        assert!(interp.eval_one(f64::NAN).is_nan());
    }

    #[test]
    fn test_length_mismatch() {
        let x = [0.0_f64, 1.0, 2.0];
        let y = [1.0_f64, 2.0];
        let grid = RectilinearGrid1D::new(&x[..]).unwrap();
        assert_eq!(
            LinearHoldLast1D::new(grid, &y[..]).unwrap_err(),
            TableError::LengthMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_empty_values_rejected() {
        // Every bracket indexes into the values, so they can't be shorter than the grid
        let x = [1.0_f64];
        let empty: [f64; 0] = [];
        let grid = RectilinearGrid1D::new(&x[..]).unwrap();
        assert_eq!(
            LinearHoldLast1D::new(grid, &empty[..]).unwrap_err(),
            TableError::LengthMismatch {
                expected: 1,
                found: 0
            }
        );
    }

    #[test]
    fn test_nodes_are_exact() {
        let mut rng = rng_fixed_seed();
        let x = linspace(-3.0_f64, 7.0, 37);
        let y = randn::<f64>(&mut rng, x.len());

        for search in [Search::Bisect, Search::Scan] {
            let grid = RectilinearGrid1D::new(&x[..]).unwrap().with_search(search);
            let interp = LinearHoldLast1D::new(grid, &y[..]).unwrap();
            (0..x.len()).for_each(|i| assert_eq!(interp.eval_one(x[i]), y[i]));
        }
    }

    #[test]
    fn test_linear_function_reproduced() {
        // A linear function is recovered exactly (to rounding) between nodes
        let x = [0.0_f64, 0.3, 1.1, 2.0, 5.5];
        let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi - 1.0).collect();
        let grid = RectilinearGrid1D::new(&x[..]).unwrap();
        let interp = LinearHoldLast1D::new(grid, &y[..]).unwrap();

        let obs = linspace(0.0, 5.5, 101);
        let mut out = vec![0.0; obs.len()];
        interp.eval(&obs, &mut out).unwrap();
        (0..obs.len()).for_each(|i| assert!((out[i] - (2.0 * obs[i] - 1.0)).abs() < 1e-12));
    }

    #[test]
    fn test_eval_output_length() {
        let x = [0.0_f64, 1.0];
        let y = [0.0_f64, 1.0];
        let grid = RectilinearGrid1D::new(&x[..]).unwrap();
        let interp = LinearHoldLast1D::new(grid, &y[..]).unwrap();
        let mut out = [0.0; 3];
        assert_eq!(
            interp.eval(&[0.5, 0.7], &mut out).unwrap_err(),
            TableError::OutputLength {
                expected: 2,
                found: 3
            }
        );
    }
}
