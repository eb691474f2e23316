//! Convenience methods for constructing grids in a way that echoes,
//! but does not exactly match, methods common in scripting languages.
use num_traits::Float;

/// Generates evenly spaced values from start to stop,
/// including the endpoint, which is set exactly.
///
/// Yields an empty grid for `n == 0` and `[start]` for `n == 1`.
pub fn linspace<T>(start: T, stop: T, n: usize) -> Vec<T>
where
    T: Float,
{
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let dx: T = (stop - start) / T::from(n - 1).unwrap_or_else(T::nan);
            (0..n)
                .map(|i| match i {
                    i if i == n - 1 => stop,
                    i => start + T::from(i).unwrap_or_else(T::nan) * dx,
                })
                .collect()
        }
    }
}
