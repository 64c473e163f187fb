//! Determinant of a square matrix using expansion by minors.
//!
//! The argument vector of length `n_arg = ell * ell` holds the matrix in row-major order, and
//! the result is a single value: its determinant. This is deliberately a factorial-time
//! algorithm, meant as a workload for differentiation tools.
use crate::det_of_minor::det_of_minor;
use crate::index_list::IndexList;
use adbench_core::{check_dimension, ConfigurationError, Error, FunObj, Options, Result, Scalar};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
struct Configured {
    option: Options,
    ell: usize,
    rows: IndexList,
    cols: IndexList,
}

/// Function object computing `[det(A(x))]`, where `A(x)[i][j] = x[i * ell + j]`.
///
/// # Example
///
/// ```
/// use adbench_algo::DetByMinor;
/// use adbench_core::{FunObj, Options};
///
/// let mut det = DetByMinor::<f64>::new();
/// det.setup(&Options::new(4, 0)).unwrap();
/// assert_eq!(Ok(vec![-2.0]), det.call(&[1.0, 2.0, 3.0, 4.0]));
/// ```
#[derive(Debug, Clone)]
pub struct DetByMinor<T> {
    state: Option<Configured>,
    __scalar: PhantomData<fn(&[T]) -> T>,
}

impl<T> Default for DetByMinor<T> {
    fn default() -> Self {
        Self {
            state: None,
            __scalar: PhantomData,
        }
    }
}

impl<T> DetByMinor<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (and columns) of the matrix.
    pub fn ell(&self) -> Result<usize> {
        self.configured().map(|s| s.ell)
    }

    /// Row and column lists used to track the active minor.
    ///
    /// Between calls, these are always the full lists built by the last setup.
    pub fn index_lists(&self) -> Option<(&IndexList, &IndexList)> {
        self.state.as_ref().map(|s| (&s.rows, &s.cols))
    }

    fn configured(&self) -> Result<&Configured> {
        self.state.as_ref().ok_or(Error::NotInitialized)
    }

    fn configure(option: &Options) -> Result<Configured, ConfigurationError> {
        let n_arg = option.get_usize("n_arg")?;
        let n_other = option.get_i64("n_other")?;
        if n_other != 0 {
            return Err(ConfigurationError::OutOfRange {
                key: "n_other".to_string(),
                value: n_other.to_string(),
                reason: "must be zero for det_by_minor",
            });
        }
        let ell = square_root(n_arg).ok_or(ConfigurationError::NotSquare(n_arg))?;
        Ok(Configured {
            option: option.clone(),
            ell,
            rows: IndexList::new(ell),
            cols: IndexList::new(ell),
        })
    }
}

/// Exact integer square root, if `n` is a perfect square.
fn square_root(n: usize) -> Option<usize> {
    let mut ell = (n as f64).sqrt().round() as usize;
    // The float estimate can be off by one for large `n`
    while ell.checked_mul(ell).is_none_or(|sq| sq > n) {
        ell -= 1;
    }
    while (ell + 1).checked_mul(ell + 1).is_some_and(|sq| sq <= n) {
        ell += 1;
    }
    (ell * ell == n).then_some(ell)
}

impl<T: Scalar> FunObj<T> for DetByMinor<T> {
    fn setup(&mut self, option: &Options) -> Result<()> {
        match Self::configure(option) {
            Ok(configured) => {
                log::debug!(
                    "det_by_minor::setup: n_arg={} ell={}",
                    configured.ell * configured.ell,
                    configured.ell
                );
                self.state = Some(configured);
                Ok(())
            }
            Err(err) => {
                log::debug!("det_by_minor::setup: rejected options: {err}");
                Err(err.into())
            }
        }
    }

    fn option(&self) -> Result<&Options> {
        self.configured().map(|s| &s.option)
    }

    fn domain(&self) -> Result<usize> {
        self.configured().map(|s| s.ell * s.ell)
    }

    fn range(&self) -> Result<usize> {
        self.configured().map(|_| 1)
    }

    fn call(&mut self, x: &[T]) -> Result<Vec<T>> {
        let Configured { ell, rows, cols, .. } = self.state.as_mut().ok_or(Error::NotInitialized)?;
        let ell = *ell;
        check_dimension(ell * ell, x.len())?;
        Ok(vec![det_of_minor(x, ell, ell, rows, cols)])
    }
}
