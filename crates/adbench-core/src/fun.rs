use crate::error::Result;
use crate::option::Options;
use num_traits::Zero;
use std::ops;

/// Arithmetic capabilities an algorithm may rely on from its scalar type.
///
/// Algorithms are written against this trait only, never against a concrete float type, so that
/// differentiation engines can substitute their own recording or dual-number scalars.
pub trait Scalar:
    Clone + Zero + ops::Add<Output = Self> + ops::Sub<Output = Self> + ops::Mul<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone + Zero + ops::Add<Output = T> + ops::Sub<Output = T> + ops::Mul<Output = T>
{
}

/// Function object protocol shared by algorithms and by the adapters that wrap them.
///
/// A function object is set up once from [`Options`], then evaluated any number of times on
/// argument vectors of length [`domain`](Self::domain), each evaluation returning a vector of
/// length [`range`](Self::range). Calling `setup` again reconfigures the object.
///
/// # Example
///
/// ```
/// use adbench_core::{check_dimension, Error, FunObj, Options, Result};
///
/// #[derive(Default)]
/// struct Sum {
///     option: Option<Options>,
///     n: usize,
/// }
///
/// impl FunObj<f64> for Sum {
///     fn setup(&mut self, option: &Options) -> Result<()> {
///         self.n = option.get_usize("n_arg")?;
///         self.option = Some(option.clone());
///         Ok(())
///     }
///
///     fn option(&self) -> Result<&Options> {
///         self.option.as_ref().ok_or(Error::NotInitialized)
///     }
///
///     fn domain(&self) -> Result<usize> {
///         self.option().map(|_| self.n)
///     }
///
///     fn range(&self) -> Result<usize> {
///         self.option().map(|_| 1)
///     }
///
///     fn call(&mut self, x: &[f64]) -> Result<Vec<f64>> {
///         check_dimension(self.domain()?, x.len())?;
///         Ok(vec![x.iter().sum()])
///     }
/// }
///
/// let mut sum = Sum::default();
/// assert_eq!(Err(Error::NotInitialized), sum.domain());
/// sum.setup(&Options::new(3, 0)).unwrap();
/// assert_eq!(Ok(vec![6.0]), sum.call(&[1.0, 2.0, 3.0]));
/// ```
pub trait FunObj<T> {
    /// Validates `option` and (re)configures the object.
    ///
    /// On failure, the object is left exactly as it was before the call.
    fn setup(&mut self, option: &Options) -> Result<()>;

    /// Options of the last successful setup.
    fn option(&self) -> Result<&Options>;

    /// Length of the argument vector.
    fn domain(&self) -> Result<usize>;

    /// Length of the result vector.
    fn range(&self) -> Result<usize>;

    /// Evaluates the function at `x`.
    fn call(&mut self, x: &[T]) -> Result<Vec<T>>;
}

impl<T, F: ?Sized + FunObj<T>> FunObj<T> for Box<F> {
    fn setup(&mut self, option: &Options) -> Result<()> {
        F::setup(self, option)
    }

    fn option(&self) -> Result<&Options> {
        F::option(self)
    }

    fn domain(&self) -> Result<usize> {
        F::domain(self)
    }

    fn range(&self) -> Result<usize> {
        F::range(self)
    }

    fn call(&mut self, x: &[T]) -> Result<Vec<T>> {
        F::call(self, x)
    }
}
