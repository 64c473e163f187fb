use crate::dual::Dual;
use adbench_core::{check_dimension, ConfigurationError, Error, FunObj, Options, Result, Scalar};
use num_traits::One;
use std::marker::PhantomData;

/// Gradient of the last output of a function object, by forward-mode differentiation.
///
/// The wrapped object is evaluated on [`Dual`] numbers, once per input direction. The adapter
/// is itself a function object, with `domain() == range() == n_arg` of the wrapped one.
///
/// # Example
///
/// ```
/// use adbench_algo::DetByMinor;
/// use adbench_core::{FunObj, Options};
/// use adbench_gradient::{Dual, ForwardGradient};
///
/// let mut grad = ForwardGradient::<_, f64>::new(DetByMinor::<Dual<f64>>::new());
/// grad.setup(&Options::new(4, 0)).unwrap();
/// // d det / dx for [[a, b], [c, d]] is [d, -c, -b, a]
/// assert_eq!(Ok(vec![4.0, -3.0, -2.0, 1.0]), grad.call(&[1.0, 2.0, 3.0, 4.0]));
/// ```
#[derive(Debug, Clone)]
pub struct ForwardGradient<F, T> {
    algo: F,
    shape: Option<(usize, usize)>,
    __scalar: PhantomData<fn(&[T]) -> Vec<T>>,
}

impl<F: Default, T> Default for ForwardGradient<F, T> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F, T> ForwardGradient<F, T> {
    pub fn new(algo: F) -> Self {
        Self {
            algo,
            shape: None,
            __scalar: PhantomData,
        }
    }

    /// The function object being differentiated.
    pub fn wrapped(&self) -> &F {
        &self.algo
    }

    fn shape(&self) -> Result<(usize, usize)> {
        self.shape.ok_or(Error::NotInitialized)
    }
}

impl<T, F> FunObj<T> for ForwardGradient<F, T>
where
    T: Scalar + One,
    F: Clone + FunObj<Dual<T>>,
{
    fn setup(&mut self, option: &Options) -> Result<()> {
        let mut algo = self.algo.clone();
        algo.setup(option)?;
        let n = algo.domain()?;
        let m = algo.range()?;
        if m == 0 {
            return Err(ConfigurationError::NoOutputs.into());
        }
        log::debug!("forward_gradient::setup: domain={n} range={m}");
        self.algo = algo;
        self.shape = Some((n, m));
        Ok(())
    }

    fn option(&self) -> Result<&Options> {
        self.shape()?;
        self.algo.option()
    }

    fn domain(&self) -> Result<usize> {
        self.shape().map(|(n, _)| n)
    }

    fn range(&self) -> Result<usize> {
        self.shape().map(|(n, _)| n)
    }

    fn call(&mut self, x: &[T]) -> Result<Vec<T>> {
        let (n, m) = self.shape()?;
        check_dimension(n, x.len())?;
        log::trace!("forward_gradient::call: {n} directions");

        let mut ax: Vec<_> = x.iter().cloned().map(Dual::constant).collect();
        let mut g = Vec::with_capacity(n);
        for k in 0..n {
            ax[k].deriv = T::one();
            let ay = self.algo.call(&ax)?;
            check_dimension(m, ay.len())?;
            g.push(ay[m - 1].deriv.clone());
            ax[k].deriv = T::zero();
        }
        Ok(g)
    }
}
