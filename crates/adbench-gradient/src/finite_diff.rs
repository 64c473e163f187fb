//! Gradients by central finite differences, for checking other gradient adapters.
use adbench_core::{check_dimension, ConfigurationError, Error, FunObj, Options, Result};
use num_traits::Float;
use std::marker::PhantomData;

/// Step used when the options do not set `"step"`.
pub const DEFAULT_STEP: f64 = 1e-6;

#[derive(Debug, Clone, Copy)]
struct Shape<T> {
    n: usize,
    m: usize,
    step: T,
}

/// Gradient of the last output of a function object, approximated by central differences.
///
/// Each partial derivative costs two evaluations of the wrapped object:
/// `(f(x + h e_k) - f(x - h e_k)) / 2h`, with `h` read from the `"step"` option.
#[derive(Debug, Clone)]
pub struct CentralDifference<F, T> {
    algo: F,
    shape: Option<Shape<T>>,
    __scalar: PhantomData<fn(&[T]) -> Vec<T>>,
}

impl<F: Default, T> Default for CentralDifference<F, T> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F, T> CentralDifference<F, T> {
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
}

impl<F, T: Copy> CentralDifference<F, T> {
    fn shape(&self) -> Result<Shape<T>> {
        self.shape.ok_or(Error::NotInitialized)
    }
}

fn read_step<T: Float>(option: &Options) -> Result<T, ConfigurationError> {
    let step = option.get_f64_or("step", DEFAULT_STEP)?;
    let out_of_range = || ConfigurationError::OutOfRange {
        key: "step".to_string(),
        value: step.to_string(),
        reason: "must be finite and positive",
    };
    if !step.is_finite() || step <= 0.0 {
        return Err(out_of_range());
    }
    match T::from(step) {
        Some(h) if h > T::zero() => Ok(h),
        _ => Err(out_of_range()),
    }
}

impl<T, F> FunObj<T> for CentralDifference<F, T>
where
    T: Float,
    F: Clone + FunObj<T>,
{
    fn setup(&mut self, option: &Options) -> Result<()> {
        let step = read_step(option)?;
        let mut algo = self.algo.clone();
        algo.setup(option)?;
        let n = algo.domain()?;
        let m = algo.range()?;
        if m == 0 {
            return Err(ConfigurationError::NoOutputs.into());
        }
        log::debug!("central_difference::setup: domain={n} range={m}");
        self.algo = algo;
        self.shape = Some(Shape { n, m, step });
        Ok(())
    }

    fn option(&self) -> Result<&Options> {
        self.shape()?;
        self.algo.option()
    }

    fn domain(&self) -> Result<usize> {
        self.shape().map(|s| s.n)
    }

    fn range(&self) -> Result<usize> {
        self.shape().map(|s| s.n)
    }

    fn call(&mut self, x: &[T]) -> Result<Vec<T>> {
        let Shape { n, m, step } = self.shape()?;
        check_dimension(n, x.len())?;
        log::trace!("central_difference::call: {n} directions, step={:?}", step.to_f64());

        let mut perturbed = x.to_vec();
        let mut g = Vec::with_capacity(n);
        for k in 0..n {
            perturbed[k] = x[k] + step;
            let plus = self.algo.call(&perturbed)?;
            perturbed[k] = x[k] - step;
            let minus = self.algo.call(&perturbed)?;
            perturbed[k] = x[k];

            check_dimension(m, plus.len())?;
            check_dimension(m, minus.len())?;
            g.push((plus[m - 1] - minus[m - 1]) / (step + step));
        }
        Ok(g)
    }
}
