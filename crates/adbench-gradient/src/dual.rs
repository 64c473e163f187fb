use num_traits::{One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// Forward-mode dual number: a value along with its derivative in one direction.
///
/// Arithmetic follows the usual rules, `(a + a'ε) * (b + b'ε) = ab + (a'b + ab')ε`.
///
/// # Example
///
/// ```
/// use adbench_gradient::Dual;
///
/// // f(x) = x * x - 3x at x = 2
/// let x = Dual::variable(2.0);
/// let f = x * x - Dual::constant(3.0) * x;
/// assert_eq!(-2.0, f.value);
/// assert_eq!(1.0, f.deriv);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Dual<T> {
    pub value: T,
    pub deriv: T,
}

impl<T> Dual<T> {
    pub const fn new(value: T, deriv: T) -> Self {
        Self { value, deriv }
    }
}

impl<T: Zero> Dual<T> {
    /// A value that does not depend on the differentiation direction.
    pub fn constant(value: T) -> Self {
        Self::new(value, T::zero())
    }
}

impl<T: One> Dual<T> {
    /// The variable being differentiated with respect to.
    pub fn variable(value: T) -> Self {
        Self::new(value, T::one())
    }
}

impl<T: Zero> From<T> for Dual<T> {
    fn from(value: T) -> Self {
        Self::constant(value)
    }
}

impl<T: Add<Output = T>> Add<Self> for Dual<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value, self.deriv + rhs.deriv)
    }
}

impl<T: Sub<Output = T>> Sub<Self> for Dual<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value, self.deriv - rhs.deriv)
    }
}

impl<T: Clone + Add<Output = T> + Mul<Output = T>> Mul<Self> for Dual<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let deriv = self.deriv * rhs.value.clone() + self.value.clone() * rhs.deriv;
        Self::new(self.value * rhs.value, deriv)
    }
}

impl<T: Neg<Output = T>> Neg for Dual<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value, -self.deriv)
    }
}

impl<T: Zero> Zero for Dual<T> {
    fn zero() -> Self {
        Self::constant(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero() && self.deriv.is_zero()
    }
}

impl<T: Clone + Zero + One> One for Dual<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}
