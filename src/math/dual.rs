//! Forward-mode automatic differentiation.
//!
//! A [`Dual`] number carries a value together with its partial derivatives with respect to
//! `N` independent seed variables. Every arithmetic operation and elementary function
//! propagates the derivatives by the chain rule, so any code written generically over
//! [`Scalar`] yields exact gradients when instantiated with `Dual<N>` and plain values when
//! instantiated with `f64`.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric type the potential code is generic over.
///
/// Implemented by `f64` for plain evaluation and by [`Dual`] for evaluation with derivatives.
/// Comparisons and branches must go through [`Scalar::value`], since a branch decision is
/// not itself differentiable.
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Lifts a constant (zero derivative) into the scalar type.
    fn constant(value: f64) -> Self;

    /// The primal value, with derivative information discarded.
    fn value(self) -> f64;

    /// The exponential `e^self`.
    fn exp(self) -> Self;

    /// The square root. Its derivative diverges at zero.
    fn sqrt(self) -> Self;

    /// Raises the value to an integer power `n`, which may be negative.
    fn powi(self, n: i32) -> Self;

    /// The reciprocal `1 / self`.
    fn recip(self) -> Self;
}

impl Scalar for f64 {
    #[inline(always)]
    fn constant(value: f64) -> Self {
        value
    }

    #[inline(always)]
    fn value(self) -> f64 {
        self
    }

    #[inline(always)]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline(always)]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline(always)]
    fn recip(self) -> Self {
        f64::recip(self)
    }
}

/// A dual number with `N` tangent components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual<const N: usize> {
    /// The primal value.
    pub re: f64,
    /// Partial derivatives of the value with respect to each seed variable.
    pub eps: [f64; N],
}

impl<const N: usize> Dual<N> {
    /// Creates the `index`-th independent variable with the given value.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    pub fn variable(re: f64, index: usize) -> Self {
        let mut eps = [0.0; N];
        eps[index] = 1.0;
        Self { re, eps }
    }

    /// Lifts a fixed-size array of values into seeded variables `offset..offset + M`.
    pub fn variables<const M: usize>(values: [f64; M], offset: usize) -> [Self; M] {
        std::array::from_fn(|k| Self::variable(values[k], offset + k))
    }

    /// Applies an elementary function with value `f` and derivative `df` at `self.re`.
    #[inline]
    fn chain(self, f: f64, df: f64) -> Self {
        Self {
            re: f,
            eps: self.eps.map(|e| e * df),
        }
    }
}

impl<const N: usize> Scalar for Dual<N> {
    #[inline]
    fn constant(value: f64) -> Self {
        Self {
            re: value,
            eps: [0.0; N],
        }
    }

    #[inline]
    fn value(self) -> f64 {
        self.re
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    #[inline]
    fn sqrt(self) -> Self {
        let s = self.re.sqrt();
        self.chain(s, 0.5 / s)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        self.chain(self.re.powi(n), n as f64 * self.re.powi(n - 1))
    }

    #[inline]
    fn recip(self) -> Self {
        let inv = self.re.recip();
        self.chain(inv, -inv * inv)
    }
}

impl<const N: usize> Add for Dual<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] + rhs.eps[k]),
        }
    }
}

impl<const N: usize> Sub for Dual<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] - rhs.eps[k]),
        }
    }
}

impl<const N: usize> Mul for Dual<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re,
            eps: std::array::from_fn(|k| self.eps[k] * rhs.re + self.re * rhs.eps[k]),
        }
    }
}

impl<const N: usize> Div for Dual<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let inv = rhs.re.recip();
        let re = self.re / rhs.re;
        Self {
            re,
            eps: std::array::from_fn(|k| (self.eps[k] - re * rhs.eps[k]) * inv),
        }
    }
}

impl<const N: usize> Neg for Dual<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            eps: self.eps.map(|e| -e),
        }
    }
}

impl<const N: usize> Add<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self {
            re: self.re + rhs,
            eps: self.eps,
        }
    }
}

impl<const N: usize> Sub<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self {
            re: self.re - rhs,
            eps: self.eps,
        }
    }
}

impl<const N: usize> Mul<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            eps: self.eps.map(|e| e * rhs),
        }
    }
}

impl<const N: usize> Div<f64> for Dual<N> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        let inv = rhs.recip();
        Self {
            re: self.re / rhs,
            eps: self.eps.map(|e| e * inv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_variable_seeding() {
        let x = Dual::<3>::variable(2.5, 1);
        assert_eq!(x.re, 2.5);
        assert_eq!(x.eps, [0.0, 1.0, 0.0]);

        let c = Dual::<3>::constant(4.0);
        assert_eq!(c.eps, [0.0; 3]);
    }

    #[test]
    fn test_product_and_quotient_rules() {
        let [x, y] = Dual::<2>::variables([3.0, 2.0], 0);

        let p = x * y;
        assert_relative_eq!(p.re, 6.0);
        assert_relative_eq!(p.eps[0], 2.0);
        assert_relative_eq!(p.eps[1], 3.0);

        let q = x / y;
        assert_relative_eq!(q.re, 1.5);
        assert_relative_eq!(q.eps[0], 0.5);
        assert_relative_eq!(q.eps[1], -0.75);
    }

    #[test]
    fn test_elementary_functions() {
        let x = Dual::<1>::variable(1.7, 0);

        assert_relative_eq!(x.exp().eps[0], 1.7_f64.exp(), epsilon = 1e-14);
        assert_relative_eq!(x.sqrt().eps[0], 0.5 / 1.7_f64.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(x.recip().eps[0], -1.0 / (1.7 * 1.7), epsilon = 1e-14);
        assert_relative_eq!(x.powi(6).eps[0], 6.0 * 1.7_f64.powi(5), epsilon = 1e-12);
        assert_relative_eq!(x.powi(-3).eps[0], -3.0 * 1.7_f64.powi(-4), epsilon = 1e-14);
    }

    #[test]
    fn test_composite_matches_hand_derivative() {
        // d/dx [exp(-2x) / x^2] = exp(-2x) * (-2/x^2 - 2/x^3)
        let x0 = 0.8;
        let x = Dual::<1>::variable(x0, 0);
        let f = (x * -2.0).exp() / x.powi(2);

        let expected = (-2.0 * x0).exp() * (-2.0 / x0.powi(2) - 2.0 / x0.powi(3));
        assert_relative_eq!(f.eps[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_f64_scalar_is_plain_arithmetic() {
        let x: f64 = Scalar::constant(2.0);
        assert_eq!(Scalar::value(x), 2.0);
        assert_eq!(Scalar::powi(x, 3), 8.0);
        assert_eq!(Scalar::recip(x), 0.5);
    }
}
