#[cfg(test)]
#[path = "../../../tests/unit/models/common/amount_test.rs"]
mod amount_test;

use std::ops::{Add, AddAssign, Index, Sub, SubAssign};

/// Represents a multi-dimensional load (e.g. weight and volume) as a fixed
/// size vector of signed integers. All amounts within one problem instance
/// share the same dimension.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Amount(Vec<i64>);

impl Amount {
    /// Creates a new instance of `Amount` from the given components.
    pub fn new(values: Vec<i64>) -> Self {
        Self(values)
    }

    /// Returns the additive identity of the given dimension.
    pub fn zero(size: usize) -> Self {
        Self(vec![0; size])
    }

    /// Returns the amount dimension.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Checks whether `other` fits into this amount, i.e. every component of
    /// `other` is less than or equal to the corresponding component of self.
    pub fn can_fit(&self, other: &Self) -> bool {
        debug_assert_eq!(self.0.len(), other.0.len());
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a >= b)
    }

    /// Checks whether this amount strictly dominates `other`: every component
    /// of self is strictly greater than the corresponding component of
    /// `other`. This is a partial order: two amounts can be incomparable, so
    /// it is exposed as a named predicate rather than an `Ord` impl.
    pub fn dominates(&self, other: &Self) -> bool {
        debug_assert_eq!(self.0.len(), other.0.len());
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a > b)
    }

    /// Returns the component-wise maximum of two amounts.
    pub fn component_max(&self, other: &Self) -> Self {
        debug_assert_eq!(self.0.len(), other.0.len());
        Self(self.0.iter().zip(other.0.iter()).map(|(a, b)| *a.max(b)).collect())
    }
}

impl Index<usize> for Amount {
    type Output = i64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Add<&Amount> for Amount {
    type Output = Amount;

    fn add(mut self, rhs: &Amount) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub<&Amount> for Amount {
    type Output = Amount;

    fn sub(mut self, rhs: &Amount) -> Self::Output {
        self -= rhs;
        self
    }
}

impl AddAssign<&Amount> for Amount {
    fn add_assign(&mut self, rhs: &Amount) {
        debug_assert_eq!(self.0.len(), rhs.0.len());
        self.0.iter_mut().zip(rhs.0.iter()).for_each(|(a, b)| *a += b);
    }
}

impl SubAssign<&Amount> for Amount {
    fn sub_assign(&mut self, rhs: &Amount) {
        debug_assert_eq!(self.0.len(), rhs.0.len());
        self.0.iter_mut().zip(rhs.0.iter()).for_each(|(a, b)| *a -= b);
    }
}
