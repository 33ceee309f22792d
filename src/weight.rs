//! Cost types a search can accumulate.
//!
//! A weight must be non-negative, totally ordered and additive. Addition is
//! always checked: a sum that does not fit is reported as `None` and the search
//! treats the successor as infeasible instead of wrapping.

use core::cmp::Ordering;
use core::fmt;

use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

pub trait Weight: Copy + Ord + fmt::Debug {
    fn zero() -> Self;

    /// `None` when the sum overflows the representation.
    fn checked_add(self, rhs: Self) -> Option<Self>;
}

// Unsigned only: a negative edge weight breaks the label-setting argument.
macro_rules! unsigned_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            #[inline] fn zero() -> Self { <$t as Zero>::zero() }
            #[inline] fn checked_add(self, rhs: Self) -> Option<Self> { CheckedAdd::checked_add(&self, &rhs) }
        }
    )*};
}
unsigned_weight!(u8, u16, u32, u64, u128, usize);

/// Non-negative, finite `f32` cost.
///
/// Floats are only partially ordered; this wrapper rejects NaN, infinities and
/// negative values at construction so `total_cmp` agrees with numeric order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct FiniteCost(f32);

impl FiniteCost {
    pub const ZERO: FiniteCost = FiniteCost(0.0);

    pub fn new(value: f32) -> Option<Self> {
        // -0.0 is folded into +0.0 so that total_cmp sees one zero.
        if value.is_finite() && value >= 0.0 { Some(FiniteCost(value + 0.0)) } else { None }
    }

    #[inline]
    pub fn get(self) -> f32 { self.0 }
}

impl Eq for FiniteCost {}

impl Ord for FiniteCost {
    fn cmp(&self, other: &Self) -> Ordering { self.0.total_cmp(&other.0) }
}

impl PartialOrd for FiniteCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl Weight for FiniteCost {
    #[inline] fn zero() -> Self { FiniteCost::ZERO }
    #[inline] fn checked_add(self, rhs: Self) -> Option<Self> { FiniteCost::new(self.0 + rhs.0) }
}

impl TryFrom<f32> for FiniteCost {
    type Error = InvalidCost;

    fn try_from(value: f32) -> Result<Self, Self::Error> { FiniteCost::new(value).ok_or(InvalidCost(value)) }
}

impl From<FiniteCost> for f32 {
    fn from(cost: FiniteCost) -> f32 { cost.0 }
}

impl fmt::Display for FiniteCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("cost must be finite and non-negative, got {0}")]
pub struct InvalidCost(pub f32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_overflow_is_none() {
        assert_eq!(Weight::checked_add(u8::MAX, 1u8), None);
        assert_eq!(Weight::checked_add(3u32, 4u32), Some(7));
        assert_eq!(<u64 as Weight>::zero(), 0);
    }

    #[test]
    fn finite_cost_rejects_bad_values() {
        assert!(FiniteCost::new(f32::NAN).is_none());
        assert!(FiniteCost::new(f32::INFINITY).is_none());
        assert!(FiniteCost::new(-1.0).is_none());
        assert_eq!(FiniteCost::new(-0.0), Some(FiniteCost::ZERO));
        assert!(FiniteCost::try_from(-2.5).is_err());
    }

    #[test]
    fn finite_cost_sum_past_max_is_infeasible() {
        let big = FiniteCost::new(f32::MAX).unwrap();
        assert_eq!(big.checked_add(big), None);
        let a = FiniteCost::new(1.5).unwrap();
        assert_eq!(a.checked_add(a).map(FiniteCost::get), Some(3.0));
        assert!(a < FiniteCost::new(2.0).unwrap());
    }
}
