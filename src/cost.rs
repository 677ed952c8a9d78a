//! Numeric contract for travel costs.
//!
//! Distances may be small integers (precomputed walking metres) or floats
//! (great-circle kilometres). Everything in this crate is generic over
//! [`Cost`], which only asks for a zero, ordering, and overflow-checked
//! addition.

use std::fmt::Debug;

/// A non-negative travel cost that supports addition and ordering.
///
/// # Examples
///
/// ```
/// use u_tour::Cost;
///
/// assert_eq!(3u32.checked_add(4), Some(7));
/// assert_eq!(u32::MAX.checked_add(1), None);
/// assert!(2.5f64.is_valid());
/// assert!(!(-1.0f64).is_valid());
/// assert!(!f64::NAN.is_valid());
/// ```
pub trait Cost: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The cost of staying put.
    const ZERO: Self;

    /// Adds two costs, returning `None` on overflow.
    ///
    /// Floating-point sums never fail here: an infinite sum simply compares
    /// greater than any finite budget.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Returns `true` if the value is usable as a distance or budget:
    /// non-negative and, for floats, finite.
    fn is_valid(&self) -> bool;
}

macro_rules! impl_cost_unsigned {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;

            fn checked_add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            fn is_valid(&self) -> bool {
                true
            }
        }
    )*};
}

macro_rules! impl_cost_signed {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0;

            fn checked_add(self, other: Self) -> Option<Self> {
                <$t>::checked_add(self, other)
            }

            fn is_valid(&self) -> bool {
                *self >= 0
            }
        }
    )*};
}

macro_rules! impl_cost_float {
    ($($t:ty),*) => {$(
        impl Cost for $t {
            const ZERO: Self = 0.0;

            fn checked_add(self, other: Self) -> Option<Self> {
                Some(self + other)
            }

            fn is_valid(&self) -> bool {
                self.is_finite() && *self >= 0.0
            }
        }
    )*};
}

impl_cost_unsigned!(u32, u64, usize);
impl_cost_signed!(i32, i64);
impl_cost_float!(f32, f64);
