use bytemuck::NoUninit;
use num_traits::{Bounded, Zero};
use std::fmt::Debug;
use std::ops::AddAssign;

/// The type of each sample in a mosaic or colour plane. Implemented for `u8`, `u16` and `u32`.
///
/// Sensor data is unsigned; 12 and 16 bit cameras are carried in `u16`.
pub trait Sample:
    Copy + Default + Debug + PartialOrd<Self> + Bounded + Zero + Send + Sync + NoUninit
{
    /// A type wide enough to sum a few hundred samples without overflow.
    type Larger: Copy + PartialOrd<Self::Larger> + AddAssign + Zero + Debug;

    /// The maximum value a sample can hold.
    const MAX_VALUE: Self;

    /// Widen the value.
    fn to_larger(self) -> Self::Larger;

    /// Narrow a widened value, saturating at [`Sample::MAX_VALUE`].
    fn clamp_from(n: Self::Larger) -> Self;

    /// Divide a widened value by a count, truncating.
    fn div_larger(n: Self::Larger, count: usize) -> Self::Larger;

    /// Convert to f64.
    fn to_f64(self) -> f64;

    /// Convert from f64, truncating toward zero.
    /// This function will clamp the value to the range of the type; NaN maps to zero.
    fn from_f64(v: f64) -> Self;

    /// Convert to u32 for intensity scaling.
    fn to_u32(self) -> u32;
}

macro_rules! declare_sample {
    ($base:ty => $larger:ty) => {
        impl Sample for $base {
            type Larger = $larger;

            const MAX_VALUE: Self = <$base>::MAX;

            #[inline(always)]
            fn to_larger(self) -> $larger {
                self as $larger
            }

            #[inline(always)]
            fn clamp_from(n: $larger) -> Self {
                if n > Self::MAX_VALUE as $larger {
                    Self::MAX_VALUE
                } else {
                    n as $base
                }
            }

            #[inline(always)]
            fn div_larger(n: $larger, count: usize) -> $larger {
                n / count as $larger
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64(v: f64) -> Self {
                // `as` truncates toward zero and saturates.
                v as $base
            }

            #[inline(always)]
            fn to_u32(self) -> u32 {
                self as u32
            }
        }
    };
}

declare_sample!(u8 => u32);
declare_sample!(u16 => u32);
declare_sample!(u32 => u64);

/// Truncating mean of a set of samples. An empty set averages to zero.
pub(crate) fn get_mean<T: Sample>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values
        .iter()
        .fold(T::Larger::zero(), |mut acc, &x| {
            acc += x.to_larger();
            acc
        });
    T::clamp_from(T::div_larger(sum, values.len()))
}

/// Saturating sum of a set of samples.
pub(crate) fn do_sum<T: Sample>(values: &[T]) -> T {
    let sum = values
        .iter()
        .fold(T::Larger::zero(), |mut acc, &x| {
            acc += x.to_larger();
            acc
        });
    T::clamp_from(sum)
}
