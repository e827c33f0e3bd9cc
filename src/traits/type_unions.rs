//! Type-union traits that bound the generic array types.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::ops::wrapping::WrappingAdd;
use num_traits::PrimInt;

/// Marker + helper trait for the primitive integers `IntegerArray<T>`
/// accepts.
///
/// `PrimInt` brings `Bounded`, `Eq`, `Ord` and the bit operations; the extra
/// bounds here are what the kernels need on top: hashing for factorize,
/// display for previews, wrapping addition for the sum reduction.
pub trait Integer:
    PrimInt + WrappingAdd + Hash + Default + Debug + Display + 'static
{
    /// Arrow-style dtype tag reported by the array.
    const DTYPE: &'static str;

    fn as_usize(self) -> usize;
    fn from_usize(v: usize) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty => $dtype:literal),* $(,)?) => {
        $(
            impl Integer for $t {
                const DTYPE: &'static str = $dtype;

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }

                #[inline]
                fn from_usize(v: usize) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_integer!(
    i8 => "int8[arrow]",
    i16 => "int16[arrow]",
    i32 => "int32[arrow]",
    i64 => "int64[arrow]",
    u8 => "uint8[arrow]",
    u16 => "uint16[arrow]",
    u32 => "uint32[arrow]",
    u64 => "uint64[arrow]",
);
