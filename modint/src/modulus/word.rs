use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use num_traits::{PrimInt, Unsigned};

/// Unsigned machine word usable as the storage of a residue.
///
/// Pairs the word with a type twice as wide, able to hold (q-1)^2 for any
/// modulus q of this width, and with the signed type of the same width.
pub trait Word:
    PrimInt + Unsigned + Default + Debug + Display + FromStr + Hash + Send + Sync + 'static
{
    /// Holds (q-1)^2 without overflow for any q of this width.
    type Wide: PrimInt + Unsigned;
    /// Same-width signed type, accepted by the signed constructors.
    type Signed: PrimInt;

    fn widen(self) -> Self::Wide;
    fn narrow(wide: Self::Wide) -> Self;

    /// Maps v to its non-negative remainder in [0, q), for any q of this
    /// width.
    fn reduce_signed(v: Self::Signed, q: Self) -> Self;
}

pub trait ReduceOnce: Sized {
    /// Returns self-q if self >= q else self.
    /// User must ensure that self < 2q.
    fn reduce_once(self, q: Self) -> Self;
}

impl<O: PrimInt> ReduceOnce for O {
    #[inline(always)]
    fn reduce_once(self, q: Self) -> Self {
        if self >= q {
            self - q
        } else {
            self
        }
    }
}

macro_rules! impl_word {
    ($($word:ty => ($wide:ty, $signed:ty, $swide:ty)),* $(,)?) => {$(
        impl Word for $word {
            type Wide = $wide;
            type Signed = $signed;

            #[inline(always)]
            fn widen(self) -> $wide {
                self as $wide
            }

            #[inline(always)]
            fn narrow(wide: $wide) -> $word {
                wide as $word
            }

            // Reduced through the next signed width, so moduli in the upper
            // half of the word do not wrap negative.
            #[inline(always)]
            fn reduce_signed(v: $signed, q: $word) -> $word {
                (v as $swide).rem_euclid(q as $swide) as $word
            }
        }
    )*};
}

impl_word! {
    u8 => (u16, i8, i16),
    u16 => (u32, i16, i32),
    u32 => (u64, i32, i64),
    u64 => (u128, i64, i128),
}
