use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::modulus::word::{ReduceOnce, Word};
use crate::modulus::Modulus;

/// An integer held reduced modulo the compile-time constant `M::Q`.
///
/// Every public constructor and operation leaves the stored value in
/// `[0, M::Q)`; intermediates are carried in the word's wide type so that no
/// operation overflows, however close the modulus sits to the word's range.
pub struct ModInt<M: Modulus> {
    value: M::Word,
    _marker: PhantomData<M>,
}

impl<M: Modulus> ModInt<M> {
    #[inline(always)]
    fn raw(value: M::Word) -> Self {
        ModInt {
            value,
            _marker: PhantomData,
        }
    }

    /// The zero residue.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::raw(M::Word::zero())
    }

    /// Stores `v % M::Q`. Total for every `v` of the storage word.
    #[inline(always)]
    pub fn new(v: M::Word) -> Self {
        Self::raw(v % M::Q)
    }

    /// Stores `v` verbatim, trusting the caller that it is already reduced.
    ///
    /// Fast path for values an operation has already brought into
    /// `[0, M::Q)`; skipping the reduction on an unreduced value breaks the
    /// type's invariant.
    #[inline(always)]
    pub fn new_unchecked(v: M::Word) -> Self {
        debug_assert!(v < M::Q, "unreduced value: {} >= {}", v, M::Q);
        Self::raw(v)
    }

    /// Maps a signed value to its non-negative remainder, so
    /// `from_signed(-1)` is `M::Q - 1`.
    #[inline(always)]
    pub fn from_signed(v: <M::Word as Word>::Signed) -> Self {
        Self::raw(M::Word::reduce_signed(v, M::Q))
    }

    /// The stored value, as-is.
    #[inline(always)]
    pub fn value(self) -> M::Word {
        self.value
    }

    #[inline(always)]
    pub fn modulus() -> M::Word {
        M::Q
    }

    /// Adds one and returns the updated value.
    #[inline(always)]
    pub fn inc(&mut self) -> Self {
        self.value = Self::add_words(self.value, M::Word::one());
        *self
    }

    /// Adds one and returns the value held before the call.
    #[inline(always)]
    pub fn fetch_inc(&mut self) -> Self {
        let prev = *self;
        self.inc();
        prev
    }

    /// Subtracts one and returns the updated value.
    #[inline(always)]
    pub fn dec(&mut self) -> Self {
        self.value = Self::sub_words(self.value, M::Word::one());
        *self
    }

    /// Subtracts one and returns the value held before the call.
    #[inline(always)]
    pub fn fetch_dec(&mut self) -> Self {
        let prev = *self;
        self.dec();
        prev
    }

    // Both operands reduced; the sum is below 2q.
    #[inline(always)]
    fn add_words(a: M::Word, b: M::Word) -> M::Word {
        let q = M::Q.widen();
        M::Word::narrow((a.widen() + b.widen()).reduce_once(q))
    }

    // a + q - b stays in (0, 2q), so the intermediate never goes negative.
    // Shared by the binary and compound subtract.
    #[inline(always)]
    fn sub_words(a: M::Word, b: M::Word) -> M::Word {
        let q = M::Q.widen();
        M::Word::narrow((a.widen() + q - b.widen()).reduce_once(q))
    }

    // The product of two reduced values is at most (q-1)^2, which the wide
    // type holds by contract.
    #[inline(always)]
    fn mul_words(a: M::Word, b: M::Word) -> M::Word {
        let q = M::Q.widen();
        M::Word::narrow((a.widen() * b.widen()) % q)
    }
}

impl<M: Modulus> Clone for ModInt<M> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: Modulus> Copy for ModInt<M> {}

impl<M: Modulus> Default for ModInt<M> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}

impl<M: Modulus> PartialEq for ModInt<M> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<M: Modulus> Eq for ModInt<M> {}

/// Plain numeric ordering of the reduced representatives; no modular
/// ordering is implied.
impl<M: Modulus> Ord for ModInt<M> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<M: Modulus> PartialOrd for ModInt<M> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M: Modulus> std::hash::Hash for ModInt<M> {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<M: Modulus> Add for ModInt<M> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(Self::add_words(self.value, rhs.value))
    }
}

impl<M: Modulus> Sub for ModInt<M> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::new_unchecked(Self::sub_words(self.value, rhs.value))
    }
}

impl<M: Modulus> Mul for ModInt<M> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::new_unchecked(Self::mul_words(self.value, rhs.value))
    }
}

impl<M: Modulus> AddAssign for ModInt<M> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.value = Self::add_words(self.value, rhs.value);
    }
}

impl<M: Modulus> SubAssign for ModInt<M> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.value = Self::sub_words(self.value, rhs.value);
    }
}

impl<M: Modulus> MulAssign for ModInt<M> {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        self.value = Self::mul_words(self.value, rhs.value);
    }
}

// Operators taking the raw storage word; the operand is reduced first.
// Spelled per word so the impls cannot overlap the residue-residue ones.
macro_rules! impl_word_rhs {
    ($($word:ty),* $(,)?) => {$(
        impl<M: Modulus<Word = $word>> Add<$word> for ModInt<M> {
            type Output = Self;
            #[inline(always)]
            fn add(self, rhs: $word) -> Self {
                self + Self::new(rhs)
            }
        }

        impl<M: Modulus<Word = $word>> Sub<$word> for ModInt<M> {
            type Output = Self;
            #[inline(always)]
            fn sub(self, rhs: $word) -> Self {
                self - Self::new(rhs)
            }
        }

        impl<M: Modulus<Word = $word>> Mul<$word> for ModInt<M> {
            type Output = Self;
            #[inline(always)]
            fn mul(self, rhs: $word) -> Self {
                self * Self::new(rhs)
            }
        }

        impl<M: Modulus<Word = $word>> AddAssign<$word> for ModInt<M> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $word) {
                *self += Self::new(rhs);
            }
        }

        impl<M: Modulus<Word = $word>> SubAssign<$word> for ModInt<M> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $word) {
                *self -= Self::new(rhs);
            }
        }

        impl<M: Modulus<Word = $word>> MulAssign<$word> for ModInt<M> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $word) {
                *self *= Self::new(rhs);
            }
        }

        impl<M: Modulus<Word = $word>> From<$word> for ModInt<M> {
            #[inline(always)]
            fn from(v: $word) -> Self {
                Self::new(v)
            }
        }
    )*};
}

impl_word_rhs! { u8, u16, u32, u64 }

impl<M: Modulus> Sum for ModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<M: Modulus> Product for ModInt<M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(M::Word::one()), Mul::mul)
    }
}

impl<M: Modulus> fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<M: Modulus> fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Parses one storage word and reduces it; parse failures are the word
/// parser's own.
impl<M: Modulus> FromStr for ModInt<M> {
    type Err = <M::Word as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<M::Word>().map(Self::new)
    }
}
