pub mod word;

use std::fmt::Debug;
use std::hash::Hash;

use crate::modulus::word::Word;

/// Compile-time modulus: a zero-sized marker carrying the storage word and
/// the constant the arithmetic reduces by.
///
/// Implementors are minted with [`define_modulus!`]; the constant is part of
/// the type, so two residues with different moduli never mix.
pub trait Modulus: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    type Word: Word;
    /// The base of the arithmetic. Must be non-zero.
    const Q: Self::Word;
}

/// Declares a zero-sized modulus marker type.
///
/// ```
/// modint::define_modulus!(pub Mod251: u8 = 251);
/// ```
#[macro_export]
macro_rules! define_modulus {
    ($(#[$meta:meta])* $vis:vis $name:ident: $word:ty = $q:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::modulus::Modulus for $name {
            type Word = $word;
            const Q: $word = $q;
        }

        const _: () = {
            let q: $word = $q;
            assert!(q != 0, "modulus must be non-zero");
        };
    };
}

define_modulus!(
    /// The NTT-friendly prime 119 * 2^23 + 1.
    pub Mod998244353: u32 = 998_244_353
);

define_modulus!(
    /// The prime 10^9 + 7.
    pub Mod1000000007: u32 = 1_000_000_007
);
