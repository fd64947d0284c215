pub mod modulus;
pub mod residue;

pub use modulus::word::{ReduceOnce, Word};
pub use modulus::{Mod1000000007, Mod998244353, Modulus};
pub use residue::ModInt;

pub type ModInt998244353 = ModInt<Mod998244353>;
pub type ModInt1000000007 = ModInt<Mod1000000007>;
