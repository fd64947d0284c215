use itertools::izip;
use modint::{define_modulus, ModInt};
use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

define_modulus!(pub Mod251: u8 = 251);
define_modulus!(
    /// The 61-bit NTT-friendly prime 2^61 - 2^21 + 1.
    pub ModQ61: u64 = 0x1fffffffffe00001
);

define_modulus!(
    /// The largest 64-bit prime, 2^64 - 59.
    pub ModP64: u64 = 0xffffffffffffffc5
);

const Q61: u64 = 0x1fffffffffe00001;
const P64: u64 = 0xffffffffffffffc5;

fn reduced_u64(rng: &mut ChaCha8Rng) -> u64 {
    rng.next_u64() % Q61
}

#[test]
fn u64_operations_match_the_wide_oracle() {
    let seed: [u8; 32] = [0; 32];
    let mut rng = ChaCha8Rng::from_seed(seed);

    let a: Vec<u64> = (0..1024).map(|_| reduced_u64(&mut rng)).collect();
    let b: Vec<u64> = (0..1024).map(|_| reduced_u64(&mut rng)).collect();

    izip!(&a, &b).for_each(|(&x, &y)| {
        let xm = ModInt::<ModQ61>::new_unchecked(x);
        let ym = ModInt::<ModQ61>::new_unchecked(y);
        let q = Q61 as u128;

        assert_eq!((xm + ym).value() as u128, (x as u128 + y as u128) % q);
        assert_eq!((xm - ym).value() as u128, (x as u128 + q - y as u128) % q);
        assert_eq!((xm * ym).value() as u128, (x as u128 * y as u128) % q);

        let mut s = xm;
        s += ym;
        assert_eq!(s, xm + ym);
        let mut s = xm;
        s -= ym;
        assert_eq!(s, xm - ym);
        let mut s = xm;
        s *= ym;
        assert_eq!(s, xm * ym);
    });
}

#[test]
fn u64_checked_construction_matches_the_oracle() {
    let seed: [u8; 32] = [1; 32];
    let mut rng = ChaCha8Rng::from_seed(seed);

    for _ in 0..1024 {
        let v = rng.next_u64();
        assert_eq!(ModInt::<ModQ61>::new(v).value(), v % Q61);
    }
    assert_eq!(ModInt::<ModQ61>::new(Q61).value(), 0);
    assert_eq!(ModInt::<ModQ61>::new(u64::MAX).value(), u64::MAX % Q61);
}

// With a u8 word the raw product of two reduced values does not fit the
// word, so this fails unless the operands are widened first.
#[test]
fn u8_products_are_widened() {
    for x in 0u16..251 {
        for y in 0u16..251 {
            let xm = ModInt::<Mod251>::new_unchecked(x as u8);
            let ym = ModInt::<Mod251>::new_unchecked(y as u8);
            assert_eq!((xm * ym).value() as u16, x * y % 251);
            assert_eq!((xm + ym).value() as u16, (x + y) % 251);
            assert_eq!((xm - ym).value() as u16, (x + 251 - y) % 251);
        }
    }
}

#[test]
fn u8_signed_construction_is_euclidean() {
    assert_eq!(ModInt::<Mod251>::from_signed(-1).value(), 250);
    assert_eq!(ModInt::<Mod251>::from_signed(-126).value(), 125);
    assert_eq!(ModInt::<Mod251>::from_signed(i8::MIN).value(), 123);
    assert_eq!(ModInt::<Mod251>::from_signed(i8::MAX).value(), 127);
}

// Both moduli sit above the signed half of their word, where a same-width
// signed reduction would wrap the modulus negative.
#[test]
fn signed_construction_above_the_signed_range() {
    assert_eq!(ModInt::<Mod251>::from_signed(-1).value(), 250);
    assert_eq!(ModInt::<ModP64>::from_signed(-1).value(), P64 - 1);
    assert_eq!(ModInt::<ModP64>::from_signed(0).value(), 0);
    assert_eq!(
        ModInt::<ModP64>::from_signed(i64::MIN).value(),
        P64 - (1u64 << 63)
    );
    assert_eq!(
        ModInt::<ModP64>::from_signed(i64::MAX).value(),
        (1u64 << 63) - 1
    );
}

#[test]
fn increments_walk_the_whole_residue_ring() {
    let mut x = ModInt::<Mod251>::zero();
    for expected in 0u8..251 {
        assert_eq!(x.fetch_inc().value(), expected);
    }
    assert_eq!(x.value(), 0);

    for expected in (0u8..251).rev() {
        assert_eq!(x.dec().value(), expected);
    }
    assert_eq!(x.value(), 0);
}
