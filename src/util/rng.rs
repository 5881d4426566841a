//! Random source construction
//!
//! All sampling goes through xoshiro256++, a fast non-cryptographic PRNG with
//! good statistical properties. The generator is created once by the caller
//! and passed down explicitly.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Random generator type used by the binary
pub type SampleRng = Xoshiro256PlusPlus;

/// Create the random source
///
/// With `Some(seed)` the sequence is reproducible across runs; with `None`
/// the generator is seeded from operating-system entropy.
pub fn make_rng(seed: Option<u64>) -> SampleRng {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut rng1 = make_rng(Some(12345));
        let mut rng2 = make_rng(Some(12345));

        for _ in 0..10 {
            assert_eq!(rng1.gen::<u64>(), rng2.gen::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut rng1 = make_rng(Some(1));
        let mut rng2 = make_rng(Some(2));

        let a: Vec<u64> = (0..4).map(|_| rng1.gen()).collect();
        let b: Vec<u64> = (0..4).map(|_| rng2.gen()).collect();
        assert_ne!(a, b);
    }
}
