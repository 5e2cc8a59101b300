use rand::seq::SliceRandom;
use rand::Rng;

/// Draws `count` independent values, uniform over the whole `i32` range.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<i32> {
    let mut values = Vec::with_capacity(count);
    for _i in 0..count {
        values.push(rng.gen::<i32>());
    }
    values
}

/// Returns a uniformly random permutation of `values`, leaving the input untouched.
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, values: &[i32]) -> Vec<i32> {
    let mut out = values.to_vec();
    out.shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(&mut rng, 0).len(), 0);
        assert_eq!(generate(&mut rng, 10).len(), 10);
        assert_eq!(generate(&mut rng, 50000).len(), 50000);
    }

    #[test]
    fn covers_both_signs() {
        let mut rng = StdRng::seed_from_u64(2);
        let values = generate(&mut rng, 1000);
        assert!(values.iter().any(|&v| v < 0));
        assert!(values.iter().any(|&v| v > 0));
    }

    #[test]
    fn shuffle_reorders_large_sets() {
        let mut rng = StdRng::seed_from_u64(3);
        let values = generate(&mut rng, 1000);
        let permuted = shuffled(&mut rng, &values);
        assert_ne!(values, permuted);
    }

    proptest! {
        #[test]
        fn shuffle_is_a_permutation(values in prop::collection::vec(any::<i32>(), 0..512), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut permuted = shuffled(&mut rng, &values);
            let mut original = values.clone();
            permuted.sort_unstable();
            original.sort_unstable();
            prop_assert_eq!(permuted, original);
        }
    }
}
