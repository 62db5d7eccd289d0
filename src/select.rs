use rand::{distr::Alphanumeric, Rng};

use crate::{
    error::{TraitforgeError, TraitforgeResult},
    rarity::WeightedOption,
};

/// Draw one label from `options`, with probability proportional to weight.
///
/// Options are walked in declaration order; an empty set is a caller error,
/// never an empty label.
pub fn weighted_pick<'a>(
    rng: &mut impl Rng,
    options: &'a [WeightedOption],
) -> TraitforgeResult<&'a str> {
    if options.is_empty() {
        return Err(TraitforgeError::no_options("empty weighted option set"));
    }

    let total: u64 = options.iter().map(|o| u64::from(o.weight)).sum();
    if total == 0 {
        return Err(TraitforgeError::no_options(
            "weighted option set has zero total weight",
        ));
    }

    let draw = rng.random_range(0..total);
    let mut cumulative = 0u64;
    for option in options {
        cumulative += u64::from(option.weight);
        if draw < cumulative {
            return Ok(&option.label);
        }
    }

    // Unreachable: cumulative reaches `total` and draw < total.
    Ok(&options[options.len() - 1].label)
}

/// Fresh 64-bit seed: wall-clock nanos combined with an FNV-1a hash of a
/// random filler string. Not cryptographically secure.
pub fn seed_from_entropy() -> u64 {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let filler: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(20)
        .map(char::from)
        .collect();

    nanos ^ fnv1a64(filler.as_bytes())
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for &b in bytes {
        hash ^= u64::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rarity::WeightedOption;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_options_is_no_options_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = weighted_pick(&mut rng, &[]).unwrap_err();
        assert!(matches!(err, TraitforgeError::NoOptionsAvailable(_)));
    }

    #[test]
    fn single_option_always_wins() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = vec![WeightedOption::new("Only", 3)];
        for _ in 0..32 {
            assert_eq!(weighted_pick(&mut rng, &options).unwrap(), "Only");
        }
    }

    #[test]
    fn zero_weight_option_is_never_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = vec![
            WeightedOption::new("Never", 0),
            WeightedOption::new("Always", 5),
        ];
        for _ in 0..256 {
            assert_eq!(weighted_pick(&mut rng, &options).unwrap(), "Always");
        }
    }

    #[test]
    fn fixed_seed_reproduces_picks() {
        let options = vec![
            WeightedOption::new("A", 1),
            WeightedOption::new("B", 9),
            WeightedOption::new("C", 10),
        ];

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            assert_eq!(
                weighted_pick(&mut a, &options).unwrap(),
                weighted_pick(&mut b, &options).unwrap()
            );
        }
    }

    #[test]
    fn fnv1a64_matches_reference_vector() {
        // FNV-1a("a") from the reference tables.
        assert_eq!(fnv1a64(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a64(b""), 0xcbf29ce484222325);
    }

    #[test]
    fn seeds_vary_across_calls() {
        let a = seed_from_entropy();
        let b = seed_from_entropy();
        // Clock plus filler hash makes collisions on adjacent calls
        // astronomically unlikely.
        assert_ne!(a, b);
    }
}
