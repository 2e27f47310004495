use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cs::combinatorial::{
    assemble, enumerate, gray_code, product_size, sequence_count, switches, MixedRadixGray,
    Sequences,
};
use crate::error::Error;

fn random_bounds(rng: &mut StdRng) -> Vec<usize> {
    let positions = rng.gen_range(0..=5);
    (0..positions).map(|_| rng.gen_range(1..=4)).collect()
}

/// Every vector of `∏ [0, bounds[p])` in lexicographic order.
fn lexicographic_product(bounds: &[usize]) -> Vec<Vec<usize>> {
    bounds.iter().fold(vec![Vec::new()], |acc, &radix| {
        acc.into_iter()
            .flat_map(|prefix| {
                (0..radix).map(move |digit| {
                    let mut next = prefix.clone();
                    next.push(digit);
                    next
                })
            })
            .collect()
    })
}

#[test]
fn test_enumerate_random_bounds_cover_product() {
    let mut rng = StdRng::seed_from_u64(0x6a7);
    for _ in 0..50 {
        let bounds = random_bounds(&mut rng);
        let vectors = enumerate(&bounds).unwrap();

        assert_eq!(vectors.len(), bounds.iter().product::<usize>());
        assert_eq!(vectors.len(), product_size(&bounds).unwrap());
        assert!(vectors[0].iter().all(|&d| d == 0));

        let mut sorted = vectors.clone();
        sorted.sort();
        assert_eq!(sorted, lexicographic_product(&bounds), "bounds {:?}", bounds);
    }
}

#[test]
fn test_enumerate_random_bounds_unit_steps() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let bounds = random_bounds(&mut rng);
        let vectors = enumerate(&bounds).unwrap();
        for pair in vectors.windows(2) {
            let changed: Vec<usize> = (0..bounds.len())
                .filter(|&p| pair[0][p] != pair[1][p])
                .collect();
            assert_eq!(changed.len(), 1, "bounds {:?}: {:?}", bounds, pair);
            assert_eq!(pair[0][changed[0]].abs_diff(pair[1][changed[0]]), 1);
        }
    }
}

#[test]
fn test_lazy_and_switch_views_agree() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..30 {
        let bounds = random_bounds(&mut rng);
        let eager = enumerate(&bounds).unwrap();
        let lazy: Vec<Vec<usize>> = MixedRadixGray::new(&bounds).unwrap().collect();
        assert_eq!(lazy, eager);

        let mut digits = vec![0; bounds.len()];
        for (step, expected) in switches(&bounds).unwrap().zip(eager.iter().skip(1)) {
            step.apply(&mut digits);
            assert_eq!(&digits, expected);
        }
    }
}

#[test]
fn test_assemble_covers_cartesian_power() {
    for base in 1..=4 {
        for length in 1..=5 {
            let sequences = assemble(base, length).unwrap();
            assert_eq!(sequences.len(), sequence_count(base, length).unwrap());
            assert_eq!(sequences.len(), base.pow(length as u32));

            let unique: HashSet<&Vec<usize>> = sequences.iter().collect();
            assert_eq!(unique.len(), sequences.len());

            let mut sorted = sequences.clone();
            sorted.sort();
            assert_eq!(sorted, lexicographic_product(&vec![base; length]));
        }
    }
}

#[test]
fn test_assemble_matches_lazy_sequences() {
    for (base, length) in [(2, 6), (3, 3), (5, 2), (1, 7)] {
        let lazy = Sequences::new(base, length).unwrap();
        assert_eq!(lazy.len(), sequence_count(base, length).unwrap());
        assert_eq!(lazy.collect::<Vec<_>>(), assemble(base, length).unwrap());
    }
}

#[test]
fn test_binary_gray_code_is_radix_two_enumeration() {
    let codes = gray_code(4).unwrap();
    let vectors = enumerate(&[2; 4]).unwrap();
    let packed: Vec<u64> = vectors
        .iter()
        .map(|v| v.iter().enumerate().map(|(p, &bit)| (bit as u64) << p).sum::<u64>())
        .collect();
    assert_eq!(codes, packed);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert!(matches!(enumerate(&[0, 2]), Err(Error::InvalidInput(_))));
    assert!(matches!(assemble(0, 3), Err(Error::InvalidInput(_))));
    assert!(matches!(MixedRadixGray::new(&[3, 0]), Err(Error::InvalidInput(_))));
    assert!(matches!(Sequences::new(2, 0), Err(Error::InvalidInput(_))));
}
