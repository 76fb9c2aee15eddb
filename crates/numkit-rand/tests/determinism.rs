use numkit_rand::Sampler;
use rand::RngCore;

#[test]
fn same_seed_emits_identical_integer_sequences() {
    let mut a = Sampler::from_seed(1234);
    let mut b = Sampler::from_seed(1234);

    let seq_a: Vec<i64> = (0..100).map(|_| a.uniform_between(-50, 50)).collect();
    let seq_b: Vec<i64> = (0..100).map(|_| b.uniform_between(-50, 50)).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn same_seed_emits_identical_real_sequences() {
    let mut a = Sampler::from_seed(99);
    let mut b = Sampler::from_seed(99);

    let seq_a: Vec<f64> = (0..100).map(|_| a.uniformf_between(-1.0, 1.0)).collect();
    let seq_b: Vec<f64> = (0..100).map(|_| b.uniformf_between(-1.0, 1.0)).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn seed_42_triple_is_reproducible() {
    let mut a = Sampler::from_seed(42);
    let mut b = Sampler::from_seed(42);

    let triple_a = [
        a.uniform_between(0, 100),
        a.uniform_between(0, 100),
        a.uniform_between(0, 100),
    ];
    let triple_b = [
        b.uniform_between(0, 100),
        b.uniform_between(0, 100),
        b.uniform_between(0, 100),
    ];

    assert_eq!(triple_a, triple_b);
}

#[test]
fn different_seeds_diverge() {
    let mut a = Sampler::from_seed(1);
    let mut b = Sampler::from_seed(2);

    let seq_a: Vec<i64> = (0..100).map(|_| a.uniform(1_000_000)).collect();
    let seq_b: Vec<i64> = (0..100).map(|_| b.uniform(1_000_000)).collect();

    assert_ne!(seq_a, seq_b);
}

#[test]
fn entropy_seeded_samplers_are_independent() {
    let mut a = Sampler::new();
    let mut b = Sampler::default();

    // 64 draws over a million-value range colliding throughout is
    // beyond astronomically unlikely for independent streams.
    let seq_a: Vec<i64> = (0..64).map(|_| a.uniform(1_000_000)).collect();
    let seq_b: Vec<i64> = (0..64).map(|_| b.uniform(1_000_000)).collect();

    assert_ne!(seq_a, seq_b);
}

#[test]
fn raw_engine_access_is_deterministic_too() {
    let mut a = Sampler::from_seed(7);
    let mut b = Sampler::from_seed(7);

    let words_a: Vec<u64> = (0..16).map(|_| a.next_u64()).collect();
    let words_b: Vec<u64> = (0..16).map(|_| b.next_u64()).collect();

    assert_eq!(words_a, words_b);
}
