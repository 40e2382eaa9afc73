//! Cross-variant guarantees of the LCS family.
//!
//! Every variant must agree on the LCS length (the length is unique even
//! when the subsequence is not), every output must be an order-preserving
//! subsequence of both inputs, and repeated calls must return the same
//! result.

use algolab::lcs::{brute_force, dynamic_programming, hirschberg, recursive};
use algolab::lcs::subsequence::is_subsequence;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Runs every variant on one input pair and returns the outputs.
fn all_variants(xs: &[char], ys: &[char]) -> Vec<(&'static str, Vec<char>)> {
    vec![
        ("brute_force", brute_force::lcs(xs, ys)),
        ("recursive", recursive::lcs(xs, ys).unwrap()),
        (
            "recursive_without_memo",
            recursive::lcs_without_memo(xs, ys).unwrap(),
        ),
        ("dynamic_programming", dynamic_programming::lcs(xs, ys).unwrap()),
        (
            "dynamic_programming_packed",
            dynamic_programming::lcs_packed(xs, ys).unwrap(),
        ),
        ("hirschberg", hirschberg::lcs(xs, ys)),
        ("hirschberg_indexed", hirschberg::lcs_indexed(xs, ys)),
    ]
}

fn check_pair(a: &str, b: &str, expected: Option<&str>) {
    let xs = chars(a);
    let ys = chars(b);
    let outputs = all_variants(&xs, &ys);

    let reference_len = outputs[0].1.len();
    for (name, lcs) in &outputs {
        assert!(
            is_subsequence(&xs, lcs),
            "{name}: output not a subsequence of {a:?}"
        );
        assert!(
            is_subsequence(&ys, lcs),
            "{name}: output not a subsequence of {b:?}"
        );
        assert_eq!(
            lcs.len(),
            reference_len,
            "{name}: length disagrees for {a:?}/{b:?}"
        );
        if let Some(expected) = expected {
            assert_eq!(lcs, &chars(expected), "{name}: wrong output for {a:?}/{b:?}");
        }
    }
}

#[test]
fn test_fixture_table() {
    check_pair("ABC", "XYZ", Some(""));
    check_pair("AB", "A", Some("A"));
    check_pair("AB", "B", Some("B"));
    check_pair("ABC", "A", Some("A"));
    check_pair("ABC", "AB", Some("AB"));
    check_pair("ABC", "B", Some("B"));
    check_pair("ABC", "BC", Some("BC"));
    check_pair("ABC", "C", Some("C"));
    check_pair("ABC", "AC", Some("AC"));
    check_pair("ABC", "ABC", Some("ABC"));
    check_pair("ABC", "ABCD", Some("ABC"));
    check_pair("DABC", "ABC", Some("ABC"));
    check_pair("DABC", "ABCD", Some("ABC"));
}

#[test]
fn test_boundary_cases() {
    check_pair("", "", Some(""));
    check_pair("ABC", "", Some(""));
    check_pair("", "ABC", Some(""));
}

#[test]
fn test_human_chimpanzee_length() {
    let xs = chars("HUMAN");
    let ys = chars("CHIMPANZEE");
    for (name, lcs) in all_variants(&xs, &ys) {
        assert_eq!(lcs.len(), 4, "{name}: expected length 4");
    }
}

#[test]
fn test_idempotence() {
    let xs = chars("ABCBDAB");
    let ys = chars("BDCABA");
    let first = all_variants(&xs, &ys);
    let second = all_variants(&xs, &ys);
    for ((name, a), (_, b)) in first.iter().zip(second.iter()) {
        assert_eq!(a, b, "{name}: repeated call changed the result");
    }
}

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<char> {
    const ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];
    (0..len).map(|_| ALPHABET[rng.gen_range(0..4)]).collect()
}

#[test]
fn test_polynomial_variants_on_dna_stress_pair() {
    let mut rng = StdRng::seed_from_u64(42);
    let xs = random_dna(&mut rng, 300);
    let ys = random_dna(&mut rng, 300);

    let dp = dynamic_programming::lcs(&xs, &ys).unwrap();
    let packed = dynamic_programming::lcs_packed(&xs, &ys).unwrap();
    let hirschberg = hirschberg::lcs(&xs, &ys);
    let indexed = hirschberg::lcs_indexed(&xs, &ys);
    let memoized = recursive::lcs(&xs, &ys).unwrap();

    assert_eq!(dp, packed);
    assert_eq!(hirschberg, indexed);
    assert_eq!(dp.len(), hirschberg.len());
    assert_eq!(dp.len(), memoized.len());
    for (name, lcs) in [
        ("dp", &dp),
        ("hirschberg", &hirschberg),
        ("memoized", &memoized),
    ] {
        assert!(is_subsequence(&xs, lcs), "{name} failed the verifier");
        assert!(is_subsequence(&ys, lcs), "{name} failed the verifier");
    }
}
