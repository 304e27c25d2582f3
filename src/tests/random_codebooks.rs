use crate::{BuildError, Codebook, DecodeError};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generates a prefix free code by repeatedly splitting a random leaf of the code tree.
/// `num_codes` must be at least 2.
/// With `drop_leaves` some codes are removed afterwards, which leaves the code incomplete.
fn random_codebook(rng: &mut SmallRng, num_codes: usize, drop_leaves: bool) -> Vec<(String, String)> {
    let mut codes = alloc::vec![String::new()];
    while codes.len() < num_codes {
        let idx = rng.gen_range(0..codes.len());
        let code = codes.swap_remove(idx);
        codes.push(format!("{code}0"));
        codes.push(format!("{code}1"));
    }
    if drop_leaves {
        let keep = rng.gen_range(1..=codes.len());
        codes.shuffle(rng);
        codes.truncate(keep);
    }
    codes
        .into_iter()
        .enumerate()
        .map(|(idx, code)| (format!("tok{idx}"), code))
        .collect()
}

const WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];

fn encode(rng: &mut SmallRng, pairs: &[(String, String)], tokens: &[usize]) -> String {
    let mut bits = String::new();
    for &token in tokens {
        for bit in pairs[token].1.chars() {
            if rng.gen_bool(0.1) {
                bits.push(*WHITESPACE.choose(rng).unwrap());
            }
            bits.push(bit);
        }
    }
    bits
}

#[test]
fn prefix_free_codebooks_are_accepted() {
    let mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
    for round in 0..200 {
        let num_codes = rng.gen_range(2..64);
        let mut pairs = random_codebook(&mut rng, num_codes, round % 2 == 1);

        let codebook = Codebook::build(pairs.iter().map(|(t, c)| (t, c))).unwrap();
        assert_eq!(codebook.len(), pairs.len());
        assert_eq!(codebook.is_complete(), pairs.len() == num_codes);

        // every leaf sits exactly at the path of its code
        let mut entries: Vec<(String, String)> = codebook
            .entries()
            .map(|(token, code)| (String::from(token), code))
            .collect();
        entries.sort();
        pairs.sort();
        assert_eq!(entries, pairs);

        // the insertion order does not change the trie
        pairs.shuffle(&mut rng);
        let shuffled = Codebook::build(pairs.iter().map(|(t, c)| (t, c))).unwrap();
        assert!(shuffled.entries().eq(codebook.entries()));
    }
}

#[test]
fn round_trips_random_streams() {
    let mut rng = SmallRng::seed_from_u64(0x5EED);
    for round in 0..100 {
        let num_codes = rng.gen_range(2..40);
        let pairs = random_codebook(&mut rng, num_codes, round % 3 == 0);
        let codebook = Codebook::build(pairs.iter().map(|(t, c)| (t, c))).unwrap();

        let tokens: Vec<usize> = (0..rng.gen_range(0..200))
            .map(|_| rng.gen_range(0..pairs.len()))
            .collect();
        let bits = encode(&mut rng, &pairs, &tokens);

        let decoded = codebook.decode_str(&bits).unwrap();
        let expected: Vec<&str> = tokens.iter().map(|&t| pairs[t].0.as_str()).collect();
        assert_eq!(decoded, expected);
    }
}

#[test]
fn truncated_random_streams() {
    let mut rng = SmallRng::seed_from_u64(0x7A11);
    for _ in 0..100 {
        let num_codes = rng.gen_range(2..40);
        let pairs = random_codebook(&mut rng, num_codes, false);
        let codebook = Codebook::build(pairs.iter().map(|(t, c)| (t, c))).unwrap();

        // a complete code of at least two bits, cut short
        let Some((_, code)) = pairs.iter().find(|(_, code)| code.len() > 1) else {
            continue;
        };
        let cut = rng.gen_range(1..code.len());
        let tokens: Vec<usize> = (0..rng.gen_range(0..20))
            .map(|_| rng.gen_range(0..pairs.len()))
            .collect();
        let mut bits = encode(&mut rng, &pairs, &tokens);
        bits.push_str(&code[..cut]);

        assert_eq!(
            codebook.decode_str(&bits),
            Err(DecodeError::TruncatedStream { pending_bits: cut })
        );
    }
}

#[test]
fn extending_a_code_is_a_prefix_conflict() {
    let mut rng = SmallRng::seed_from_u64(0xC0DE);
    for _ in 0..100 {
        let num_codes = rng.gen_range(2..40);
        let mut pairs = random_codebook(&mut rng, num_codes, false);
        let victim = pairs.choose(&mut rng).unwrap().1.clone();
        let longer = format!("{victim}{}", if rng.gen_bool(0.5) { '0' } else { '1' });
        pairs.push((String::from("intruder"), longer));

        assert_eq!(
            Codebook::build(pairs.iter().map(|(t, c)| (t, c))).unwrap_err(),
            BuildError::PrefixConflict {
                token: String::from("intruder")
            }
        );
    }
}
