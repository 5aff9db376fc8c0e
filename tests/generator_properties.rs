//! Property tests over the passphrase tier grammar.
//!
//! Each tier's output must draw only from the wordlist's alphabet plus the
//! tier's decoration alphabet, for any sequence of random draws.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use passforge::generator::{self, Strength, Wordlist, AFFIX_ALPHABET, SEPARATOR_ALPHABET};

fn fixture_pool() -> Wordlist {
    Wordlist::from_words(["correct", "horse", "battery", "staple"].map(String::from))
}

/// A character the fixture words can contribute, in either case.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

proptest! {
    #[test]
    fn every_tier_is_nonempty_and_stays_in_alphabet(seed in any::<u64>()) {
        let pool = fixture_pool();
        let mut rng = StdRng::seed_from_u64(seed);

        for strength in Strength::ALL {
            let out = generator::generate(&pool, strength, &mut rng).unwrap();
            prop_assert!(!out.is_empty());

            for c in out.chars() {
                let allowed = match strength {
                    Strength::Weak | Strength::Normal => is_word_char(c),
                    Strength::Strong | Strength::Stronger => {
                        is_word_char(c) || c.is_ascii_digit()
                    }
                    Strength::Insane => {
                        is_word_char(c)
                            || AFFIX_ALPHABET.contains(c)
                            || SEPARATOR_ALPHABET.contains(c)
                    }
                };
                prop_assert!(allowed, "unexpected char {:?} in {:?} output {:?}", c, strength, out);
            }
        }
    }

    #[test]
    fn weak_is_two_undecorated_words(seed in any::<u64>()) {
        let pool = fixture_pool();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = generator::generate(&pool, Strength::Weak, &mut rng).unwrap();

        // No separators, no case changes: the output splits as exactly two
        // pool words, scanned greedily from the left.
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase()));
        let first = pool
            .words()
            .iter()
            .find(|w| out.starts_with(w.as_str()))
            .expect("output must start with a pool word");
        let rest = &out[first.len()..];
        prop_assert!(pool.words().iter().any(|w| w == rest));
    }

    #[test]
    fn normal_uppercases_exactly_the_middle_word(seed in any::<u64>()) {
        let pool = fixture_pool();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = generator::generate(&pool, Strength::Normal, &mut rng).unwrap();

        let upper: String = out.chars().filter(|c| c.is_ascii_uppercase()).collect();
        prop_assert!(!upper.is_empty());
        prop_assert!(pool.words().iter().any(|w| w.to_uppercase() == upper));

        // The upper-cased run is contiguous and interior.
        let start = out.find(|c: char| c.is_ascii_uppercase()).unwrap();
        let end = out.rfind(|c: char| c.is_ascii_uppercase()).unwrap();
        prop_assert_eq!(end - start + 1, upper.len());
        prop_assert!(start > 0);
        prop_assert!(end < out.len() - 1);
    }

    #[test]
    fn strong_tiers_use_one_digit_per_word_boundary(seed in any::<u64>()) {
        let pool = fixture_pool();
        for strength in [Strength::Strong, Strength::Stronger] {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = generator::generate(&pool, strength, &mut rng).unwrap();

            let digit_count = out.chars().filter(|c| c.is_ascii_digit()).count();
            prop_assert_eq!(digit_count, strength.word_count() - 1);

            // Every digit-delimited segment is one pool word, upper- or
            // lower-cased as a whole.
            for segment in out.split(|c: char| c.is_ascii_digit()) {
                prop_assert!(
                    pool.words().iter().any(|w| w == segment || w.to_uppercase() == segment),
                    "segment {:?} is not a cased pool word",
                    segment
                );
            }
        }
    }

    #[test]
    fn insane_grammar_holds(seed in any::<u64>()) {
        let pool = fixture_pool();
        let mut rng = StdRng::seed_from_u64(seed);
        let out = generator::generate(&pool, Strength::Insane, &mut rng).unwrap();

        // Two affix characters on each end.
        prop_assert!(out.len() > 4);
        let chars: Vec<char> = out.chars().collect();
        for c in chars.iter().take(2).chain(chars.iter().rev().take(2)) {
            prop_assert!(AFFIX_ALPHABET.contains(*c));
        }

        // Interior: word, separator, WORD, separator, word — one separator
        // character reused at both boundaries.
        let interior = &out[2..out.len() - 2];
        let separators: Vec<char> = interior
            .chars()
            .filter(|c| !c.is_ascii_alphabetic())
            .collect();
        prop_assert_eq!(separators.len(), 2);
        prop_assert_eq!(separators[0], separators[1]);
        prop_assert!(SEPARATOR_ALPHABET.contains(separators[0]));

        let segments: Vec<&str> = interior.split(separators[0]).collect();
        prop_assert_eq!(segments.len(), 3);
        prop_assert!(pool.words().iter().any(|w| w == segments[0]));
        prop_assert!(pool.words().iter().any(|w| w.to_uppercase() == segments[1]));
        prop_assert!(pool.words().iter().any(|w| w == segments[2]));
    }
}

#[test]
fn empty_pool_fails_for_every_tier() {
    let pool = Wordlist::from_words(std::iter::empty());
    let mut rng = StdRng::seed_from_u64(0);
    for strength in Strength::ALL {
        assert!(generator::generate(&pool, strength, &mut rng).is_err());
    }
}
