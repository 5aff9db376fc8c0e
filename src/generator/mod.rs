pub mod wordlist;

pub use wordlist::Wordlist;

use rand::Rng;
use thiserror::Error;

/// Characters eligible for the two-character prefix and suffix of the
/// insane tier.
pub const AFFIX_ALPHABET: &str = "!$%^&*-_+=:|~?/.;0123456789";

/// Characters eligible as the insane tier's word separator.
pub const SEPARATOR_ALPHABET: &str = ".$*;_=:|~?!%-+";

/// Errors from wordlist loading and passphrase generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("word source {path} is unreadable: {source}")]
    Resource {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist is empty")]
    EmptyWordlist,
}

/// The five fixed passphrase strength tiers.
///
/// Strength names are structural labels, not entropy measurements; each tier
/// is exactly a word count plus a decoration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    Weak,
    Normal,
    Strong,
    Stronger,
    Insane,
}

impl Strength {
    pub const ALL: [Strength; 5] = [
        Strength::Weak,
        Strength::Normal,
        Strength::Strong,
        Strength::Stronger,
        Strength::Insane,
    ];

    /// Number of words drawn from the pool for this tier.
    ///
    /// Insane draws four words but assembles only the first three.
    pub fn word_count(self) -> usize {
        match self {
            Strength::Weak => 2,
            Strength::Normal | Strength::Strong => 3,
            Strength::Stronger | Strength::Insane => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Normal => "normal",
            Strength::Strong => "strong",
            Strength::Stronger => "stronger",
            Strength::Insane => "insane",
        }
    }
}

/// Generate one passphrase at the requested strength.
///
/// Draws the tier's word count from `wordlist` (uniform, with replacement)
/// and applies the tier's decoration. All randomness flows through `rng` so
/// callers can substitute a deterministic source.
pub fn generate<R: Rng>(
    wordlist: &Wordlist,
    strength: Strength,
    rng: &mut R,
) -> Result<String, GeneratorError> {
    let words = wordlist.sample(rng, strength.word_count())?;
    Ok(match strength {
        Strength::Weak => assemble_weak(&words),
        Strength::Normal => assemble_normal(&words),
        Strength::Strong | Strength::Stronger => assemble_digit_separated(&words, rng),
        Strength::Insane => assemble_insane(&words, rng),
    })
}

/// Two words, concatenated verbatim.
fn assemble_weak(words: &[&str]) -> String {
    words.concat()
}

/// Three words, concatenated; the middle word fully upper-cased.
fn assemble_normal(words: &[&str]) -> String {
    format!("{}{}{}", words[0], words[1].to_uppercase(), words[2])
}

/// Strong/stronger rule: an independent fair coin decides each word's case,
/// and one uniform digit separates each adjacent pair.
fn assemble_digit_separated<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push((b'0' + rng.gen_range(0..10u8)) as char);
        }
        if coin_flip(rng) {
            out.push_str(&word.to_uppercase());
        } else {
            out.push_str(word);
        }
    }
    out
}

/// Insane shape: `<sym><sym><w0><sep><W1><sep><w2><sym><sym>`.
///
/// The four affix characters are independent draws; the separator is drawn
/// once and reused at both boundaries. Receives four sampled words and
/// assembles only the first three.
fn assemble_insane<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let separator = pick(SEPARATOR_ALPHABET, rng);
    let mut out = String::new();
    out.push(pick(AFFIX_ALPHABET, rng));
    out.push(pick(AFFIX_ALPHABET, rng));
    out.push_str(words[0]);
    out.push(separator);
    out.push_str(&words[1].to_uppercase());
    out.push(separator);
    out.push_str(words[2]);
    out.push(pick(AFFIX_ALPHABET, rng));
    out.push(pick(AFFIX_ALPHABET, rng));
    out
}

/// Uniform draw over {0, 1}.
fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen_range(0..2) == 1
}

fn pick<R: Rng>(alphabet: &str, rng: &mut R) -> char {
    let bytes = alphabet.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
