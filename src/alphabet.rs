use crate::error::{HashIdError, Result};

pub(crate) const MIN_ALPHABET_LENGTH: usize = 16;

/// Characters reserved as chunk separators when they appear in the alphabet.
const SEPARATOR_POOL: &str = "cfhistuCFHISTU";

/// Target ratio of working-alphabet length to separator count.
const SEPARATOR_DIV: f64 = 3.5;

/// Ratio of working-alphabet length to guard count.
const GUARD_DIV: f64 = 12.0;

/// The three disjoint character classes a codec works over, derived once
/// from an (alphabet, salt) pair and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CharClasses {
    pub alphabet: Vec<char>,
    pub separators: Vec<char>,
    pub guards: Vec<char>,
}

impl CharClasses {
    /// Validate the alphabet and carve it into working alphabet,
    /// separators, and guards.
    ///
    /// # Errors
    ///
    /// Returns `AlphabetTooShort`, `AlphabetWhitespace`, or
    /// `DuplicateCharacter` when the alphabet cannot be used.
    pub fn derive(alphabet: &str, salt: &[char]) -> Result<Self> {
        let alphabet: Vec<char> = alphabet.chars().collect();

        if alphabet.len() < MIN_ALPHABET_LENGTH {
            return Err(HashIdError::AlphabetTooShort {
                found: alphabet.len(),
            });
        }
        if alphabet.iter().any(|c| c.is_whitespace()) {
            return Err(HashIdError::AlphabetWhitespace);
        }
        let mut seen = std::collections::HashSet::with_capacity(alphabet.len());
        for &ch in &alphabet {
            if !seen.insert(ch) {
                return Err(HashIdError::DuplicateCharacter { ch });
            }
        }

        let separators: Vec<char> = SEPARATOR_POOL
            .chars()
            .filter(|c| alphabet.contains(c))
            .collect();
        let mut alphabet: Vec<char> = alphabet
            .into_iter()
            .filter(|c| !separators.contains(c))
            .collect();

        let mut separators = shuffle(&separators, salt);

        // The reserved pool may be too small (or absent) for the alphabet;
        // top the separators up from the front of the alphabet until the
        // 1:3.5 ratio holds.
        if separators.is_empty()
            || alphabet.len() as f64 / separators.len() as f64 > SEPARATOR_DIV
        {
            let mut target = (alphabet.len() as f64 / SEPARATOR_DIV).ceil() as usize;
            if target == 1 {
                target = 2;
            }
            if target > separators.len() {
                let diff = target - separators.len();
                separators.extend(alphabet.drain(..diff));
            } else {
                separators.truncate(target);
            }
        }

        let mut alphabet = shuffle(&alphabet, salt);

        let guard_count = (alphabet.len() as f64 / GUARD_DIV).ceil() as usize;
        let guards: Vec<char> = if alphabet.len() < 3 {
            separators.drain(..guard_count).collect()
        } else {
            alphabet.drain(..guard_count).collect()
        };

        Ok(Self {
            alphabet,
            separators,
            guards,
        })
    }
}

/// Salt-keyed Fisher-Yates variant shared by every Hashids port: walk the
/// slice from the back, swapping with an index derived from the cycling
/// salt characters and their running sum. Deterministic for a given
/// (chars, salt) pair; the identity permutation when the salt is empty.
pub(crate) fn shuffle(chars: &[char], salt: &[char]) -> Vec<char> {
    let mut out = chars.to_vec();
    if salt.is_empty() {
        return out;
    }

    let mut sum = 0_usize;
    let mut v = 0_usize;
    for i in (1..out.len()).rev() {
        let code = salt[v] as usize;
        sum += code;
        let j = (code + v + sum) % i;
        out.swap(i, j);
        v = (v + 1) % salt.len();
    }
    out
}
