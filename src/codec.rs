use crate::alphabet::{CharClasses, shuffle};
use crate::config::CodecConfig;
use crate::error::{HashIdError, Result};
use crate::nibble;

/// Reversible encoder/decoder over a salted, shuffled alphabet.
///
/// All derived state is computed at construction and never mutated, so a
/// `Codec` can be shared freely across threads. Encoding is deterministic:
/// the same configuration and numbers always produce the same string.
#[derive(Debug, Clone)]
pub struct Codec {
    salt: Vec<char>,
    min_length: usize,
    classes: CharClasses,
}

impl Codec {
    /// Build a codec from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration-kind error when the alphabet has fewer than
    /// 16 characters, contains a duplicate, or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use hashid::{Codec, CodecConfig};
    ///
    /// let codec = Codec::new(&CodecConfig::new().salt("this is my salt")).unwrap();
    /// assert_eq!(codec.encode(&[1, 2, 3]).unwrap(), "laHquq");
    /// ```
    pub fn new(config: &CodecConfig) -> Result<Self> {
        let salt: Vec<char> = config.salt.chars().collect();
        let classes = CharClasses::derive(&config.alphabet, &salt)?;
        Ok(Self {
            salt,
            min_length: config.min_length,
            classes,
        })
    }

    /// Encode a sequence of numbers into a short ID.
    ///
    /// The first output character (the lottery) is picked from a seed
    /// folded over the inputs; every chunk is emitted under a fresh
    /// alphabet permutation keyed by the lottery, the salt, and the
    /// previous permutation, with separator characters between chunks.
    /// Output shorter than the configured minimum is padded with guard
    /// characters and cycled alphabet slices.
    ///
    /// # Errors
    ///
    /// Returns `NothingToEncode` when `numbers` is empty.
    pub fn encode(&self, numbers: &[u64]) -> Result<String> {
        if numbers.is_empty() {
            return Err(HashIdError::NothingToEncode);
        }
        Ok(self.encode_numbers(numbers))
    }

    /// Decode a short ID back into the sequence of numbers it encodes.
    ///
    /// Decoding always verifies itself: the decoded numbers are re-encoded
    /// and compared byte-for-byte with the input, so a string that was not
    /// produced by this exact configuration is rejected.
    ///
    /// # Errors
    ///
    /// Returns a decoding-kind error when the string contains characters
    /// outside the codec's character classes or fails the re-encode check.
    pub fn decode(&self, hash: &str) -> Result<Vec<u64>> {
        if hash.is_empty() {
            return Ok(Vec::new());
        }

        let numbers = self.decode_numbers(hash)?;
        if numbers.is_empty() || self.encode_numbers(&numbers) != hash {
            return Err(HashIdError::ReencodeMismatch {
                hash: hash.to_string(),
            });
        }
        Ok(numbers)
    }

    /// Encode a hexadecimal string.
    ///
    /// The string is chunked into sentinel-prefixed numbers so that
    /// leading zeros survive the round trip; see [`decode_hex`].
    ///
    /// [`decode_hex`]: Self::decode_hex
    ///
    /// # Errors
    ///
    /// Returns `InvalidHexDigit` for non-hex input and `NothingToEncode`
    /// for an empty string.
    pub fn encode_hex(&self, hex: &str) -> Result<String> {
        let numbers = nibble::pack(hex)?;
        self.encode(&numbers)
    }

    /// Decode a short ID produced by [`encode_hex`] back into its
    /// hexadecimal string.
    ///
    /// [`encode_hex`]: Self::encode_hex
    ///
    /// # Errors
    ///
    /// Returns a decoding-kind error when the string does not decode, or
    /// when a decoded number lacks the sentinel nibble.
    pub fn decode_hex(&self, hash: &str) -> Result<String> {
        let numbers = self.decode(hash)?;
        nibble::unpack(&numbers)
    }

    fn encode_numbers(&self, numbers: &[u64]) -> String {
        let separators = &self.classes.separators;
        let mut alphabet = self.classes.alphabet.clone();

        let seed = numbers
            .iter()
            .enumerate()
            .fold(0_u64, |acc, (i, &n)| acc + n % (i as u64 + 100));
        let lottery = alphabet[(seed % alphabet.len() as u64) as usize];
        let mut result = vec![lottery];

        for (i, &number) in numbers.iter().enumerate() {
            alphabet = shuffle(&alphabet, &self.chunk_key(lottery, &alphabet));

            let chunk = digits(number, &alphabet);
            result.extend_from_slice(&chunk);

            if i + 1 < numbers.len() {
                let sep_seed = number % (chunk[0] as u64 + i as u64);
                result.push(separators[(sep_seed % separators.len() as u64) as usize]);
            }
        }

        if result.len() < self.min_length {
            self.pad(&mut result, seed, &mut alphabet);
        }
        result.into_iter().collect()
    }

    fn decode_numbers(&self, hash: &str) -> Result<Vec<u64>> {
        let chars: Vec<char> = hash.chars().collect();

        // Padding wraps the payload in guard characters; when splitting on
        // guards yields 2 or 3 pieces the payload is the middle one.
        let mut outer = split_on(&chars, &self.classes.guards);
        let index = usize::from(outer.len() == 2 || outer.len() == 3);
        let core = outer.swap_remove(index);

        let Some((&lottery, rest)) = core.split_first() else {
            return Err(HashIdError::MissingLottery);
        };

        let mut alphabet = self.classes.alphabet.clone();
        let chunks = split_on(rest, &self.classes.separators);
        let mut numbers = Vec::with_capacity(chunks.len());
        for chunk in &chunks {
            alphabet = shuffle(&alphabet, &self.chunk_key(lottery, &alphabet));
            numbers.push(value_of(chunk, &alphabet)?);
        }
        Ok(numbers)
    }

    /// Per-chunk permutation key: lottery, then salt, then the current
    /// alphabet, truncated to alphabet length.
    fn chunk_key(&self, lottery: char, alphabet: &[char]) -> Vec<char> {
        std::iter::once(lottery)
            .chain(self.salt.iter().copied())
            .chain(alphabet.iter().copied())
            .take(alphabet.len())
            .collect()
    }

    fn pad(&self, result: &mut Vec<char>, seed: u64, alphabet: &mut Vec<char>) {
        let guards = &self.classes.guards;

        let index = ((seed + result[0] as u64) % guards.len() as u64) as usize;
        result.insert(0, guards[index]);

        if result.len() < self.min_length {
            let index = ((seed + result[2] as u64) % guards.len() as u64) as usize;
            result.push(guards[index]);
        }

        let half = alphabet.len() / 2;
        while result.len() < self.min_length {
            *alphabet = shuffle(alphabet, alphabet);

            let mut wrapped: Vec<char> = alphabet[half..].to_vec();
            wrapped.append(result);
            wrapped.extend_from_slice(&alphabet[..half]);
            *result = wrapped;

            let excess = result.len().saturating_sub(self.min_length);
            if excess > 0 {
                let from = excess / 2;
                *result = result[from..from + self.min_length].to_vec();
            }
        }
    }
}

/// Base-N digits of `number` over `alphabet`, most significant first.
/// Zero encodes as a single digit.
fn digits(mut number: u64, alphabet: &[char]) -> Vec<char> {
    let base = alphabet.len() as u64;
    let mut out = Vec::new();
    loop {
        out.push(alphabet[(number % base) as usize]);
        number /= base;
        if number == 0 {
            break;
        }
    }
    out.reverse();
    out
}

/// Inverse of [`digits`]. Wrapping arithmetic keeps hostile over-long
/// chunks from aborting; the caller's re-encode check rejects them.
fn value_of(chunk: &[char], alphabet: &[char]) -> Result<u64> {
    let base = alphabet.len() as u64;
    let mut number = 0_u64;
    for &ch in chunk {
        let position = alphabet
            .iter()
            .position(|&a| a == ch)
            .ok_or(HashIdError::UnknownCharacter { ch })?;
        number = number.wrapping_mul(base).wrapping_add(position as u64);
    }
    Ok(number)
}

fn split_on(chars: &[char], delimiters: &[char]) -> Vec<Vec<char>> {
    let mut parts = Vec::new();
    let mut current = Vec::new();
    for &ch in chars {
        if delimiters.contains(&ch) {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);
    parts
}
