//! Entropy buffers, their checksum, and secure generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use seedphrase_types::{Result, SeedPhraseError, WordCount};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// Secret entropy of 16, 20, 24, 28 or 32 bytes.
///
/// The bytes are zeroized on drop. `Entropy` does not implement
/// `Clone` or `Debug`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl Entropy {
    /// Copies `bytes` into a new entropy buffer.
    ///
    /// # Errors
    ///
    /// [`SeedPhraseError::InvalidEntropyLength`] unless the length is
    /// 16, 20, 24, 28 or 32 bytes.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let word_count = WordCount::from_entropy_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            word_count,
        })
    }

    /// Draws fresh entropy for a `word_count`-word phrase from the
    /// operating system's CSPRNG.
    pub fn generate(word_count: WordCount) -> Result<Self> {
        Self::generate_with_rng(&mut OsRng, word_count)
    }

    /// Draws fresh entropy for a `word_count`-word phrase from `rng`.
    ///
    /// # Errors
    ///
    /// [`SeedPhraseError::RandomSourceFailure`] if `rng` cannot fill the
    /// buffer. The attempt is not retried.
    pub fn generate_with_rng<R>(rng: &mut R, word_count: WordCount) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = vec![0u8; word_count.entropy_len()];

        if let Err(e) = rng.try_fill_bytes(&mut bytes) {
            bytes.zeroize();
            return Err(SeedPhraseError::RandomSourceFailure {
                reason: e.to_string(),
            });
        }

        tracing::trace!(words = word_count.get(), "entropy generated");
        Ok(Self { bytes, word_count })
    }

    /// Raw entropy bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`; entropy is at least 16 bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of words this entropy encodes to.
    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Checksum bits for this entropy (see [`checksum`]).
    pub fn checksum(&self) -> u8 {
        checksum(&self.bytes, self.word_count.checksum_bits())
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ---------------------------------------------------------------------------
// Checksum
// ---------------------------------------------------------------------------

/// Top `bits` bits of the first byte of `SHA-256(entropy)`, right-aligned.
///
/// `bits` is clamped to `0..=8`.
pub fn checksum(entropy: &[u8], bits: usize) -> u8 {
    let bits = bits.min(8);
    if bits == 0 {
        return 0;
    }
    let first = Sha256::digest(entropy)[0];
    first >> (8 - bits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
