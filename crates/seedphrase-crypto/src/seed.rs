//! Seed derivation: PBKDF2-HMAC-SHA512 over a normalized phrase.
//!
//! - **Password**: NFKD(mnemonic).
//! - **Salt**: NFKD(`"mnemonic"` + passphrase).
//! - **Rounds**: 2048.
//! - **Output**: 64 bytes.
//!
//! The phrase is not checksum-validated; any non-empty string is
//! accepted, so phrases from other tooling can still be stretched.

use hmac::Hmac;
use seedphrase_types::{Result, SeedPhraseError};
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

const SALT_PREFIX: &str = "mnemonic";

/// A 64-byte seed derived from a mnemonic phrase.
///
/// Zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; 64]);

impl Seed {
    /// Fixed byte length of a seed.
    pub const LEN: usize = 64;

    /// Wraps raw seed bytes, e.g. from a test vector.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 64-byte seed.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex encoding of the seed.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Seed does not implement Clone/Debug to prevent leakage.

/// Derives a 64-byte seed from a mnemonic phrase and passphrase.
///
/// `passphrase` may be empty.
///
/// # Errors
///
/// - [`SeedPhraseError::EmptyMnemonic`] if `mnemonic` is empty or only
///   whitespace.
/// - [`SeedPhraseError::CryptoError`] if PBKDF2 rejects its parameters.
pub fn mnemonic_to_seed(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    if mnemonic.trim().is_empty() {
        return Err(SeedPhraseError::EmptyMnemonic);
    }

    let password = Zeroizing::new(mnemonic.nfkd().collect::<String>());

    let mut raw_salt = Zeroizing::new(String::with_capacity(SALT_PREFIX.len() + passphrase.len()));
    raw_salt.push_str(SALT_PREFIX);
    raw_salt.push_str(passphrase);
    let salt = Zeroizing::new(raw_salt.nfkd().collect::<String>());

    let mut output = [0u8; Seed::LEN];
    pbkdf2::pbkdf2::<Hmac<Sha512>>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut output,
    )
    .map_err(|e| SeedPhraseError::CryptoError {
        reason: format!("PBKDF2-HMAC-SHA512 failed: {e}"),
    })?;

    let seed = Seed(output);
    output.zeroize();
    Ok(seed)
}
