// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Symmetric-key derivation: scrypt over the shared secret.
//!
//! The shared secret is a deterministic function of two long-term key pairs
//! plus a transmitted ephemeral key, not a high-entropy random password, so
//! the protocol stretches it with a memory-hard KDF rather than a fast hash.
//! The salt is the SHA-256 digest of the AEAD nonce.

use scrypt::Params;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use super::error::KeyError;

/// AES-256 key length produced by the KDF.
pub const SYMMETRIC_KEY_LEN: usize = 32;

/// scrypt cost: N = 8192.
const SCRYPT_LOG_N: u8 = 13;
/// scrypt block size.
const SCRYPT_R: u32 = 8;
/// scrypt parallelization.
const SCRYPT_P: u32 = 1;

/// Stretch the shared-secret bytes into a 32-byte AES-256 key.
///
/// `salt = SHA-256(nonce)`, then
/// `scrypt(password = shared_secret, salt, N = 8192, r = 8, p = 1)`.
pub fn derive_symmetric_key(
    shared_secret: &[u8; 32],
    nonce: &[u8; 12],
) -> Result<Zeroizing<[u8; SYMMETRIC_KEY_LEN]>, KeyError> {
    let salt = Sha256::digest(nonce);

    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, SYMMETRIC_KEY_LEN)
        .map_err(|_| KeyError::Kdf("invalid scrypt parameters"))?;

    let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_LEN]);
    scrypt::scrypt(shared_secret.as_slice(), salt.as_slice(), &params, &mut *key)
        .map_err(|_| KeyError::Kdf("scrypt output length mismatch"))?;
    Ok(key)
}
