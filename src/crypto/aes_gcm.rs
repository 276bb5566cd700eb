// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! AES-256-GCM seal/open with a detached authentication tag.
//!
//! The wire format carries the 16-byte tag as its own field, so the tag is
//! split off the RustCrypto output on seal and re-appended on open. The
//! associated data is always the compressed ephemeral public key, binding
//! the ciphertext to the key-agreement instance that produced it.

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use thiserror::Error;

use super::error::KeyError;

/// AES-GCM nonce length (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length.
pub const TAG_LEN: usize = 16;

/// GCM tag verification failed: wrong key, tampered ciphertext or tag, or
/// mismatching associated data. No plaintext is released.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Authentication failed: ciphertext or tag rejected")]
pub struct AuthenticationError;

/// Encrypt `plaintext`, returning the ciphertext and detached tag.
pub fn seal(
    key: &[u8; 32],
    nonce: &[u8; NONCE_LEN],
    plaintext: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_LEN]), KeyError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut sealed = cipher
        .encrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: plaintext,
                aad,
            },
        )
        .map_err(|_| KeyError::Cipher("AES-GCM seal failed"))?;

    // RustCrypto appends the tag; the wire format wants it detached.
    let tag_start = sealed.len() - TAG_LEN;
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&sealed[tag_start..]);
    sealed.truncate(tag_start);

    Ok((sealed, tag))
}

/// Decrypt and verify; fails closed on any tag mismatch.
pub fn open(
    key: &[u8; 32],
    nonce: &[u8; NONCE_LEN],
    ciphertext: &[u8],
    tag: &[u8; TAG_LEN],
    aad: &[u8],
) -> Result<Vec<u8>, AuthenticationError> {
    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));

    let mut combined = Vec::with_capacity(ciphertext.len() + TAG_LEN);
    combined.extend_from_slice(ciphertext);
    combined.extend_from_slice(tag);

    cipher
        .decrypt(
            Nonce::from_slice(nonce),
            Payload {
                msg: &combined,
                aad,
            },
        )
        .map_err(|_| AuthenticationError)
}
