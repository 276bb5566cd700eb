// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Message encryption orchestration.
//!
//! Stateless, one-shot transforms; there is no handshake and no shared
//! mutable state. Each call composes the layers below in order:
//!
//! 1. Fresh ephemeral key pair and 12-byte nonce from the caller's RNG
//! 2. Shared secret: `DH(own, other) + ephemeral`, x-coordinate bytes
//! 3. Symmetric key: scrypt salted by `SHA-256(nonce)`
//! 4. AES-256-GCM seal/open with the compressed ephemeral key as AAD
//! 5. Wire framing: scheme tag plus sealed message, at most 255 bytes

use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::crypto::aes_gcm::{self, NONCE_LEN};
use crate::crypto::{derive_shared_secret, derive_symmetric_key, KeyPair, PrivateKey, PublicKey};

use super::encrypted::EncryptedMessage;
use super::error::{DecryptError, EncryptError};
use super::scheme::EncryptionScheme;
use super::sealed::{SealedMessage, MAX_CIPHERTEXT_LEN};

/// Longest plaintext that fits the 255-byte wire budget (162 bytes).
pub const MAX_PLAINTEXT_LEN: usize = MAX_CIPHERTEXT_LEN;

/// Encrypt `plaintext` so that either the holder of `own_private` or the
/// holder of the private key behind `other_public` can decrypt it.
///
/// The plaintext budget (162 bytes) is enforced before any cryptographic
/// work. The RNG supplies both the ephemeral key pair and the nonce; pass
/// `rand::rngs::OsRng` in production.
pub fn encrypt<R: RngCore + CryptoRng>(
    plaintext: &[u8],
    own_private: &PrivateKey,
    other_public: &PublicKey,
    rng: &mut R,
) -> Result<EncryptedMessage, EncryptError> {
    if plaintext.len() > MAX_PLAINTEXT_LEN {
        return Err(EncryptError::PlaintextTooLong {
            max: MAX_PLAINTEXT_LEN,
            actual: plaintext.len(),
        });
    }
    if plaintext.is_empty() {
        return Err(EncryptError::EmptyPlaintext);
    }

    let ephemeral = KeyPair::generate(rng);
    let mut nonce = [0u8; NONCE_LEN];
    rng.fill_bytes(&mut nonce);

    let shared_secret =
        derive_shared_secret(own_private, other_public, &ephemeral.public().as_point())?;
    let key = derive_symmetric_key(&shared_secret, &nonce)?;

    let ephemeral_key_bytes = ephemeral.public().to_compressed();
    let (ciphertext, tag) = aes_gcm::seal(&key, &nonce, plaintext, &ephemeral_key_bytes)?;

    let sealed = SealedMessage::new(ephemeral.public().clone(), nonce, tag, ciphertext);
    let message = EncryptedMessage::new(EncryptionScheme::supported(), sealed);

    debug!(
        plaintext_len = plaintext.len(),
        wire_len = message.combined().len(),
        "encrypted transaction message"
    );
    Ok(message)
}

/// [`encrypt`] over a UTF-8 string.
pub fn encrypt_text<R: RngCore + CryptoRng>(
    plaintext: &str,
    own_private: &PrivateKey,
    other_public: &PublicKey,
    rng: &mut R,
) -> Result<EncryptedMessage, EncryptError> {
    encrypt(plaintext.as_bytes(), own_private, other_public, rng)
}

/// Decrypt a structured message with the caller's private key and the
/// counterparty's public key.
///
/// Works for either party of the original exchange. Fails closed: an
/// unsupported scheme is refused before any KDF or AEAD work, and a tag
/// mismatch releases no plaintext.
pub fn decrypt(
    message: &EncryptedMessage,
    own_private: &PrivateKey,
    other_public: &PublicKey,
) -> Result<Vec<u8>, DecryptError> {
    if !message.scheme().is_supported() {
        return Err(DecryptError::UnsupportedEncryptionScheme {
            found: message.scheme().identifier().to_owned(),
        });
    }

    let sealed = message.sealed();
    let shared_secret =
        derive_shared_secret(own_private, other_public, &sealed.ephemeral_point())?;
    let key = derive_symmetric_key(&shared_secret, sealed.nonce())?;

    let ephemeral_key_bytes = sealed.ephemeral_public_key().to_compressed();
    let plaintext = aes_gcm::open(
        &key,
        sealed.nonce(),
        sealed.ciphertext(),
        sealed.tag(),
        &ephemeral_key_bytes,
    )?;

    debug!(plaintext_len = plaintext.len(), "decrypted transaction message");
    Ok(plaintext)
}

/// Decode raw wire bytes, then [`decrypt`].
pub fn decrypt_bytes(
    bytes: &[u8],
    own_private: &PrivateKey,
    other_public: &PublicKey,
) -> Result<Vec<u8>, DecryptError> {
    let message = EncryptedMessage::from_bytes(bytes)?;
    decrypt(&message, own_private, other_public)
}
