// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! The sealed-message envelope.
//!
//! Wire layout (fixed offsets, no varints):
//!
//! ```text
//! [ephemeral public key (33, SEC1 compressed)] [nonce (12)] [auth tag (16)] [ciphertext (>= 1)]
//! ```

use crate::crypto::aes_gcm::{NONCE_LEN, TAG_LEN};
use crate::crypto::curve_point::COMPRESSED_POINT_LEN;
use crate::crypto::{CurvePoint, PublicKey};

use super::cursor::ByteCursor;
use super::error::DecryptError;
use super::scheme::SCHEME_LEN;

/// Longest wire form of an encrypted message (ledger message-field limit).
pub const MAX_ENCRYPTED_MESSAGE_LEN: usize = 255;

/// Longest sealed message: the ledger limit minus the scheme tag.
pub const MAX_SEALED_LEN: usize = MAX_ENCRYPTED_MESSAGE_LEN - SCHEME_LEN;

/// Shortest sealed message: all fixed fields plus one ciphertext byte.
pub const MIN_SEALED_LEN: usize = COMPRESSED_POINT_LEN + NONCE_LEN + TAG_LEN + 1;

/// Longest ciphertext (and, since AES-GCM preserves length, plaintext).
pub const MAX_CIPHERTEXT_LEN: usize = MAX_SEALED_LEN - COMPRESSED_POINT_LEN - NONCE_LEN - TAG_LEN;

/// The encrypted payload envelope: ephemeral key, nonce, tag, ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedMessage {
    ephemeral_public_key: PublicKey,
    nonce: [u8; NONCE_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl SealedMessage {
    pub(crate) fn new(
        ephemeral_public_key: PublicKey,
        nonce: [u8; NONCE_LEN],
        tag: [u8; TAG_LEN],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            ephemeral_public_key,
            nonce,
            tag,
            ciphertext,
        }
    }

    pub fn ephemeral_public_key(&self) -> &PublicKey {
        &self.ephemeral_public_key
    }

    /// The ephemeral key as a curve point, for shared-secret derivation.
    pub fn ephemeral_point(&self) -> CurvePoint {
        self.ephemeral_public_key.as_point()
    }

    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Encoded length in bytes.
    pub fn encoded_len(&self) -> usize {
        COMPRESSED_POINT_LEN + NONCE_LEN + TAG_LEN + self.ciphertext.len()
    }

    /// Encode in wire order.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.ephemeral_public_key.to_compressed());
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Decode from a sealed-message slice (everything after the scheme tag).
    pub fn decode(bytes: &[u8]) -> Result<Self, DecryptError> {
        if bytes.len() < MIN_SEALED_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "sealed message",
                expected: MIN_SEALED_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.len() > MAX_SEALED_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "sealed message",
                expected: MAX_SEALED_LEN,
                actual: bytes.len(),
            });
        }

        let mut cursor = ByteCursor::new(bytes);
        let key_bytes = cursor.take(COMPRESSED_POINT_LEN, "ephemeral public key")?;
        let nonce: [u8; NONCE_LEN] = cursor.take_array("nonce")?;
        let tag: [u8; TAG_LEN] = cursor.take_array("auth tag")?;
        let ciphertext = cursor.rest("ciphertext")?.to_vec();

        let ephemeral_public_key =
            PublicKey::from_bytes(key_bytes).map_err(|_| DecryptError::EphemeralKeyDecodeFailure)?;

        Ok(Self {
            ephemeral_public_key,
            nonce,
            tag,
            ciphertext,
        })
    }
}
