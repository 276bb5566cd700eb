// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Error taxonomy for message encryption and decryption.
//!
//! Every failure is an ordinary value; the orchestration layer forwards the
//! first error to its caller unchanged and nothing here is fatal to the host
//! process.

use thiserror::Error;

use crate::crypto::aes_gcm::AuthenticationError;
use crate::crypto::KeyError;

/// Failures while building an encrypted message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncryptError {
    /// Plaintext exceeds the wire budget. Reported before any crypto work.
    #[error("Plaintext is too long, expected max #{max}, but got: #{actual}")]
    PlaintextTooLong { max: usize, actual: usize },

    /// The sealed ciphertext field must carry at least one byte.
    #[error("Plaintext must not be empty")]
    EmptyPlaintext,

    /// Curve or cipher failure; should not occur with validated keys.
    #[error(transparent)]
    Key(#[from] KeyError),
}

/// Failures while decoding or decrypting an encrypted message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecryptError {
    /// The scheme identifier is not one this implementation supports.
    /// Decryption is refused before any KDF or AEAD work (fail closed).
    #[error("Unsupported encryption scheme: '{found}'")]
    UnsupportedEncryptionScheme { found: String },

    /// A buffer or field falls outside its valid length bounds.
    #[error("Malformed wire format in field '{field}': expected {expected} bytes, got {actual}")]
    MalformedWireFormat {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The embedded ephemeral public key bytes are not a valid curve point.
    #[error("Ephemeral public key does not decode to a valid curve point")]
    EphemeralKeyDecodeFailure,

    /// GCM tag verification failed; no plaintext is released.
    #[error("Authentication failed: ciphertext or tag rejected")]
    AuthenticationFailure,

    /// Curve or KDF failure; should not occur with validated keys.
    #[error(transparent)]
    Key(#[from] KeyError),
}

impl From<AuthenticationError> for DecryptError {
    fn from(_: AuthenticationError) -> Self {
        DecryptError::AuthenticationFailure
    }
}
