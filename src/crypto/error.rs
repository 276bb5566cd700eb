// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Error type for key and curve operations.

use thiserror::Error;

/// Failures from the curve/key layer.
///
/// With already-validated keys the point-arithmetic variants indicate an
/// internal-consistency problem and should never occur in practice; they are
/// still surfaced as ordinary errors rather than panics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// Private key bytes do not form a valid non-zero scalar.
    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(&'static str),

    /// Public key bytes do not decode to a valid curve point.
    #[error("Invalid public key: {0}")]
    InvalidPublicKey(&'static str),

    /// A point operation produced an invalid result (e.g. the identity).
    #[error("Invalid curve point: {0}")]
    InvalidPoint(&'static str),

    /// scrypt parameter or output-length failure.
    #[error("Key derivation failed: {0}")]
    Kdf(&'static str),

    /// AEAD cipher construction or sealing failure.
    #[error("Cipher failure: {0}")]
    Cipher(&'static str),
}
