// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Encryption-scheme identifier: the 32-byte wire prefix.
//!
//! The scheme tag lets the wire format evolve while old readers fail closed
//! on identifiers they do not know. Layout:
//!
//! ```text
//! [length (1 byte)] [identifier (<= 31 bytes)] ['=' padding to 31 bytes]
//! ```
//!
//! The single identifier supported by this implementation is
//! `DH_ADD_EPH_AESGCM256_SCRYPT_000`.

use super::error::DecryptError;

/// Total encoded length of a scheme tag.
pub const SCHEME_LEN: usize = 32;

/// Maximum identifier length (one byte is spent on the length prefix).
pub const IDENTIFIER_MAX_LEN: usize = SCHEME_LEN - 1;

/// Padding byte for identifiers shorter than 31 bytes.
const PAD: u8 = b'=';

/// The only scheme this implementation encrypts with or agrees to decrypt.
pub const SUPPORTED_IDENTIFIER: &str = "DH_ADD_EPH_AESGCM256_SCRYPT_000";

/// A fixed-format protocol identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionScheme {
    identifier: String,
}

impl EncryptionScheme {
    /// The currently supported scheme.
    pub fn supported() -> Self {
        Self {
            identifier: SUPPORTED_IDENTIFIER.to_owned(),
        }
    }

    /// Build a scheme from an identifier string (≤ 31 bytes).
    ///
    /// Accepting arbitrary identifiers keeps decode total; support is
    /// checked separately via [`EncryptionScheme::is_supported`].
    pub fn new(identifier: &str) -> Result<Self, DecryptError> {
        if identifier.len() > IDENTIFIER_MAX_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "scheme identifier",
                expected: IDENTIFIER_MAX_LEN,
                actual: identifier.len(),
            });
        }
        Ok(Self {
            identifier: identifier.to_owned(),
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn is_supported(&self) -> bool {
        self.identifier == SUPPORTED_IDENTIFIER
    }

    /// Encode as length byte, identifier, `'='` padding (32 bytes total).
    pub fn encode(&self) -> [u8; SCHEME_LEN] {
        let mut out = [PAD; SCHEME_LEN];
        let bytes = self.identifier.as_bytes();
        out[0] = bytes.len() as u8;
        out[1..1 + bytes.len()].copy_from_slice(bytes);
        out
    }

    /// Decode a 32-byte scheme tag.
    ///
    /// The length byte must be ≤ 31 and the identifier valid UTF-8; the
    /// padding bytes are not inspected (tolerant read, canonical write).
    pub fn decode(bytes: &[u8; SCHEME_LEN]) -> Result<Self, DecryptError> {
        let len = bytes[0] as usize;
        if len > IDENTIFIER_MAX_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "scheme identifier length",
                expected: IDENTIFIER_MAX_LEN,
                actual: len,
            });
        }
        let identifier = core::str::from_utf8(&bytes[1..1 + len]).map_err(|_| {
            DecryptError::MalformedWireFormat {
                field: "scheme identifier",
                expected: len,
                actual: len,
            }
        })?;
        Ok(Self {
            identifier: identifier.to_owned(),
        })
    }
}
