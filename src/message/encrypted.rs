// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! The full wire value: scheme tag plus sealed message.
//!
//! This is the literal byte sequence stored in a transaction's optional
//! message field, capped at 255 bytes. For embedding in JSON transaction
//! payloads it serializes as a lowercase hex string.

use serde::de::Error as SerdeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DecryptError;
use super::scheme::{EncryptionScheme, SCHEME_LEN};
use super::sealed::{SealedMessage, MAX_ENCRYPTED_MESSAGE_LEN, MIN_SEALED_LEN};

/// Shortest valid wire form: scheme tag plus minimal sealed message.
pub const MIN_ENCRYPTED_MESSAGE_LEN: usize = SCHEME_LEN + MIN_SEALED_LEN;

/// A complete encrypted transaction message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedMessage {
    scheme: EncryptionScheme,
    sealed: SealedMessage,
}

impl EncryptedMessage {
    pub(crate) fn new(scheme: EncryptionScheme, sealed: SealedMessage) -> Self {
        Self { scheme, sealed }
    }

    pub fn scheme(&self) -> &EncryptionScheme {
        &self.scheme
    }

    pub fn sealed(&self) -> &SealedMessage {
        &self.sealed
    }

    /// The combined wire bytes: `scheme(32) || sealed`.
    pub fn combined(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(SCHEME_LEN + self.sealed.encoded_len());
        out.extend_from_slice(&self.scheme.encode());
        out.extend_from_slice(&self.sealed.encode());
        out
    }

    /// Parse the combined wire bytes.
    ///
    /// Pure function of the input: decoding the same buffer twice yields
    /// equal values.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecryptError> {
        if bytes.len() > MAX_ENCRYPTED_MESSAGE_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "encrypted message",
                expected: MAX_ENCRYPTED_MESSAGE_LEN,
                actual: bytes.len(),
            });
        }
        if bytes.len() < MIN_ENCRYPTED_MESSAGE_LEN {
            return Err(DecryptError::MalformedWireFormat {
                field: "encrypted message",
                expected: MIN_ENCRYPTED_MESSAGE_LEN,
                actual: bytes.len(),
            });
        }

        let mut scheme_bytes = [0u8; SCHEME_LEN];
        scheme_bytes.copy_from_slice(&bytes[..SCHEME_LEN]);
        let scheme = EncryptionScheme::decode(&scheme_bytes)?;
        let sealed = SealedMessage::decode(&bytes[SCHEME_LEN..])?;

        Ok(Self { scheme, sealed })
    }

    /// The combined bytes as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.combined())
    }

    /// Parse from a hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, DecryptError> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str).map_err(|_| DecryptError::MalformedWireFormat {
            field: "encrypted message hex",
            expected: MIN_ENCRYPTED_MESSAGE_LEN * 2,
            actual: hex_str.len(),
        })?;
        Self::from_bytes(&bytes)
    }
}

impl Serialize for EncryptedMessage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EncryptedMessage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(deserializer)?;
        EncryptedMessage::from_hex(&hex_str).map_err(D::Error::custom)
    }
}
