// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Key types and the Diffie-Hellman primitive.
//!
//! `PrivateKey` and `PublicKey` wrap the `k256` secp256k1 types. Private keys
//! are accepted from the wallet subsystem as raw 32-byte scalars or hex
//! strings and are never serialized (or debug-printed) by this crate.

use core::fmt;

use k256::{PublicKey as K256PublicKey, SecretKey};
use rand::{CryptoRng, RngCore};

use super::curve_point::CurvePoint;
use super::error::KeyError;

/// A secp256k1 private scalar in `[1, order)`.
#[derive(Clone)]
pub struct PrivateKey(SecretKey);

impl PrivateKey {
    /// Parse a 32-byte big-endian scalar.
    ///
    /// Rejects zero and values at or above the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 32 {
            return Err(KeyError::InvalidPrivateKey("expected 32 bytes"));
        }
        let secret = SecretKey::from_slice(bytes)
            .map_err(|_| KeyError::InvalidPrivateKey("scalar out of range"))?;
        Ok(Self(secret))
    }

    /// Parse a 64-character hex scalar, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes =
            hex::decode(hex_str).map_err(|_| KeyError::InvalidPrivateKey("invalid hex"))?;
        Self::from_bytes(&bytes)
    }

    /// The derived public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.public_key())
    }

    pub(crate) fn secret(&self) -> &SecretKey {
        &self.0
    }
}

// The scalar never appears in logs or debug output.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A secp256k1 public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(K256PublicKey);

impl PublicKey {
    /// Parse a SEC1 encoding (33-byte compressed or 65-byte uncompressed).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != 33 && bytes.len() != 65 {
            return Err(KeyError::InvalidPublicKey("expected 33 or 65 bytes"));
        }
        let key = K256PublicKey::from_sec1_bytes(bytes)
            .map_err(|_| KeyError::InvalidPublicKey("not a point on the curve"))?;
        Ok(Self(key))
    }

    /// SEC1 compressed encoding (33 bytes).
    pub fn to_compressed(&self) -> [u8; 33] {
        self.as_point().to_compressed()
    }

    /// The underlying curve point.
    pub fn as_point(&self) -> CurvePoint {
        CurvePoint::from_public_key(&self.0)
    }
}

impl From<&PrivateKey> for PublicKey {
    fn from(private: &PrivateKey) -> Self {
        private.public_key()
    }
}

/// A private key together with its derived public key.
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: PrivateKey,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh key pair from the supplied RNG.
    ///
    /// The RNG is injected so tests can substitute a deterministic stream;
    /// production callers pass `rand::rngs::OsRng`.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> KeyPair {
        let secret = SecretKey::random(rng);
        let public = PublicKey(secret.public_key());
        KeyPair {
            private: PrivateKey(secret),
            public,
        }
    }

    /// Build a key pair from an existing private key.
    pub fn from_private(private: PrivateKey) -> KeyPair {
        let public = private.public_key();
        KeyPair { private, public }
    }

    pub fn private(&self) -> &PrivateKey {
        &self.private
    }

    pub fn public(&self) -> &PublicKey {
        &self.public
    }
}

/// Diffie-Hellman: `own_private * other_public` as a full curve point.
///
/// Commutative by construction: `dh(a, B) == dh(b, A)` for key pairs
/// `(a, A)` and `(b, B)`. The full point (not just the x-coordinate) is
/// returned because the protocol adds an ephemeral point on top before
/// taking the x-coordinate.
pub fn dh(own_private: &PrivateKey, other_public: &PublicKey) -> Result<CurvePoint, KeyError> {
    let scalar = *own_private.secret().to_nonzero_scalar();
    other_public.as_point().mul(&scalar)
}
