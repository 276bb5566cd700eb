// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! secp256k1 point wrapper.
//!
//! Wraps `k256` points behind the small capability surface the protocol
//! needs: SEC1 compressed encode/decode, point addition, scalar
//! multiplication, and the x-coordinate bytes that feed the KDF. Field
//! arithmetic itself is delegated entirely to `k256`.

use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{EncodedPoint, ProjectivePoint, PublicKey, Scalar};

use super::error::KeyError;

/// Length of a SEC1 compressed secp256k1 point.
pub const COMPRESSED_POINT_LEN: usize = 33;

/// A non-identity point on secp256k1.
///
/// Every constructor and operation validates its result, so a `CurvePoint`
/// value is always on-curve and never the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurvePoint(ProjectivePoint);

impl CurvePoint {
    /// Parse a 33-byte SEC1 compressed encoding.
    pub fn decode_compressed(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != COMPRESSED_POINT_LEN {
            return Err(KeyError::InvalidPublicKey(
                "compressed point must be 33 bytes",
            ));
        }
        let encoded = EncodedPoint::from_bytes(bytes)
            .map_err(|_| KeyError::InvalidPublicKey("unparseable SEC1 encoding"))?;
        let point: Option<PublicKey> = PublicKey::from_encoded_point(&encoded).into();
        match point {
            Some(pk) => Ok(Self(pk.to_projective())),
            None => Err(KeyError::InvalidPublicKey("not a point on the curve")),
        }
    }

    /// SEC1 compressed encoding (33 bytes, `0x02`/`0x03` prefix).
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_LEN] {
        let encoded = self.0.to_affine().to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_POINT_LEN];
        // Non-identity invariant guarantees the full 33-byte encoding.
        out.copy_from_slice(encoded.as_bytes());
        out
    }

    /// Point addition, rejecting an identity result.
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint, KeyError> {
        let sum = self.0 + other.0;
        if sum == ProjectivePoint::IDENTITY {
            return Err(KeyError::InvalidPoint(
                "point addition produced the identity",
            ));
        }
        Ok(CurvePoint(sum))
    }

    /// Scalar multiplication, rejecting an identity result.
    pub fn mul(&self, scalar: &Scalar) -> Result<CurvePoint, KeyError> {
        let product = self.0 * *scalar;
        if product == ProjectivePoint::IDENTITY {
            return Err(KeyError::InvalidPoint(
                "scalar multiplication produced the identity",
            ));
        }
        Ok(CurvePoint(product))
    }

    /// Big-endian bytes of the affine x-coordinate (32 bytes).
    pub fn x_coordinate_bytes(&self) -> [u8; 32] {
        let encoded = self.0.to_affine().to_encoded_point(false);
        let mut out = [0u8; 32];
        if let Some(x) = encoded.x() {
            out.copy_from_slice(x.as_slice());
        }
        out
    }

    pub(crate) fn from_public_key(public_key: &PublicKey) -> Self {
        Self(public_key.to_projective())
    }
}
