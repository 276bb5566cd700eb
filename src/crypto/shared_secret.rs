// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Shared-secret derivation: `DH(own, other) + ephemeral`.
//!
//! Adding a transmitted ephemeral point on top of the static Diffie-Hellman
//! point keeps the derivation symmetric: because
//! `DH(alice, Bob) == DH(bob, Alice)`, both the sender and the recipient
//! arrive at the same point from different inputs, so either party can later
//! decrypt a message using only their own private key and the counterparty's
//! public key. A one-directional ECIES derivation would lock the sender out
//! of their own message.

use zeroize::Zeroizing;

use super::curve_point::CurvePoint;
use super::error::KeyError;
use super::key_pair::{dh, PrivateKey, PublicKey};

/// Derive the 32 big-endian x-coordinate bytes of
/// `DH(own_private, other_public) + ephemeral_point`.
pub fn derive_shared_secret(
    own_private: &PrivateKey,
    other_public: &PublicKey,
    ephemeral_point: &CurvePoint,
) -> Result<Zeroizing<[u8; 32]>, KeyError> {
    let dh_point = dh(own_private, other_public)?;
    let shared_point = dh_point.add(ephemeral_point)?;
    Ok(Zeroizing::new(shared_point.x_coordinate_bytes()))
}
