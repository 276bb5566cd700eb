// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Cryptographic primitives for the message-encryption protocol:
//!
//! - **CurvePoint**: secp256k1 point wrapper (add, scalar multiply, SEC1
//!   compressed encode/decode)
//! - **KeyPair**: private/public key types and the Diffie-Hellman primitive
//! - **SharedSecret**: `DH(own, other) + ephemeral` derivation
//! - **KDF**: scrypt key stretching salted by a hash of the nonce
//! - **AES-GCM**: authenticated seal/open with a detached 16-byte tag
//!
//! All operations are synchronous, pure, and return typed errors; nothing in
//! this module panics on malformed input reachable from the public API.

pub mod aes_gcm;
pub mod curve_point;
pub mod error;
pub mod kdf;
pub mod key_pair;
pub mod shared_secret;

pub use aes_gcm::{open, seal};
pub use curve_point::CurvePoint;
pub use error::KeyError;
pub use kdf::derive_symmetric_key;
pub use key_pair::{dh, KeyPair, PrivateKey, PublicKey};
pub use shared_secret::derive_shared_secret;
