// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Authenticated message encryption for ledger transactions.
//!
//! A transaction on the ledger may carry an optional encrypted message of at
//! most 255 bytes. This crate implements the protocol that produces and reads
//! that field:
//!
//! - **ECDH + ephemeral key**: the sender combines a static Diffie-Hellman
//!   point with a per-message ephemeral key, so that *either* party can later
//!   decrypt using only their own private key and the counterparty's public
//!   key.
//! - **scrypt KDF**: the shared point's x-coordinate is stretched into an
//!   AES-256 key, salted by a hash of the nonce.
//! - **AES-256-GCM**: authenticated encryption with the compressed ephemeral
//!   public key as associated data.
//! - **Wire framing**: a 32-byte scheme tag followed by the sealed message
//!   (ephemeral key, nonce, auth tag, ciphertext), all under the 255-byte
//!   ledger limit.
//!
//! ## Example
//!
//! ```
//! use ledger_message_crypto::crypto::KeyPair;
//! use ledger_message_crypto::message;
//! use rand::rngs::OsRng;
//!
//! let alice = KeyPair::generate(&mut OsRng);
//! let bob = KeyPair::generate(&mut OsRng);
//!
//! let encrypted = message::encrypt_text(
//!     "Hey Bob, this is Alice",
//!     alice.private(),
//!     bob.public(),
//!     &mut OsRng,
//! )?;
//!
//! // Either party can decrypt with their own private key and the
//! // counterparty's public key.
//! let by_bob = message::decrypt(&encrypted, bob.private(), alice.public())?;
//! let by_alice = message::decrypt(&encrypted, alice.private(), bob.public())?;
//! assert_eq!(by_bob, by_alice);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Security Considerations
//!
//! - Private keys and derived symmetric keys are never serialized or logged.
//! - A fresh ephemeral key pair and nonce are drawn per encryption from a
//!   caller-supplied RNG; production callers pass `rand::rngs::OsRng`.
//! - Decryption fails closed: unsupported schemes and authentication
//!   failures never release partial plaintext.

pub mod crypto;
pub mod message;

pub use crypto::{CurvePoint, KeyError, KeyPair, PrivateKey, PublicKey};
pub use message::{
    decrypt, decrypt_bytes, encrypt, encrypt_text, DecryptError, EncryptError, EncryptedMessage,
    EncryptionScheme, SealedMessage, MAX_PLAINTEXT_LEN,
};
