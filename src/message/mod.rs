// Copyright (c) 2025 ledger-message-crypto contributors
// SPDX-License-Identifier: Apache-2.0
//! Wire format and orchestration for encrypted transaction messages:
//!
//! - **EncryptionScheme**: the 32-byte protocol identifier prefix
//! - **SealedMessage**: ephemeral key, nonce, auth tag, ciphertext
//! - **EncryptedMessage**: scheme plus sealed message, ≤ 255 wire bytes
//! - **encrypt / decrypt**: the public one-shot operations

mod cursor;
pub mod encrypted;
pub mod encryption;
pub mod error;
pub mod scheme;
pub mod sealed;

pub use encrypted::{EncryptedMessage, MIN_ENCRYPTED_MESSAGE_LEN};
pub use encryption::{decrypt, decrypt_bytes, encrypt, encrypt_text, MAX_PLAINTEXT_LEN};
pub use error::{DecryptError, EncryptError};
pub use scheme::{EncryptionScheme, SCHEME_LEN, SUPPORTED_IDENTIFIER};
pub use sealed::{SealedMessage, MAX_CIPHERTEXT_LEN, MAX_ENCRYPTED_MESSAGE_LEN};
