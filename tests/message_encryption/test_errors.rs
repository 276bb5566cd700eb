//! Failure-path tests: tamper sensitivity, unsupported schemes, malformed
//! buffers, and the plaintext budget.

use ledger_message_crypto::crypto::KeyPair;
use ledger_message_crypto::message::{
    self, DecryptError, EncryptError, EncryptedMessage, EncryptionScheme, SCHEME_LEN,
};
use rand::rngs::OsRng;

struct Exchange {
    alice: KeyPair,
    bob: KeyPair,
    wire: Vec<u8>,
}

fn exchange() -> Exchange {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);
    let wire = message::encrypt(b"tamper target", alice.private(), bob.public(), &mut OsRng)
        .unwrap()
        .combined();
    Exchange { alice, bob, wire }
}

#[test]
fn test_plaintext_over_budget_rejected_with_exact_message() {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);

    let err =
        message::encrypt(&[0u8; 163], alice.private(), bob.public(), &mut OsRng).unwrap_err();
    assert_eq!(
        err,
        EncryptError::PlaintextTooLong {
            max: 162,
            actual: 163,
        }
    );
    assert_eq!(
        err.to_string(),
        "Plaintext is too long, expected max #162, but got: #163"
    );
}

#[test]
fn test_every_tampered_ciphertext_byte_fails_authentication() {
    let ex = exchange();
    // Ciphertext starts after scheme(32) + ephemeral(33) + nonce(12) + tag(16).
    for index in 93..ex.wire.len() {
        let mut tampered = ex.wire.clone();
        tampered[index] ^= 0x01;
        let result = message::decrypt_bytes(&tampered, ex.bob.private(), ex.alice.public());
        assert_eq!(
            result,
            Err(DecryptError::AuthenticationFailure),
            "flipping ciphertext byte {index} must fail authentication"
        );
    }
}

#[test]
fn test_every_tampered_tag_byte_fails_authentication() {
    let ex = exchange();
    for index in 77..93 {
        let mut tampered = ex.wire.clone();
        tampered[index] ^= 0x01;
        let result = message::decrypt_bytes(&tampered, ex.bob.private(), ex.alice.public());
        assert_eq!(
            result,
            Err(DecryptError::AuthenticationFailure),
            "flipping tag byte {index} must fail authentication"
        );
    }
}

#[test]
fn test_tampered_nonce_fails_authentication() {
    let ex = exchange();
    let mut tampered = ex.wire.clone();
    tampered[65] ^= 0x01;
    let result = message::decrypt_bytes(&tampered, ex.bob.private(), ex.alice.public());
    assert_eq!(result, Err(DecryptError::AuthenticationFailure));
}

#[test]
fn test_unsupported_scheme_refused_without_decryption() {
    let ex = exchange();

    // Swap the scheme tag for a structurally valid but unknown identifier.
    let mut wire = ex.wire.clone();
    let other = EncryptionScheme::new("DH_ADD_EPH_CHACHA20_HKDF_000").unwrap();
    wire[..SCHEME_LEN].copy_from_slice(&other.encode());

    let parsed = EncryptedMessage::from_bytes(&wire).unwrap();
    assert!(!parsed.scheme().is_supported());

    let err = message::decrypt(&parsed, ex.bob.private(), ex.alice.public()).unwrap_err();
    assert_eq!(
        err,
        DecryptError::UnsupportedEncryptionScheme {
            found: "DH_ADD_EPH_CHACHA20_HKDF_000".to_owned(),
        }
    );
}

#[test]
fn test_truncated_buffer_reports_bounds() {
    let ex = exchange();
    let err = EncryptedMessage::from_bytes(&ex.wire[..60]).unwrap_err();
    assert!(matches!(
        err,
        DecryptError::MalformedWireFormat {
            field: "encrypted message",
            ..
        }
    ));
}

#[test]
fn test_oversize_buffer_rejected() {
    let ex = exchange();
    let mut wire = ex.wire.clone();
    wire.resize(256, 0);
    let err = EncryptedMessage::from_bytes(&wire).unwrap_err();
    assert_eq!(
        err,
        DecryptError::MalformedWireFormat {
            field: "encrypted message",
            expected: 255,
            actual: 256,
        }
    );
}

#[test]
fn test_corrupt_ephemeral_key_reported_as_decode_failure() {
    let ex = exchange();
    let mut wire = ex.wire.clone();
    // An invalid SEC1 prefix makes the point unparseable.
    wire[SCHEME_LEN] = 0xFF;
    let err = EncryptedMessage::from_bytes(&wire).unwrap_err();
    assert_eq!(err, DecryptError::EphemeralKeyDecodeFailure);
}

#[test]
fn test_swapped_counterparty_key_fails_authentication() {
    let ex = exchange();
    let carol = KeyPair::generate(&mut OsRng);

    // Bob decrypts against the wrong counterparty public key.
    let result = message::decrypt_bytes(&ex.wire, ex.bob.private(), carol.public());
    assert_eq!(result, Err(DecryptError::AuthenticationFailure));
}
