//! Wire-format tests: fixed byte layout, length budget, hex/serde forms.

use ledger_message_crypto::crypto::KeyPair;
use ledger_message_crypto::message::{
    self, EncryptedMessage, EncryptionScheme, MAX_PLAINTEXT_LEN, SCHEME_LEN, SUPPORTED_IDENTIFIER,
};
use rand::rngs::OsRng;

/// Hex of the 32-byte scheme prefix: length byte 0x1f followed by the ASCII
/// of `DH_ADD_EPH_AESGCM256_SCRYPT_000` (31 bytes, so no padding).
const SCHEME_PREFIX_HEX: &str =
    "1f44485f4144445f4550485f41455347434d3235365f5343525950545f303030";

fn encrypt_sample() -> EncryptedMessage {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);
    message::encrypt(b"wire format sample", alice.private(), bob.public(), &mut OsRng).unwrap()
}

#[test]
fn test_wire_bytes_start_with_scheme_prefix() {
    let wire = encrypt_sample().combined();
    assert_eq!(hex::encode(&wire[..SCHEME_LEN]), SCHEME_PREFIX_HEX);
}

#[test]
fn test_scheme_encoding_round_trip() {
    let scheme = EncryptionScheme::supported();
    let encoded = scheme.encode();
    assert_eq!(encoded.len(), 32);

    let decoded = EncryptionScheme::decode(&encoded).unwrap();
    assert_eq!(decoded.identifier(), SUPPORTED_IDENTIFIER);
}

#[test]
fn test_field_layout_offsets() {
    let msg = encrypt_sample();
    let wire = msg.combined();
    let sealed = msg.sealed();

    // scheme(32) || ephemeral(33) || nonce(12) || tag(16) || ciphertext
    assert_eq!(
        &wire[32..65],
        sealed.ephemeral_public_key().to_compressed().as_slice()
    );
    assert_eq!(&wire[65..77], sealed.nonce().as_slice());
    assert_eq!(&wire[77..93], sealed.tag().as_slice());
    assert_eq!(&wire[93..], sealed.ciphertext());
}

#[test]
fn test_max_plaintext_produces_255_byte_wire_value() {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);

    let wire = message::encrypt(
        &[0xAB; MAX_PLAINTEXT_LEN],
        alice.private(),
        bob.public(),
        &mut OsRng,
    )
    .unwrap()
    .combined();
    assert_eq!(wire.len(), 255);
}

#[test]
fn test_ciphertext_length_matches_plaintext_length() {
    let alice = KeyPair::generate(&mut OsRng);
    let bob = KeyPair::generate(&mut OsRng);

    let msg = message::encrypt(&[1u8; 50], alice.private(), bob.public(), &mut OsRng).unwrap();
    assert_eq!(msg.sealed().ciphertext().len(), 50);
    assert_eq!(msg.combined().len(), 32 + 33 + 12 + 16 + 50);
}

#[test]
fn test_decode_is_idempotent() {
    let wire = encrypt_sample().combined();
    let first = EncryptedMessage::from_bytes(&wire).unwrap();
    let second = EncryptedMessage::from_bytes(&wire).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hex_round_trip() {
    let msg = encrypt_sample();
    let parsed = EncryptedMessage::from_hex(&msg.to_hex()).unwrap();
    assert_eq!(parsed, msg);
}

#[test]
fn test_serde_round_trips_as_hex_string() {
    let msg = encrypt_sample();

    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(json, format!("\"{}\"", msg.to_hex()));

    let parsed: EncryptedMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, msg);
}
