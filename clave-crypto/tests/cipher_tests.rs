use clave_crypto::{decrypt, encrypt, ContentKey, NONCE_SIZE, TAG_SIZE};

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = ContentKey::generate();
    let plaintext = b"Hello, World!";
    let encrypted = encrypt(&key, plaintext).unwrap();
    let decrypted = decrypt(&key, &encrypted).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn encrypt_decrypt_empty() {
    let key = ContentKey::generate();
    let encrypted = encrypt(&key, b"").unwrap();
    let decrypted = decrypt(&key, &encrypted).unwrap();
    assert_eq!(decrypted, b"");
}

#[test]
fn encrypt_decrypt_large_data() {
    let key = ContentKey::generate();
    let plaintext: Vec<u8> = (0..10000).map(|i| (i % 256) as u8).collect();
    let encrypted = encrypt(&key, &plaintext).unwrap();
    let decrypted = decrypt(&key, &encrypted).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn wrong_key_fails_decryption() {
    let key1 = ContentKey::generate();
    let key2 = ContentKey::generate();
    let encrypted = encrypt(&key1, b"Secret").unwrap();
    assert!(decrypt(&key2, &encrypted).is_err());
}

#[test]
fn tampered_data_fails_decryption() {
    let key = ContentKey::generate();
    let mut encrypted = encrypt(&key, b"Secret").unwrap();
    encrypted.ciphertext[0] ^= 0xFF;
    assert!(decrypt(&key, &encrypted).is_err());
}

#[test]
fn tampered_nonce_fails_decryption() {
    let key = ContentKey::generate();
    let mut encrypted = encrypt(&key, b"Secret").unwrap();
    encrypted.nonce[0] ^= 0xFF;
    assert!(decrypt(&key, &encrypted).is_err());
}

#[test]
fn same_plaintext_produces_different_ciphertext() {
    let key = ContentKey::generate();
    let e1 = encrypt(&key, b"Same").unwrap();
    let e2 = encrypt(&key, b"Same").unwrap();
    assert_ne!(e1.nonce, e2.nonce);
    assert_ne!(e1.ciphertext, e2.ciphertext);
}

#[test]
fn ciphertext_includes_auth_tag() {
    let key = ContentKey::generate();
    let encrypted = encrypt(&key, b"test").unwrap();
    assert_eq!(encrypted.ciphertext.len(), 4 + TAG_SIZE);
    assert_eq!(encrypted.nonce.len(), NONCE_SIZE);
}

#[test]
fn content_key_debug_is_redacted() {
    let key = ContentKey::generate();
    let debug = format!("{key:?}");
    assert!(debug.contains("REDACTED"));
}

#[test]
fn encrypted_data_serde_roundtrip() {
    let key = ContentKey::generate();
    let encrypted = encrypt(&key, b"test").unwrap();
    let json = serde_json::to_string(&encrypted).unwrap();
    let parsed: clave_crypto::EncryptedData = serde_json::from_str(&json).unwrap();
    assert_eq!(encrypted.nonce, parsed.nonce);
    assert_eq!(encrypted.ciphertext, parsed.ciphertext);
}
