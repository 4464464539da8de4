use clave_crypto::{CryptoError, KeyPair, PublicKey, SecretKey, KEY_SIZE};

#[test]
fn generated_keypairs_are_unique() {
    let kp1 = KeyPair::generate();
    let kp2 = KeyPair::generate();
    assert_ne!(kp1.public.to_bytes(), kp2.public.to_bytes());
    assert_ne!(kp1.secret.to_bytes(), kp2.secret.to_bytes());
}

#[test]
fn public_key_derived_from_secret() {
    let kp = KeyPair::generate();
    assert_eq!(kp.secret.public_key().to_bytes(), kp.public.to_bytes());
}

#[test]
fn key_bytes_roundtrip() {
    let kp = KeyPair::generate();

    let secret = SecretKey::from_bytes(kp.secret.to_bytes());
    let public = PublicKey::from_bytes(kp.public.to_bytes());

    assert_eq!(secret.to_bytes(), kp.secret.to_bytes());
    assert_eq!(public.to_bytes(), kp.public.to_bytes());
}

#[test]
fn key_base64_roundtrip() {
    let kp = KeyPair::generate();

    let secret = SecretKey::from_base64(&kp.secret.to_base64()).unwrap();
    let public = PublicKey::from_base64(&kp.public.to_base64()).unwrap();

    assert_eq!(secret.to_bytes(), kp.secret.to_bytes());
    assert_eq!(public.to_bytes(), kp.public.to_bytes());
}

#[test]
fn key_base64_tolerates_surrounding_whitespace() {
    let kp = KeyPair::generate();
    let padded = format!("  {}\n", kp.public.to_base64());
    let public = PublicKey::from_base64(&padded).unwrap();
    assert_eq!(public.to_bytes(), kp.public.to_bytes());
}

#[test]
fn invalid_base64_rejected() {
    let err = PublicKey::from_base64("!!!not-base64!!!").unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKey(_)));
}

#[test]
fn wrong_length_rejected() {
    use base64::{engine::general_purpose::STANDARD, Engine};
    let short = STANDARD.encode([0u8; 16]);
    let err = SecretKey::from_base64(&short).unwrap_err();
    match err {
        CryptoError::InvalidKeyLength { expected, actual } => {
            assert_eq!(expected, KEY_SIZE);
            assert_eq!(actual, 16);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn secret_key_debug_is_redacted() {
    let kp = KeyPair::generate();
    let debug = format!("{:?}", kp.secret);
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains(&kp.secret.to_base64()));
}
