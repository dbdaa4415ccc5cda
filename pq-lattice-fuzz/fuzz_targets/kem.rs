#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use pq_lattice::{
    kem::{
        KemScheme,
        kyber1024::{self, Ciphertext, KeyPair, Kyber1024, PublicKey, SecretKey},
    },
    utils::{Deserializable, Serializable},
};

static KEY_PAIR: LazyLock<KeyPair> =
    LazyLock::new(|| KeyPair::from_seed(&[0xa5; kyber1024::SEED_LEN]).unwrap());

static CIPHERTEXT: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let message = [0x3c; kyber1024::MESSAGE_LEN];
    KEY_PAIR.public_key().encapsulate_from_seed(&message).unwrap().0.to_bytes()
});

fuzz_target!(|data: &[u8]| {
    // =========================================================================
    // Deserialization of raw input
    // =========================================================================

    let _ = Ciphertext::read_from_bytes(data);
    let _ = PublicKey::read_from_bytes(data);
    let _ = SecretKey::read_from_bytes(data);
    let _ = Ciphertext::try_from(data);
    let _ = PublicKey::try_from(data);
    let _ = SecretKey::try_from(data);

    let secret_key = KEY_PAIR.secret_key().to_bytes();
    let _ = Kyber1024::decapsulate(data, &secret_key);
    let _ = Kyber1024::decapsulate(&CIPHERTEXT, data);
    let _ = Kyber1024::encapsulate(data);

    // =========================================================================
    // Tampered ciphertexts
    // =========================================================================

    if data.len() < 2 {
        return;
    }
    let (offset, patch) = data.split_at(2);
    let offset = u16::from_le_bytes([offset[0], offset[1]]) as usize % kyber1024::CT_LEN;

    let mut ciphertext = CIPHERTEXT.clone();
    let end = (offset + patch.len()).min(ciphertext.len());
    ciphertext[offset..end].copy_from_slice(&patch[..end - offset]);

    // Any well-formed ciphertext decapsulates to some shared secret.
    if let Ok(parsed) = Ciphertext::try_from(ciphertext.as_slice()) {
        let expected = KEY_PAIR.secret_key().decapsulate(&parsed);
        let actual = Kyber1024::decapsulate(&ciphertext, &secret_key).unwrap();
        assert_eq!(expected.as_bytes(), actual.as_bytes());
    }
});
