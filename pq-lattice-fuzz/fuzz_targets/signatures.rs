#![no_main]

use std::sync::LazyLock;

use libfuzzer_sys::fuzz_target;
use pq_lattice::{
    dsa::{
        SignatureScheme,
        dilithium2::{self, Dilithium2, KeyPair, PublicKey, SecretKey, Signature},
    },
    utils::{Deserializable, Serializable},
};

// Random bytes almost never form a well-sized signature, so most inputs are spliced into a valid
// signature of a fixed key instead.
static KEY_PAIR: LazyLock<KeyPair> =
    LazyLock::new(|| KeyPair::from_seed(&[0x5a; dilithium2::SEED_LEN]).unwrap());

static SIGNATURE: LazyLock<Vec<u8>> =
    LazyLock::new(|| KEY_PAIR.secret_key().sign(b"fuzz").unwrap().to_bytes());

fuzz_target!(|data: &[u8]| {
    // =========================================================================
    // Deserialization of raw input
    // =========================================================================

    let _ = Signature::read_from_bytes(data);
    let _ = PublicKey::read_from_bytes(data);
    let _ = SecretKey::read_from_bytes(data);
    let _ = Signature::try_from(data);
    let _ = PublicKey::try_from(data);

    // Verification is total: it returns false on any malformed input.
    let public_key = KEY_PAIR.public_key().to_bytes();
    let _ = Dilithium2::verify(data, data, &public_key);

    // =========================================================================
    // Tampered signatures
    // =========================================================================

    // The first two bytes pick where the rest of the input lands inside the signature.
    if data.len() < 2 {
        return;
    }
    let (offset, patch) = data.split_at(2);
    let offset = u16::from_le_bytes([offset[0], offset[1]]) as usize % dilithium2::SIG_LEN;

    let mut signature = SIGNATURE.clone();
    let end = (offset + patch.len()).min(signature.len());
    signature[offset..end].copy_from_slice(&patch[..end - offset]);

    let valid = Dilithium2::verify(b"fuzz", &signature, &public_key);
    if valid {
        assert_eq!(signature, *SIGNATURE, "a modified signature verified");
    }

    if let Ok(parsed) = Signature::try_from(signature.as_slice()) {
        assert_eq!(KEY_PAIR.public_key().verify(b"fuzz", &parsed), valid);
    }
});
