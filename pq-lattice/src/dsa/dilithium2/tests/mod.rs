use alloc::{string::String, vec::Vec};

use assert_matches::assert_matches;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rstest::rstest;

use super::{
    BETA, DILITHIUM2, Dilithium2, GAMMA1, HINT_BYTES, KeyPair, L, PK_LEN, PublicKey, SIG_LEN,
    SK_LEN, SecretKey, Signature, WIDE_COEFFICIENT_BYTES,
};
use crate::{
    LatticeError,
    dsa::SignatureScheme,
    hash::{DIGEST_BYTES, Sha3_256},
    math::N,
    rand::test_utils::prng_vector,
    utils::{Deserializable, Serializable},
};


fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha3_256::hash(bytes))
}

/// Overwrites coefficient `index` of z in an encoded signature.
fn set_z_coefficient(signature: &mut [u8], index: usize, value: i32) {
    let offset = DIGEST_BYTES + index * WIDE_COEFFICIENT_BYTES;
    signature[offset..offset + WIDE_COEFFICIENT_BYTES]
        .copy_from_slice(&value.to_le_bytes()[..WIDE_COEFFICIENT_BYTES]);
}

#[test]
fn test_signature_round_trip() {
    let mut rng = ChaCha20Rng::from_seed([0_u8; 32]);

    for i in 0..16 {
        let key_pair = KeyPair::with_rng(&mut rng).unwrap();
        let len = rng.random_range(0..512);
        let message: Vec<u8> = prng_vector([i as u8; 32], len);

        let signature = key_pair.secret_key().sign(&message).unwrap();
        assert!(key_pair.public_key().verify(&message, &signature));
    }
}

#[rstest]
#[case::empty(0)]
#[case::ten_kilobytes(10 * 1024)]
fn test_signature_round_trip_message_sizes(#[case] len: usize) {
    let mut rng = ChaCha20Rng::from_seed([1_u8; 32]);
    let key_pair = KeyPair::with_rng(&mut rng).unwrap();
    let message: Vec<u8> = prng_vector([2_u8; 32], len);

    let signature = key_pair.secret_key().sign(&message).unwrap();
    assert!(key_pair.public_key().verify(&message, &signature));

    let decoded = Signature::read_from_bytes(&signature.to_bytes()).unwrap();
    assert_eq!(decoded, signature);
    assert!(key_pair.public_key().verify(&message, &decoded));
}

#[test]
fn test_signature_known_answer() {
    let key_pair = KeyPair::from_seed(&data::SEED).unwrap();
    let pk_bytes = key_pair.public_key().to_bytes();
    let sk_bytes = key_pair.secret_key().to_bytes();

    assert_eq!(hex::encode(&pk_bytes[..8]), data::PUBLIC_KEY_PREFIX);
    assert_eq!(digest_hex(&pk_bytes), data::PUBLIC_KEY_DIGEST);
    assert_eq!(digest_hex(&sk_bytes), data::SECRET_KEY_DIGEST);

    let signature = key_pair.secret_key().sign(b"").unwrap();
    assert_eq!(hex::encode(signature.c_tilde()), data::EMPTY_MESSAGE_C_TILDE);
    assert_eq!(digest_hex(&signature.to_bytes()), data::EMPTY_MESSAGE_SIGNATURE_DIGEST);

    let signature = key_pair.secret_key().sign(data::MESSAGE).unwrap();
    assert_eq!(hex::encode(signature.c_tilde()), data::MESSAGE_C_TILDE);
    assert_eq!(digest_hex(&signature.to_bytes()), data::MESSAGE_SIGNATURE_DIGEST);
}

#[test]
fn test_signing_retries_rejected_nonces() {
    let key_pair = KeyPair::from_seed(&data::SEED).unwrap();
    let sk = key_pair.secret_key();

    let result = sk.sign_with_attempts(data::RETRIED_MESSAGE, data::RETRIED_MESSAGE_REJECTIONS);
    assert_matches!(
        result,
        Err(LatticeError::SamplingExhausted { attempts })
            if attempts == data::RETRIED_MESSAGE_REJECTIONS
    );

    let signature = sk
        .sign_with_attempts(data::RETRIED_MESSAGE, data::RETRIED_MESSAGE_REJECTIONS + 1)
        .unwrap();
    assert_eq!(digest_hex(&signature.to_bytes()), data::RETRIED_MESSAGE_SIGNATURE_DIGEST);
    assert_eq!(sk.sign(data::RETRIED_MESSAGE).unwrap(), signature);
}

#[test]
fn test_signing_with_no_attempts_is_exhausted() {
    let key_pair = KeyPair::from_seed(&[3_u8; 32]).unwrap();
    assert_matches!(
        key_pair.secret_key().sign_with_attempts(b"data", 0),
        Err(LatticeError::SamplingExhausted { attempts: 0 })
    );
}

#[test]
fn test_signature_determinism() {
    let key_pair = KeyPair::from_seed(&[4_u8; 32]).unwrap();
    let same = KeyPair::from_seed(&[4_u8; 32]).unwrap();
    assert_eq!(key_pair, same);

    let signature_1 = key_pair.secret_key().sign(b"data").unwrap();
    let signature_2 = same.secret_key().sign(b"data").unwrap();
    assert_eq!(signature_1.to_bytes(), signature_2.to_bytes());

    let other = key_pair.secret_key().sign(b"other data").unwrap();
    assert_ne!(signature_1.c_tilde(), other.c_tilde());
}

#[test]
fn test_emitted_z_respects_the_bound() {
    let key_pair = KeyPair::from_seed(&[5_u8; 32]).unwrap();
    for i in 0..8_u8 {
        let signature = key_pair.secret_key().sign(&[i; 17]).unwrap();
        assert!(signature.z().norm_infinity() < GAMMA1 - BETA);
    }
}

#[test]
fn test_hint_bits_are_packed_lsb_first() {
    let key_pair = KeyPair::from_seed(&[5_u8; 32]).unwrap();
    let signature = key_pair.secret_key().sign(b"hint").unwrap();
    // t travels uncompressed, so no high bits ever need correcting
    assert_eq!(signature.hint().count_ones(), 0);

    // bit 3 of the second hint byte is coefficient 11 of the first component
    let mut bytes = signature.to_bytes();
    bytes[SIG_LEN - HINT_BYTES + 1] |= 1 << 3;
    let tampered = Signature::read_from_bytes(&bytes).unwrap();
    assert!(tampered.hint().get(0, 11));
    assert!(!tampered.hint().get(0, 10));
    assert_eq!(tampered.hint().count_ones(), 1);
    assert!(!tampered.verify(b"hint", key_pair.public_key()));
}

#[test]
fn test_signature_rejects_wrong_message_and_key() {
    let mut rng = ChaCha20Rng::from_seed([6_u8; 32]);
    let key_pair = KeyPair::with_rng(&mut rng).unwrap();
    let other = KeyPair::with_rng(&mut rng).unwrap();

    let signature = key_pair.secret_key().sign(b"data").unwrap();
    assert!(key_pair.public_key().verify(b"data", &signature));
    assert!(!key_pair.public_key().verify(b"datb", &signature));
    assert!(!other.public_key().verify(b"data", &signature));
}

#[test]
fn test_signature_bit_flips_fail_to_verify() {
    let mut rng = ChaCha20Rng::from_seed([7_u8; 32]);
    let key_pair = Dilithium2::keygen_with_rng(&mut rng).unwrap();
    let signature = Dilithium2::sign(b"tamper", &key_pair.secret_key).unwrap();
    assert!(Dilithium2::verify(b"tamper", &signature, &key_pair.public_key));

    for _ in 0..64 {
        let mut tampered = signature.clone();
        let position = rng.random_range(0..SIG_LEN * 8);
        tampered[position / 8] ^= 1 << (position % 8);
        assert!(!Dilithium2::verify(b"tamper", &tampered, &key_pair.public_key));
    }
}

#[test]
fn test_every_region_of_the_signature_is_bound() {
    let key_pair = KeyPair::from_seed(&[8_u8; 32]).unwrap();
    let pk_bytes = key_pair.public_key().to_bytes();
    let signature = key_pair.secret_key().sign(b"regions").unwrap().to_bytes();

    // first byte of c_tilde, low byte of the first z coefficient, last hint byte
    for offset in [0, DIGEST_BYTES, SIG_LEN - 1] {
        let mut tampered = signature.clone();
        tampered[offset] ^= 1;
        assert!(!Dilithium2::verify(b"regions", &tampered, &pk_bytes));
    }
}

#[rstest]
#[case::at_bound((GAMMA1 - BETA) as i32)]
#[case::negative_at_bound(-((GAMMA1 - BETA) as i32))]
#[case::above_gamma1(GAMMA1 as i32 + 5)]
fn test_hand_crafted_z_above_bound_is_rejected(#[case] value: i32) {
    let key_pair = KeyPair::from_seed(&[9_u8; 32]).unwrap();
    let mut signature = key_pair.secret_key().sign(b"bound").unwrap().to_bytes();
    set_z_coefficient(&mut signature, 5, value);

    // the value is well-formed on the wire but fails the norm check
    let decoded = Signature::try_from(signature.as_slice()).unwrap();
    assert_eq!(decoded.z().norm_infinity(), value.unsigned_abs());
    assert!(!key_pair.public_key().verify(b"bound", &decoded));
}

#[test]
fn test_z_outside_the_encoding_range_is_malformed() {
    let key_pair = KeyPair::from_seed(&[10_u8; 32]).unwrap();
    let mut signature = key_pair.secret_key().sign(b"range").unwrap().to_bytes();
    // 0x7fffff decodes to 8388607, which exceeds (q - 1) / 2
    set_z_coefficient(&mut signature, L * N - 1, 0x7f_ffff);

    assert_matches!(
        Signature::try_from(signature.as_slice()),
        Err(LatticeError::MalformedEncoding(_))
    );
    assert!(!Dilithium2::verify(b"range", &signature, &key_pair.public_key().to_bytes()));
}

#[test]
fn test_secret_coefficients_outside_eta_are_malformed() {
    let key_pair = KeyPair::from_seed(&[11_u8; 32]).unwrap();
    let mut sk_bytes = key_pair.secret_key().to_bytes();

    // first coefficient of s1, just after rho and K_seed
    let value = DILITHIUM2.eta as i16 + 1;
    sk_bytes[64..66].copy_from_slice(&value.to_le_bytes());
    assert_matches!(
        SecretKey::try_from(sk_bytes.as_slice()),
        Err(LatticeError::MalformedEncoding(_))
    );
    assert_matches!(
        Dilithium2::sign(b"data", &sk_bytes),
        Err(LatticeError::MalformedEncoding(_))
    );
}

#[test]
fn test_lengths_are_checked() {
    assert_matches!(
        Dilithium2::sign(b"data", &[0_u8; SK_LEN - 1]),
        Err(LatticeError::InvalidLength { kind: "secret key", expected: SK_LEN, .. })
    );
    assert_matches!(
        PublicKey::try_from(&[0_u8; PK_LEN + 1][..]),
        Err(LatticeError::InvalidLength { kind: "public key", .. })
    );
    assert_matches!(
        Signature::try_from(&[0_u8; 10][..]),
        Err(LatticeError::InvalidLength { kind: "signature", expected: SIG_LEN, actual: 10 })
    );

    // verification is total
    assert!(!Dilithium2::verify(b"data", &[], &[]));
    assert!(!Dilithium2::verify(b"data", &[0_u8; SIG_LEN], &[0_u8; PK_LEN - 1]));
}

#[test]
fn test_verification_of_garbage_is_false() {
    let key_pair = KeyPair::from_seed(&[12_u8; 32]).unwrap();
    let pk_bytes = key_pair.public_key().to_bytes();
    let garbage: Vec<u8> = prng_vector([13_u8; 32], SIG_LEN);
    assert!(!Dilithium2::verify(b"data", &garbage, &pk_bytes));
    assert!(!Dilithium2::verify(b"data", &[0_u8; SIG_LEN], &pk_bytes));
}

#[test]
fn test_byte_level_interface() {
    let mut rng = ChaCha20Rng::from_seed([14_u8; 32]);
    let key_pair = Dilithium2::keygen_with_rng(&mut rng).unwrap();
    assert_eq!(key_pair.public_key.len(), Dilithium2::PUBLIC_KEY_LEN);
    assert_eq!(key_pair.secret_key.len(), Dilithium2::SECRET_KEY_LEN);

    let signature = Dilithium2::sign(b"bytes", &key_pair.secret_key).unwrap();
    assert_eq!(signature.len(), Dilithium2::SIGNATURE_LEN);
    assert!(Dilithium2::verify(b"bytes", &signature, &key_pair.public_key));

    let sk = SecretKey::try_from(key_pair.secret_key.as_slice()).unwrap();
    assert_eq!(sk.public_key().to_bytes(), key_pair.public_key);
}

#[test]
fn test_secret_key_debug_redaction() {
    let key_pair = KeyPair::from_seed(&[15_u8; 32]).unwrap();
    let sk = key_pair.secret_key();

    let debug_output = format!("{sk:?}");
    assert_eq!(debug_output, "<elided secret for SecretKey>");

    let display_output = format!("{sk}");
    assert_eq!(display_output, "<elided secret for SecretKey>");

    let encoded = Dilithium2::keygen_with_rng(&mut ChaCha20Rng::from_seed([16_u8; 32])).unwrap();
    assert_eq!(format!("{encoded:?}"), "<elided secret for EncodedKeyPair>");
}
