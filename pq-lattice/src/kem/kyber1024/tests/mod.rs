use alloc::string::String;

use assert_matches::assert_matches;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rstest::rstest;

use super::{CT_LEN, Ciphertext, KeyPair, Kyber1024, PK_LEN, PublicKey, SK_LEN, SecretKey};
use crate::{
    LatticeError,
    hash::Sha3_256,
    kem::KemScheme,
    utils::{Deserializable, Serializable},
};


fn digest_hex(bytes: &[u8]) -> String {
    hex::encode(Sha3_256::hash(bytes))
}

#[test]
fn test_kem_round_trip_over_many_key_pairs() {
    let mut rng = ChaCha20Rng::from_seed([0_u8; 32]);

    for _ in 0..1000 {
        let key_pair = KeyPair::with_rng(&mut rng).unwrap();
        let (ciphertext, shared_secret) =
            key_pair.public_key().encapsulate_with_rng(&mut rng).unwrap();
        assert_eq!(key_pair.secret_key().decapsulate(&ciphertext), shared_secret);
    }
}

#[test]
fn test_kem_known_answer() {
    let key_pair = KeyPair::from_seed(&data::SEED).unwrap();
    let pk_bytes = key_pair.public_key().to_bytes();
    let sk_bytes = key_pair.secret_key().to_bytes();

    assert_eq!(hex::encode(&pk_bytes[..8]), data::PUBLIC_KEY_PREFIX);
    assert_eq!(digest_hex(&pk_bytes), data::PUBLIC_KEY_DIGEST);
    assert_eq!(digest_hex(&sk_bytes), data::SECRET_KEY_DIGEST);

    let (ciphertext, shared_secret) =
        key_pair.public_key().encapsulate_from_seed(&data::MESSAGE).unwrap();
    assert_eq!(digest_hex(&ciphertext.to_bytes()), data::CIPHERTEXT_DIGEST);
    assert_eq!(hex::encode(shared_secret.as_bytes()), data::SHARED_SECRET);

    let recovered = key_pair.secret_key().decapsulate(&ciphertext);
    assert_eq!(hex::encode(recovered.as_bytes()), data::SHARED_SECRET);
}

#[test]
fn test_kem_known_answer_for_zero_seed() {
    let key_pair = KeyPair::from_seed(&[0_u8; 32]).unwrap();
    let pk_bytes = key_pair.public_key().to_bytes();

    assert_eq!(hex::encode(&pk_bytes[..8]), data::ZERO_SEED_PUBLIC_KEY_PREFIX);
    assert_eq!(digest_hex(&pk_bytes), data::ZERO_SEED_PUBLIC_KEY_DIGEST);
    assert_eq!(digest_hex(&key_pair.secret_key().to_bytes()), data::ZERO_SEED_SECRET_KEY_DIGEST);

    let (ciphertext, shared_secret) =
        key_pair.public_key().encapsulate_from_seed(&[0_u8; 32]).unwrap();
    assert_eq!(digest_hex(&ciphertext.to_bytes()), data::ZERO_SEED_CIPHERTEXT_DIGEST);
    assert_eq!(hex::encode(shared_secret.as_bytes()), data::ZERO_SEED_SHARED_SECRET);
    assert_eq!(key_pair.secret_key().decapsulate(&ciphertext), shared_secret);
}

#[test]
fn test_kem_determinism() {
    let key_pair_1 = KeyPair::from_seed(&[7_u8; 32]).unwrap();
    let key_pair_2 = KeyPair::from_seed(&[7_u8; 32]).unwrap();
    assert_eq!(key_pair_1, key_pair_2);

    let message = [0x42_u8; 32];
    let (ct1, ss1) = key_pair_1.public_key().encapsulate_from_seed(&message).unwrap();
    let (ct2, ss2) = key_pair_2.public_key().encapsulate_from_seed(&message).unwrap();
    assert_eq!(ct1, ct2);
    assert_eq!(ss1, ss2);

    let other = KeyPair::from_seed(&[8_u8; 32]).unwrap();
    assert_ne!(key_pair_1.public_key(), other.public_key());
}

#[test]
fn test_ciphertext_bit_flips_change_the_secret() {
    let mut rng = ChaCha20Rng::from_seed([1_u8; 32]);
    let key_pair = KeyPair::with_rng(&mut rng).unwrap();
    let sk_bytes = key_pair.secret_key().to_bytes();
    let (ciphertext, shared_secret) =
        key_pair.public_key().encapsulate_with_rng(&mut rng).unwrap();
    let ct_bytes = ciphertext.to_bytes();

    for _ in 0..64 {
        let mut tampered = ct_bytes.clone();
        let position = rng.random_range(0..CT_LEN * 8);
        tampered[position / 8] ^= 1 << (position % 8);

        // flipping a high bit may push a coefficient out of range, which is rejected outright
        match Kyber1024::decapsulate(&tampered, &sk_bytes) {
            Ok(recovered) => assert_ne!(recovered, shared_secret),
            Err(err) => assert_matches!(err, LatticeError::MalformedEncoding(_)),
        }
    }
}

#[test]
fn test_decapsulation_under_another_key() {
    let mut rng = ChaCha20Rng::from_seed([2_u8; 32]);
    let alice = KeyPair::with_rng(&mut rng).unwrap();
    let eve = KeyPair::with_rng(&mut rng).unwrap();

    let (ciphertext, shared_secret) = alice.public_key().encapsulate_with_rng(&mut rng).unwrap();
    assert_ne!(eve.secret_key().decapsulate(&ciphertext), shared_secret);
}

#[test]
fn test_byte_level_interface() {
    let mut rng = ChaCha20Rng::from_seed([3_u8; 32]);
    let key_pair = Kyber1024::keygen_with_rng(&mut rng).unwrap();
    assert_eq!(key_pair.public_key.len(), Kyber1024::PUBLIC_KEY_LEN);
    assert_eq!(key_pair.secret_key.len(), Kyber1024::SECRET_KEY_LEN);

    let (ciphertext, shared_secret) =
        Kyber1024::encapsulate_with_rng(&key_pair.public_key, &mut rng).unwrap();
    assert_eq!(ciphertext.len(), Kyber1024::CIPHERTEXT_LEN);

    let recovered = Kyber1024::decapsulate(&ciphertext, &key_pair.secret_key).unwrap();
    assert_eq!(recovered, shared_secret);
}

#[rstest]
#[case::short(PK_LEN - 1)]
#[case::long(PK_LEN + 1)]
#[case::empty(0)]
fn test_public_key_length_is_checked(#[case] len: usize) {
    let mut rng = ChaCha20Rng::from_seed([4_u8; 32]);
    let result = Kyber1024::encapsulate_with_rng(&vec![0_u8; len], &mut rng);
    assert_matches!(
        result,
        Err(LatticeError::InvalidLength { kind: "public key", expected: PK_LEN, actual })
            if actual == len
    );
}

#[test]
fn test_secret_key_and_ciphertext_lengths_are_checked() {
    let result = Kyber1024::decapsulate(&[0_u8; CT_LEN], &[0_u8; SK_LEN - 2]);
    assert_matches!(result, Err(LatticeError::InvalidLength { kind: "secret key", .. }));

    let result = Kyber1024::decapsulate(&[0_u8; CT_LEN + 2], &[0_u8; SK_LEN]);
    assert_matches!(result, Err(LatticeError::InvalidLength { kind: "ciphertext", .. }));

    assert_matches!(
        Ciphertext::try_from(&[0_u8; 3][..]),
        Err(LatticeError::InvalidLength { expected: CT_LEN, actual: 3, .. })
    );
}

#[test]
fn test_non_canonical_coefficients_are_rejected() {
    let key_pair = KeyPair::from_seed(&[5_u8; 32]).unwrap();
    let mut pk_bytes = key_pair.public_key().to_bytes();

    // first coefficient of t, just after rho
    pk_bytes[32..34].copy_from_slice(&0xffff_u16.to_le_bytes());
    assert_matches!(
        PublicKey::try_from(pk_bytes.as_slice()),
        Err(LatticeError::MalformedEncoding(_))
    );

    let mut sk_bytes = key_pair.secret_key().to_bytes();
    sk_bytes[0..2].copy_from_slice(&3329_u16.to_le_bytes());
    assert_matches!(
        SecretKey::try_from(sk_bytes.as_slice()),
        Err(LatticeError::MalformedEncoding(_))
    );
}

#[rstest]
#[case(1000)]
#[case(3)]
#[case(3326)]
fn test_secret_coefficients_outside_eta_are_rejected(#[case] coefficient: u16) {
    let key_pair = KeyPair::from_seed(&[5_u8; 32]).unwrap();
    let mut sk_bytes = key_pair.secret_key().to_bytes();
    sk_bytes[0..2].copy_from_slice(&coefficient.to_le_bytes());
    assert_matches!(
        SecretKey::try_from(sk_bytes.as_slice()),
        Err(LatticeError::MalformedEncoding(_))
    );

    // -2 and 2 are the extremes of the centered binomial distribution
    for edge in [2_u16, 3327] {
        sk_bytes[0..2].copy_from_slice(&edge.to_le_bytes());
        assert!(SecretKey::try_from(sk_bytes.as_slice()).is_ok());
    }
}

#[test]
fn test_secret_debug_redaction() {
    let key_pair = KeyPair::from_seed(&[6_u8; 32]).unwrap();
    let sk = key_pair.secret_key();
    assert_eq!(format!("{sk:?}"), "<elided secret for SecretKey>");
    assert_eq!(format!("{sk}"), "<elided secret for SecretKey>");

    let (_, shared_secret) = key_pair.public_key().encapsulate_from_seed(&[0_u8; 32]).unwrap();
    assert_eq!(format!("{shared_secret:?}"), "<elided secret for SharedSecret>");
}

#[test]
fn test_serialized_keys_deserialize() {
    let key_pair = KeyPair::from_seed(&data::SEED).unwrap();
    let sk = SecretKey::read_from_bytes(&key_pair.secret_key().to_bytes()).unwrap();
    let pk = PublicKey::read_from_bytes(&key_pair.public_key().to_bytes()).unwrap();

    let (ciphertext, shared_secret) = pk.encapsulate_from_seed(&data::MESSAGE).unwrap();
    assert_eq!(sk.decapsulate(&ciphertext), shared_secret);
}
