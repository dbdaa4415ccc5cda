//! Mapping between 32-byte messages and polynomials.

use super::{KemFelt, MESSAGE_LEN, Q};
use crate::math::{N, Polynomial};

const _: () = assert!(8 * MESSAGE_LEN == N);

/// Half of the modulus, rounded down. A set message bit is carried as this value.
const HALF_Q: u32 = Q / 2;

/// Maps bit j of byte i of the message to coefficient 8i + j, scaled to 0 or ⌊q/2⌋.
pub(super) fn encode(message: &[u8; MESSAGE_LEN]) -> Polynomial<KemFelt> {
    Polynomial::from_fn(|i| {
        let bit = (message[i / 8] >> (i % 8)) & 1;
        KemFelt::new(bit as u32 * HALF_Q)
    })
}

/// Rounds every coefficient to the nearest of 0 and ⌊q/2⌋ and packs the resulting bits.
///
/// Coefficient x decodes to 1 iff round(2x / q) is odd, i.e. iff x is closer to q/2 than to 0 or
/// q.
pub(super) fn decode(poly: &Polynomial<KemFelt>) -> [u8; MESSAGE_LEN] {
    let mut message = [0u8; MESSAGE_LEN];
    for (i, c) in poly.coefficients.iter().enumerate() {
        let bit = (((c.value() << 1) + HALF_Q) / Q) & 1;
        message[i / 8] |= (bit as u8) << (i % 8);
    }
    message
}

// TESTS
// ================================================================================================
