//! Arithmetic over the rings Z_q\[X\]/(X^256 + 1) used by both lattice schemes.
//!
//! Polynomials are multiplied with a schoolbook negacyclic convolution: products are accumulated
//! without reduction in 64-bit integers and folded modulo X^N + 1 and q at the end. This is the
//! O(N^2) algorithm; its outputs are bit-identical to a transform-based multiplication.

mod field;
pub use field::ModularFelt;

mod polynomial;
pub use polynomial::{N, Polynomial};

mod vector;
pub use vector::{PolyMatrix, PolyVec};
