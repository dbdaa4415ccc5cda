//! Shared configuration, data generation and macros for the benchmarks.

#![allow(dead_code)]

#[macro_use]
pub mod macros;
pub mod data;

pub mod config {
    use std::time::Duration;

    /// Measurement time for the fast operations (encapsulation, verification).
    pub const DEFAULT_MEASUREMENT_TIME: Duration = Duration::from_secs(10);

    /// Signing has a data-dependent number of rejection rounds, so it is measured for longer.
    pub const SIGNING_MEASUREMENT_TIME: Duration = Duration::from_secs(20);

    pub const DEFAULT_SAMPLE_SIZE: usize = 100;

    /// Message sizes (in bytes) used by the signing and verification benchmarks.
    pub const MESSAGE_SIZES: &[usize] = &[32, 1024, 16 * 1024];
}
