//! Short code generation.
//!
//! Provides cryptographically secure random code sampling over a fixed
//! alphabet. Generators are pure samplers: they carry no state and make no
//! uniqueness promise, which is why code assignment pairs them with the
//! existence check and insert-conflict retry in
//! [`crate::application::services::ShortenerService`].

/// Number of random bytes sampled per code.
const CODE_LENGTH_BYTES: usize = 4;

/// Length of a generated code in characters (hex doubles the byte count).
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES * 2;

/// Uniform sampler over the short-code space.
///
/// Swappable with a deterministic source for testing.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces one independent, uniformly distributed candidate code.
    fn generate(&self) -> String;
}

/// Generates 8-character lowercase hexadecimal codes from the OS CSPRNG.
///
/// Four random bytes hex-encoded give a 2^32 code space; collision retries
/// stay cheap until the store occupies a meaningful fraction of that space.
#[derive(Debug, Default, Clone, Copy)]
pub struct HexCodeGenerator;

impl CodeGenerator for HexCodeGenerator {
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn generate(&self) -> String {
        let mut buffer = [0u8; CODE_LENGTH_BYTES];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        hex::encode(buffer)
    }
}
