//! Session token generation

use rand::RngCore;
use rand::rngs::OsRng;

/// Bytes of randomness per token (128 bits before hex encoding).
/// Guessing resistance is a security invariant of the ticket scheme, so the
/// randomness comes from the OS CSPRNG, never a seeded generator.
pub const TOKEN_BYTES: usize = 16;

/// Generate an unguessable session token
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
