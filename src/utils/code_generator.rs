//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated short codes.
///
/// 62^6 possible codes; uniqueness is ultimately enforced by the store's
/// unique constraint, with the shorten service retrying on collision.
const CODE_LENGTH: usize = 6;

/// Generates a random fixed-length alphanumeric short code.
///
/// Pure function of the thread-local RNG; no collision check happens here.
///
/// # Examples
///
/// ```
/// let code = snaplink::utils::code_generator::generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}
