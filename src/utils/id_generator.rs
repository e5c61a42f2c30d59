//! Deterministic short identifier derivation.
//!
//! Identifiers are the first [`ID_LENGTH`] characters of the lowercase hex
//! SHA-1 digest of the original URL bytes. The input is hashed exactly as
//! received: no trimming, case folding, or trailing-slash handling.

use sha1::{Digest, Sha1};

/// Number of hex characters kept from the digest.
pub const ID_LENGTH: usize = 8;

/// Derives the short identifier for `original_url`.
///
/// Same input always yields the same output, across processes and restarts.
/// Two URLs whose digests share the first eight hex characters map to the
/// same identifier; the collision is not detected.
///
/// # Examples
///
/// ```
/// use shorturl::utils::id_generator::generate_id;
///
/// assert_eq!(generate_id("https://example.com"), "327c3fda");
/// ```
pub fn generate_id(original_url: &str) -> String {
    let digest = Sha1::digest(original_url.as_bytes());
    let mut id = hex::encode(digest);
    id.truncate(ID_LENGTH);
    id
}

/// Returns true if `id` has the shape of a derived identifier.
///
/// Lookups do not require this; it is used by the admin tool to warn about
/// ids that can never have been produced by [`generate_id`].
pub fn is_well_formed(id: &str) -> bool {
    id.len() == ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
