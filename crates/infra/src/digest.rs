//! Content checksums used to detect out-of-band edits of a backing file.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `bytes` (always 64 characters).
pub fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(
            digest(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            digest(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn any_edit_changes_the_checksum() {
        assert_ne!(digest(b"10.0.0.1 web\n"), digest(b"10.0.0.1 web \n"));
    }
}
