//! Request signing for FoxESS API authentication.
//!
//! The remote scheme hashes `{path}\r\n{token}\r\n{timestamp}` where `\r\n`
//! is the literal two-character escape sequence, not a CR/LF byte pair. That
//! is a quirk of the API contract; do not "fix" it to real line endings.

use md5::{Digest, Md5};

/// Compute the per-request signature: MD5 over path, token, and decimal
/// timestamp joined by the literal `\r\n` sequence, rendered as 32 lowercase
/// hex characters.
pub fn generate_signature(path: &str, token: &str, timestamp: i64) -> String {
    let plain = format!(r"{path}\r\n{token}\r\n{timestamp}");
    let mut hasher = Md5::new();
    hasher.update(plain.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_plant_list() {
        let sig = generate_signature("/op/v0/plant/list", "abc", 1_700_000_000_000);
        assert_eq!(sig, "de235904afb1d43bb9f038f1c35f7b8c");
    }

    #[test]
    fn test_known_vector_access_count() {
        let sig = generate_signature("/op/v0/user/getAccessCount", "SECRET", 1);
        assert_eq!(sig, "e94de0d292c9c59375fa04bf66c22257");
    }

    #[test]
    fn test_literal_escape_not_real_crlf() {
        // MD5 of the same fields joined by actual CR/LF bytes; the scheme
        // must never produce it.
        let sig = generate_signature("/op/v0/plant/list", "abc", 1_700_000_000_000);
        assert_ne!(sig, "ceb80919d176cb543375b9e22b603cbc");
    }

    #[test]
    fn test_deterministic() {
        let a = generate_signature("/op/v0/device/detail", "token", 42);
        let b = generate_signature("/op/v0/device/detail", "token", 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamp_changes_output() {
        let a = generate_signature("/op/v0/plant/list", "abc", 1_700_000_000_000);
        let b = generate_signature("/op/v0/plant/list", "abc", 1_700_000_000_001);
        assert_ne!(a, b);
        assert_eq!(b, "0c0eb9ad304a4dc96277dd809a8a248b");
    }

    #[test]
    fn test_output_shape() {
        let sig = generate_signature("/op/v0/device/variable/get", "k", 0);
        assert_eq!(sig.len(), 32);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
