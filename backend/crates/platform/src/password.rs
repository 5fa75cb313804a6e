//! Secret Hashing and Verification
//!
//! Account secrets (rider and driver passwords) are stored as Argon2id PHC
//! strings. This module offers:
//! - [`hash_secret`] / [`verify_secret`] for the common case
//! - [`SecretHasher`] when an application-wide pepper is configured
//! - [`Secret`], a clear text wrapper zeroized on drop
//!
//! Verification never panics: a malformed stored hash simply fails to verify.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use kernel::error::app_error::AppError;
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Error Types
// ============================================================================

/// Rejected clear text secrets
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SecretPolicyError {
    #[error("Secret cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Secret contains invalid control characters")]
    InvalidCharacter,
}

/// Hashing failures
#[derive(Debug, Error)]
pub enum SecretHashError {
    #[error("Secret hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid secret hash format")]
    InvalidHashFormat,
}

impl From<SecretPolicyError> for AppError {
    fn from(err: SecretPolicyError) -> Self {
        AppError::invalid_input(err.to_string()).with_source(err)
    }
}

impl From<SecretHashError> for AppError {
    fn from(err: SecretHashError) -> Self {
        match err {
            SecretHashError::InvalidHashFormat => {
                AppError::invalid_input(err.to_string()).with_source(err)
            }
            SecretHashError::HashingFailed(_) => {
                AppError::internal(err.to_string()).with_source(err)
            }
        }
    }
}

// ============================================================================
// Clear text secret (zeroized on drop)
// ============================================================================

/// Clear text secret
///
/// - NFKC normalized so visually identical input hashes identically
/// - Not `Clone`, Debug output is redacted
///
/// ```rust
/// use platform::password::Secret;
///
/// let secret = Secret::new("correct horse battery staple".to_string()).unwrap();
/// assert!(format!("{:?}", secret).contains("REDACTED"));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret(String);

impl Secret {
    pub fn new(raw: String) -> Result<Self, SecretPolicyError> {
        let raw = Zeroizing::new(raw);
        let normalized: String = raw.nfkc().collect();
        let secret = Self(normalized);

        if secret.0.trim().is_empty() {
            return Err(SecretPolicyError::EmptyOrWhitespace);
        }

        // Space, tab and newline are allowed; other control characters are not
        if secret
            .0
            .chars()
            .any(|ch| ch.is_control() && ch != '\t' && ch != '\n')
        {
            return Err(SecretPolicyError::InvalidCharacter);
        }

        Ok(secret)
    }

    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.0.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Secret").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id hasher with an optional application-wide pepper
///
/// The pepper given to [`SecretHasher::verify`] must match the one used
/// when hashing.
#[derive(Default, Clone)]
pub struct SecretHasher {
    pepper: Option<Vec<u8>>,
}

impl SecretHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            pepper: Some(pepper.into()),
        }
    }

    /// Hash a secret into a PHC string with a fresh random salt.
    pub fn hash(&self, secret: &Secret) -> Result<String, SecretHashError> {
        let bytes = secret.peppered(self.pepper.as_deref());
        let salt = SaltString::generate(OsRng);

        // Argon2id, m=19456 KiB, t=2, p=1
        Argon2::default()
            .hash_password(&bytes, &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| SecretHashError::HashingFailed(e.to_string()))
    }

    /// Check a secret against a stored PHC string. Constant time.
    pub fn verify(&self, secret: &Secret, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        let bytes = secret.peppered(self.pepper.as_deref());
        Argon2::default().verify_password(&bytes, &parsed).is_ok()
    }
}

impl fmt::Debug for SecretHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretHasher")
            .field("pepper", &self.pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Hash a secret without a pepper.
pub fn hash_secret(secret: &Secret) -> Result<String, SecretHashError> {
    SecretHasher::new().hash(secret)
}

/// Verify a secret against a hash produced by [`hash_secret`].
pub fn verify_secret(secret: &Secret, hash: &str) -> bool {
    SecretHasher::new().verify(secret, hash)
}

/// Check that a stored value is a well-formed PHC string.
pub fn validate_hash(hash: &str) -> Result<(), SecretHashError> {
    PasswordHash::new(hash)
        .map(|_| ())
        .map_err(|_| SecretHashError::InvalidHashFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::kind::ErrorKind;

    fn secret(s: &str) -> Secret {
        Secret::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_secret_empty() {
        assert_eq!(
            Secret::new(String::new()).unwrap_err(),
            SecretPolicyError::EmptyOrWhitespace
        );
        assert_eq!(
            Secret::new("   \t ".to_string()).unwrap_err(),
            SecretPolicyError::EmptyOrWhitespace
        );
    }

    #[test]
    fn test_secret_control_character() {
        assert_eq!(
            Secret::new("abc\u{7}def".to_string()).unwrap_err(),
            SecretPolicyError::InvalidCharacter
        );
    }

    #[test]
    fn test_unicode_secret() {
        assert!(Secret::new("パスワード安全です!".to_string()).is_ok());
    }

    #[test]
    fn test_hash_is_argon2id_phc() {
        let hash = hash_secret(&secret("TestPassword123!")).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(validate_hash(&hash).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_secret(&secret("TestPassword123!")).unwrap();
        assert!(verify_secret(&secret("TestPassword123!"), &hash));
        assert!(!verify_secret(&secret("WrongPassword123!"), &hash));
    }

    #[test]
    fn test_salt_differs_per_hash() {
        let s = secret("TestPassword123!");
        assert_ne!(hash_secret(&s).unwrap(), hash_secret(&s).unwrap());
    }

    #[test]
    fn test_nfkc_equivalent_secrets_verify() {
        // Fullwidth "ＡＢＣ" normalizes to "ABC"
        let hash = hash_secret(&secret("ＡＢＣdef123")).unwrap();
        assert!(verify_secret(&secret("ABCdef123"), &hash));
    }

    #[test]
    fn test_hash_with_pepper() {
        let hasher = SecretHasher::with_pepper(b"my_secret_pepper".to_vec());
        let s = secret("TestPassword123!");
        let hash = hasher.hash(&s).unwrap();

        assert!(hasher.verify(&s, &hash));
        assert!(!verify_secret(&s, &hash));
        assert!(!SecretHasher::with_pepper(b"wrong_pepper".to_vec()).verify(&s, &hash));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        assert!(!verify_secret(&secret("TestPassword123!"), "not_a_valid_hash"));
        assert!(!verify_secret(&secret("TestPassword123!"), ""));
        assert!(validate_hash("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let debug_output = format!("{:?}", secret("hunter2hunter2"));
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter2"));

        let hasher_debug = format!("{:?}", SecretHasher::with_pepper(b"pepper".to_vec()));
        assert!(hasher_debug.contains("REDACTED"));
    }

    #[test]
    fn test_errors_map_to_app_error() {
        let err: AppError = SecretPolicyError::EmptyOrWhitespace.into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err: AppError = SecretHashError::HashingFailed("boom".into()).into();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
