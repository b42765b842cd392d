use argon2::{
    password_hash::SaltString,
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use rand_core::OsRng;
use validator::ValidationError;

/// Password domain type. Once constructed, guaranteed to meet strength requirements.
#[derive(Debug, Clone)]
pub struct Password(String);

impl Password {
    /// Create a password from plaintext for verification only (login path).
    /// Skips strength rules: legacy accounts may predate the current policy.
    pub fn for_verification(plaintext: String) -> Self {
        Self(plaintext)
    }

    /// Create a new Password from a string, enforcing strength requirements.
    pub fn new(password: String) -> Result<Self, ValidationError> {
        if password.len() < 8 {
            let mut error = ValidationError::new("password_too_short");
            error.message = Some("Password must be at least 8 characters".into());
            return Err(error);
        }

        if password.len() > 128 {
            let mut error = ValidationError::new("password_too_long");
            error.message = Some("Password must be at most 128 characters".into());
            return Err(error);
        }

        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_numeric());

        if !(has_uppercase && has_lowercase && has_digit) {
            let mut error = ValidationError::new("weak_password");
            error.message = Some("Password must contain uppercase, lowercase, and digit".into());
            return Err(error);
        }

        Ok(Self(password))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Hashed password wrapper. Stores an Argon2 hash string.
#[derive(Debug, Clone)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Hash a password using Argon2id with a random salt.
    pub fn from_password(password: &Password) -> Result<Self, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
        Ok(Self(hash.to_string()))
    }

    /// Verify a password against this hash.
    pub fn verify(&self, password: &Password) -> Result<(), argon2::password_hash::Error> {
        let parsed = PasswordHash::new(&self.0)?;
        Argon2::default().verify_password(password.as_bytes(), &parsed)
    }

    /// Create from an existing hash string (from the database).
    pub fn from_string(s: String) -> Self {
        Self(s)
    }

    /// Get hash as string for storage.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_password() {
        assert!(Password::new("Password1".to_string()).is_ok());
    }

    #[test]
    fn rejects_short_password() {
        assert!(Password::new("Ab1".to_string()).is_err());
    }

    #[test]
    fn rejects_overlong_password() {
        assert!(Password::new("A1".to_string() + &"a".repeat(130)).is_err());
    }

    #[test]
    fn rejects_password_without_digit() {
        assert!(Password::new("Password".to_string()).is_err());
    }

    #[test]
    fn rejects_password_without_uppercase() {
        assert!(Password::new("password1".to_string()).is_err());
    }

    #[test]
    fn hash_verifies_original_and_rejects_other() {
        let password = Password::new("TestPassword123".to_string()).unwrap();
        let other = Password::new("OtherPassword456".to_string()).unwrap();
        let hash = HashedPassword::from_password(&password).unwrap();
        assert!(hash.verify(&password).is_ok());
        assert!(hash.verify(&other).is_err());
    }

    #[test]
    fn for_verification_accepts_weak_plaintext() {
        // Login must be able to check a password that no longer passes signup rules.
        let weak = Password::for_verification("password".to_string());
        let hash = HashedPassword::from_password(&weak).unwrap();
        assert!(hash.verify(&weak).is_ok());
    }
}
