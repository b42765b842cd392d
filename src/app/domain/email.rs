use validator::ValidationError;

/// Email domain type. Once constructed, guaranteed to be valid, trimmed, and lowercase.
#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    /// Create a new Email from a string. Trims, lowercases, validates shape.
    pub fn new(email: String) -> Result<Self, ValidationError> {
        let normalized = email.trim().to_lowercase();

        // Maximum total length per RFC 5321
        if normalized.len() > 254 {
            let mut error = ValidationError::new("email_too_long");
            error.message = Some("Email address is too long".into());
            return Err(error);
        }

        // Minimal structural check: local part, @, dotted domain
        let valid = match normalized.split_once('@') {
            Some((local, domain)) => !local.is_empty() && domain.contains('.'),
            None => false,
        };
        if !valid {
            let mut error = ValidationError::new("invalid_email");
            error.message = Some("Invalid email address format".into());
            return Err(error);
        }

        Ok(Self(normalized))
    }

    /// Get the email as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
