use std::fmt::{Debug, Formatter};

use udict_core::{utils::Redact, SigningCredential};

/// Credential for the dictionary service.
#[derive(Clone)]
pub struct Credential {
    /// Access key identifying the caller.
    pub access_key: String,
    /// Secret key shared with the service, never sent on the wire.
    pub secret_key: String,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.access_key.is_empty() && !self.secret_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_keys() {
        let cred = Credential::new("ACCESS_KEY_12345", "SECRET_KEY_67890");
        let out = format!("{cred:?}");
        assert!(!out.contains("ACCESS_KEY_12345"));
        assert!(!out.contains("SECRET_KEY_67890"));
    }

    #[test]
    fn test_is_valid_requires_both_keys() {
        assert!(Credential::new("ak", "sk").is_valid());
        assert!(!Credential::new("", "sk").is_valid());
        assert!(!Credential::new("ak", "").is_valid());
    }
}
