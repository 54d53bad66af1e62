use crate::Credential;
use async_trait::async_trait;
use udict_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides fixed dictionary credentials.
///
/// This provider is used when the access key and secret key are known up
/// front, as in the demo binary.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    access_key: String,
    secret_key: String,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with an access key and secret key.
    pub fn new(access_key: &str, secret_key: &str) -> Self {
        Self {
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(Credential::new(
            self.access_key.clone(),
            self.secret_key.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let ctx = Context::new();

        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key");
        let cred = provider.provide_credential(&ctx).await?.unwrap();
        assert_eq!(cred.access_key, "test_access_key");
        assert_eq!(cred.secret_key, "test_secret_key");

        Ok(())
    }
}
