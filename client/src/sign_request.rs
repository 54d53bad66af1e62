//! Request signing for the user dictionary service.

use http::HeaderValue;
use log::debug;

use crate::constants::*;
use crate::Credential;
use udict_core::hash::hex_hmac_sha256;
use udict_core::time::{format_timestamp_millis, now};
use udict_core::{Context, Error, Result, SignRequest};

/// Derive the request signature for the given path.
///
/// The signature is `hex(HMAC-SHA256(secret_key, nonce || path))`: the nonce
/// bytes are fed first, the path bytes second. The order is part of the wire
/// contract; swapping the two produces a signature the service will reject.
/// `path` must be byte-identical to the path sent on the wire, including the
/// leading slash.
pub fn request_signature(path: &str, secret_key: &str, nonce: &str) -> String {
    let mut message = Vec::with_capacity(nonce.len() + path.len());
    message.extend_from_slice(nonce.as_bytes());
    message.extend_from_slice(path.as_bytes());

    hex_hmac_sha256(secret_key.as_bytes(), &message)
}

/// RequestSigner that implements the dictionary service's authentication.
///
/// Every signed request carries three headers: the caller's access key, a
/// nonce (unix epoch milliseconds), and the signature derived by
/// [`request_signature`]. The service re-derives the signature from the
/// transmitted nonce and the request path, so the same nonce value must
/// appear in both the derivation and the header.
#[derive(Debug, Default)]
pub struct RequestSigner {
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new signer.
    pub fn new() -> Self {
        Self { nonce: None }
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// We should always take a fresh nonce to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

#[async_trait::async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        parts: &mut http::request::Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;

        let nonce = match &self.nonce {
            Some(v) => v.clone(),
            None => format_timestamp_millis(now()),
        };
        let path = parts.uri.path().to_string();
        if path.is_empty() {
            return Err(Error::request_invalid("request path is empty"));
        }

        let signature = request_signature(&path, &cred.secret_key, &nonce);
        debug!("signing {path} with nonce {nonce}");

        parts
            .headers
            .insert(HEADER_ACCESS_KEY, cred.access_key.parse()?);
        parts.headers.insert(HEADER_SIGNATURE, {
            let mut value: HeaderValue = signature.parse()?;
            value.set_sensitive(true);

            value
        });
        parts.headers.insert(HEADER_NONCE, nonce.parse()?);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCredentialProvider;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use udict_core::Signer;

    const SECRET_KEY: &str = "SECRET_KEY";
    const NONCE: &str = "1700000000000";
    const PATH: &str = "/api/v1/dictionary/42";

    // Fixed with an independent HMAC-SHA256 implementation.
    const GOLDEN: &str = "fe75e07e4d8ce9390e69e1640c8a8fc6a4a391b4ca57f07ace06ca7530b62fcc";

    #[test]
    fn test_request_signature_golden() {
        assert_eq!(request_signature(PATH, SECRET_KEY, NONCE), GOLDEN);
    }

    #[test]
    fn test_request_signature_is_deterministic() {
        let first = request_signature(PATH, SECRET_KEY, NONCE);
        let second = request_signature(PATH, SECRET_KEY, NONCE);

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test_case("/api/v1/dictionary/43", SECRET_KEY, NONCE; "path changed")]
    #[test_case(PATH, "OTHER_KEY", NONCE; "secret changed")]
    #[test_case(PATH, SECRET_KEY, "1700000000001"; "nonce changed")]
    fn test_request_signature_input_sensitivity(path: &str, secret: &str, nonce: &str) {
        assert_ne!(request_signature(path, secret, nonce), GOLDEN);
    }

    #[test]
    fn test_request_signature_order_sensitivity() {
        let swapped = {
            let mut message = Vec::new();
            message.extend_from_slice(PATH.as_bytes());
            message.extend_from_slice(NONCE.as_bytes());
            hex_hmac_sha256(SECRET_KEY.as_bytes(), &message)
        };

        assert_ne!(request_signature(PATH, SECRET_KEY, NONCE), swapped);
    }

    #[tokio::test]
    async fn test_sign() -> Result<()> {
        let loader = StaticCredentialProvider::new("ACCESS_KEY", SECRET_KEY);
        let builder = RequestSigner::new().with_nonce(NONCE);

        let signer = Signer::new(Context::new(), loader, builder);

        let mut parts =
            http::Request::put("https://staging1.classiii.info/api/v1/dictionary/42")
                .body(())
                .unwrap()
                .into_parts()
                .0;
        signer.sign(&mut parts).await?;

        assert_eq!(parts.headers.len(), 3);
        assert_eq!(parts.headers.get("accesskey").unwrap(), "ACCESS_KEY");
        assert_eq!(parts.headers.get("nonce").unwrap(), NONCE);
        assert_eq!(parts.headers.get("signature").unwrap(), GOLDEN);
        assert!(parts.headers.get("signature").unwrap().is_sensitive());

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_generates_fresh_nonce() -> Result<()> {
        let loader = StaticCredentialProvider::new("ACCESS_KEY", SECRET_KEY);
        let signer = Signer::new(Context::new(), loader, RequestSigner::new());

        let mut parts =
            http::Request::put("https://staging1.classiii.info/api/v1/dictionary/42")
                .body(())
                .unwrap()
                .into_parts()
                .0;
        signer.sign(&mut parts).await?;

        let nonce = parts.headers.get("nonce").unwrap().to_str().unwrap();
        assert!(nonce.bytes().all(|b| b.is_ascii_digit()));
        // The transmitted signature must verify against the transmitted nonce.
        assert_eq!(
            parts.headers.get("signature").unwrap(),
            request_signature(PATH, SECRET_KEY, nonce).as_str()
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_sign_without_credential() {
        let err = RequestSigner::new()
            .sign_request(
                &Context::new(),
                &mut http::Request::put("https://staging1.classiii.info/api/v1/dictionary/42")
                    .body(())
                    .unwrap()
                    .into_parts()
                    .0,
                None,
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), udict_core::ErrorKind::CredentialInvalid);
    }
}
