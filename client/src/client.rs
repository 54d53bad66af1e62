use bytes::Bytes;
use http::header::CONTENT_TYPE;
use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::constants::DICTIONARY_PATH;
use crate::{Credential, DictionaryEntry, ServerConfig};
use udict_core::{Context, Error, Result, Signer};

// Bytes that cannot appear raw in a URI path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for updating entries in the remote user dictionary.
#[derive(Clone, Debug)]
pub struct DictionaryClient {
    ctx: Context,
    config: ServerConfig,
    signer: Signer<Credential>,
}

impl DictionaryClient {
    /// Create a new client.
    pub fn new(ctx: Context, config: ServerConfig, signer: Signer<Credential>) -> Self {
        Self {
            ctx,
            config,
            signer,
        }
    }

    /// Update the dictionary entry with the given id.
    ///
    /// Resolves with the raw response body on success. A transport failure or
    /// a non-success HTTP status is folded into the returned value as the
    /// error's message string rather than an `Err`, matching the service's
    /// demo clients; callers that need to tell the two apart must inspect the
    /// returned string. Errors hit before the request leaves the process
    /// (empty id, encoding, signing) still surface as `Err`.
    pub async fn update_entry(&self, entry_id: &str, entry: &DictionaryEntry) -> Result<String> {
        if entry_id.is_empty() {
            return Err(Error::request_invalid("dictionary entry id is empty"));
        }

        // The signer reads the path back from this URI, so the signed path
        // and the wire path cannot diverge.
        let path = format!(
            "{DICTIONARY_PATH}/{}",
            utf8_percent_encode(entry_id, PATH_SEGMENT)
        );
        let url = self.config.endpoint(&path);
        debug!("updating dictionary entry at {url}");

        let body = serde_json::to_vec(entry)
            .map_err(|e| Error::unexpected("failed to encode dictionary entry").with_source(e))?;
        let req = http::Request::put(url.as_str())
            .header(CONTENT_TYPE, "application/json")
            .body(Bytes::from(body))?;

        let (mut parts, body) = req.into_parts();
        self.signer.sign(&mut parts).await?;
        let req = http::Request::from_parts(parts, body);

        let resp = match self.ctx.http_send_as_string(req).await {
            Ok(resp) => resp,
            Err(err) => return Ok(err.to_string()),
        };
        if !resp.status().is_success() {
            return Ok(format!("server replied with {}", resp.status()));
        }

        Ok(resp.into_body())
    }
}
