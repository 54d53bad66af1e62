//! Client for the user dictionary service.
//!
//! The service authenticates every request with three headers: the caller's
//! access key, a nonce, and an HMAC-SHA256 signature derived from the secret
//! key, the nonce, and the request path. This crate wires that scheme into
//! the `udict-core` signing substrate and exposes [`DictionaryClient`] for
//! updating entries, plus the `update-user-dict` demo binary.

mod config;
pub use config::ServerConfig;

mod credential;
pub use credential::Credential;

mod provide_credential;
pub use provide_credential::StaticCredentialProvider;

mod sign_request;
pub use sign_request::{request_signature, RequestSigner};

mod entry;
pub use entry::DictionaryEntry;

mod client;
pub use client::DictionaryClient;

mod http_send;
pub use http_send::ReqwestHttpSend;

mod constants;
