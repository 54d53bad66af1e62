//! Core components for signing user dictionary requests.
//!
//! This crate provides the substrate the `udict-client` crate builds on. It
//! stays deliberately service-agnostic: nothing in here knows about the
//! dictionary wire format or the nonce/path signature scheme.
//!
//! ## Overview
//!
//! - **Context**: a container holding the HTTP transport used to send
//!   requests, so the transport stays pluggable (reqwest in production,
//!   mocks in tests)
//! - **Traits**: abstract interfaces for credential loading
//!   ([`ProvideCredential`]) and request signing ([`SignRequest`])
//! - **Signer**: the orchestrator that loads a credential once and applies
//!   the service's signature to each request
//!
//! ## Utilities
//!
//! - [`hash`]: keyed-hash helpers
//! - [`time`]: timestamp helpers
//! - [`utils`]: secret redaction for `Debug` output

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, HttpSend, NoopHttpSend};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};

mod signer;
pub use signer::Signer;
