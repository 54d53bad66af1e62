// Header names are stored in their canonical lowercase form; the service
// matches them case-insensitively.
pub const HEADER_ACCESS_KEY: &str = "accesskey";
pub const HEADER_SIGNATURE: &str = "signature";
pub const HEADER_NONCE: &str = "nonce";

/// Path prefix of the dictionary entry resource.
pub const DICTIONARY_PATH: &str = "/api/v1/dictionary";
