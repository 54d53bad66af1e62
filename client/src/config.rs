/// ServerConfig carries the connection parameters for the dictionary service.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// URL scheme, `https` unless overridden.
    pub scheme: String,
    /// Server hostname.
    pub hostname: String,
    /// Server listening port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            hostname: "staging1.classiii.info".to_string(),
            port: 443,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig pointing at the staging service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Set hostname
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// Set port
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Host part of the URL, with the port appended only when it is not the
    /// scheme's default.
    pub fn authority(&self) -> String {
        if self.is_default_port() {
            self.hostname.clone()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// Absolute URL for the given request path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}://{}{}", self.scheme, self.authority(), path)
    }

    fn is_default_port(&self) -> bool {
        matches!((self.scheme.as_str(), self.port), ("https", 443) | ("http", 80))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_port_is_elided() {
        let config = ServerConfig::default();
        assert_eq!(
            config.endpoint("/api/v1/dictionary/42"),
            "https://staging1.classiii.info/api/v1/dictionary/42"
        );

        let config = ServerConfig::default().with_scheme("http").with_port(80);
        assert_eq!(config.authority(), "staging1.classiii.info");
    }

    #[test]
    fn test_non_default_port_is_kept() {
        let config = ServerConfig::default().with_port(8443);
        assert_eq!(config.authority(), "staging1.classiii.info:8443");

        let config = ServerConfig::default()
            .with_scheme("http")
            .with_hostname("localhost")
            .with_port(3000);
        assert_eq!(
            config.endpoint("/api/v1/dictionary/42"),
            "http://localhost:3000/api/v1/dictionary/42"
        );
    }
}
