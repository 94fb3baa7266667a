// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Context
//!
//! Everything the reader needs to reach one Redfish service: transport,
//! host, port, optional path prefix (for BMCs behind a reverse proxy),
//! protocol version and credentials. The context is owned by the caller and
//! read-only during a traversal.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::errors::ConfigError;

/// Transport scheme
///
/// Plain HTTP is the default; callers must opt in to TLS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Http,
    Https,
}

impl Transport {
    pub fn scheme(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "http" => Some(Self::Http),
            "https" => Some(Self::Https),
            _ => None,
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scheme())
    }
}

/// Basic authentication credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection context for one Redfish service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionContext {
    /// Transport scheme (defaults to plain HTTP)
    #[serde(default)]
    pub transport: Transport,

    /// BMC host name or address
    pub host: String,

    /// Port; omitted from URIs when unset or equal to the scheme default
    #[serde(default)]
    pub port: Option<u16>,

    /// Path inserted before `/redfish`, e.g. `/bmc/rack4`
    #[serde(default)]
    pub path_prefix: Option<String>,

    /// Redfish protocol version (only `1` is supported)
    #[serde(default = "default_protocol_version")]
    pub protocol_version: u32,

    #[serde(default)]
    pub credentials: Option<Credentials>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Upper bound on concurrent resource reads within one collection
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Upper bound on a whole collection read, in milliseconds
    #[serde(default)]
    pub traversal_timeout_ms: Option<u64>,

    /// Accept self-signed BMC certificates
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_protocol_version() -> u32 {
    1
}

fn default_timeout() -> u64 {
    30
}

fn default_max_concurrency() -> usize {
    8
}

impl ConnectionContext {
    /// Context for `host` with every other setting at its default
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            transport: Transport::default(),
            host: host.into(),
            port: None,
            path_prefix: None,
            protocol_version: default_protocol_version(),
            credentials: None,
            timeout_secs: default_timeout(),
            max_concurrency: default_max_concurrency(),
            traversal_timeout_ms: None,
            accept_invalid_certs: false,
        }
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = Some(prefix.into());
        self
    }

    pub fn with_protocol_version(mut self, version: u32) -> Self {
        self.protocol_version = version;
        self
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_traversal_timeout(mut self, timeout: Duration) -> Self {
        self.traversal_timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Load a context from `REDFISH_*` environment variables
    ///
    /// `REDFISH_HOST` is required; everything else falls back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&'static str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let host = lookup("REDFISH_HOST").ok_or(ConfigError::MissingVariable("REDFISH_HOST"))?;
        let mut context = Self::new(host);

        if let Some(value) = lookup("REDFISH_TRANSPORT") {
            context.transport = Transport::parse(&value).ok_or(ConfigError::InvalidValue {
                variable: "REDFISH_TRANSPORT",
                value,
            })?;
        }
        if let Some(value) = lookup("REDFISH_PORT") {
            context.port = Some(parse_number("REDFISH_PORT", value)?);
        }
        context.path_prefix = lookup("REDFISH_PATH_PREFIX");
        if let (Some(username), Some(password)) =
            (lookup("REDFISH_USERNAME"), lookup("REDFISH_PASSWORD"))
        {
            context.credentials = Some(Credentials { username, password });
        }
        if let Some(value) = lookup("REDFISH_TIMEOUT_SECS") {
            context.timeout_secs = parse_number("REDFISH_TIMEOUT_SECS", value)?;
        }
        if let Some(value) = lookup("REDFISH_MAX_CONCURRENCY") {
            context.max_concurrency = parse_number("REDFISH_MAX_CONCURRENCY", value)?;
        }
        if let Some(value) = lookup("REDFISH_TRAVERSAL_TIMEOUT_SECS") {
            let secs: u64 = parse_number("REDFISH_TRAVERSAL_TIMEOUT_SECS", value)?;
            context.traversal_timeout_ms = Some(secs.saturating_mul(1000));
        }

        Ok(context)
    }

    /// Port to put in URIs, `None` when it is the scheme default
    pub fn effective_port(&self) -> Option<u16> {
        self.port
            .filter(|port| *port != self.transport.default_port())
    }

    /// `scheme://host[:port]`
    pub fn authority_uri(&self) -> String {
        match self.effective_port() {
            Some(port) => format!("{}://{}:{}", self.transport.scheme(), self.host, port),
            None => format!("{}://{}", self.transport.scheme(), self.host),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn traversal_timeout(&self) -> Option<Duration> {
        self.traversal_timeout_ms.map(Duration::from_millis)
    }

    /// Structural checks that make a traversal impossible
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host is empty".to_string());
        }
        if self.host.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(format!("host '{}' is not a valid host name", self.host));
        }
        if self.max_concurrency == 0 {
            return Err("max_concurrency must be at least 1".to_string());
        }
        if let Some(prefix) = &self.path_prefix {
            if prefix.chars().any(char::is_whitespace) {
                return Err(format!("path prefix '{}' contains whitespace", prefix));
            }
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(variable: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { variable, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let context = ConnectionContext::new("bmc.example.com");
        assert_eq!(context.transport, Transport::Http);
        assert_eq!(context.protocol_version, 1);
        assert_eq!(context.timeout_secs, 30);
        assert_eq!(context.max_concurrency, 8);
        assert_eq!(context.authority_uri(), "http://bmc.example.com");
    }

    #[test]
    fn test_default_port_is_omitted() {
        let context = ConnectionContext::new("bmc").with_transport(Transport::Https).with_port(443);
        assert_eq!(context.authority_uri(), "https://bmc");
        let context = context.with_port(8443);
        assert_eq!(context.authority_uri(), "https://bmc:8443");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let context: ConnectionContext =
            serde_json::from_str(r#"{"host": "10.0.0.5", "transport": "https"}"#).unwrap();
        assert_eq!(context.transport, Transport::Https);
        assert_eq!(context.protocol_version, 1);
        assert_eq!(context.max_concurrency, 8);
        assert_eq!(context.credentials, None);
    }

    #[test]
    fn test_from_lookup() {
        let context = ConnectionContext::from_lookup(lookup_from(&[
            ("REDFISH_HOST", "bmc01"),
            ("REDFISH_TRANSPORT", "HTTPS"),
            ("REDFISH_PORT", "8443"),
            ("REDFISH_USERNAME", "root"),
            ("REDFISH_PASSWORD", "calvin"),
            ("REDFISH_MAX_CONCURRENCY", "4"),
        ]))
        .unwrap();
        assert_eq!(context.transport, Transport::Https);
        assert_eq!(context.port, Some(8443));
        assert_eq!(context.max_concurrency, 4);
        assert_eq!(context.credentials.unwrap().username, "root");
    }

    #[test]
    fn test_traversal_timeout_keeps_sub_second_precision() {
        let context = ConnectionContext::new("bmc").with_traversal_timeout(Duration::from_millis(900));
        assert_eq!(context.traversal_timeout_ms, Some(900));
        assert_eq!(context.traversal_timeout(), Some(Duration::from_millis(900)));

        let context = ConnectionContext::from_lookup(lookup_from(&[
            ("REDFISH_HOST", "bmc01"),
            ("REDFISH_TRAVERSAL_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();
        assert_eq!(context.traversal_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_from_lookup_errors() {
        assert_eq!(
            ConnectionContext::from_lookup(lookup_from(&[])),
            Err(ConfigError::MissingVariable("REDFISH_HOST"))
        );
        assert_eq!(
            ConnectionContext::from_lookup(lookup_from(&[
                ("REDFISH_HOST", "bmc01"),
                ("REDFISH_PORT", "http"),
            ])),
            Err(ConfigError::InvalidValue {
                variable: "REDFISH_PORT",
                value: "http".to_string()
            })
        );
    }

    #[test]
    fn test_validate() {
        assert!(ConnectionContext::new("bmc").validate().is_ok());
        assert!(ConnectionContext::new("").validate().is_err());
        assert!(ConnectionContext::new("bmc/x").validate().is_err());
        assert!(ConnectionContext::new("bmc").with_max_concurrency(0).validate().is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let context = ConnectionContext::new("bmc").with_credentials("root", "secret");
        let rendered = format!("{:?}", context);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
