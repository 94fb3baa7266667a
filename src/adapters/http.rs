// Copyright (c) 2025 - Cowboy AI, Inc.

//! Redfish HTTP Transport
//!
//! Implements [`Fetch`] over `reqwest`. Every request carries the headers a
//! Redfish service expects:
//!
//! ```text
//! GET /redfish/v1/Systems/1
//! Accept: application/json
//! OData-Version: 4.0
//! Authorization: Basic ...          (when credentials are configured)
//! ```
//!
//! Relative paths are resolved against the context with the service root
//! locator; absolute URIs are requested as given.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cim_redfish::adapters::HttpFetcher;
//! use cim_redfish::config::{ConnectionContext, Transport};
//! use cim_redfish::domain::{Chassis, KeywordRegistry};
//! use cim_redfish::locator::ServiceRootIdentifier;
//! use cim_redfish::reader::{CollectionReader, ResourceReader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let context = ConnectionContext::new("bmc01.example.com")
//!         .with_transport(Transport::Https)
//!         .with_credentials("root", "calvin");
//!
//!     let fetcher = HttpFetcher::new(&context)?;
//!     let registry = Arc::new(KeywordRegistry::new()?);
//!     let reader = CollectionReader::new(ResourceReader::new(fetcher, registry));
//!
//!     let outcome = reader
//!         .read_service_collection::<Chassis>(&context, ServiceRootIdentifier::Chassis)
//!         .await?;
//!     println!("{} chassis", outcome.collection().len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::ConnectionContext;
use crate::domain::UriPath;
use crate::errors::TransportError;
use crate::locator;
use crate::reader::{Fetch, FetchResponse};

/// `Fetch` implementation over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client using the context's timeout and certificate policy
    pub fn new(context: &ConnectionContext) -> Result<Self, TransportError> {
        info!("Creating Redfish HTTP client for {}", context.authority_uri());

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert("OData-Version", HeaderValue::from_static("4.0"));

        let client = Client::builder()
            .timeout(context.request_timeout())
            .danger_accept_invalid_certs(context.accept_invalid_certs)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                TransportError::Unreachable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }

    /// Wrap an existing client (shared connection pool, custom TLS roots)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(
        &self,
        context: &ConnectionContext,
        uri: &UriPath,
    ) -> Result<FetchResponse, TransportError> {
        let url = locator::resolve(uri, context)
            .map_err(|e| TransportError::InvalidUri(e.to_string()))?;
        debug!("GET {}", url);

        let mut request = self.client.get(url.as_str());
        if let Some(credentials) = &context.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(classify)?;

        debug!("GET {} -> {}", url, status);
        Ok(FetchResponse {
            status,
            body: body.to_vec(),
        })
    }
}

fn classify(error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout(error.to_string())
    } else if error.is_builder() {
        TransportError::InvalidUri(error.to_string())
    } else {
        TransportError::Unreachable(error.to_string())
    }
}
