//! Namecheap API client.
//!
//! Builds the authenticated `namecheap.domains.check` request, performs a
//! single blocking GET and hands the decoded envelope to [`map_results`].

use std::time::Duration;

use tracing::{debug, instrument};
use url::Url;

use super::envelope::ApiResponse;
use super::error::{RegistrarError, RegistrarResult};
use super::mapping::map_results;
use super::types::{Credentials, DomainResult};

/// Production endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.namecheap.com/xml.response";

/// Maximum number of domains the registrar accepts per check command.
pub const MAX_DOMAINS_PER_CHECK: usize = 50;

/// Upper bound on a single registrar request, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const CHECK_COMMAND: &str = "namecheap.domains.check";

/// Domain availability client for the Namecheap API.
///
/// Holds only read-only credentials and a timeout, so one instance can serve
/// concurrent checks.
#[derive(Debug, Clone)]
pub struct NamecheapClient {
    credentials: Credentials,
    timeout: Duration,
}

impl NamecheapClient {
    /// Create a client, validating that all mandatory credentials are present.
    pub fn new(mut credentials: Credentials) -> RegistrarResult<Self> {
        if !credentials.is_complete() {
            return Err(RegistrarError::MissingCredentials);
        }

        if credentials.endpoint.is_empty() {
            credentials.endpoint = DEFAULT_ENDPOINT.to_string();
        }

        Ok(Self {
            credentials,
            timeout: REQUEST_TIMEOUT,
        })
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.credentials.endpoint
    }

    /// Check availability of up to [`MAX_DOMAINS_PER_CHECK`] domains.
    ///
    /// Results follow the order of the registrar's response.
    #[instrument(skip_all, fields(domain_count = domains.len()))]
    pub fn check<S: AsRef<str>>(&self, domains: &[S]) -> RegistrarResult<Vec<DomainResult>> {
        if domains.is_empty() {
            return Err(RegistrarError::NoDomainsProvided);
        }

        if domains.len() > MAX_DOMAINS_PER_CHECK {
            return Err(RegistrarError::TooManyDomains {
                count: domains.len(),
                max: MAX_DOMAINS_PER_CHECK,
            });
        }

        let domain_list = domains
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        debug!(domains = %domain_list, "Checking domains with Namecheap API");

        let url = self.build_request_url(&domain_list)?;

        // The URL carries the API key; only the endpoint is logged.
        debug!(endpoint = %self.credentials.endpoint, "Making Namecheap API call");

        let body = Self::fetch(url, self.timeout)?;
        let records = ApiResponse::from_xml(&body)?.into_records()?;
        let results = map_results(&records);

        debug!(domains_checked = results.len(), "Domain check completed");

        Ok(results)
    }

    /// Build the signed request URL for a comma-separated domain list.
    pub fn build_request_url(&self, domain_list: &str) -> RegistrarResult<Url> {
        let mut url = Url::parse(&self.credentials.endpoint)?;

        url.query_pairs_mut()
            .clear()
            .append_pair("ApiUser", &self.credentials.api_user)
            .append_pair("ApiKey", &self.credentials.api_key)
            .append_pair("UserName", &self.credentials.username)
            .append_pair("ClientIp", &self.credentials.client_ip)
            .append_pair("Command", CHECK_COMMAND)
            .append_pair("DomainList", domain_list);

        Ok(url)
    }

    /// Perform the GET and return the body.
    fn fetch(url: Url, timeout: Duration) -> RegistrarResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        let response = client.get(url).send()?;
        debug!(status = %response.status(), "Namecheap API responded");

        Ok(response.text()?)
    }
}
