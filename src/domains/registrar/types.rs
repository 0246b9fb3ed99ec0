//! Credentials and normalized result types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Namecheap API credentials.
///
/// Everything except `endpoint` is mandatory; see [`super::NamecheapClient::new`].
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Namecheap API user.
    pub api_user: String,

    /// Namecheap API key. Never serialized.
    #[serde(skip_serializing, default)]
    pub api_key: String,

    /// Account username the command runs as.
    pub username: String,

    /// Whitelisted client IP address.
    pub client_ip: String,

    /// API endpoint (production or sandbox). Empty means production.
    pub endpoint: String,
}

impl Credentials {
    /// Whether all mandatory fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.api_user.is_empty()
            && !self.api_key.is_empty()
            && !self.username.is_empty()
            && !self.client_ip.is_empty()
    }
}

/// Custom Debug implementation to keep the API key out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field(
                "api_key",
                &if self.api_key.is_empty() { "" } else { "[REDACTED]" },
            )
            .field("username", &self.username)
            .field("client_ip", &self.client_ip)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Availability and pricing for a single domain.
///
/// Premium prices are only ever non-zero when `is_premium_name` is true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    /// The domain that was checked.
    pub domain: String,

    /// Whether the domain is available for registration.
    pub available: bool,

    /// Whether the domain name is premium.
    pub is_premium_name: bool,

    /// Registration price for a premium domain.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub premium_registration_price: f64,

    /// Renewal price for a premium domain.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub premium_renewal_price: f64,

    /// Fee charged by ICANN.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub icann_fee: f64,

    /// Early Access Program fee.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub eap_fee: f64,

    /// Error message if this domain's check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_completeness() {
        let creds = Credentials {
            api_user: "user".to_string(),
            api_key: "key".to_string(),
            username: "name".to_string(),
            client_ip: "10.0.0.1".to_string(),
            endpoint: String::new(),
        };
        assert!(creds.is_complete());

        let missing_ip = Credentials {
            client_ip: String::new(),
            ..creds
        };
        assert!(!missing_ip.is_complete());
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = Credentials {
            api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_credentials_serialization_omits_api_key() {
        let creds = Credentials {
            api_user: "user".to_string(),
            api_key: "super_secret_key".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&creds).unwrap();
        assert!(json.contains("\"api_user\":\"user\""));
        assert!(!json.contains("api_key"));
        assert!(!json.contains("super_secret_key"));
    }

    #[test]
    fn test_domain_result_omits_zero_and_empty_fields() {
        let result = DomainResult {
            domain: "example.com".to_string(),
            available: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "domain": "example.com",
                "available": true,
                "isPremiumName": false
            })
        );
    }

    #[test]
    fn test_domain_result_camel_case_fields() {
        let result = DomainResult {
            domain: "premium.com".to_string(),
            available: true,
            is_premium_name: true,
            premium_registration_price: 1000.0,
            premium_renewal_price: 50.5,
            icann_fee: 0.18,
            eap_fee: 25.0,
            error: Some("partial data".to_string()),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["premiumRegistrationPrice"], 1000.0);
        assert_eq!(json["premiumRenewalPrice"], 50.5);
        assert_eq!(json["icannFee"], 0.18);
        assert_eq!(json["eapFee"], 25.0);
        assert_eq!(json["error"], "partial data");
    }
}
