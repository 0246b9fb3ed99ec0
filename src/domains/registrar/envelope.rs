//! Raw Namecheap XML envelope.
//!
//! Every attribute is kept as the string the registrar sent; interpretation
//! happens in [`super::map_results`].

use quick_xml::{DeError, Reader, events::Event};
use serde::Deserialize;

use super::error::{RegistrarError, RegistrarResult};

const ROOT_ELEMENT: &[u8] = b"ApiResponse";
const STATUS_OK: &str = "OK";
const UNKNOWN_ERROR: &str = "unknown error";

/// Top-level `<ApiResponse>` element.
#[derive(Debug, Default, Deserialize)]
#[serde(rename = "ApiResponse")]
pub struct ApiResponse {
    #[serde(rename = "@Status", default)]
    pub status: String,

    #[serde(rename = "Errors", default)]
    pub errors: Errors,

    #[serde(rename = "CommandResponse", default)]
    pub command_response: CommandResponse,
}

/// `<Errors>` section.
#[derive(Debug, Default, Deserialize)]
pub struct Errors {
    #[serde(rename = "Error", default)]
    pub entries: Vec<ErrorEntry>,
}

/// A single `<Error Number="...">message</Error>` entry.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEntry {
    #[serde(rename = "@Number", default)]
    pub number: String,

    #[serde(rename = "$text", default)]
    pub message: String,
}

/// `<CommandResponse>` section.
#[derive(Debug, Default, Deserialize)]
pub struct CommandResponse {
    #[serde(rename = "@Type", default)]
    pub kind: String,

    #[serde(rename = "DomainCheckResult", default)]
    pub records: Vec<DomainCheckRecord>,
}

/// A `<DomainCheckResult>` element, attributes as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DomainCheckRecord {
    #[serde(rename = "@Domain", default)]
    pub domain: String,

    #[serde(rename = "@Available", default)]
    pub available: String,

    #[serde(rename = "@IsPremiumName", default)]
    pub is_premium_name: String,

    #[serde(rename = "@PremiumRegistrationPrice", default)]
    pub premium_registration_price: String,

    #[serde(rename = "@PremiumRenewalPrice", default)]
    pub premium_renewal_price: String,

    #[serde(rename = "@IcannFee", default)]
    pub icann_fee: String,

    #[serde(rename = "@EapFee", default)]
    pub eap_fee: String,

    #[serde(rename = "@ErrorNo", default)]
    pub error_no: String,

    #[serde(rename = "@Description", default)]
    pub description: String,
}

impl ApiResponse {
    /// Decode a response body.
    ///
    /// The root element must be `<ApiResponse>`; anything else (an HTML error
    /// page, another API's reply) is a decode failure.
    pub fn from_xml(body: &str) -> RegistrarResult<Self> {
        check_root(body)?;
        Ok(quick_xml::de::from_str(body)?)
    }

    /// Consume the envelope, yielding its records if the status is OK.
    ///
    /// A non-OK status fails the whole call with the first reported error.
    pub fn into_records(self) -> RegistrarResult<Vec<DomainCheckRecord>> {
        if self.status != STATUS_OK {
            let message = self
                .errors
                .entries
                .into_iter()
                .next()
                .map(|e| e.message)
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            return Err(RegistrarError::upstream(message));
        }

        Ok(self.command_response.records)
    }
}

fn check_root(body: &str) -> Result<(), DeError> {
    let mut reader = Reader::from_str(body);

    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return if e.local_name().as_ref() == ROOT_ELEMENT {
                    Ok(())
                } else {
                    Err(DeError::Custom(format!(
                        "unexpected root element <{}>",
                        String::from_utf8_lossy(e.local_name().as_ref())
                    )))
                };
            }
            // No element at all; the deserializer reports it.
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}
