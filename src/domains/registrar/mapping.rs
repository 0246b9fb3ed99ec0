//! Normalization of raw registrar records.

use std::num::ParseFloatError;

use super::envelope::DomainCheckRecord;
use super::types::DomainResult;

const TRUE_LITERAL: &str = "true";
const NO_ERROR: &str = "0";

/// Parse a decimal attribute. An empty string is zero.
pub fn parse_decimal(s: &str) -> Result<f64, ParseFloatError> {
    if s.is_empty() {
        return Ok(0.0);
    }

    s.parse()
}

/// Map raw records to normalized results, preserving order.
///
/// Best effort: unparseable numbers leave the field at zero, and anything
/// other than the literal `"true"` is false.
pub fn map_results(records: &[DomainCheckRecord]) -> Vec<DomainResult> {
    records.iter().map(map_record).collect()
}

fn map_record(record: &DomainCheckRecord) -> DomainResult {
    let mut result = DomainResult {
        domain: record.domain.clone(),
        available: record.available == TRUE_LITERAL,
        is_premium_name: record.is_premium_name == TRUE_LITERAL,
        ..Default::default()
    };

    if record.error_no != NO_ERROR && !record.description.is_empty() {
        result.error = Some(record.description.clone());
    }

    if result.is_premium_name {
        if let Some(price) = lenient_decimal(&record.premium_registration_price) {
            result.premium_registration_price = price;
        }
        if let Some(price) = lenient_decimal(&record.premium_renewal_price) {
            result.premium_renewal_price = price;
        }
    }

    if let Some(fee) = lenient_decimal(&record.icann_fee) {
        result.icann_fee = fee;
    }
    if let Some(fee) = lenient_decimal(&record.eap_fee) {
        result.eap_fee = fee;
    }

    result
}

// Non-finite values would serialize as `null`, so they count as malformed.
fn lenient_decimal(s: &str) -> Option<f64> {
    parse_decimal(s).ok().filter(|v| v.is_finite())
}
