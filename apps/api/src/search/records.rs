//! Public-records matcher.
//!
//! Rule-based: no lookup leaves the process. The address region, the phone
//! field and business keywords in the name decide the outcome.

use tracing::debug;

use crate::search::models::{clamp_confidence, MatchResult, SearchError};

pub const PUBLIC_RECORDS: &str = "Public Records";
pub const PHONE_DIRECTORY: &str = "Phone Directory";
pub const BUSINESS_DIRECTORY: &str = "Business Directory";

const REGION_TOKENS: &[&str] = &["NJ", "PA", "NY", "MD"];

const BUSINESS_TERMS: &[&str] = &["LLC", "INC", "CORP", "COMPANY"];

const BASE_CONFIDENCE: f64 = 0.7;
const BONUS_CONFIDENCE: f64 = 0.1;
const MIN_PHONE_CHARS: usize = 5;

/// Matches a person against the public-records rules.
///
/// FOUND only when the address contains a region token (case-insensitive).
/// Once found:
/// - a usable phone adds `Phone Directory` and 0.1
/// - a business keyword in the name adds `Business Directory` and 0.1
///   and replaces the details line
pub fn match_records(
    name: &str,
    address: Option<&str>,
    phone: Option<&str>,
) -> Result<MatchResult, SearchError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SearchError::EmptyName);
    }

    debug!(query = %lookup_query(name, address), "public records lookup");

    if !address.is_some_and(has_region_token) {
        return Ok(MatchResult::not_found(name));
    }

    let mut sources = vec![PUBLIC_RECORDS.to_string()];
    let mut details = format!("Found potential matches for {name} in public records");
    let mut confidence = BASE_CONFIDENCE;

    if phone.is_some_and(is_usable_phone) {
        sources.push(PHONE_DIRECTORY.to_string());
        confidence += BONUS_CONFIDENCE;
    }

    if is_business_name(name) {
        sources.push(BUSINESS_DIRECTORY.to_string());
        details = format!("Found business listing for {name}");
        confidence += BONUS_CONFIDENCE;
    }

    Ok(MatchResult {
        found: true,
        sources,
        details,
        confidence: clamp_confidence(confidence),
    })
}

/// Free-text query a real search backend would receive: the name followed by
/// the city and state (the last two comma-separated address parts), or the
/// whole address when it has no comma.
pub fn lookup_query(name: &str, address: Option<&str>) -> String {
    let mut parts = vec![name.to_string()];
    if let Some(address) = address.filter(|a| !a.is_empty()) {
        let segments: Vec<&str> = address.split(',').collect();
        if let [.., city, state] = segments.as_slice() {
            parts.push(city.trim().to_string());
            parts.push(state.trim().to_string());
        } else {
            parts.push(address.to_string());
        }
    }
    parts.join(" ")
}

fn has_region_token(address: &str) -> bool {
    let upper = address.to_uppercase();
    REGION_TOKENS.iter().any(|token| upper.contains(token))
}

fn is_usable_phone(phone: &str) -> bool {
    // "[]" is what spreadsheet exports write for an empty phone list
    !phone.is_empty() && phone != "[]" && phone.chars().count() > MIN_PHONE_CHARS
}

fn is_business_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    BUSINESS_TERMS.iter().any(|term| upper.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_found_in_public_records() {
        let r = match_records("John Smith", Some("123 Main St, Newark, NJ"), None).unwrap();
        assert!(r.found);
        assert_eq!(r.sources, vec!["Public Records"]);
        assert!(approx(r.confidence, 0.7));
        assert_eq!(
            r.details,
            "Found potential matches for John Smith in public records"
        );
    }

    #[test]
    fn test_business_with_phone() {
        let r = match_records("Acme LLC", Some("1 Plaza, Camden, NJ"), Some("555-0000000")).unwrap();
        assert!(r.found);
        assert_eq!(
            r.sources,
            vec!["Public Records", "Phone Directory", "Business Directory"]
        );
        assert!(approx(r.confidence, 0.9));
        assert_eq!(r.details, "Found business listing for Acme LLC");
    }

    #[test]
    fn test_region_match_is_case_insensitive() {
        let r = match_records("Jane Roe", Some("44 Elm St, Baltimore, md"), None).unwrap();
        assert!(r.found);
    }

    #[test]
    fn test_region_matches_as_substring() {
        // "Spain" contains "PA" once upper-cased
        let r = match_records("Jane Roe", Some("Madrid, Spain"), None).unwrap();
        assert!(r.found);
    }

    #[test]
    fn test_no_region_is_not_found() {
        let r = match_records("Bob", Some(""), None).unwrap();
        assert!(!r.found);
        assert_eq!(r.confidence, 0.0);
        assert!(r.sources.is_empty());
        assert_eq!(r.details, "No results found for Bob");
    }

    #[test]
    fn test_business_name_alone_does_not_find() {
        let r = match_records("Widget Corp", Some("9 Sunset Blvd, Los Angeles, CA"), None).unwrap();
        assert!(!r.found);
        assert!(r.sources.is_empty());
    }

    #[test]
    fn test_short_or_placeholder_phone_gives_no_bonus() {
        for phone in ["[]", "12345", ""] {
            let r = match_records("Ann Lee", Some("Albany, NY"), Some(phone)).unwrap();
            assert_eq!(r.sources, vec!["Public Records"], "phone {phone:?}");
            assert!(approx(r.confidence, 0.7));
        }
    }

    #[test]
    fn test_phone_bonus_applies() {
        let r = match_records("Ann Lee", Some("Albany, NY"), Some("518-555-0100")).unwrap();
        assert_eq!(r.sources, vec!["Public Records", "Phone Directory"]);
        assert!(approx(r.confidence, 0.8));
    }

    #[test]
    fn test_confidence_never_exceeds_one() {
        let r = match_records("Big Company Inc", Some("NY NJ PA MD"), Some("555-555-5555")).unwrap();
        assert!(r.confidence <= 1.0);
        assert!(r.confidence >= 0.0);
    }

    #[test]
    fn test_empty_name_is_an_error() {
        assert_eq!(
            match_records("  ", Some("NJ"), None),
            Err(SearchError::EmptyName)
        );
    }

    #[test]
    fn test_lookup_query_uses_city_and_state() {
        assert_eq!(
            lookup_query("John Smith", Some("123 Main St, Newark, NJ")),
            "John Smith Newark NJ"
        );
    }

    #[test]
    fn test_lookup_query_without_comma_uses_whole_address() {
        assert_eq!(lookup_query("John", Some("Trenton NJ")), "John Trenton NJ");
        assert_eq!(lookup_query("John", None), "John");
    }
}
