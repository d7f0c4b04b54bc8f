//! Social profile matcher. A name with at least two tokens is treated as a
//! plausible profile hit and yields a lookup reference the client can open.

use tracing::debug;

use crate::search::models::{SearchError, SocialMatch};

pub const SOCIAL_PROFILE_SEARCH: &str = "Social Profile Search";

const SOCIAL_CONFIDENCE: f64 = 0.6;

pub fn match_social(
    name: &str,
    location: Option<&str>,
    lookup_base_url: &str,
) -> Result<SocialMatch, SearchError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SearchError::EmptyName);
    }

    debug!(person = name, location = location.unwrap_or(""), "social profile lookup");

    if name.split_whitespace().count() < 2 {
        return Ok(SocialMatch {
            found: false,
            profile_reference: None,
            details: format!("No profiles found for {name}"),
            confidence: 0.0,
        });
    }

    Ok(SocialMatch {
        found: true,
        profile_reference: Some(profile_reference(lookup_base_url, name)),
        details: format!("Potential profiles found for {name}"),
        confidence: SOCIAL_CONFIDENCE,
    })
}

fn profile_reference(base_url: &str, name: &str) -> String {
    format!("{base_url}{}", urlencoding::encode(name))
}
