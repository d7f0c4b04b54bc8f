use crate::search::models::{clamp_confidence, CombinedResult, MatchResult, SocialMatch};
use crate::search::social::SOCIAL_PROFILE_SEARCH;

/// How a social hit is folded into the combined details line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailStyle {
    /// `"{details} | Social: {profile reference}"` (CSV batch rows)
    ProfileReference,
    /// `"{details} | {social details}"` (single-record search)
    SocialDetails,
}

/// Merges both lookups: found is OR'd, confidence is the max, sources and
/// details from the records lookup come first.
pub fn combine(record: MatchResult, social: SocialMatch, style: DetailStyle) -> CombinedResult {
    let mut sources = record.sources;
    let mut details = record.details;

    if social.found {
        sources.push(SOCIAL_PROFILE_SEARCH.to_string());
        match (style, social.profile_reference.as_deref()) {
            (DetailStyle::ProfileReference, Some(reference)) => {
                details.push_str(&format!(" | Social: {reference}"));
            }
            (DetailStyle::ProfileReference, None) => {}
            (DetailStyle::SocialDetails, _) => {
                details.push_str(&format!(" | {}", social.details));
            }
        }
    }

    CombinedResult {
        found: record.found || social.found,
        sources,
        details,
        confidence: clamp_confidence(record.confidence.max(social.confidence)),
        profile_reference: social.profile_reference,
    }
}
