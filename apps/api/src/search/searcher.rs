use tracing::warn;

use crate::search::combine::{combine, DetailStyle};
use crate::search::models::{CombinedResult, MatchResult, PersonQuery, SocialMatch};
use crate::search::records::match_records;
use crate::search::social::match_social;

/// Runs both matchers for a query and merges them. Matcher errors are
/// downgraded to not-found results here so a single bad query never fails
/// a request or a batch.
#[derive(Debug, Clone)]
pub struct PersonSearcher {
    social_lookup_base_url: String,
}

impl PersonSearcher {
    pub fn new(social_lookup_base_url: impl Into<String>) -> Self {
        PersonSearcher {
            social_lookup_base_url: social_lookup_base_url.into(),
        }
    }

    pub fn search(&self, query: &PersonQuery, style: DetailStyle) -> CombinedResult {
        let address = query.address.as_deref();

        let record = match_records(&query.name, address, query.phone.as_deref())
            .unwrap_or_else(|e| {
                warn!(person = %query.name, "public records lookup failed: {e}");
                MatchResult::failed(&e)
            });

        let social = match_social(&query.name, address, &self.social_lookup_base_url)
            .unwrap_or_else(|e| {
                warn!(person = %query.name, "social profile lookup failed: {e}");
                SocialMatch::failed(&e)
            });

        combine(record, social, style)
    }
}
