use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure raised by a matcher. Callers coerce it into a not-found result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("name must not be empty")]
    EmptyName,
}

/// One person to look up. `name` is always non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl PersonQuery {
    /// Trims every field; blank optional fields become `None`.
    /// Returns `None` when the name is blank.
    pub fn new(name: &str, address: Option<&str>, phone: Option<&str>) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let non_blank = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        Some(PersonQuery {
            name: name.to_string(),
            address: non_blank(address),
            phone: non_blank(phone),
        })
    }
}

/// Outcome of the public-records lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub found: bool,
    pub sources: Vec<String>,
    pub details: String,
    pub confidence: f64,
}

impl MatchResult {
    pub fn not_found(name: &str) -> Self {
        MatchResult {
            found: false,
            sources: Vec::new(),
            details: format!("No results found for {name}"),
            confidence: 0.0,
        }
    }

    pub fn failed(err: &SearchError) -> Self {
        MatchResult {
            found: false,
            sources: Vec::new(),
            details: format!("Search failed: {err}"),
            confidence: 0.0,
        }
    }
}

/// Outcome of the social profile lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMatch {
    pub found: bool,
    pub profile_reference: Option<String>,
    pub details: String,
    pub confidence: f64,
}

impl SocialMatch {
    pub fn failed(err: &SearchError) -> Self {
        SocialMatch {
            found: false,
            profile_reference: None,
            details: format!("Social profile search failed: {err}"),
            confidence: 0.0,
        }
    }
}

/// Union of the record and social lookups for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResult {
    pub found: bool,
    pub sources: Vec<String>,
    pub details: String,
    pub confidence: f64,
    pub profile_reference: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Found,
    NotFound,
}

/// One processed CSV row as it appears in the upload response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub status: MatchStatus,
    pub sources: Vec<String>,
    pub details: String,
    pub confidence: f64,
}

/// Running totals for a CSV batch. `not_found_count` is settled by `finish`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub total_processed: usize,
    pub found_count: usize,
    pub not_found_count: usize,
    pub records: Vec<BatchRecord>,
}

impl BatchSummary {
    pub fn push(&mut self, record: BatchRecord) {
        self.total_processed += 1;
        if record.status == MatchStatus::Found {
            self.found_count += 1;
        }
        self.records.push(record);
    }

    pub fn finish(mut self) -> Self {
        self.not_found_count = self.total_processed - self.found_count;
        self
    }
}

pub fn clamp_confidence(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
