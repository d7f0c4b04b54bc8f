//! CSV batch processing: header-insensitive field lookup, phone cleanup and
//! the per-row search loop that builds a `BatchSummary`.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::search::combine::DetailStyle;
use crate::search::models::{BatchRecord, BatchSummary, MatchStatus, PersonQuery};
use crate::search::pacing::RowPacer;
use crate::search::searcher::PersonSearcher;

/// Column values of one row keyed by lower-cased header.
///
/// When two headers differ only by case, the one already written in lower
/// case wins (`name` beats `Name`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: HashMap<String, String>,
}

impl FieldTable {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut fields = HashMap::new();
        for (header, value) in pairs {
            let header = header.trim();
            let key = header.to_lowercase();
            if header == key {
                fields.insert(key, value.to_string());
            } else {
                fields.entry(key).or_insert_with(|| value.to_string());
            }
        }
        FieldTable { fields }
    }

    /// Looks a column up by name in any case. Missing columns read as "".
    pub fn get(&self, field: &str) -> &str {
        self.fields
            .get(&field.to_lowercase())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parses CSV text with a header row into field tables.
///
/// Only an unreadable header row fails the upload. Records that cannot be
/// parsed are logged and dropped.
pub fn parse_rows(content: &str) -> Result<Vec<FieldTable>, AppError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::Processing(format!("could not read CSV header: {e}")))?
        .clone();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        match result {
            Ok(record) => rows.push(FieldTable::from_pairs(headers.iter().zip(record.iter()))),
            // +2: one for the header, one for 1-based numbering
            Err(e) => warn!(line = idx + 2, "skipping unreadable CSV row: {e}"),
        }
    }
    Ok(rows)
}

/// Cleans phone values exported as serialized lists, e.g. `['555-1234']`.
///
/// Bracketed values are parsed as a list (single quotes accepted) and the
/// first entry is kept; an empty list yields "". Anything that fails to
/// parse has brackets and quotes stripped from both ends.
pub fn normalize_phone(raw: &str) -> String {
    let phone = raw.trim();
    if !(phone.starts_with('[') && phone.ends_with(']')) {
        return phone.to_string();
    }

    match serde_json::from_str::<Vec<Value>>(&phone.replace('\'', "\"")) {
        Ok(items) => match items.into_iter().next() {
            Some(Value::String(first)) => first,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        },
        Err(_) => phone
            .trim_matches(|c| matches!(c, '[' | ']' | '"' | '\''))
            .to_string(),
    }
}

/// Runs every named row through the searcher, in input order.
///
/// Rows with a blank name are skipped and not counted. The pacer is awaited
/// between processed rows.
pub async fn process_batch(
    rows: Vec<FieldTable>,
    searcher: &PersonSearcher,
    pacer: &dyn RowPacer,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for (idx, row) in rows.iter().enumerate() {
        let name = row.get("name").trim();
        let address = row.get("address").trim();
        let phone = normalize_phone(row.get("phone"));

        let Some(query) = PersonQuery::new(name, Some(address), Some(&phone)) else {
            debug!(row = idx + 1, "skipping row without a name");
            continue;
        };

        if summary.total_processed > 0 {
            pacer.pause().await;
        }

        let result = searcher.search(&query, DetailStyle::ProfileReference);
        let status = if result.found {
            MatchStatus::Found
        } else {
            MatchStatus::NotFound
        };

        summary.push(BatchRecord {
            name: query.name,
            address: address.to_string(),
            phone,
            status,
            sources: result.sources,
            details: result.details,
            confidence: result.confidence,
        });
    }

    let summary = summary.finish();
    info!(
        total = summary.total_processed,
        found = summary.found_count,
        not_found = summary.not_found_count,
        "batch processed"
    );
    summary
}
