use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::search::batch::{parse_rows, process_batch};
use crate::search::combine::DetailStyle;
use crate::search::models::{BatchRecord, BatchSummary, CombinedResult, PersonQuery};
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub result: CombinedResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub total_processed: usize,
    pub found: usize,
    pub not_found: usize,
    pub people: Vec<BatchRecord>,
}

impl From<BatchSummary> for UploadResponse {
    fn from(summary: BatchSummary) -> Self {
        UploadResponse {
            success: true,
            total_processed: summary.total_processed,
            found: summary.found_count,
            not_found: summary.not_found_count,
            people: summary.records,
        }
    }
}

/// POST /upload
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // A request that is not multipart at all carries no file part.
    let mut multipart = multipart.map_err(|_| AppError::Validation("No file provided".into()))?;

    let (file_name, content) = read_csv_upload(&mut multipart, state.config.max_upload_bytes).await?;
    info!(file = %file_name, bytes = content.len(), "processing CSV upload");

    let rows = parse_rows(&content)?;
    let summary = process_batch(rows, &state.searcher, state.pacer.as_ref()).await;
    Ok(Json(UploadResponse::from(summary)))
}

/// Finds the `file` part and returns its name and UTF-8 content.
async fn read_csv_upload(
    multipart: &mut Multipart,
    max_bytes: usize,
) -> Result<(String, String), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| stream_error(e, max_bytes))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if file_name.is_empty() {
            return Err(AppError::Validation("No file selected".into()));
        }
        if !file_name.ends_with(".csv") {
            return Err(AppError::Validation("File must be a CSV".into()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| stream_error(e, max_bytes))?;
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|e| AppError::Processing(format!("file is not valid UTF-8: {e}")))?;
        return Ok((file_name, content));
    }

    Err(AppError::Validation("No file provided".into()))
}

fn stream_error(e: MultipartError, max_bytes: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the {max_bytes} byte limit"))
    } else {
        AppError::Processing(e.body_text())
    }
}

/// POST /search
pub async fn handle_search(
    State(state): State<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(req) = body.map_err(|e| AppError::Search(e.body_text()))?;

    let query = PersonQuery::new(
        req.name.as_deref().unwrap_or_default(),
        req.address.as_deref(),
        req.phone.as_deref(),
    )
    .ok_or_else(|| AppError::Validation("Name is required".into()))?;

    let result = state.searcher.search(&query, DetailStyle::SocialDetails);
    info!(person = %query.name, found = result.found, "single record search");

    Ok(Json(SearchResponse {
        success: true,
        result,
    }))
}
