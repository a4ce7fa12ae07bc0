use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::error::HttpAppError;
use crate::services::upload::FileOutcome;
use crate::state::AppState;
use crate::utils::upload::{extract_upload_form, validate_upload_form};

#[derive(Serialize)]
pub struct UploadResponse {
    pub results: Vec<FileOutcome>,
}

/// Upload images handler
///
/// Parses the multipart form, applies the request contract, then delegates
/// to the upload service. Request-level validation failures reject the
/// whole request before any store call; per-file failures are reported in
/// the outcome list without aborting the batch.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_images"))]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, HttpAppError> {
    let form = extract_upload_form(multipart).await?;
    let request = validate_upload_form(form, state.config.upload_secret.as_deref())?;

    tracing::info!(
        folder = %request.folder,
        files = request.files.len(),
        max_dimension = ?request.max_dimension,
        "Processing upload batch"
    );

    let results = state.uploads.process(request).await;

    Ok(Json(UploadResponse { results }))
}
