//! Multipart form ingestion for the upload endpoint.
//!
//! Extraction and validation are separate steps: extraction only reads the
//! wire format, validation applies the request contract in a fixed order so
//! each failure mode is distinct and stable.

use axum::extract::Multipart;
use darkroom_core::AppError;

use crate::constants::FILES_FIELD;

/// One uploaded file part, exactly as received.
#[derive(Debug)]
pub struct RawFile {
    pub original_name: String,
    pub declared_content_type: String,
    pub bytes: Vec<u8>,
}

/// Raw fields pulled from the multipart body, before validation.
#[derive(Default)]
pub struct UploadForm {
    pub secret: Option<String>,
    pub max_dimension: Option<String>,
    pub folder: Option<String>,
    pub files: Vec<RawFile>,
}

/// A validated upload request.
#[derive(Debug)]
pub struct UploadRequest {
    pub folder: String,
    pub max_dimension: Option<u32>,
    pub files: Vec<RawFile>,
}

/// Read the multipart body into an [`UploadForm`].
///
/// Wire field names follow the public API contract: `password`,
/// `maxDimension`, `folder`, and one or more `images` file parts. Unknown
/// fields are ignored.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedRequest(format!("Failed to read multipart body: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "password" => {
                form.secret = Some(read_text(field).await?);
            }
            "maxDimension" => {
                form.max_dimension = Some(read_text(field).await?);
            }
            "folder" => {
                form.folder = Some(read_text(field).await?);
            }
            name if name == FILES_FIELD => {
                let original_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());
                let declared_content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let bytes = field.bytes().await.map_err(|e| {
                    AppError::MalformedRequest(format!("Failed to read file data: {}", e))
                })?;

                form.files.push(RawFile {
                    original_name,
                    declared_content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::MalformedRequest(format!("Failed to read form field: {}", e)))
}

/// Apply the request contract to an extracted form.
///
/// Checks run in a fixed order, each with its own failure: folder, then
/// max dimension, then server secret presence, then secret match, then
/// file presence. Nothing here touches the object store.
pub fn validate_upload_form(
    form: UploadForm,
    configured_secret: Option<&str>,
) -> Result<UploadRequest, AppError> {
    let folder = match form.folder {
        Some(folder) if !folder.trim().is_empty() => folder,
        _ => {
            return Err(AppError::InvalidParameter(
                "Folder name is required".to_string(),
            ))
        }
    };

    let max_dimension = match form.max_dimension.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<u32>() {
            Ok(value) if value > 0 => Some(value),
            _ => {
                return Err(AppError::InvalidParameter(format!(
                    "maxDimension must be a positive integer, got '{}'",
                    raw
                )))
            }
        },
    };

    let configured_secret = configured_secret.ok_or_else(|| {
        AppError::ServerMisconfigured("No upload secret configured".to_string())
    })?;

    if form.secret.as_deref() != Some(configured_secret) {
        return Err(AppError::Unauthorized("Invalid upload secret".to_string()));
    }

    if form.files.is_empty() {
        return Err(AppError::InvalidParameter(
            "No files provided".to_string(),
        ));
    }

    Ok(UploadRequest {
        folder,
        max_dimension,
        files: form.files,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(
        secret: Option<&str>,
        max_dimension: Option<&str>,
        folder: Option<&str>,
        file_count: usize,
    ) -> UploadForm {
        UploadForm {
            secret: secret.map(String::from),
            max_dimension: max_dimension.map(String::from),
            folder: folder.map(String::from),
            files: (0..file_count)
                .map(|i| RawFile {
                    original_name: format!("file{}.png", i),
                    declared_content_type: "image/png".to_string(),
                    bytes: vec![0u8; 4],
                })
                .collect(),
        }
    }

    #[test]
    fn valid_form_passes() {
        let request =
            validate_upload_form(form_with(Some("s"), Some("1024"), Some("gallery"), 2), Some("s"))
                .unwrap();
        assert_eq!(request.folder, "gallery");
        assert_eq!(request.max_dimension, Some(1024));
        assert_eq!(request.files.len(), 2);
    }

    #[test]
    fn missing_folder_is_invalid_parameter() {
        let err = validate_upload_form(form_with(Some("s"), None, None, 1), Some("s")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn blank_folder_is_invalid_parameter() {
        let err =
            validate_upload_form(form_with(Some("s"), None, Some("  "), 1), Some("s")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn negative_max_dimension_is_invalid_parameter() {
        let err = validate_upload_form(form_with(Some("s"), Some("-5"), Some("g"), 1), Some("s"))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn zero_max_dimension_is_invalid_parameter() {
        let err = validate_upload_form(form_with(Some("s"), Some("0"), Some("g"), 1), Some("s"))
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn empty_max_dimension_means_no_resize() {
        let request =
            validate_upload_form(form_with(Some("s"), Some(""), Some("g"), 1), Some("s")).unwrap();
        assert_eq!(request.max_dimension, None);
    }

    #[test]
    fn missing_server_secret_is_server_misconfigured() {
        let err = validate_upload_form(form_with(Some("s"), None, Some("g"), 1), None).unwrap_err();
        assert_eq!(err.error_code(), "SERVER_MISCONFIGURED");
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let err = validate_upload_form(form_with(Some("nope"), None, Some("g"), 1), Some("s"))
            .unwrap_err();
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn folder_is_checked_before_secret() {
        // Parameter problems surface before authorization.
        let err =
            validate_upload_form(form_with(Some("nope"), None, None, 1), Some("s")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }

    #[test]
    fn empty_file_list_is_invalid_parameter() {
        let err =
            validate_upload_form(form_with(Some("s"), None, Some("g"), 0), Some("s")).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_PARAMETER");
    }
}
