//! API-wide constants.

/// Version prefix for all API routes.
pub const API_PREFIX: &str = "/api/v0";

/// Multipart field name carrying the uploaded files.
pub const FILES_FIELD: &str = "images";
