use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use darkroom_core::AppError;
use serde::Deserialize;
use serde_json::json;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// A session booking request from the public site.
#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub first_datetime: String,
    #[serde(default)]
    pub second_datetime: String,
    #[serde(default)]
    pub third_datetime: String,
    #[serde(default, rename = "type")]
    pub session_type: String,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub captcha: String,
}

impl BookingRequest {
    pub fn email_subject(&self) -> &'static str {
        "New Booking Request"
    }

    pub fn email_body(&self) -> String {
        format!(
            "Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             First Date/Time: {}\n\
             Second Date/Time: {}\n\
             Third Date/Time: {}\n\
             Type: {}\n\n\
             Comments:\n{}\n",
            self.name,
            self.email,
            self.phone,
            self.first_datetime,
            self.second_datetime,
            self.third_datetime,
            self.session_type,
            self.comments
        )
    }
}

/// Booking submission handler: verify the captcha token, then notify the
/// studio inbox.
#[tracing::instrument(skip(state, booking), fields(operation = "submit_booking"))]
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    ValidatedJson(booking): ValidatedJson<BookingRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if let Some(captcha) = &state.captcha {
        captcha.verify(&booking.captcha, "submit").await?;
    } else {
        tracing::warn!("Captcha verification disabled; accepting booking without assessment");
    }

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::ServerMisconfigured("SMTP not configured for booking notifications".to_string())
    })?;

    mailer
        .send(booking.email_subject(), &booking.email_body())
        .await?;

    tracing::info!(name = %booking.name, "Booking request forwarded");
    Ok(Json(json!({ "status": "success" })))
}
