use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use darkroom_core::AppError;
use serde::Deserialize;
use serde_json::json;

use crate::error::{HttpAppError, ValidatedJson};
use crate::state::AppState;

/// A visitor question from the public site.
#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub captcha: String,
}

impl QuestionRequest {
    pub fn email_subject(&self) -> &'static str {
        "New Question Asked"
    }

    pub fn email_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\nQuestion:\n{}\n",
            self.name, self.email, self.phone, self.question
        )
    }
}

/// Question submission handler: same verify-then-notify flow as bookings.
#[tracing::instrument(skip(state, question), fields(operation = "submit_question"))]
pub async fn submit_question(
    State(state): State<Arc<AppState>>,
    ValidatedJson(question): ValidatedJson<QuestionRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    if let Some(captcha) = &state.captcha {
        captcha.verify(&question.captcha, "submit").await?;
    } else {
        tracing::warn!("Captcha verification disabled; accepting question without assessment");
    }

    let mailer = state.mailer.as_ref().ok_or_else(|| {
        AppError::ServerMisconfigured("SMTP not configured for question notifications".to_string())
    })?;

    mailer
        .send(question.email_subject(), &question.email_body())
        .await?;

    tracing::info!(name = %question.name, "Question forwarded");
    Ok(Json(json!({ "status": "success" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_body_contains_question_text() {
        let question = QuestionRequest {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            phone: String::new(),
            question: "Do you travel for weddings?".to_string(),
            captcha: "tok".to_string(),
        };
        assert!(question.email_body().contains("Do you travel for weddings?"));
    }
}
