//! Server-side captcha verification.
//!
//! Contact-form submissions carry a client-generated token that is assessed
//! against the reCAPTCHA verification API before any mail is sent. A token
//! passes when verification succeeds, the reported action matches the
//! expected one, and the risk score clears the configured threshold.

use darkroom_core::{AppError, Config};
use serde::Deserialize;

const VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

/// Captcha verifier; absent when no secret key is configured.
#[derive(Clone)]
pub struct CaptchaVerifier {
    http: reqwest::Client,
    secret: String,
    score_threshold: f64,
    verify_url: String,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(default)]
    score: Option<f64>,
    #[serde(default)]
    action: Option<String>,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

impl CaptchaVerifier {
    /// Create a verifier from config. Returns `None` when no secret key is
    /// set; callers then skip verification (dev mode).
    pub fn from_config(config: &Config) -> Option<Self> {
        let secret = config.recaptcha_secret_key.clone()?;
        tracing::info!("Captcha verification enabled");
        Some(Self {
            http: reqwest::Client::new(),
            secret,
            score_threshold: config.recaptcha_score_threshold,
            verify_url: VERIFY_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_endpoint(secret: &str, threshold: f64, verify_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret: secret.to_string(),
            score_threshold: threshold,
            verify_url,
        }
    }

    /// Assess a token for the given action.
    pub async fn verify(&self, token: &str, expected_action: &str) -> Result<(), AppError> {
        if token.is_empty() {
            return Err(AppError::CaptchaRejected("missing captcha token".to_string()));
        }

        let response = self
            .http
            .post(&self.verify_url)
            .form(&[("secret", self.secret.as_str()), ("response", token)])
            .send()
            .await
            .map_err(|e| AppError::Internal(format!("captcha verification call failed: {}", e)))?;

        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AppError::Internal(format!("captcha response unreadable: {}", e)))?;

        evaluate(&body, expected_action, self.score_threshold)
    }
}

fn evaluate(
    body: &VerifyResponse,
    expected_action: &str,
    score_threshold: f64,
) -> Result<(), AppError> {
    if !body.success {
        return Err(AppError::CaptchaRejected(format!(
            "token invalid: {}",
            body.error_codes.join(", ")
        )));
    }

    if let Some(action) = body.action.as_deref() {
        if action != expected_action {
            return Err(AppError::CaptchaRejected(format!(
                "action mismatch: expected {}",
                expected_action
            )));
        }
    }

    if let Some(score) = body.score {
        if score < score_threshold {
            tracing::warn!(score, score_threshold, "Captcha score below threshold");
            return Err(AppError::CaptchaRejected(format!(
                "risk score {:.2} below threshold",
                score
            )));
        }
    }

    Ok(())
}
