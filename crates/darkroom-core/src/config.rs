//! Configuration module
//!
//! Environment-driven configuration for the API server, the object store
//! client, and the optional mail/captcha integrations.

use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 32;
const DEFAULT_S3_REGION: &str = "auto";
const DEFAULT_CAPTCHA_SCORE_THRESHOLD: f64 = 0.5;

/// Application configuration, loaded once at startup.
///
/// The object-store settings are hard requirements: the server refuses to
/// start without them. The upload secret is intentionally *not* required at
/// startup — its absence is reported per request as a server configuration
/// error, so a misdeployed instance still serves its health endpoint.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,

    // Object store
    pub s3_endpoint: String,
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_public_base_url: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,

    // Upload pipeline
    pub upload_secret: Option<String>,
    pub max_upload_size_bytes: usize,

    // SMTP (contact-form notifications); unset disables mail
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_to: Option<String>,
    pub smtp_tls: bool,

    // Captcha verification; unset skips the check
    pub recaptcha_secret_key: Option<String>,
    pub recaptcha_score_threshold: f64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            s3_endpoint: env::var("S3_ENDPOINT")
                .map_err(|_| anyhow::anyhow!("S3_ENDPOINT must be set"))?,
            s3_bucket: env::var("S3_BUCKET")
                .map_err(|_| anyhow::anyhow!("S3_BUCKET must be set"))?,
            s3_region: env::var("S3_REGION").unwrap_or_else(|_| DEFAULT_S3_REGION.to_string()),
            s3_public_base_url: env::var("S3_PUBLIC_BASE_URL")
                .map_err(|_| anyhow::anyhow!("S3_PUBLIC_BASE_URL must be set"))?,
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID")
                .map_err(|_| anyhow::anyhow!("AWS_ACCESS_KEY_ID must be set"))?,
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY")
                .map_err(|_| anyhow::anyhow!("AWS_SECRET_ACCESS_KEY must be set"))?,
            upload_secret: env::var("UPLOAD_SECRET").ok().filter(|s| !s.is_empty()),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT").ok().and_then(|s| s.parse().ok()),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            smtp_from: env::var("SMTP_FROM").ok(),
            smtp_to: env::var("SMTP_TO").ok(),
            smtp_tls: env::var("SMTP_TLS")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(true),
            recaptcha_secret_key: env::var("RECAPTCHA_SECRET_KEY").ok(),
            recaptcha_score_threshold: env::var("RECAPTCHA_SCORE_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_CAPTCHA_SCORE_THRESHOLD.to_string())
                .parse()
                .unwrap_or(DEFAULT_CAPTCHA_SCORE_THRESHOLD),
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail-fast sanity checks beyond per-field parsing.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        if self.s3_public_base_url.is_empty() {
            return Err(anyhow::anyhow!("S3_PUBLIC_BASE_URL cannot be empty"));
        }
        if self.upload_secret.is_none() {
            tracing::warn!("UPLOAD_SECRET not set; all upload requests will be rejected");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// SMTP is usable only when host, from and to are all present.
    pub fn smtp_configured(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_from.is_some() && self.smtp_to.is_some()
    }
}
