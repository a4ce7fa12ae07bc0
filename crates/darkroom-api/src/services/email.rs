//! Email service for contact-form notifications via SMTP.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::sync::Arc;

use darkroom_core::{AppError, Config};

/// Email service for studio notifications.
/// No-op constructor returns `None` when SMTP is not configured.
#[derive(Clone)]
pub struct EmailService {
    mailer: Arc<AsyncSmtpTransport<Tokio1Executor>>,
    from: String,
    to: String,
}

impl EmailService {
    /// Create email service from config. Returns `None` when SMTP host,
    /// from, or to are missing.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.smtp_configured() {
            tracing::debug!("SMTP not configured; contact-form mail disabled");
            return None;
        }
        let host = config.smtp_host.as_deref()?;
        let from = config.smtp_from.clone()?;
        let to = config.smtp_to.clone()?;
        let port = config.smtp_port.unwrap_or(587);

        let mailer = if config.smtp_tls {
            let b = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host).ok()?;
            let b = b.port(port);
            let b = if let (Some(u), Some(p)) = (&config.smtp_user, &config.smtp_password) {
                b.credentials(Credentials::new(u.clone(), p.clone()))
            } else {
                b
            };
            tracing::info!(host = %host, port = port, "Email service initialized (SMTP with STARTTLS)");
            b.build()
        } else {
            let b = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port);
            let b = if let (Some(u), Some(p)) = (&config.smtp_user, &config.smtp_password) {
                b.credentials(Credentials::new(u.clone(), p.clone()))
            } else {
                b
            };
            tracing::info!(host = %host, port = port, "Email service initialized (SMTP)");
            b.build()
        };

        Some(Self {
            mailer: Arc::new(mailer),
            from,
            to,
        })
    }

    /// Send a plain-text notification to the configured studio inbox.
    pub async fn send(&self, subject: &str, body_plain: &str) -> Result<(), AppError> {
        let from_addr: Mailbox = self
            .from
            .parse()
            .map_err(|e| AppError::ServerMisconfigured(format!("Invalid SMTP_FROM: {}", e)))?;
        let to_addr: Mailbox = self
            .to
            .parse()
            .map_err(|e| AppError::ServerMisconfigured(format!("Invalid SMTP_TO: {}", e)))?;

        let email = Message::builder()
            .from(from_addr)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body_plain.to_string())
            .map_err(|e| AppError::Mail(e.to_string()))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| AppError::Mail(e.to_string()))?;

        tracing::info!(subject = %subject, "Notification email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> Config {
        Config {
            server_port: 8080,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            s3_bucket: "b".to_string(),
            s3_region: "auto".to_string(),
            s3_public_base_url: "http://cdn".to_string(),
            aws_access_key_id: "k".to_string(),
            aws_secret_access_key: "s".to_string(),
            upload_secret: None,
            max_upload_size_bytes: 1024,
            smtp_host: None,
            smtp_port: None,
            smtp_user: None,
            smtp_password: None,
            smtp_from: None,
            smtp_to: None,
            smtp_tls: true,
            recaptcha_secret_key: None,
            recaptcha_score_threshold: 0.5,
        }
    }

    #[test]
    fn from_config_returns_none_without_smtp() {
        assert!(EmailService::from_config(&unconfigured()).is_none());
    }

    #[test]
    fn from_config_builds_service_when_configured() {
        let mut config = unconfigured();
        config.smtp_host = Some("smtp.example.com".to_string());
        config.smtp_from = Some("studio@example.com".to_string());
        config.smtp_to = Some("inbox@example.com".to_string());
        config.smtp_tls = false;
        assert!(EmailService::from_config(&config).is_some());
    }
}
