//! Application state shared across handlers.
//!
//! Everything here is constructed once at startup and shared read-only;
//! no per-request state lives on `AppState`.

use std::sync::Arc;

use darkroom_core::Config;
use darkroom_storage::Storage;

use crate::services::captcha::CaptchaVerifier;
use crate::services::email::EmailService;
use crate::services::upload::UploadService;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub uploads: UploadService,
    pub mailer: Option<EmailService>,
    pub captcha: Option<CaptchaVerifier>,
}

impl AppState {
    /// Build application state from configuration and an already-constructed
    /// storage backend. Storage is injected so tests can substitute an
    /// in-memory implementation.
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        let uploads = UploadService::new(storage.clone());
        let mailer = EmailService::from_config(&config);
        let captcha = CaptchaVerifier::from_config(&config);

        Self {
            config,
            storage,
            uploads,
            mailer,
            captcha,
        }
    }
}
