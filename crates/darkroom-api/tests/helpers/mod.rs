//! Shared test harness: router + in-memory storage.

use std::sync::Arc;

use axum_test::TestServer;
use darkroom_api::setup::routes::setup_routes;
use darkroom_api::state::AppState;
use darkroom_core::Config;
use darkroom_storage::{MemoryStorage, Storage};

pub const TEST_SECRET: &str = "test-secret";
pub const PUBLIC_BASE_URL: &str = "https://cdn.test.example";

/// Test application with direct access to the storage fake.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<MemoryStorage>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn test_config() -> Config {
    Config {
        server_port: 0,
        cors_origins: vec!["*".to_string()],
        environment: "development".to_string(),
        s3_endpoint: "http://localhost:9000".to_string(),
        s3_bucket: "test-bucket".to_string(),
        s3_region: "auto".to_string(),
        s3_public_base_url: PUBLIC_BASE_URL.to_string(),
        aws_access_key_id: "test-key".to_string(),
        aws_secret_access_key: "test-secret-key".to_string(),
        upload_secret: Some(TEST_SECRET.to_string()),
        max_upload_size_bytes: 32 * 1024 * 1024,
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

/// Setup a test application around an in-memory storage backend.
pub fn setup_test_app() -> TestApp {
    setup_test_app_with_config(test_config())
}

pub fn setup_test_app_with_config(config: Config) -> TestApp {
    let storage = Arc::new(MemoryStorage::new(PUBLIC_BASE_URL));
    let dyn_storage: Arc<dyn Storage> = storage.clone();
    let state = Arc::new(AppState::new(config, dyn_storage));
    let router = setup_routes(&state.config, state.clone()).expect("router setup");
    let server = TestServer::new(router).expect("test server");

    TestApp { server, storage }
}

pub mod fixtures {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    fn sample(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Vec::new();
        sample(width, height)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Vec::new();
        sample(width, height)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
            .unwrap();
        buffer
    }

    /// Decode stored bytes to check dimensions and format.
    pub fn decode_stored(data: &[u8]) -> (ImageFormat, u32, u32) {
        let reader = image::ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .unwrap();
        let format = reader.format().unwrap();
        let img = reader.decode().unwrap();
        (format, img.width(), img.height())
    }
}
