//! Darkroom storage library
//!
//! Object-store abstraction and implementations for the darkroom services:
//! the `Storage` trait, the S3-compatible backend used in production, an
//! in-memory backend for tests and local development, shared key naming,
//! and a bounded-retry wrapper for transient put failures.
//!
//! # Storage key format
//!
//! Objects are addressed as `{folder}/{stem}_{unix_seconds}{.ext}`. Key
//! generation is centralized in the `keys` module so every backend and the
//! public URLs derived from keys stay consistent.

pub mod keys;
pub mod memory;
pub mod retry;
pub mod s3;
pub mod traits;

pub use memory::MemoryStorage;
pub use retry::{put_with_retry, RetryPolicy};
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
