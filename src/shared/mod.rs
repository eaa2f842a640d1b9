//! Shared Module
//!
//! Types that do not depend on the front-end: the backend's wire model, the
//! client error type, and application configuration.

/// Products, profiles and endpoint bodies
pub mod models;

/// Client error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{
    Credentials, DemoUser, NewUser, Product, ProductId, PurchaseRecord, RecommendationsResponse,
    UserId, UserProfile,
};
pub use error::ClientError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, FileConfig};
