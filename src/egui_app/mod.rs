//! egui Native Desktop Client Module
//!
//! This module provides the shop client: a view/session state controller and
//! a native desktop front-end built with egui/eframe that paints it.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration resolution (server URL, data directory)
//! - **`storage`** - Persisted token and theme
//! - **`api`** - Async HTTP client for the backend endpoints
//! - **`session`** - Session store: restore, token, validation results, logout
//! - **`catalog`** - Product catalog cache
//! - **`router`** - Active view and its access control
//! - **`state`** - Application state, typed actions and commands
//! - **`render`** - Reconciliation of state into a render plan
//! - **`driver`** - Runs commands on tokio and feeds results back
//! - **`views`** / **`theme`** - egui painting of the render plan
//! - **`main`** - Main application entry point (binary)
//!
//! # Control Flow
//!
//! ```text
//! widget event ─▶ Action ─▶ AppState::dispatch ─▶ Command ─▶ Driver (tokio)
//!                                 │                              │
//!                                 ▼                              ▼
//!                        render::reconcile ◀──── Action (fetch result)
//!                                 │
//!                                 ▼
//!                         RenderPlan ─▶ views
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the desktop client:
//! // cargo run --bin shop_client
//! ```

pub mod config;
pub mod storage;
pub mod api;
pub mod types;
pub mod session;
pub mod catalog;
pub mod router;
pub mod state;
pub mod render;
pub mod driver;
pub mod theme;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use api::ApiClient;
pub use session::{Session, SessionStore};
pub use catalog::CatalogCache;
pub use router::{NavOutcome, ViewRouter};
pub use types::{AppView, AuthTab, Theme};
pub use state::{Action, AppState, Command};
pub use render::{reconcile, initials, RenderPlan};
pub use driver::Driver;
