//! Shop Agent - Main Library
//!
//! Shop Agent is a desktop client for a personalized-recommendation shop
//! backend. It signs users in, keeps their session across restarts, and shows
//! recommendations, purchase history and a profile summary.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the front-end
//!   - Wire model (products, profiles, endpoint bodies)
//!   - Error types
//!   - Application configuration
//!
//! - **`egui_app`** - The client
//!   - Session store, catalog cache, view router
//!   - Reducer-style controller and reconciliation into a render plan
//!   - Async API client and command driver
//!   - egui/eframe views
//!
//! # Usage
//!
//! The controller can be driven without a window, which is how the tests
//! exercise it:
//!
//! ```rust,no_run
//! use shopagent::egui_app::storage::MemoryStore;
//! use shopagent::egui_app::{Action, ApiClient, AppState, Config, Driver};
//!
//! # async fn example() -> Result<(), shopagent::shared::ClientError> {
//! let api = ApiClient::new(Config::new())?;
//! let mut driver = Driver::on_current(api);
//! let mut state = AppState::new(MemoryStore::new().shared());
//!
//! driver.settle(&mut state, Action::Start).await;
//! let plan = state.render_plan();
//! println!("{}", plan.header.welcome_title);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! - **Controller**: `AppState` is owned by the UI thread and mutated only
//!   through `dispatch`
//! - **Network**: requests run as tokio tasks; results return over a channel
//! - **Native**: egui is single-threaded immediate mode GUI
//!
//! # Error Handling
//!
//! - `Result<T, ClientError>` for fallible operations
//! - Fetch failures become fallback renders, never panics

/// Shared types and data structures
pub mod shared;

/// egui native desktop client
pub mod egui_app;
