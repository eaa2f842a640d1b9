//! Theme Module
//!
//! Light and dark palettes plus the frame builders used by the views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{palette, styles};
//!
//! styles::apply_global_theme(ctx, plan.theme);
//! styles::card_frame(palette(plan.theme)).show(ui, |ui| {
//!     // Card content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::{palette, Palette};
pub use styles::*;
