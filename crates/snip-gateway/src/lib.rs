//! HTTP gateway for the snip URL shortener.
//!
//! Exposes the shortcode registry over a small axum router: create short
//! links, follow them, and report health.

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod shutdown;
pub mod state;
pub mod sweeper;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;
