//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the domain types shared by the registry
//! implementation and the HTTP gateway.

pub mod clock;
pub mod error;
pub mod link;
pub mod registry;
pub mod shortcode;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{RegistryError, Result};
pub use link::ShortLink;
pub use registry::{CreateLinkParams, Registry, DEFAULT_MAX_ATTEMPTS, DEFAULT_VALIDITY_MINUTES};
pub use shortcode::ShortCode;
