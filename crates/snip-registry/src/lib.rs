//! In-memory shortcode registry.
//!
//! Owns the mapping from short code to [`ShortLink`](snip_core::ShortLink)
//! and enforces the creation, uniqueness and expiry rules of the service.

pub mod memory;
pub mod settings;

pub use memory::InMemoryRegistry;
pub use settings::RegistrySettings;
