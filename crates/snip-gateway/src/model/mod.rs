mod health;
mod link;

pub use health::{HealthResponse, MessageResponse};
pub use link::{ErrorResponse, ShortenRequest, ShortenResponse};
