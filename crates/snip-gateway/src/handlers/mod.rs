mod health;
mod link;

pub use health::{health_handler, home_handler};
pub use link::{redirect_handler, shorten_handler};
