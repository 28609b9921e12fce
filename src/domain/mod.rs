// Domain types and value objects
mod path_config;
mod price_path;
mod price_point;

// Re-export commonly used types to the world
pub use path_config::PathConfig;
pub use price_path::PricePath;
pub use price_point::{Outcome, PricePoint};
