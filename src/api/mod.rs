//! Image handler request models and URL construction.

pub mod image_url;
pub mod models;

pub use image_url::*;
pub use models::*;
