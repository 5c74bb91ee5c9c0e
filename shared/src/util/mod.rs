//! Leaf utilities: id coercion, date display, CDN image URLs, form validation

pub mod coerce;
pub mod date;
pub mod image;
pub mod validate;

pub use coerce::RawId;
pub use date::display_date;
pub use image::{ImageFormat, ImageOptions, ImageQuality, optimize_image_url};
