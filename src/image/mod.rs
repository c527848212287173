mod request;
mod types;

pub use request::{derive_image_url, Pointing};
pub use types::{ImageConfig, ImageFormat, Projection, Stretch};
