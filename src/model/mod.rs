pub mod loader;
pub mod source_image;

pub use source_image::SourceImage;
