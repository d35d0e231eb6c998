pub mod image_service;
pub mod product_service;
pub mod variant_service;

pub use image_service::{ImageService, ImageUploadReport};
pub use product_service::ProductService;
pub use variant_service::VariantService;
