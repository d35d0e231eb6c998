pub mod image_client;
pub mod product_client;
pub mod variant_client;

pub use image_client::{HttpProductImageClient, ProductImageApi};
pub use product_client::{HttpProductClient, ProductApi};
pub use variant_client::{HttpVariantClient, ProductVariantApi};
