pub mod product;

pub use product::{Product, ProductImage, ProductVariant};
