pub mod product_dto;

pub use product_dto::{
    CreateProductRequest, CreateVariantRequest, ImageUpload, ProductSearchQuery,
    UpdateProductRequest, UpdateVariantRequest,
};
