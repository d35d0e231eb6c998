pub mod category_dto;

pub use category_dto::{CategoryNode, CreateCategoryRequest, UpdateCategoryRequest};
