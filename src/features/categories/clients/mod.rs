pub mod category_client;

pub use category_client::{CategoryApi, HttpCategoryClient};
