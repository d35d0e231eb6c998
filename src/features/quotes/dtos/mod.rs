pub mod quote_dto;

pub use quote_dto::{CreateQuoteRequest, LookupQuoteRequest, UpdateQuoteRequest};
