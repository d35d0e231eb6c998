pub mod quote_client;

pub use quote_client::{HttpQuoteClient, QuoteApi};
