pub mod quote_request;

pub use quote_request::{QuoteRequest, QuoteStatus, QuoteType};
