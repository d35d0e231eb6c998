//! Client core for a storefront and installation-quote backend: typed API
//! clients, category tree assembly and reordering, the quote request
//! workflow, and session handling. View layers consume the services wired
//! by [`Storefront`].

pub mod app;
pub mod core;
pub mod features;
pub mod shared;

pub use crate::app::{init_tracing, Storefront};
pub use crate::core::config::Config;
pub use crate::core::error::{AppError, Result};
