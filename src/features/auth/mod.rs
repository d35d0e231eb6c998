pub mod clients;
pub mod dtos;
pub mod model;
pub mod services;
pub mod session;

pub use services::AuthService;
pub use session::SessionStore;
