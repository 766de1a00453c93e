// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Backend for the greeting stack: a single versioned JSON endpoint behind a
//! CORS allow-list.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod transport;

pub use errors::StartupError;
pub use transport::app_router;
