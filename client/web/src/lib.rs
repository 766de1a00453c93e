// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Server-rendered frontend for the greeting stack.
//!
//! `GET /` mounts the [`component::Hello`] display component, which fetches the
//! backend greeting once and renders it next to the local one.

pub mod api;
pub mod component;
pub mod config;
pub mod errors;
pub mod page;
pub mod transport;

pub use crate::api::{GreetingSource, HttpGreetingSource};
pub use crate::component::Hello;
pub use crate::config::{Environment, WebConfig};
pub use crate::transport::app_router;
