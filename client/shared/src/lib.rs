// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use serde::{Deserialize, Serialize};

/// Greeting returned by the backend endpoint
pub const BACKEND_GREETING: &str = "Hello from Rails!";

/// Greeting rendered locally by the frontend
pub const FRONTEND_GREETING: &str = "Hello from Nuxt!";

/// Namespace the backend mounts its versioned API under
pub const API_PREFIX: &str = "/api/v1";

/// Path of the greeting endpoint, relative to `API_PREFIX`
pub const HELLO_PATH: &str = "/hello";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetResponse {
    pub message: String,
}

pub fn greet() -> GreetResponse {
    GreetResponse {
        message: BACKEND_GREETING.to_owned(),
    }
}
