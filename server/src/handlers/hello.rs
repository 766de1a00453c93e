// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use axum::Json;
use greeting_shared::{GreetResponse, greet};
use tracing::debug;

/// Hello Handler
///
/// GET /api/v1/hello. Takes no input and always answers 200 with the fixed
/// backend greeting.
pub async fn hello() -> Json<GreetResponse> {
    debug!("Serving greeting");
    Json(greet())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_returns_backend_greeting() {
        let Json(res) = hello().await;
        assert_eq!(res.message, "Hello from Rails!");
    }
}
