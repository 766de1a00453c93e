// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::api::GreetingSource;
use crate::component::Hello;
use crate::page::render_document;

/// GET /
///
/// Mounts a fresh display component per request.
async fn index<S: GreetingSource>(State(source): State<Arc<S>>) -> Html<String> {
    let mut hello = Hello::new();
    if let Err(err) = hello.mount(source.as_ref()).await {
        warn!("Failed to fetch backend greeting: {err}");
    }
    Html(render_document(&hello.render()))
}

pub fn app_router<S: GreetingSource>(source: S) -> Router {
    Router::new()
        .route("/", get(index::<S>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(source))
}
