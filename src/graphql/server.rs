use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::SnapfeedSchema;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Serve the schema on `/graphql` until the process is stopped.
pub async fn run_server(schema: SnapfeedSchema, port: u16) -> std::io::Result<()> {
    let app = Router::new()
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");

    axum::serve(listener, app).await
}
