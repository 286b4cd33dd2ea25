use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{BookshelfError, Result};

use super::schema::BookshelfSchema;

/// Serve the schema over HTTP until the process is stopped.
///
/// POST requests to the configured path execute GraphQL documents; GET
/// requests serve the GraphiQL explorer unless it is disabled. Binding
/// failures (port already taken) surface as errors rather than retrying.
pub async fn run_server(schema: BookshelfSchema, config: ServerConfig) -> Result<()> {
    if !config.path.starts_with('/') {
        return Err(BookshelfError::Config(format!(
            "Endpoint path must start with '/', got '{}'",
            config.path
        )));
    }

    let endpoint = config.path.clone();
    let graphiql = move || async move { Html(GraphiQLSource::build().endpoint(&endpoint).finish()) };

    let route = if config.graphiql {
        get(graphiql).post(graphql_handler)
    } else {
        post(graphql_handler)
    };
    let app = Router::new().route(&config.path, route).with_state(schema);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, path = %config.path, graphiql = config.graphiql, "GraphQL server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn graphql_handler(
    State(schema): State<BookshelfSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}
