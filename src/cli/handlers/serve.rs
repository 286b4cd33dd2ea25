use anyhow::Result;
use colored::Colorize;

use crate::cli::SeedArgs;
use crate::config::ServerConfig;
use crate::graphql::{build_schema, run_server};

use super::build_library;

pub fn handle_serve(
    port: u16,
    host: String,
    path: String,
    no_graphiql: bool,
    seed: &SeedArgs,
) -> Result<()> {
    let library = build_library(seed)?;
    tracing::info!(
        authors = library.author_count(),
        books = library.book_count(),
        "Catalog loaded"
    );

    let schema = build_schema(library);
    let config = ServerConfig {
        host,
        port,
        path,
        graphiql: !no_graphiql,
    };

    println!(
        "{} GraphQL endpoint at http://{}:{}{}",
        "Serving".green(),
        config.host,
        config.port,
        config.path
    );
    if config.graphiql {
        println!(
            "GraphiQL explorer: http://{}:{}{}",
            config.host, config.port, config.path
        );
    }

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, config).await })?;
    Ok(())
}
