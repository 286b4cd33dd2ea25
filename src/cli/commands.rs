use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL server for a small book catalog"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Append JSON logs to a daily-rolling file at this path
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 4000)]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// HTTP path serving the GraphQL endpoint
        #[arg(long, default_value = "/graphql")]
        path: String,

        /// Disable the GraphiQL explorer on GET requests
        #[arg(long)]
        no_graphiql: bool,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Execute a GraphQL query and print the JSON response
    #[command(visible_alias = "q")]
    Query {
        /// The query document, e.g. '{ books { id name } }'
        query: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Execute mutation fields (wrapped in `mutation { ... }` automatically)
    #[command(visible_alias = "m")]
    Mutate {
        /// The mutation fields, e.g. 'addAuthor(name: "Frank Herbert") { id }'
        mutation: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Print the schema in SDL form
    Sdl,
}

/// Where the catalog's initial records come from.
#[derive(Args)]
pub struct SeedArgs {
    /// Load initial records from a JSON seed file
    #[arg(long, value_name = "FILE", conflicts_with = "sample")]
    pub seed: Option<PathBuf>,

    /// Start with the built-in sample catalog
    #[arg(long)]
    pub sample: bool,
}
