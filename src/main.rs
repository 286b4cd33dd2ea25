use anyhow::Result;
use clap::Parser;

use bookshelf::cli::handlers::{handle_mutate, handle_query, handle_sdl, handle_serve};
use bookshelf::cli::{Cli, Commands};
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file);

    match cli.command {
        Commands::Serve {
            port,
            host,
            path,
            no_graphiql,
            seed,
        } => handle_serve(port, host, path, no_graphiql, &seed),
        Commands::Query {
            query,
            variables,
            seed,
        } => handle_query(query, variables, &seed),
        Commands::Mutate {
            mutation,
            variables,
            seed,
        } => handle_mutate(mutation, variables, &seed),
        Commands::Sdl => handle_sdl(),
    }
}
