mod mutate;
mod query;
mod sdl;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use sdl::handle_sdl;
pub use serve::handle_serve;

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::SeedArgs;
use crate::storage::{Library, SeedData};

/// Build the shared library from the seed selection flags.
pub(crate) fn build_library(seed: &SeedArgs) -> Result<Arc<Library>> {
    let library = match &seed.seed {
        Some(path) => SeedData::load(path)
            .with_context(|| format!("Failed to load seed file {}", path.display()))?
            .into_library(),
        None if seed.sample => Library::sample(),
        None => Library::new(),
    };
    Ok(Arc::new(library))
}

/// Parse the --variables JSON object, defaulting to no variables.
pub(crate) fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    Ok(match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    })
}
