use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::Library;

/// Print the schema in SDL form, for documentation or codegen tooling.
pub fn handle_sdl() -> Result<()> {
    let schema = build_schema(Arc::new(Library::new()));
    print!("{}", schema.sdl());
    Ok(())
}
