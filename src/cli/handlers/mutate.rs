use anyhow::Result;

use crate::cli::SeedArgs;
use crate::graphql::build_schema;

use super::{build_library, parse_variables};

pub fn handle_mutate(mutation: String, variables: Option<String>, seed: &SeedArgs) -> Result<()> {
    let schema = build_schema(build_library(seed)?);

    // Mutation fields arrive bare; wrap them in an operation.
    let document = format!("mutation {{ {} }}", mutation);
    let request = async_graphql::Request::new(document).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
