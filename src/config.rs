use serde::{Deserialize, Serialize};

/// Settings for the HTTP transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// HTTP path serving the GraphQL endpoint.
    #[serde(default = "default_path")]
    pub path: String,

    /// Serve the GraphiQL explorer on GET requests to the endpoint.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_path() -> String {
    "/graphql".to_string()
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            path: default_path(),
            graphiql: default_graphiql(),
        }
    }
}
