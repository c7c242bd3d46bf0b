use std::env;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const MAX_PAYLOAD_BYTES: usize = 256 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Upper bound for JSON request bodies.
    pub max_payload_bytes: usize,
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            max_payload_bytes: MAX_PAYLOAD_BYTES,
            environment: "development".to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads `HOST`, `PORT`, `MAX_PAYLOAD_BYTES` and `RUST_ENV`, falling back
    /// to defaults for anything missing or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(defaults.port),
            max_payload_bytes: env::var("MAX_PAYLOAD_BYTES")
                .ok()
                .and_then(|limit| limit.parse().ok())
                .unwrap_or(defaults.max_payload_bytes),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
        }
    }
}
