pub mod dom;
pub mod fetch;
pub mod storage;

use ghoshna_core::ClientConfig;

/// Config baked in at build time; `GHOSHNA_API_BASE` points the client at a
/// backend on another origin.
pub fn client_config() -> ClientConfig {
    match option_env!("GHOSHNA_API_BASE") {
        Some(base) => ClientConfig::with_api_base(base),
        None => ClientConfig::default(),
    }
}
