//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to Tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    /// Base URL of the employee REST backend.
    pub backend_url: String,
    /// Signs flash-message cookies and delete-confirmation tickets.
    /// Must be at least 64 bytes.
    pub secret: String,
}
