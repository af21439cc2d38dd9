use thiserror::Error;

/// Startup failures. Serving requests never fails at the application level.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("invalid bind address: {0}")]
    InvalidAddress(String),
    #[error("failed to launch server: {0}")]
    Launch(String),
}
