use metacrawl_loot::Error as LootError;

/// Fatal failures of a harvest run.
///
/// Individual child fetches are never fatal: anomalous bodies are stored
/// inline as empty leaves and the run completes.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport is unusable or the target URI is invalid. Raised
    /// before any metadata is collected.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The root listing does not look like instance metadata.
    #[error("environment mismatch: {message}")]
    EnvironmentMismatch { message: String },

    /// The artifact could not be persisted.
    #[error("loot error: {0}")]
    Loot(#[from] LootError),

    /// The collected tree could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
