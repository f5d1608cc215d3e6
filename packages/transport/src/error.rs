#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("transport tool unavailable: {message}")]
    ToolMissing { message: String },

    #[error("command execution failed ({command}): {source}")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
