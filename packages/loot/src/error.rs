use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid loot root {path:?}: {source}")]
    RootPathInvalid {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write artifact {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
