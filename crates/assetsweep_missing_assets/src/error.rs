use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("content root does not exist: {}", .0.display())]
    MissingContentRoot(PathBuf),
    #[error("asset root does not exist: {}", .0.display())]
    MissingAssetRoot(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is not valid UTF-8", path.display())]
    Undecodable { path: PathBuf },
}
