use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("source directory '{}' does not exist", .0.display())]
    MissingSource(PathBuf),
    #[error("failed to list {}: {source}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
