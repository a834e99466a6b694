use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixNamesError {
    #[error("directory not found: {}", .0.display())]
    MissingRoot(PathBuf),
    #[error("cannot rename '{from}' to '{to}': suffixes must differ and the result must not end in '{from}'")]
    InvalidSuffix { from: String, to: String },
}
